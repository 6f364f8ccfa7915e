//! RendererContainer: ordered renderers plus their mappings.

use serde_json::Value;

use crate::error::{Result, StructuralError};
use crate::render::RenderCx;
use crate::table::model::RowRecord;

use super::{CellRenderer, Mapping};

struct RendererSlot {
    renderer: Box<dyn CellRenderer>,
    mappings: Vec<Mapping>,
}

/// An ordered collection of renderers, each with its own mappings.
///
/// Used by table columns and tiles. Mappings are validated against the
/// renderer's property list when registered, so a bad binding never reaches a
/// render pass.
#[derive(Default)]
pub struct RendererContainer {
    slots: Vec<RendererSlot>,
}

impl RendererContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a renderer, returning its index for mapping registration.
    pub fn add_renderer(&mut self, renderer: impl CellRenderer) -> usize {
        self.add_boxed_renderer(Box::new(renderer))
    }

    /// Append a boxed renderer, returning its index.
    pub fn add_boxed_renderer(&mut self, renderer: Box<dyn CellRenderer>) -> usize {
        self.slots.push(RendererSlot {
            renderer,
            mappings: Vec::new(),
        });
        self.slots.len() - 1
    }

    /// Register a mapping for the renderer at `index`.
    ///
    /// The mapping's property is checked against the renderer's property
    /// lists here, at registration time: a plain mapping must target a scalar
    /// property, an indexed mapping an array-valued one.
    pub fn add_mapping(&mut self, index: usize, mapping: Mapping) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(StructuralError::UnknownRenderer { index })?;
        let allowed = if mapping.array_key().is_some() {
            slot.renderer.indexed_properties()
        } else {
            slot.renderer.properties()
        };
        if !allowed.contains(&mapping.property()) {
            return Err(StructuralError::UnknownProperty {
                renderer: slot.renderer.renderer_type().to_owned(),
                property: mapping.property().to_owned(),
            });
        }
        slot.mappings.push(mapping);
        Ok(())
    }

    /// Apply every registered mapping against one row record.
    pub fn apply_mappings(&mut self, row: &RowRecord) -> Result<()> {
        for slot in &mut self.slots {
            for mapping in &slot.mappings {
                mapping.apply(slot.renderer.as_mut(), row)?;
            }
        }
        Ok(())
    }

    /// Render every renderer in order.
    pub fn render_all(&mut self, cx: &mut RenderCx) -> Result<()> {
        for slot in &mut self.slots {
            slot.renderer.render(cx)?;
        }
        Ok(())
    }

    /// Set a property directly on the renderer at `index`, bypassing mappings.
    ///
    /// Useful for fixed (non-row-driven) renderer configuration.
    pub fn set_property(&mut self, index: usize, property: &str, value: &Value) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(StructuralError::UnknownRenderer { index })?;
        slot.renderer.set_property(property, value)
    }

    /// Number of renderers.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the container has no renderers.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Clone for RendererContainer {
    fn clone(&self) -> Self {
        Self {
            slots: self
                .slots
                .iter()
                .map(|slot| RendererSlot {
                    renderer: slot.renderer.clone_box(),
                    mappings: slot.mappings.clone(),
                })
                .collect(),
        }
    }
}
