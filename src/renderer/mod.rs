//! Cell renderers: stateless-per-call markup units for table cells and tiles.
//!
//! A renderer holds only the fields set on it through [`Mapping`]s before each
//! `render` call. Renderers expose a typed property list; mappings are checked
//! against it when they are registered, so a misconfigured binding fails at
//! build time rather than in the middle of a render pass.
//!
//! - [`mapping`] — property ↔ row-field bindings
//! - [`container`] — ordered renderers plus their mappings
//! - [`text`] — plain text cell with null-text fallback
//! - [`numeric`] — formatted numbers (decimals, percent)
//! - [`checkbox`] — per-row checkbox with a shared toggle script

pub mod checkbox;
pub mod container;
pub mod mapping;
pub mod numeric;
pub mod text;

pub use checkbox::CheckboxRenderer;
pub use container::RendererContainer;
pub use mapping::Mapping;
pub use numeric::{NumberFormat, NumericRenderer};
pub use text::TextRenderer;

use serde_json::Value;

use crate::error::Result;
use crate::render::RenderCx;

/// A stateless-per-call unit that renders one value into markup.
pub trait CellRenderer: 'static {
    /// The type name of this renderer (e.g. "TextRenderer").
    fn renderer_type(&self) -> &'static str;

    /// The scalar properties this renderer exposes to mappings.
    fn properties(&self) -> &'static [&'static str];

    /// The array-valued properties this renderer exposes to indexed mappings.
    ///
    /// Defaults to none; renderers with array-valued properties (per-cell
    /// attribute maps and the like) override this alongside
    /// [`CellRenderer::set_indexed_property`].
    fn indexed_properties(&self) -> &'static [&'static str] {
        &[]
    }

    /// Set a property from a row-field value.
    ///
    /// Fails with [`StructuralError::UnknownProperty`](crate::error::StructuralError::UnknownProperty)
    /// for names outside [`CellRenderer::properties`] — though mappings catch
    /// that earlier, at registration.
    fn set_property(&mut self, property: &str, value: &Value) -> Result<()>;

    /// Set one key of an array-valued property.
    ///
    /// Defaults to rejecting the property, matching the empty default of
    /// [`CellRenderer::indexed_properties`]; only renderers that declare
    /// array-valued properties override the pair.
    fn set_indexed_property(&mut self, property: &str, _key: &str, _value: &Value) -> Result<()> {
        Err(crate::error::StructuralError::UnknownProperty {
            renderer: self.renderer_type().to_owned(),
            property: property.to_owned(),
        })
    }

    /// Emit this cell's markup.
    ///
    /// Idempotent and side-effect-free beyond producing output, with two
    /// sanctioned exceptions: render-local field resets (the text renderer's
    /// null-text handling) and shared assets emitted once per pass through
    /// [`RenderCx::emit_asset_once`].
    fn render(&mut self, cx: &mut RenderCx) -> Result<()>;

    /// Deep-clone this renderer by value.
    fn clone_box(&self) -> Box<dyn CellRenderer>;
}

/// Convert a row-field value into display text.
///
/// Strings pass through unquoted; numbers and booleans use their canonical
/// form; null becomes the empty string.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Interpret a row-field value as a flag.
pub(crate) fn value_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
