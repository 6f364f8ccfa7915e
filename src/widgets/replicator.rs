//! Replicated: stamps independent copies of a prototype subtree.
//!
//! A prototype subtree is registered detached (never rendered), then one deep
//! clone per replicator id is attached under the container at init. Widget
//! names in each clone get a `_<replicator>` suffix so submissions stay
//! disjoint across copies.

use std::any::Any;
use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, StructuralError};
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Widget;

use super::frame::Frame;

fn frame_wrap(title: &str) -> Box<dyn Widget> {
    Box::new(Frame::new(title))
}

/// A container that replicates a prototype subtree once per replicator id.
#[derive(Debug, Clone)]
pub struct Replicated {
    prototype: Option<WidgetId>,
    replicators: Vec<(String, String)>,
    lookup: HashMap<(String, String), WidgetId>,
    wrap: Option<fn(&str) -> Box<dyn Widget>>,
    initialized: bool,
}

impl Default for Replicated {
    fn default() -> Self {
        Self {
            prototype: None,
            replicators: Vec::new(),
            lookup: HashMap::new(),
            wrap: Some(frame_wrap),
            initialized: false,
        }
    }
}

impl Replicated {
    /// Create a replicating container that wraps each copy in a titled frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach copies directly instead of wrapping each in a frame (builder).
    pub fn unwrapped(mut self) -> Self {
        self.wrap = None;
        self
    }

    /// Set the prototype subtree root (builder).
    ///
    /// The prototype must be detached (see [`WidgetTree::insert_detached`]);
    /// it is cloned at init and never rendered itself.
    pub fn with_prototype(mut self, prototype: WidgetId) -> Self {
        self.prototype = Some(prototype);
        self
    }

    /// Set the prototype subtree root.
    pub fn set_prototype(&mut self, prototype: WidgetId) {
        self.prototype = Some(prototype);
    }

    /// Register a replicator id with a display title.
    ///
    /// Replicators must be registered before init; ids must be unique.
    pub fn add_replicator(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<()> {
        let id = id.into();
        if self.replicators.iter().any(|(existing, _)| *existing == id) {
            return Err(StructuralError::DuplicateReplicator { id });
        }
        self.replicators.push((id, title.into()));
        Ok(())
    }

    /// Look up the clone of a prototype widget in a specific copy.
    ///
    /// `original` is the widget's name inside the prototype; `replicator` is
    /// the copy's id.
    pub fn widget_for(&self, original: &str, replicator: &str) -> Result<WidgetId> {
        self.lookup
            .get(&(original.to_owned(), replicator.to_owned()))
            .copied()
            .ok_or_else(|| StructuralError::UnknownReplica {
                original: original.to_owned(),
                replicator: replicator.to_owned(),
            })
    }

    /// The registered replicator ids, in registration order.
    pub fn replicator_ids(&self) -> Vec<&str> {
        self.replicators.iter().map(|(id, _)| id.as_str()).collect()
    }
}

impl Widget for Replicated {
    fn widget_type(&self) -> &'static str {
        "Replicated"
    }

    fn init(&mut self, tree: &mut WidgetTree, id: WidgetId) -> Result<()> {
        if self.initialized {
            return tree.init_children(id);
        }
        self.initialized = true;

        let prototype = self
            .prototype
            .ok_or_else(|| StructuralError::MissingCrossReference {
                widget: tree.name(id).to_owned(),
                missing: "prototype".to_owned(),
            })?;

        let replicators = self.replicators.clone();
        for (rid, title) in &replicators {
            let suffix = rid.clone();
            let (clone_root, names) =
                tree.clone_subtree(prototype, &|original| format!("{original}_{suffix}"))?;
            for (original, clone_id) in names {
                self.lookup.insert((original, rid.clone()), clone_id);
            }
            let attach = match self.wrap {
                Some(make) => tree.add_child_boxed(id, make(title), None)?,
                None => id,
            };
            tree.reparent(clone_root, attach)?;
            debug!(replicator = rid.as_str(), "attached replica");
        }
        tree.init_children(id)
    }

    fn clone_box(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
