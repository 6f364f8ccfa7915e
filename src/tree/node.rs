//! Node types: WidgetId, NodeData.

use slotmap::new_key_type;

use crate::message::Message;

new_key_type! {
    /// Unique identifier for a widget node. Copy, lightweight (u64).
    pub struct WidgetId;
}

/// Per-node bookkeeping held in the arena alongside the widget itself.
///
/// The widget's *behavior* lives in its `Widget` trait object; `NodeData`
/// carries the identity and per-cycle state every node has regardless of
/// type: its name (the form key for input widgets), visibility, and the
/// validation messages raised during the current process cycle.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Widget name. Doubles as the submission key for input widgets.
    /// Auto-generated (`widget-N`) when not supplied at insertion.
    pub name: String,
    /// Whether this node (and its subtree) is rendered by `display`.
    pub visible: bool,
    /// Messages raised during the current process cycle, in raise order.
    pub(crate) messages: Vec<Message>,
}

impl NodeData {
    /// Create node data with the given name, visible, with no messages.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            messages: Vec::new(),
        }
    }

    /// Messages raised by this node during the current process cycle.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
