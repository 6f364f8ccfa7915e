//! Widget trait: init, process, display, state capability.
//!
//! `Widget` is the core abstraction for every node in the tree. It is
//! object-safe: boxed widgets live in the arena and are dispatched through
//! the tree. The hooks receive `&mut WidgetTree` plus the widget's own id so
//! container widgets can drive their subtrees (the tree takes the widget box
//! out for the duration of a dispatch, so there is never a double borrow).
//!
//! The default hook implementations fan out to the children in insertion
//! order, which makes a plain container a one-liner and a leaf widget a
//! no-op (no children to fan out to).

use std::any::Any;

use serde_json::Value;

use crate::error::Result;
use crate::form::FormData;
use crate::render::RenderCx;
use crate::tree::{WidgetId, WidgetTree};

/// Core trait implemented by all widgets.
pub trait Widget: 'static {
    /// The type name for this widget (e.g. "Entry", "Panel").
    ///
    /// Used for capability sets, registry lookups, and queries.
    fn widget_type(&self) -> &'static str;

    /// The capability set: whether this widget accepts a child of the given
    /// type. Enforced by the tree on `add_child` and `reparent`.
    ///
    /// Defaults to accepting everything.
    fn accepts_child(&self, _child_type: &str) -> bool {
        true
    }

    /// One-time setup, run top-down before any processing or display.
    ///
    /// Containers that stamp out structure (replicated containers) or derive
    /// field names from their own name (wizards) do it here.
    fn init(&mut self, tree: &mut WidgetTree, id: WidgetId) -> Result<()> {
        tree.init_children(id)
    }

    /// Process one form submission, top-down.
    ///
    /// Input widgets read their own value(s) from `form` by name and append
    /// validation [`Message`](crate::message::Message)s on failure — they
    /// never return `Err` for expected validation failures. `Err` is reserved
    /// for structural misuse.
    fn process(&mut self, tree: &mut WidgetTree, id: WidgetId, form: &FormData) -> Result<()> {
        tree.process_children(id, form)
    }

    /// Emit markup for this widget into the render context.
    ///
    /// Must be idempotent: repeated display passes over an unchanged tree
    /// produce identical markup. The tree skips invisible nodes before this
    /// hook is ever called.
    fn display(&mut self, tree: &mut WidgetTree, id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        tree.display_children(id, cx)
    }

    /// The state capability: a serializable snapshot of this widget's
    /// user-editable state, or `None` for widgets with no such state.
    ///
    /// Used for wizard persistence and other save/restore features.
    fn state(&self) -> Option<Value> {
        None
    }

    /// Restore a snapshot previously produced by [`Widget::state`].
    ///
    /// Defaults to a no-op; widgets without the state capability ignore it.
    fn restore_state(&mut self, _state: &Value) {}

    /// Deep-clone this widget by value.
    ///
    /// Clones must share no mutable state with the original; this is what
    /// makes replicated subtrees independent.
    fn clone_box(&self) -> Box<dyn Widget>;

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
