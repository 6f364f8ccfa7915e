//! The widget arena: ownership, tree shape, and pass dispatch.
//!
//! All widgets live in a single slotmap arena. Parent/child relationships are
//! stored in secondary maps so removal is O(subtree size) and lookup is O(1).
//! Children are kept in insertion order, and insertion order governs both
//! processing and display order.
//!
//! The three passes (`init`, `process`, `display`) are dispatched by
//! temporarily taking the widget box out of the arena, calling its hook with
//! `&mut WidgetTree`, and putting it back. This lets a container widget drive
//! its own subtree (toggle step visibility, clone a prototype, interleave
//! table rows) while the borrow checker still sees a single mutable tree.

use std::collections::{BTreeMap, HashMap, VecDeque};

use serde_json::Value;
use slotmap::{SecondaryMap, SlotMap};
use tracing::trace;

use super::node::{NodeData, WidgetId};
use crate::error::{Result, StructuralError};
use crate::form::FormData;
use crate::message::{Message, Severity};
use crate::render::RenderCx;
use crate::widget::Widget;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[WidgetId] = &[];

/// The central widget tree, backed by a slotmap arena.
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, NodeData>,
    widgets: SecondaryMap<WidgetId, Box<dyn Widget>>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    root: Option<WidgetId>,
    anon_counter: u64,
}

impl WidgetTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            widgets: SecondaryMap::new(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
            anon_counter: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Insert a root-level node with an auto-generated name.
    ///
    /// If no root has been set yet, this node becomes the root.
    pub fn insert(&mut self, widget: impl Widget) -> WidgetId {
        self.insert_boxed(Box::new(widget), None)
    }

    /// Insert a root-level node with an explicit name.
    pub fn insert_named(&mut self, widget: impl Widget, name: &str) -> WidgetId {
        self.insert_boxed(Box::new(widget), Some(name))
    }

    /// Insert a boxed widget at root level.
    pub fn insert_boxed(&mut self, widget: Box<dyn Widget>, name: Option<&str>) -> WidgetId {
        let id = self.insert_raw(widget, name);
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a detached node that never becomes the root.
    ///
    /// Used for prototype subtrees that must exist in the arena without being
    /// part of the rendered tree.
    pub fn insert_detached(&mut self, widget: impl Widget, name: &str) -> WidgetId {
        self.insert_raw(Box::new(widget), Some(name))
    }

    fn insert_raw(&mut self, widget: Box<dyn Widget>, name: Option<&str>) -> WidgetId {
        let name = match name {
            Some(n) => n.to_owned(),
            None => {
                self.anon_counter += 1;
                format!("widget-{}", self.anon_counter)
            }
        };
        let id = self.nodes.insert(NodeData::new(name));
        self.widgets.insert(id, widget);
        self.children.insert(id, Vec::new());
        id
    }

    /// Append a widget as the last child of `parent`, auto-named.
    ///
    /// Fails when the child's type is outside the parent's capability set.
    pub fn add_child(&mut self, parent: WidgetId, widget: impl Widget) -> Result<WidgetId> {
        self.add_child_boxed(parent, Box::new(widget), None)
    }

    /// Append a widget as the last child of `parent` with an explicit name.
    pub fn add_child_named(
        &mut self,
        parent: WidgetId,
        widget: impl Widget,
        name: &str,
    ) -> Result<WidgetId> {
        self.add_child_boxed(parent, Box::new(widget), Some(name))
    }

    /// Append a boxed widget as the last child of `parent`.
    pub fn add_child_boxed(
        &mut self,
        parent: WidgetId,
        widget: Box<dyn Widget>,
        name: Option<&str>,
    ) -> Result<WidgetId> {
        if !self.nodes.contains_key(parent) {
            return Err(StructuralError::UnknownWidget);
        }
        self.check_capability(parent, widget.widget_type())?;
        let id = self.insert_raw(widget, name);
        self.parent.insert(id, parent);
        self.children
            .get_mut(parent)
            .expect("parent must have children vec")
            .push(id);
        Ok(id)
    }

    /// Move `node` to become the last child of `new_parent`.
    ///
    /// The node keeps its subtree intact. If `node` was previously a child of
    /// another parent, it is detached first — a widget has exactly one parent
    /// at any time. The new parent's capability set is enforced.
    pub fn reparent(&mut self, node: WidgetId, new_parent: WidgetId) -> Result<()> {
        if !self.nodes.contains_key(node) || !self.nodes.contains_key(new_parent) {
            return Err(StructuralError::UnknownWidget);
        }
        let child_type = self
            .widgets
            .get(node)
            .map(|w| w.widget_type().to_owned())
            .ok_or(StructuralError::UnknownWidget)?;
        self.check_capability(new_parent, &child_type)?;

        // Detach from old parent.
        if let Some(old_parent) = self.parent.remove(node) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&child| child != node);
            }
        }

        // Attach to new parent.
        self.parent.insert(node, new_parent);
        self.children
            .get_mut(new_parent)
            .expect("new_parent must have children vec")
            .push(node);
        Ok(())
    }

    /// Check `parent`'s capability set against a prospective child type.
    ///
    /// A parent whose widget box is currently taken out for dispatch is
    /// arranging its own subtree; the check is skipped in that case.
    fn check_capability(&self, parent: WidgetId, child_type: &str) -> Result<()> {
        if let Some(parent_widget) = self.widgets.get(parent) {
            if !parent_widget.accepts_child(child_type) {
                return Err(StructuralError::ChildNotAccepted {
                    container: parent_widget.widget_type().to_owned(),
                    child: child_type.to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns `true` if the node existed.
    pub fn remove(&mut self, id: WidgetId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }

        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                for &child in &kids {
                    to_remove.push_back(child);
                }
            }
            self.parent.remove(current);
            self.widgets.remove(current);
            self.nodes.remove(current);
        }
        true
    }

    // -----------------------------------------------------------------------
    // Shape queries
    // -----------------------------------------------------------------------

    /// The parent of a node, if it has one. Non-owning back-reference.
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// The children of a node, in insertion order. Empty slice if the node has
    /// no children or does not exist.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    /// Explicitly set the root node.
    pub fn set_root(&mut self, id: WidgetId) {
        self.root = Some(id);
    }

    /// Number of nodes in the tree (including detached subtrees).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains a node with the given id.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    // -----------------------------------------------------------------------
    // Node data access
    // -----------------------------------------------------------------------

    /// Immutable access to a node's bookkeeping data.
    pub fn node(&self, id: WidgetId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// A node's name. Empty string for unknown ids.
    pub fn name(&self, id: WidgetId) -> &str {
        self.nodes.get(id).map(|n| n.name.as_str()).unwrap_or("")
    }

    /// Whether a node is visible. Unknown ids are not visible.
    pub fn is_visible(&self, id: WidgetId) -> bool {
        self.nodes.get(id).map(|n| n.visible).unwrap_or(false)
    }

    /// Set a node's visibility flag.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.visible = visible;
        }
    }

    /// Immutable access to a widget's behavior object.
    ///
    /// Returns `None` for unknown ids and for the widget currently being
    /// dispatched (its box is taken out of the arena for the duration).
    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.widgets.get(id).map(|b| &**b)
    }

    /// Mutable access to a widget's behavior object.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        self.widgets.get_mut(id).map(|b| &mut **b)
    }

    /// Downcast access to a concrete widget type.
    pub fn widget_as<T: Widget>(&self, id: WidgetId) -> Option<&T> {
        self.widget(id)?.as_any().downcast_ref::<T>()
    }

    /// Mutable downcast access to a concrete widget type.
    pub fn widget_as_mut<T: Widget>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.widget_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    // -----------------------------------------------------------------------
    // Messages
    // -----------------------------------------------------------------------

    /// Attach a validation message to a node.
    pub fn push_message(&mut self, id: WidgetId, message: Message) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.messages.push(message);
        }
    }

    /// The messages a single node raised this cycle.
    pub fn messages(&self, id: WidgetId) -> &[Message] {
        self.nodes.get(id).map(|n| n.messages.as_slice()).unwrap_or(&[])
    }

    /// Collect the subtree's messages depth-first, self before children,
    /// children in insertion order.
    pub fn gather_messages(&self, id: WidgetId) -> Vec<Message> {
        let mut out = Vec::new();
        for node in self.walk_depth_first(id) {
            out.extend_from_slice(self.messages(node));
        }
        out
    }

    /// Whether any node in the subtree raised a message this cycle.
    pub fn has_messages(&self, id: WidgetId) -> bool {
        self.walk_depth_first(id)
            .iter()
            .any(|&node| !self.messages(node).is_empty())
    }

    /// Whether any node in the subtree raised an error-severity message.
    pub fn has_errors(&self, id: WidgetId) -> bool {
        self.walk_depth_first(id)
            .iter()
            .any(|&node| self.messages(node).iter().any(Message::is_error))
    }

    /// Clear every message in the subtree. Called at the start of each
    /// process pass: messages never outlive one cycle.
    pub fn clear_messages(&mut self, id: WidgetId) {
        for node in self.walk_depth_first(id) {
            if let Some(data) = self.nodes.get_mut(node) {
                data.messages.clear();
            }
        }
    }

    // -----------------------------------------------------------------------
    // Paths and state capture
    // -----------------------------------------------------------------------

    /// Slash-joined names from `start` (inclusive) down to `id` (inclusive).
    ///
    /// Returns `None` when `id` is not in `start`'s subtree.
    pub fn relative_path(&self, id: WidgetId, start: WidgetId) -> Option<String> {
        let mut segments = vec![self.nodes.get(id)?.name.clone()];
        let mut current = id;
        while current != start {
            current = self.parent(current)?;
            segments.push(self.nodes.get(current)?.name.clone());
        }
        segments.reverse();
        Some(segments.join("/"))
    }

    /// Capture the state capability of every widget in the subtree that
    /// implements it, keyed by slash-joined widget path starting at `id`'s
    /// own name.
    pub fn descendant_states(&self, id: WidgetId) -> BTreeMap<String, Value> {
        let mut out = BTreeMap::new();
        for node in self.walk_depth_first(id) {
            let Some(widget) = self.widget(node) else {
                continue;
            };
            if let Some(state) = widget.state() {
                if let Some(path) = self.relative_path(node, id) {
                    out.insert(path, state);
                }
            }
        }
        out
    }

    /// Restore previously captured states into the subtree.
    ///
    /// Paths with no matching widget are ignored (the tree shape may have
    /// changed between capture and restore).
    pub fn restore_descendant_states(&mut self, id: WidgetId, states: &BTreeMap<String, Value>) {
        for node in self.walk_depth_first(id) {
            let Some(path) = self.relative_path(node, id) else {
                continue;
            };
            if let Some(state) = states.get(&path) {
                if let Some(widget) = self.widget_mut(node) {
                    widget.restore_state(state);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Cloning
    // -----------------------------------------------------------------------

    /// Deep-clone the subtree rooted at `src`.
    ///
    /// Every node's widget is cloned by value (no aliasing between the clone
    /// and the original), names are rewritten through `rename`, messages are
    /// not carried over, and visibility is preserved. Returns the clone root
    /// plus a map from original widget names to clone ids.
    ///
    /// The clone is detached; attach it with [`WidgetTree::reparent`].
    pub fn clone_subtree(
        &mut self,
        src: WidgetId,
        rename: &dyn Fn(&str) -> String,
    ) -> Result<(WidgetId, HashMap<String, WidgetId>)> {
        let mut lookup = HashMap::new();
        let root = self.clone_node(src, rename, &mut lookup)?;
        Ok((root, lookup))
    }

    fn clone_node(
        &mut self,
        src: WidgetId,
        rename: &dyn Fn(&str) -> String,
        lookup: &mut HashMap<String, WidgetId>,
    ) -> Result<WidgetId> {
        let data = self.nodes.get(src).ok_or(StructuralError::UnknownWidget)?;
        let original_name = data.name.clone();
        let visible = data.visible;
        let widget = self
            .widgets
            .get(src)
            .ok_or(StructuralError::UnknownWidget)?
            .clone_box();

        let clone = self.insert_raw(widget, Some(&rename(&original_name)));
        if let Some(node) = self.nodes.get_mut(clone) {
            node.visible = visible;
        }
        lookup.insert(original_name, clone);

        for child in self.children(src).to_vec() {
            let child_clone = self.clone_node(child, rename, lookup)?;
            self.parent.insert(child_clone, clone);
            self.children
                .get_mut(clone)
                .expect("clone must have children vec")
                .push(child_clone);
        }
        Ok(clone)
    }

    // -----------------------------------------------------------------------
    // Pass dispatch
    // -----------------------------------------------------------------------

    /// Run the one-time init pass over the subtree rooted at `id`.
    pub fn init(&mut self, id: WidgetId) -> Result<()> {
        let mut widget = self.take_widget(id)?;
        trace!(widget = widget.widget_type(), name = self.name(id), "init");
        let result = widget.init(self, id);
        self.widgets.insert(id, widget);
        result
    }

    /// Fan the init pass out to `id`'s children in insertion order.
    pub fn init_children(&mut self, id: WidgetId) -> Result<()> {
        for child in self.children(id).to_vec() {
            self.init(child)?;
        }
        Ok(())
    }

    /// Run a full process pass over the subtree rooted at `id`.
    ///
    /// Clears the previous cycle's messages first, then dispatches. This is
    /// the entry point for one form submission.
    pub fn process_form(&mut self, id: WidgetId, form: &FormData) -> Result<()> {
        self.clear_messages(id);
        self.process(id, form)
    }

    /// Dispatch the process pass to a single node (which fans out itself).
    pub fn process(&mut self, id: WidgetId, form: &FormData) -> Result<()> {
        let mut widget = self.take_widget(id)?;
        trace!(widget = widget.widget_type(), name = self.name(id), "process");
        let result = widget.process(self, id, form);
        self.widgets.insert(id, widget);
        result
    }

    /// Fan the process pass out to `id`'s children in insertion order.
    pub fn process_children(&mut self, id: WidgetId, form: &FormData) -> Result<()> {
        for child in self.children(id).to_vec() {
            self.process(child, form)?;
        }
        Ok(())
    }

    /// Dispatch the display pass to a single node.
    ///
    /// Invisible nodes emit nothing and their subtrees are skipped entirely.
    pub fn display(&mut self, id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        if !self.is_visible(id) {
            return Ok(());
        }
        let mut widget = self.take_widget(id)?;
        let result = widget.display(self, id, cx);
        self.widgets.insert(id, widget);
        result
    }

    /// Fan the display pass out to `id`'s children in insertion order.
    pub fn display_children(&mut self, id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        for child in self.children(id).to_vec() {
            self.display(child, cx)?;
        }
        Ok(())
    }

    /// Render the subtree rooted at `id` into a fresh markup stream.
    pub fn render(&mut self, id: WidgetId) -> Result<String> {
        let mut cx = RenderCx::new();
        self.display(id, &mut cx)?;
        Ok(cx.finish())
    }

    /// Every node id in the arena, including detached subtrees, in slotmap
    /// order.
    pub(crate) fn all_ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.nodes.keys()
    }

    fn take_widget(&mut self, id: WidgetId) -> Result<Box<dyn Widget>> {
        self.widgets.remove(id).ok_or(StructuralError::UnknownWidget)
    }

    /// Count error-severity messages in the subtree. Convenience for callers
    /// deciding whether to re-render with inline messages or proceed.
    pub fn error_count(&self, id: WidgetId) -> usize {
        self.gather_messages(id)
            .iter()
            .filter(|m| m.severity == Severity::Error)
            .count()
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}
