//! Tree queries: by name, by type, ancestor capability checks.

use std::collections::HashSet;

use super::node::WidgetId;
use super::arena::WidgetTree;
use crate::widget::Widget;

impl WidgetTree {
    /// Find the first node whose name matches, searching the whole arena.
    pub fn query_by_name(&self, name: &str) -> Option<WidgetId> {
        self.iter_ids().find(|&id| self.name(id) == name)
    }

    /// Find all nodes whose widget type matches.
    pub fn query_by_type(&self, widget_type: &str) -> Vec<WidgetId> {
        self.iter_ids()
            .filter(|&id| {
                self.widget(id)
                    .map(|w| w.widget_type() == widget_type)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Walk `id`'s ancestor chain (nearest first) and return the first
    /// ancestor whose widget satisfies the predicate.
    ///
    /// This is the capability query that replaces upward type reflection:
    /// "does my ancestor chain contain a node satisfying X".
    pub fn ancestor_matching(
        &self,
        id: WidgetId,
        predicate: impl Fn(&dyn Widget) -> bool,
    ) -> Option<WidgetId> {
        let mut current = self.parent(id)?;
        loop {
            if let Some(widget) = self.widget(current) {
                if predicate(widget) {
                    return Some(current);
                }
            }
            current = self.parent(current)?;
        }
    }

    /// Whether any ancestor of `id` has the given widget type.
    pub fn has_ancestor_of_type(&self, id: WidgetId, widget_type: &str) -> bool {
        self.ancestor_matching(id, |w| w.widget_type() == widget_type)
            .is_some()
    }

    fn iter_ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        // Arena order is deterministic but not tree order; queries that care
        // about document order should walk from the root instead.
        let mut all = Vec::new();
        if let Some(root) = self.root() {
            all.extend(self.walk_depth_first(root));
        }
        let rooted: HashSet<WidgetId> = all.iter().copied().collect();
        // Include detached subtrees (prototypes) after the rooted tree.
        all.extend(self.all_ids().filter(|id| !rooted.contains(id)));
        all.into_iter()
    }
}
