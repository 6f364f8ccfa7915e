//! Type-name keyed widget constructors for declarative tree builders.

use std::collections::HashMap;

use crate::error::{Result, StructuralError};
use crate::table::TableView;
use crate::widget::Widget;
use crate::widgets::{
    Checkbox, CheckboxGroup, Entry, Frame, Hidden, Panel, Replicated, Select, Static, Wizard,
};

type Constructor = fn() -> Box<dyn Widget>;

/// A registry mapping widget type names to default constructors.
///
/// Builders that read a declarative description (a stored layout, a test
/// fixture) create widgets by name through the registry instead of matching
/// on strings themselves.
#[derive(Default)]
pub struct Registry {
    constructors: HashMap<String, Constructor>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with every built-in widget type.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("Panel", || Box::new(Panel::new()));
        registry.register("Frame", || Box::new(Frame::default()));
        registry.register("Static", || Box::new(Static::default()));
        registry.register("Entry", || Box::new(Entry::new()));
        registry.register("Checkbox", || Box::new(Checkbox::new()));
        registry.register("CheckboxGroup", || Box::new(CheckboxGroup::new()));
        registry.register("Select", || Box::new(Select::new()));
        registry.register("Hidden", || Box::new(Hidden::new()));
        registry.register("Wizard", || Box::new(Wizard::new()));
        registry.register("TableView", || Box::new(TableView::new()));
        registry.register("Replicated", || Box::new(Replicated::new()));
        registry
    }

    /// Register (or replace) a constructor under a type name.
    pub fn register(&mut self, name: impl Into<String>, constructor: Constructor) {
        self.constructors.insert(name.into(), constructor);
    }

    /// Whether a type name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Construct a widget by type name.
    pub fn create(&self, name: &str) -> Result<Box<dyn Widget>> {
        self.constructors
            .get(name)
            .map(|constructor| constructor())
            .ok_or_else(|| StructuralError::UnknownType {
                type_name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::WidgetTree;

    #[test]
    fn builtins_create_their_own_type() {
        let registry = Registry::with_builtins();
        for name in [
            "Panel", "Frame", "Static", "Entry", "Checkbox", "CheckboxGroup", "Select", "Hidden",
            "Wizard", "TableView", "Replicated",
        ] {
            let widget = registry.create(name).unwrap();
            assert_eq!(widget.widget_type(), name);
        }
    }

    #[test]
    fn unknown_type_fails() {
        let registry = Registry::with_builtins();
        assert!(matches!(
            registry.create("Blink"),
            Err(StructuralError::UnknownType { .. })
        ));
    }

    #[test]
    fn custom_registration() {
        let mut registry = Registry::new();
        assert!(!registry.contains("Entry"));
        registry.register("Entry", || Box::new(Entry::new()));
        assert!(registry.contains("Entry"));
    }

    #[test]
    fn created_widgets_insert_into_a_tree() {
        let registry = Registry::with_builtins();
        let mut tree = WidgetTree::new();
        let root = tree.insert_boxed(registry.create("Panel").unwrap(), Some("root"));
        let child = tree
            .add_child_boxed(root, registry.create("Entry").unwrap(), Some("name"))
            .unwrap();
        assert_eq!(tree.children(root), &[child]);
    }
}
