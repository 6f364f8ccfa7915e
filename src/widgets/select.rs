//! Select: a single-choice dropdown over flat or tree-shaped options.

use std::any::Any;

use serde_json::{json, Value};

use crate::error::Result;
use crate::form::FormData;
use crate::message::Message;
use crate::render::RenderCx;
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Widget;

use super::options::{ChoiceOption, TreeOption};

/// A dropdown selection widget.
///
/// Options can be added flat or as a tree; tree options flatten into
/// slash-joined path values. A submitted value outside the option set is a
/// validation error, never silently accepted.
#[derive(Debug, Clone, Default)]
pub struct Select {
    options: Vec<ChoiceOption>,
    selected: String,
    required: bool,
}

impl Select {
    /// Create an empty select.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flat option (builder).
    pub fn with_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(ChoiceOption::new(value, label));
        self
    }

    /// Add a whole option tree, flattened to path values (builder).
    pub fn with_tree(mut self, tree: TreeOption) -> Self {
        self.options.extend(tree.flatten());
        self
    }

    /// Require a non-empty selection (builder).
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Pre-select a value (builder).
    pub fn with_selected(mut self, value: impl Into<String>) -> Self {
        self.selected = value.into();
        self
    }

    /// The selected value. Empty when nothing is selected.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// The options, in declaration order.
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    fn is_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

impl Widget for Select {
    fn widget_type(&self) -> &'static str {
        "Select"
    }

    fn accepts_child(&self, _child_type: &str) -> bool {
        false
    }

    fn process(&mut self, tree: &mut WidgetTree, id: WidgetId, form: &FormData) -> Result<()> {
        let name = tree.name(id).to_owned();
        match form.value(&name) {
            None | Some("") => {
                self.selected.clear();
                if self.required {
                    tree.push_message(id, Message::error("a selection is required"));
                }
            }
            Some(value) => {
                if self.is_option(value) {
                    self.selected = value.to_owned();
                } else {
                    self.selected.clear();
                    tree.push_message(
                        id,
                        Message::error(format!("`{value}` is not a valid choice")),
                    );
                }
            }
        }
        Ok(())
    }

    fn display(&mut self, tree: &mut WidgetTree, id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        cx.write("<select name=\"");
        cx.write_escaped(tree.name(id));
        cx.write("\">");
        for option in &self.options {
            cx.write("<option value=\"");
            cx.write_escaped(&option.value);
            cx.write("\"");
            if option.value == self.selected {
                cx.write(" selected");
            }
            cx.write(">");
            cx.write_escaped(&option.label);
            cx.write("</option>");
        }
        cx.write("</select>");
        Ok(())
    }

    fn state(&self) -> Option<Value> {
        Some(json!(self.selected))
    }

    fn restore_state(&mut self, state: &Value) {
        if let Some(value) = state.as_str() {
            self.selected = value.to_owned();
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_select() -> Select {
        Select::new()
            .with_option("apple", "Apple")
            .with_option("pear", "Pear")
    }

    #[test]
    fn valid_selection_stored() {
        let mut tree = WidgetTree::new();
        let id = tree.insert_named(fruit_select(), "fruit");
        tree.process_form(id, &FormData::new().with_value("fruit", "pear"))
            .unwrap();
        assert_eq!(tree.widget_as::<Select>(id).unwrap().selected(), "pear");
        assert!(tree.messages(id).is_empty());
    }

    #[test]
    fn invalid_selection_raises_error() {
        let mut tree = WidgetTree::new();
        let id = tree.insert_named(fruit_select(), "fruit");
        tree.process_form(id, &FormData::new().with_value("fruit", "mango"))
            .unwrap();
        assert_eq!(tree.messages(id).len(), 1);
        assert_eq!(tree.widget_as::<Select>(id).unwrap().selected(), "");
    }

    #[test]
    fn required_empty_raises_error() {
        let mut tree = WidgetTree::new();
        let id = tree.insert_named(fruit_select().required(), "fruit");
        tree.process_form(id, &FormData::new()).unwrap();
        assert_eq!(tree.messages(id).len(), 1);
    }

    #[test]
    fn optional_empty_is_fine() {
        let mut tree = WidgetTree::new();
        let id = tree.insert_named(fruit_select(), "fruit");
        tree.process_form(id, &FormData::new()).unwrap();
        assert!(tree.messages(id).is_empty());
    }

    #[test]
    fn tree_options_use_path_values() {
        let select = Select::new().with_tree(
            TreeOption::new("europe", "Europe")
                .with_child(TreeOption::new("fr", "France"))
                .with_child(TreeOption::new("de", "Germany")),
        );
        let values: Vec<&str> = select.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["europe", "europe/fr", "europe/de"]);
    }

    #[test]
    fn tree_path_is_submittable() {
        let mut tree = WidgetTree::new();
        let id = tree.insert_named(
            Select::new().with_tree(
                TreeOption::new("europe", "Europe").with_child(TreeOption::new("fr", "France")),
            ),
            "region",
        );
        tree.process_form(id, &FormData::new().with_value("region", "europe/fr"))
            .unwrap();
        assert_eq!(tree.widget_as::<Select>(id).unwrap().selected(), "europe/fr");
    }

    #[test]
    fn display_marks_selected_option() {
        let mut tree = WidgetTree::new();
        let id = tree.insert_named(fruit_select().with_selected("apple"), "fruit");
        let out = tree.render(id).unwrap();
        assert!(out.contains("<option value=\"apple\" selected>"));
        assert!(out.contains("<option value=\"pear\">"));
    }
}
