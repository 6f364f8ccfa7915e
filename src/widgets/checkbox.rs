//! Checkboxes: a single flag and a multi-select group.

use std::any::Any;

use serde_json::{json, Value};

use crate::error::Result;
use crate::form::FormData;
use crate::message::Message;
use crate::render::RenderCx;
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Widget;

use super::options::ChoiceOption;

// ---------------------------------------------------------------------------
// Checkbox
// ---------------------------------------------------------------------------

/// A single checkbox: checked exactly when the submission contains its name.
#[derive(Debug, Clone)]
pub struct Checkbox {
    checked: bool,
    value: String,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self {
            checked: false,
            value: "1".to_owned(),
        }
    }
}

impl Checkbox {
    /// Create an unchecked checkbox submitting "1" when checked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the submitted value (builder).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the initial checked state (builder).
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Whether the checkbox is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

impl Widget for Checkbox {
    fn widget_type(&self) -> &'static str {
        "Checkbox"
    }

    fn accepts_child(&self, _child_type: &str) -> bool {
        false
    }

    fn process(&mut self, tree: &mut WidgetTree, id: WidgetId, form: &FormData) -> Result<()> {
        // An unchecked box submits nothing: absence means false.
        self.checked = form.contains(tree.name(id));
        Ok(())
    }

    fn display(&mut self, tree: &mut WidgetTree, id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        cx.write("<input type=\"checkbox\" name=\"");
        cx.write_escaped(tree.name(id));
        cx.write("\" value=\"");
        cx.write_escaped(&self.value);
        cx.write("\"");
        if self.checked {
            cx.write(" checked");
        }
        cx.write(" />");
        Ok(())
    }

    fn state(&self) -> Option<Value> {
        Some(json!(self.checked))
    }

    fn restore_state(&mut self, state: &Value) {
        if let Some(checked) = state.as_bool() {
            self.checked = checked;
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

// ---------------------------------------------------------------------------
// CheckboxGroup
// ---------------------------------------------------------------------------

/// A group of checkboxes sharing one submission name.
///
/// The submission carries zero or more values under the group's name; values
/// outside the option set raise a validation error.
#[derive(Debug, Clone, Default)]
pub struct CheckboxGroup {
    options: Vec<ChoiceOption>,
    selected: Vec<String>,
}

impl CheckboxGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option (builder).
    pub fn with_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(ChoiceOption::new(value, label));
        self
    }

    /// The selected values, in submission order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    fn is_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

impl Widget for CheckboxGroup {
    fn widget_type(&self) -> &'static str {
        "CheckboxGroup"
    }

    fn accepts_child(&self, _child_type: &str) -> bool {
        false
    }

    fn process(&mut self, tree: &mut WidgetTree, id: WidgetId, form: &FormData) -> Result<()> {
        let name = tree.name(id).to_owned();
        self.selected.clear();
        for value in form.values(&name) {
            if self.is_option(value) {
                self.selected.push(value.clone());
            } else {
                tree.push_message(id, Message::error(format!("`{value}` is not a valid choice")));
            }
        }
        Ok(())
    }

    fn display(&mut self, tree: &mut WidgetTree, id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        let name = tree.name(id).to_owned();
        for option in &self.options {
            cx.write("<label><input type=\"checkbox\" name=\"");
            cx.write_escaped(&name);
            cx.write("\" value=\"");
            cx.write_escaped(&option.value);
            cx.write("\"");
            if self.selected.contains(&option.value) {
                cx.write(" checked");
            }
            cx.write(" /> ");
            cx.write_escaped(&option.label);
            cx.write("</label>");
        }
        Ok(())
    }

    fn state(&self) -> Option<Value> {
        Some(json!(self.selected))
    }

    fn restore_state(&mut self, state: &Value) {
        if let Some(values) = state.as_array() {
            self.selected = values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect();
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
