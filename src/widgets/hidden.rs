//! Hidden: an invisible value carrier.

use std::any::Any;

use serde_json::{json, Value};

use crate::error::Result;
use crate::form::FormData;
use crate::render::RenderCx;
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Widget;

/// A hidden input: carries a value through a submission without any UI.
#[derive(Debug, Clone, Default)]
pub struct Hidden {
    value: String,
}

impl Hidden {
    /// Create an empty hidden field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value (builder).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// The current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the current value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl Widget for Hidden {
    fn widget_type(&self) -> &'static str {
        "Hidden"
    }

    fn accepts_child(&self, _child_type: &str) -> bool {
        false
    }

    fn process(&mut self, tree: &mut WidgetTree, id: WidgetId, form: &FormData) -> Result<()> {
        if let Some(value) = form.value(tree.name(id)) {
            self.value = value.to_owned();
        }
        Ok(())
    }

    fn display(&mut self, tree: &mut WidgetTree, id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        cx.write("<input type=\"hidden\" name=\"");
        cx.write_escaped(tree.name(id));
        cx.write("\" value=\"");
        cx.write_escaped(&self.value);
        cx.write("\" />");
        Ok(())
    }

    fn state(&self) -> Option<Value> {
        Some(json!(self.value))
    }

    fn restore_state(&mut self, state: &Value) {
        if let Some(value) = state.as_str() {
            self.value = value.to_owned();
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

    #[test]
    fn keeps_value_when_not_submitted() {
        let mut tree = WidgetTree::new();
        let id = tree.insert_named(Hidden::new().with_value("token"), "csrf");
        tree.process_form(id, &FormData::new()).unwrap();
        assert_eq!(tree.widget_as::<Hidden>(id).unwrap().value(), "token");
    }

    #[test]
    fn takes_submitted_value() {
        let mut tree = WidgetTree::new();
        let id = tree.insert_named(Hidden::new(), "page");
        tree.process_form(id, &FormData::new().with_value("page", "3"))
            .unwrap();
        assert_eq!(tree.widget_as::<Hidden>(id).unwrap().value(), "3");
    }

    #[test]
    fn display_escapes_value() {
        let mut tree = WidgetTree::new();
        let id = tree.insert_named(Hidden::new().with_value("a\"b"), "h");
        let out = tree.render(id).unwrap();
        assert!(out.contains("type=\"hidden\""));
        assert!(out.contains("value=\"a&quot;b\""));
    }
}
