//! Checkbox cell renderer: one checkbox per row, sharing a toggle script.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Result, StructuralError};
use crate::render::RenderCx;

use super::{value_text, value_truthy, CellRenderer};

/// Asset key for the shared row-checkbox toggle script.
pub(crate) const TOGGLE_SCRIPT_KEY: &str = "formtree-checkbox-toggle";

/// The shared script backing "check all" behavior. Emitted once per render
/// pass no matter how many checkbox cells appear.
pub(crate) const TOGGLE_SCRIPT: &str = concat!(
    "<script>function formtreeToggle(group,on){",
    "document.querySelectorAll('input[name=\"'+group+'\"]')",
    ".forEach(function(el){el.checked=on;});}</script>"
);

/// Renders a checkbox for one row, named after a group so a check-all control
/// can toggle every row at once.
///
/// Besides the scalar `value`/`checked` properties it has an array-valued
/// `data` property: each key becomes a `data-<key>` attribute on the emitted
/// input, filled per row through indexed mappings.
#[derive(Debug, Clone)]
pub struct CheckboxRenderer {
    group: String,
    value: String,
    checked: bool,
    data: BTreeMap<String, String>,
}

impl CheckboxRenderer {
    /// Create a renderer whose checkboxes share the given group name.
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            value: String::new(),
            checked: false,
            data: BTreeMap::new(),
        }
    }

    /// The group (form name) of the emitted checkboxes.
    pub fn group(&self) -> &str {
        &self.group
    }
}

impl CellRenderer for CheckboxRenderer {
    fn renderer_type(&self) -> &'static str {
        "CheckboxRenderer"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["value", "checked"]
    }

    fn indexed_properties(&self) -> &'static [&'static str] {
        &["data"]
    }

    fn set_indexed_property(&mut self, property: &str, key: &str, value: &Value) -> Result<()> {
        match property {
            "data" => {
                self.data.insert(key.to_owned(), value_text(value));
                Ok(())
            }
            other => Err(StructuralError::UnknownProperty {
                renderer: self.renderer_type().to_owned(),
                property: other.to_owned(),
            }),
        }
    }

    fn set_property(&mut self, property: &str, value: &Value) -> Result<()> {
        match property {
            "value" => {
                self.value = value_text(value);
                Ok(())
            }
            "checked" => {
                self.checked = value_truthy(value);
                Ok(())
            }
            other => Err(StructuralError::UnknownProperty {
                renderer: self.renderer_type().to_owned(),
                property: other.to_owned(),
            }),
        }
    }

    fn render(&mut self, cx: &mut RenderCx) -> Result<()> {
        cx.emit_asset_once(TOGGLE_SCRIPT_KEY, TOGGLE_SCRIPT);
        cx.write("<input type=\"checkbox\" name=\"");
        cx.write_escaped(&self.group);
        cx.write("\" value=\"");
        cx.write_escaped(&self.value);
        cx.write("\"");
        for (key, value) in &self.data {
            cx.write(" data-");
            cx.write_escaped(key);
            cx.write("=\"");
            cx.write_escaped(value);
            cx.write("\"");
        }
        if self.checked {
            cx.write(" checked");
        }
        cx.write(" />");
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn CellRenderer> {
        Box::new(self.clone())
    }
}
