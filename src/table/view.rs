//! Table view widget: rows × columns with grouping and special rows.

use std::any::Any;

use serde_json::Value;

use crate::error::{Result, StructuralError};
use crate::render::RenderCx;
use crate::renderer::checkbox::{TOGGLE_SCRIPT, TOGGLE_SCRIPT_KEY};
use crate::renderer::value_text;
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Widget;

use super::column::Column;
use super::model::TableModel;

/// Configuration for the "check all" special row.
///
/// The row is rendered once, before the data rows, only when the model has at
/// least two rows (a single row needs no bulk toggle). Its column spans are
/// computed from the position of `column` within the column list.
#[derive(Debug, Clone)]
pub struct CheckAllRow {
    /// Name of the column holding the per-row checkboxes.
    pub column: String,
    /// Checkbox group toggled by the control.
    pub group: String,
    /// Visible label.
    pub label: String,
}

impl CheckAllRow {
    /// Create a check-all row for the given column and checkbox group.
    pub fn new(column: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            group: group.into(),
            label: "Check all".to_owned(),
        }
    }

    /// Set the visible label (builder).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A leaf widget rendering a table model through columns of cell renderers.
///
/// Columns are owned data, not tree children; the view accepts no children.
#[derive(Clone, Default)]
pub struct TableView {
    columns: Vec<Column>,
    model: TableModel,
    check_all: Option<CheckAllRow>,
}

impl TableView {
    /// Create an empty table view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column (builder).
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the model (builder).
    pub fn with_model(mut self, model: TableModel) -> Self {
        self.model = model;
        self
    }

    /// Enable the check-all special row (builder).
    pub fn with_check_all(mut self, check_all: CheckAllRow) -> Self {
        self.check_all = Some(check_all);
        self
    }

    /// Append a column.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// The columns, in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The backing model.
    pub fn model(&self) -> &TableModel {
        &self.model
    }

    /// Mutable access to the backing model.
    pub fn model_mut(&mut self) -> &mut TableModel {
        &mut self.model
    }

    /// Position of the named column in the column list.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    fn display_check_all(&self, cx: &mut RenderCx) -> Result<()> {
        let Some(check_all) = &self.check_all else {
            return Ok(());
        };
        if self.model.len() < 2 {
            return Ok(());
        }
        let index = self
            .column_index(&check_all.column)
            .ok_or_else(|| StructuralError::UnknownColumn {
                column: check_all.column.clone(),
            })?;

        cx.emit_asset_once(TOGGLE_SCRIPT_KEY, TOGGLE_SCRIPT);
        cx.write("<tr class=\"check-all\">");
        if index > 0 {
            cx.write(&format!("<td colspan=\"{index}\"></td>"));
        }
        let span = self.columns.len() - index;
        cx.write(&format!("<td colspan=\"{span}\">"));
        cx.write("<input type=\"checkbox\" onclick=\"formtreeToggle('");
        cx.write_escaped(&check_all.group);
        cx.write("',this.checked)\" /> ");
        cx.write_escaped(&check_all.label);
        cx.write("</td></tr>");
        Ok(())
    }
}

impl Widget for TableView {
    fn widget_type(&self) -> &'static str {
        "TableView"
    }

    fn accepts_child(&self, _child_type: &str) -> bool {
        // Columns are configuration, not tree children.
        false
    }

    fn display(&mut self, _tree: &mut WidgetTree, _id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        let column_count = self.columns.len();
        cx.write("<table>");

        cx.write("<tr>");
        for column in &self.columns {
            cx.write("<th>");
            cx.write_escaped(column.title());
            cx.write("</th>");
        }
        cx.write("</tr>");

        self.display_check_all(cx)?;

        // Grouping state is local to one render pass, so repeated passes over
        // an unchanged table emit identical markup.
        let mut last_group: Vec<Option<Value>> = vec![None; column_count];

        for row_index in 0..self.model.len() {
            // Group headers: one per change of the group field's value.
            for column_index in 0..column_count {
                let column = &self.columns[column_index];
                if !column.is_grouping() {
                    continue;
                }
                let field = column.group_field().ok_or_else(|| {
                    StructuralError::MissingGroupField {
                        column: column.name().to_owned(),
                    }
                })?;
                let row = self.model.row(row_index).expect("row index in bounds");
                let value = row.get(field).ok_or_else(|| StructuralError::MissingField {
                    field: field.to_owned(),
                })?;
                if last_group[column_index].as_ref() != Some(value) {
                    cx.write(&format!("<tr class=\"group\"><td colspan=\"{column_count}\">"));
                    cx.write_escaped(&value_text(value));
                    cx.write("</td></tr>");
                    last_group[column_index] = Some(value.clone());
                }
            }

            // Phase one: apply mappings to every renderer of every column.
            let row = self.model.row(row_index).expect("row index in bounds");
            for column in &mut self.columns {
                column.renderers_mut().apply_mappings(row)?;
            }

            // Phase two: invoke each column's renderers in column order.
            cx.write("<tr>");
            for column in &mut self.columns {
                cx.write("<td>");
                column.renderers_mut().render_all(cx)?;
                cx.write("</td>");
            }
            cx.write("</tr>");
        }

        cx.write("</table>");
        Ok(())
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
