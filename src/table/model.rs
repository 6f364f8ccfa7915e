//! Table model: ordered opaque row records with optional unique ids.

use serde_json::Value;

use crate::error::{Result, StructuralError};

/// One row of table data: field name → value.
///
/// The model does not enforce a schema; columns and renderers interpret
/// fields by name at render time.
pub type RowRecord = serde_json::Map<String, Value>;

/// The ordered row data backing a table view.
#[derive(Debug, Clone, Default)]
pub struct TableModel {
    rows: Vec<RowRecord>,
    ids: Vec<Option<String>>,
}

impl TableModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row without an identifier.
    pub fn push_row(&mut self, row: RowRecord) {
        self.rows.push(row);
        self.ids.push(None);
    }

    /// Append a row with an identifier. Ids must be unique within the model.
    pub fn push_row_with_id(&mut self, id: impl Into<String>, row: RowRecord) -> Result<()> {
        let id = id.into();
        if self.index_of_id(&id).is_some() {
            return Err(StructuralError::DuplicateRowId { id });
        }
        self.rows.push(row);
        self.ids.push(Some(id));
        Ok(())
    }

    /// The row at `index`.
    pub fn row(&self, index: usize) -> Option<&RowRecord> {
        self.rows.get(index)
    }

    /// The id of the row at `index`, if one was assigned.
    pub fn row_id(&self, index: usize) -> Option<&str> {
        self.ids.get(index).and_then(Option::as_deref)
    }

    /// The index of the row with the given id.
    pub fn index_of_id(&self, id: &str) -> Option<usize> {
        self.ids
            .iter()
            .position(|candidate| candidate.as_deref() == Some(id))
    }

    /// Iterate the rows in model order.
    pub fn rows(&self) -> impl Iterator<Item = &RowRecord> {
        self.rows.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the model has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
