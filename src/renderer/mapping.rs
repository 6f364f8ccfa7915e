//! Mappings: bind a renderer property to a data-row field.

use crate::error::{Result, StructuralError};
use crate::table::model::RowRecord;

use super::CellRenderer;

/// A binding from a row-record field to a renderer property.
///
/// Applied before each render call: the field's value is read from the row
/// and written into the renderer, either directly or — for array-valued
/// properties — at a given key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    property: String,
    field: String,
    array_key: Option<String>,
}

impl Mapping {
    /// Bind `property` to row field `field`.
    ///
    /// Both names must be non-empty.
    pub fn new(property: impl Into<String>, field: impl Into<String>) -> Result<Self> {
        let property = property.into();
        let field = field.into();
        if property.is_empty() || field.is_empty() {
            return Err(StructuralError::EmptyMapping);
        }
        Ok(Self {
            property,
            field,
            array_key: None,
        })
    }

    /// Bind `property[key]` to row field `field`, for array-valued properties.
    pub fn indexed(
        property: impl Into<String>,
        key: impl Into<String>,
        field: impl Into<String>,
    ) -> Result<Self> {
        let mut mapping = Self::new(property, field)?;
        mapping.array_key = Some(key.into());
        Ok(mapping)
    }

    /// The renderer property this mapping writes.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The row field this mapping reads.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The array key, when the target property is array-valued.
    pub fn array_key(&self) -> Option<&str> {
        self.array_key.as_deref()
    }

    /// Read `field` from the row and write it into the renderer.
    ///
    /// A missing field is a data-shape error.
    pub(crate) fn apply(&self, renderer: &mut dyn CellRenderer, row: &RowRecord) -> Result<()> {
        let value = row.get(&self.field).ok_or_else(|| StructuralError::MissingField {
            field: self.field.clone(),
        })?;
        match &self.array_key {
            Some(key) => renderer.set_indexed_property(&self.property, key, value),
            None => renderer.set_property(&self.property, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::TextRenderer;
    use serde_json::json;

    fn row(field: &str, value: serde_json::Value) -> RowRecord {
        let mut record = RowRecord::new();
        record.insert(field.to_owned(), value);
        record
    }

    #[test]
    fn new_rejects_empty_names() {
        assert!(matches!(
            Mapping::new("", "field"),
            Err(StructuralError::EmptyMapping)
        ));
        assert!(matches!(
            Mapping::new("prop", ""),
            Err(StructuralError::EmptyMapping)
        ));
        assert!(Mapping::new("prop", "field").is_ok());
    }

    #[test]
    fn accessors() {
        let plain = Mapping::new("text", "title").unwrap();
        assert_eq!(plain.property(), "text");
        assert_eq!(plain.field(), "title");
        assert_eq!(plain.array_key(), None);

        let indexed = Mapping::indexed("attrs", "data-id", "id").unwrap();
        assert_eq!(indexed.array_key(), Some("data-id"));
    }

    #[test]
    fn apply_writes_property() {
        let mapping = Mapping::new("text", "title").unwrap();
        let mut renderer = TextRenderer::new();
        mapping.apply(&mut renderer, &row("title", json!("Hello"))).unwrap();
        assert_eq!(renderer.text(), "Hello");
    }

    #[test]
    fn apply_missing_field_is_structural() {
        let mapping = Mapping::new("text", "absent").unwrap();
        let mut renderer = TextRenderer::new();
        let err = mapping
            .apply(&mut renderer, &row("title", json!("x")))
            .unwrap_err();
        assert!(matches!(err, StructuralError::MissingField { ref field } if field == "absent"));
    }
}
