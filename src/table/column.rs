//! Table columns: a renderer container plus optional grouping.

use crate::renderer::RendererContainer;

/// One column of a table view: a name, a header title, renderers with their
/// mappings, and optional grouping configuration.
#[derive(Clone, Default)]
pub struct Column {
    name: String,
    title: String,
    renderers: RendererContainer,
    grouping: bool,
    group_field: Option<String>,
}

impl Column {
    /// Create a column with the given name (for lookups) and header title.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            renderers: RendererContainer::new(),
            grouping: false,
            group_field: None,
        }
    }

    /// Mark this column as grouping on `field` (builder).
    ///
    /// During rendering, a group header row is emitted whenever the field's
    /// value differs from the previous row's.
    pub fn grouped_by(mut self, field: impl Into<String>) -> Self {
        self.grouping = true;
        self.group_field = Some(field.into());
        self
    }

    /// Mark this column as grouping without a field (builder).
    ///
    /// Rendering such a column is a structural error; this exists for
    /// configuration layers that set the field separately.
    pub fn grouping(mut self) -> Self {
        self.grouping = true;
        self
    }

    /// Set the group field after construction.
    pub fn set_group_field(&mut self, field: impl Into<String>) {
        self.grouping = true;
        self.group_field = Some(field.into());
    }

    /// The column's lookup name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The header title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether this column groups rows.
    pub fn is_grouping(&self) -> bool {
        self.grouping
    }

    /// The grouping field, when configured.
    pub fn group_field(&self) -> Option<&str> {
        self.group_field.as_deref()
    }

    /// The column's renderers and mappings.
    pub fn renderers(&self) -> &RendererContainer {
        &self.renderers
    }

    /// Mutable access to the column's renderers and mappings.
    pub fn renderers_mut(&mut self) -> &mut RendererContainer {
        &mut self.renderers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Mapping, TextRenderer};

    #[test]
    fn new_column() {
        let col = Column::new("amount", "Amount");
        assert_eq!(col.name(), "amount");
        assert_eq!(col.title(), "Amount");
        assert!(!col.is_grouping());
        assert!(col.group_field().is_none());
        assert!(col.renderers().is_empty());
    }

    #[test]
    fn grouped_by_sets_both_flags() {
        let col = Column::new("dept", "Department").grouped_by("department");
        assert!(col.is_grouping());
        assert_eq!(col.group_field(), Some("department"));
    }

    #[test]
    fn grouping_without_field() {
        let col = Column::new("dept", "Department").grouping();
        assert!(col.is_grouping());
        assert!(col.group_field().is_none());
    }

    #[test]
    fn renderers_configurable() {
        let mut col = Column::new("name", "Name");
        let idx = col.renderers_mut().add_renderer(TextRenderer::new());
        col.renderers_mut()
            .add_mapping(idx, Mapping::new("text", "name").unwrap())
            .unwrap();
        assert_eq!(col.renderers().len(), 1);
    }
}
