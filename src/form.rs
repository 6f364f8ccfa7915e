//! Submitted form data: a flat key → value(s) map.
//!
//! `FormData` is the submission-side input to `process()`. Keys are widget
//! names; multi-select controls (checkbox groups) submit several values under
//! one key. The HTTP layer that produces this map is outside the crate.

use std::collections::HashMap;

/// A flat external key → value(s) mapping representing one form submission.
///
/// # Examples
///
/// ```
/// use formtree::form::FormData;
///
/// let form = FormData::new()
///     .with_value("email", "a@example.com")
///     .with_values("tags", ["rust", "web"]);
/// assert_eq!(form.value("email"), Some("a@example.com"));
/// assert_eq!(form.values("tags").len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormData {
    values: HashMap<String, Vec<String>>,
}

impl FormData {
    /// Create an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single value for a key (builder). Replaces any previous values.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), vec![value.into()]);
        self
    }

    /// Set multiple values for a key (builder). Replaces any previous values.
    pub fn with_values(
        mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.values
            .insert(key.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Append one value under a key, keeping existing ones.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// The first value submitted under `key`, if any.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// All values submitted under `key`. Empty slice when the key is absent.
    pub fn values(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any value was submitted under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct keys in the submission.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the submission is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
