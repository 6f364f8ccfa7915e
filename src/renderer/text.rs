//! Text cell renderer with null-text fallback.

use serde_json::Value;

use crate::error::{Result, StructuralError};
use crate::render::RenderCx;

use super::{value_text, CellRenderer};

/// Renders one text value into a table cell.
///
/// When the mapped value is empty, the configured null text (e.g. an em dash
/// or "n/a") is emitted instead. The `text` field is cleared after each render
/// so a row that maps no value never inherits the previous row's text.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    text: String,
    null_text: Option<String>,
}

impl TextRenderer {
    /// Create a renderer with empty text and no null fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback emitted for empty values (builder).
    pub fn with_null_text(mut self, null_text: impl Into<String>) -> Self {
        self.null_text = Some(null_text.into());
        self
    }

    /// The currently staged text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stage text directly (mappings normally do this).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl CellRenderer for TextRenderer {
    fn renderer_type(&self) -> &'static str {
        "TextRenderer"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["text"]
    }

    fn set_property(&mut self, property: &str, value: &Value) -> Result<()> {
        match property {
            "text" => {
                self.text = value_text(value);
                Ok(())
            }
            other => Err(StructuralError::UnknownProperty {
                renderer: self.renderer_type().to_owned(),
                property: other.to_owned(),
            }),
        }
    }

    fn render(&mut self, cx: &mut RenderCx) -> Result<()> {
        if self.text.is_empty() {
            if let Some(null_text) = &self.null_text {
                cx.write_escaped(null_text);
            }
        } else {
            cx.write_escaped(&self.text);
        }
        // Render-local reset: the next cell starts clean.
        self.text.clear();
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn CellRenderer> {
        Box::new(self.clone())
    }
}
