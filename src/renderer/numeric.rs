//! Numeric cell renderer with configurable formatting.
//!
//! One concrete renderer with a formatting strategy object replaces what a
//! class hierarchy (numeric → percentage → ...) would otherwise be.

use serde_json::Value;

use crate::error::{Result, StructuralError};
use crate::render::RenderCx;

use super::CellRenderer;

/// How a numeric value is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Decimal places emitted.
    pub decimals: usize,
    /// Append a percent sign.
    pub percent: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimals: 2,
            percent: false,
        }
    }
}

impl NumberFormat {
    /// Format for percentages with the given decimal places.
    pub fn percent(decimals: usize) -> Self {
        Self {
            decimals,
            percent: true,
        }
    }

    /// Plain format with the given decimal places.
    pub fn plain(decimals: usize) -> Self {
        Self {
            decimals,
            percent: false,
        }
    }

    fn format(&self, value: f64) -> String {
        let mut out = format!("{:.*}", self.decimals, value);
        if self.percent {
            out.push('%');
        }
        out
    }
}

/// Renders one numeric value into a table cell.
///
/// Unparseable or null values render as an empty cell.
#[derive(Debug, Clone, Default)]
pub struct NumericRenderer {
    value: Option<f64>,
    format: NumberFormat,
}

impl NumericRenderer {
    /// Create a renderer with the default format (two decimals, no percent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the format (builder).
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// The currently staged value.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

impl CellRenderer for NumericRenderer {
    fn renderer_type(&self) -> &'static str {
        "NumericRenderer"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["value"]
    }

    fn set_property(&mut self, property: &str, value: &Value) -> Result<()> {
        match property {
            "value" => {
                self.value = match value {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => s.trim().parse().ok(),
                    _ => None,
                };
                Ok(())
            }
            other => Err(StructuralError::UnknownProperty {
                renderer: self.renderer_type().to_owned(),
                property: other.to_owned(),
            }),
        }
    }

    fn render(&mut self, cx: &mut RenderCx) -> Result<()> {
        if let Some(value) = self.value {
            cx.write_escaped(&self.format.format(value));
        }
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn CellRenderer> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(renderer: &mut NumericRenderer) -> String {
        let mut cx = RenderCx::new();
        renderer.render(&mut cx).unwrap();
        cx.finish()
    }

    #[test]
    fn default_format_two_decimals() {
        let mut r = NumericRenderer::new();
        r.set_property("value", &json!(3.14159)).unwrap();
        assert_eq!(render(&mut r), "3.14");
    }

    #[test]
    fn percent_format() {
        let mut r = NumericRenderer::new().with_format(NumberFormat::percent(1));
        r.set_property("value", &json!(42.25)).unwrap();
        assert_eq!(render(&mut r), "42.2%");
    }

    #[test]
    fn plain_zero_decimals() {
        let mut r = NumericRenderer::new().with_format(NumberFormat::plain(0));
        r.set_property("value", &json!(7.6)).unwrap();
        assert_eq!(render(&mut r), "8");
    }

    #[test]
    fn string_values_parse() {
        let mut r = NumericRenderer::new();
        r.set_property("value", &json!(" 2.5 ")).unwrap();
        assert_eq!(r.value(), Some(2.5));
    }

    #[test]
    fn unparseable_renders_empty() {
        let mut r = NumericRenderer::new();
        r.set_property("value", &json!("not a number")).unwrap();
        assert_eq!(render(&mut r), "");
    }

    #[test]
    fn null_renders_empty() {
        let mut r = NumericRenderer::new();
        r.set_property("value", &json!(null)).unwrap();
        assert_eq!(render(&mut r), "");
    }

    #[test]
    fn unknown_property_rejected() {
        let mut r = NumericRenderer::new();
        assert!(r.set_property("text", &json!(1)).is_err());
    }
}
