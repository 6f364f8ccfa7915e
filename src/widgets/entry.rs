//! Entry: a text input validated by composed rules.
//!
//! One concrete widget with a list of validation rules replaces what an
//! inheritance chain (entry → float entry → percentage entry) would
//! otherwise be: a percentage field is `Entry` with `Float` and
//! `Range { 0.0, 100.0 }` rules.

use std::any::Any;

use serde_json::{json, Value};

use crate::error::{Result, StructuralError};
use crate::form::FormData;
use crate::message::Message;
use crate::render::RenderCx;
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Widget;

/// A validation rule applied to the submitted value during `process`.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationRule {
    /// The value must be non-empty.
    Required,
    /// The value must parse as a whole number.
    Integer,
    /// The value must parse as a number.
    Float,
    /// The value must be a number within the inclusive range.
    Range {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// The value must not exceed this many characters.
    MaxLength(usize),
    /// The value must equal the value of the named paired entry
    /// (password confirmation). The pair must exist in the tree.
    Confirms(String),
}

/// A single-line text input with composable validation.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    value: String,
    rules: Vec<ValidationRule>,
    size: Option<u32>,
    masked: bool,
}

impl Entry {
    /// Create an empty entry with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validation rule (builder). Rules run in the order added.
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Shorthand for `with_rule(ValidationRule::Required)`.
    pub fn required(self) -> Self {
        self.with_rule(ValidationRule::Required)
    }

    /// Set the initial value (builder).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the rendered size attribute (builder).
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Render as a password input (builder).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// The current value (initial, restored, or last processed).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the current value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    fn max_length(&self) -> Option<usize> {
        self.rules.iter().find_map(|rule| match rule {
            ValidationRule::MaxLength(n) => Some(*n),
            _ => None,
        })
    }

    fn validate(
        &self,
        name: &str,
        tree: &mut WidgetTree,
        id: WidgetId,
        form: &FormData,
    ) -> Result<()> {
        if self.value.is_empty() {
            // Exactly one message for a missing required value; the remaining
            // rules only apply to values the user actually supplied.
            if self.rules.contains(&ValidationRule::Required) {
                tree.push_message(id, Message::error("this field is required"));
            }
            return Ok(());
        }

        for rule in &self.rules {
            match rule {
                ValidationRule::Required => {}
                ValidationRule::Integer => {
                    if self.value.trim().parse::<i64>().is_err() {
                        tree.push_message(id, Message::error("must be a whole number"));
                    }
                }
                ValidationRule::Float => {
                    if self.value.trim().parse::<f64>().is_err() {
                        tree.push_message(id, Message::error("must be a number"));
                    }
                }
                ValidationRule::Range { min, max } => match self.value.trim().parse::<f64>() {
                    Ok(parsed) => {
                        if parsed < *min || parsed > *max {
                            tree.push_message(
                                id,
                                Message::error(format!("must be between {min} and {max}")),
                            );
                        }
                    }
                    Err(_) => {
                        tree.push_message(id, Message::error("must be a number"));
                    }
                },
                ValidationRule::MaxLength(limit) => {
                    if self.value.chars().count() > *limit {
                        tree.push_message(
                            id,
                            Message::error(format!("must be at most {limit} characters")),
                        );
                    }
                }
                ValidationRule::Confirms(pair_name) => {
                    // The paired widget must exist and be an Entry; a missing
                    // pair is a wiring mistake, not a user error.
                    let pair_id = tree.query_by_name(pair_name).ok_or_else(|| {
                        StructuralError::MissingCrossReference {
                            widget: name.to_owned(),
                            missing: pair_name.clone(),
                        }
                    })?;
                    if tree.widget_as::<Entry>(pair_id).is_none() {
                        return Err(StructuralError::MissingCrossReference {
                            widget: name.to_owned(),
                            missing: pair_name.clone(),
                        });
                    }
                    if form.value(pair_name).unwrap_or("") != self.value {
                        tree.push_message(id, Message::error("values do not match"));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Widget for Entry {
    fn widget_type(&self) -> &'static str {
        "Entry"
    }

    fn accepts_child(&self, _child_type: &str) -> bool {
        false
    }

    fn process(&mut self, tree: &mut WidgetTree, id: WidgetId, form: &FormData) -> Result<()> {
        let name = tree.name(id).to_owned();
        self.value = form.value(&name).unwrap_or("").to_owned();
        self.validate(&name, tree, id, form)
    }

    fn display(&mut self, tree: &mut WidgetTree, id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        cx.write("<input type=\"");
        cx.write(if self.masked { "password" } else { "text" });
        cx.write("\" name=\"");
        cx.write_escaped(tree.name(id));
        cx.write("\" value=\"");
        cx.write_escaped(&self.value);
        cx.write("\"");
        if let Some(size) = self.size {
            cx.write(&format!(" size=\"{size}\""));
        }
        if let Some(limit) = self.max_length() {
            cx.write(&format!(" maxlength=\"{limit}\""));
        }
        cx.write(" />");
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
