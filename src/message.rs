//! Validation messages: severity + content, attached to widgets.
//!
//! A `Message` is raised during `process()` when a user-supplied value fails a
//! check. Messages are owned by the widget that raised them, aggregated up the
//! tree by [`WidgetTree::gather_messages`](crate::tree::WidgetTree::gather_messages),
//! and cleared at the start of the next process pass — they never outlive one
//! submission cycle.

/// How serious a message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational note; does not indicate a problem.
    Info,
    /// Something suspicious the user may want to review.
    Warning,
    /// The value is invalid and must be corrected.
    Error,
}

/// A validation or status note raised by a widget during processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// How serious this message is.
    pub severity: Severity,
    /// Human-readable content.
    pub text: String,
}

impl Message {
    /// Create a message with an explicit severity.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    /// Shorthand for an [`Severity::Error`] message.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Shorthand for a [`Severity::Warning`] message.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// Shorthand for an [`Severity::Info`] message.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Whether this message is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Message::error("x").severity, Severity::Error);
        assert_eq!(Message::warning("x").severity, Severity::Warning);
        assert_eq!(Message::info("x").severity, Severity::Info);
    }

    #[test]
    fn is_error() {
        assert!(Message::error("bad").is_error());
        assert!(!Message::warning("hm").is_error());
        assert!(!Message::info("fyi").is_error());
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn text_preserved() {
        let m = Message::error("value out of range");
        assert_eq!(m.text, "value out of range");
    }
}
