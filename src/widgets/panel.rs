//! Panel: a transparent grouping container with an optional capability set.

use std::any::Any;

use crate::widget::Widget;

/// A container that emits no markup of its own; it exists to group children
/// and, optionally, to restrict which widget types may be nested in it.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    accepts: Option<Vec<String>>,
}

impl Panel {
    /// Create a panel accepting any child type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a panel accepting only the listed widget types.
    pub fn accepting(types: &[&str]) -> Self {
        Self {
            accepts: Some(types.iter().map(|t| (*t).to_owned()).collect()),
        }
    }
}

impl Widget for Panel {
    fn widget_type(&self) -> &'static str {
        "Panel"
    }

    fn accepts_child(&self, child_type: &str) -> bool {
        match &self.accepts {
            None => true,
            Some(types) => types.iter().any(|t| t == child_type),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_panel_accepts_anything() {
        let panel = Panel::new();
        assert!(panel.accepts_child("Entry"));
        assert!(panel.accepts_child("Wizard"));
    }

    #[test]
    fn capability_set_restricts() {
        let panel = Panel::accepting(&["Entry", "Static"]);
        assert!(panel.accepts_child("Entry"));
        assert!(panel.accepts_child("Static"));
        assert!(!panel.accepts_child("Panel"));
    }
}
