//! Static widget: fixed text or raw markup.

use std::any::Any;

use crate::error::Result;
use crate::render::RenderCx;
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Widget;

/// A leaf widget emitting fixed content.
///
/// Text content is HTML-escaped and wrapped in a span; raw content is emitted
/// verbatim (the caller vouches for it).
#[derive(Debug, Clone, Default)]
pub struct Static {
    text: String,
    raw: bool,
}

impl Static {
    /// Create a static widget with escaped text content.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raw: false,
        }
    }

    /// Create a static widget emitting `markup` verbatim.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self {
            text: markup.into(),
            raw: true,
        }
    }

    /// The content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Static {
    fn widget_type(&self) -> &'static str {
        "Static"
    }

    fn accepts_child(&self, _child_type: &str) -> bool {
        false
    }

    fn display(&mut self, _tree: &mut WidgetTree, _id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        if self.raw {
            cx.write(&self.text);
        } else {
            cx.write("<span>");
            cx.write_escaped(&self.text);
            cx.write("</span>");
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped() {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Static::new("<b>bold</b>"));
        assert_eq!(tree.render(id).unwrap(), "<span>&lt;b&gt;bold&lt;/b&gt;</span>");
    }

    #[test]
    fn raw_passes_through() {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Static::raw("<hr />"));
        assert_eq!(tree.render(id).unwrap(), "<hr />");
    }

    #[test]
    fn rejects_children() {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Static::new("leaf"));
        assert!(tree.add_child(id, Static::new("child")).is_err());
    }
}
