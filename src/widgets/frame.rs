//! Frame: a titled fieldset container.

use std::any::Any;

use crate::error::Result;
use crate::render::RenderCx;
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Widget;

/// A container wrapping its children in a fieldset with a legend.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    title: String,
}

impl Frame {
    /// Create a frame with the given legend title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// The legend title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Widget for Frame {
    fn widget_type(&self) -> &'static str {
        "Frame"
    }

    fn display(&mut self, tree: &mut WidgetTree, id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        cx.write("<fieldset><legend>");
        cx.write_escaped(&self.title);
        cx.write("</legend>");
        tree.display_children(id, cx)?;
        cx.write("</fieldset>");
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
    use crate::widgets::Static;

    #[test]
    fn wraps_children_in_fieldset() {
        let mut tree = WidgetTree::new();
        let frame = tree.insert(Frame::new("Details"));
        tree.add_child(frame, Static::new("inner")).unwrap();
        let out = tree.render(frame).unwrap();
        assert_eq!(
            out,
            "<fieldset><legend>Details</legend><span>inner</span></fieldset>"
        );
    }

    #[test]
    fn title_escaped() {
        let mut tree = WidgetTree::new();
        let frame = tree.insert(Frame::new("a & b"));
        assert!(tree.render(frame).unwrap().contains("a &amp; b"));
    }
}
