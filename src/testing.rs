//! Assertion helpers shared by unit and integration tests.
//!
//! Public so downstream crates can use the same shorthand in their own test
//! suites.

use crate::form::FormData;
use crate::tree::{WidgetId, WidgetTree};

/// Build a [`FormData`] from key/value pairs.
///
/// Repeated keys accumulate as multi-values, the way a real submission with
/// repeated fields arrives.
pub fn form(pairs: &[(&str, &str)]) -> FormData {
    let mut form = FormData::new();
    for (key, value) in pairs {
        form.append(*key, *value);
    }
    form
}

/// The message texts attached directly to a widget, in order.
pub fn message_texts(tree: &WidgetTree, id: WidgetId) -> Vec<String> {
    tree.messages(id)
        .iter()
        .map(|message| message.text.clone())
        .collect()
}

/// All message texts in a subtree, depth-first.
pub fn subtree_message_texts(tree: &WidgetTree, id: WidgetId) -> Vec<String> {
    tree.gather_messages(id)
        .into_iter()
        .map(|message| message.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Entry, Panel};

    #[test]
    fn form_accumulates_repeated_keys() {
        let form = form(&[("color", "red"), ("color", "blue"), ("size", "xl")]);
        assert_eq!(form.values("color"), &["red".to_owned(), "blue".to_owned()]);
        assert_eq!(form.value("size"), Some("xl"));
    }

    #[test]
    fn subtree_texts_cover_descendants() {
        let mut tree = WidgetTree::new();
        let root = tree.insert_named(Panel::new(), "root");
        let child = tree
            .add_child_named(root, Entry::new().required(), "name")
            .unwrap();
        tree.process_form(root, &FormData::new()).unwrap();
        assert_eq!(message_texts(&tree, child).len(), 1);
        assert_eq!(subtree_message_texts(&tree, root).len(), 1);
    }
}
