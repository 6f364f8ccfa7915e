//! Integration tests for formtree.
//!
//! These exercise the public API from outside the crate: tree structure,
//! lifecycle dispatch, validation, tabular rendering, replication, and the
//! wizard state machine working together.

use pretty_assertions::assert_eq;
use serde_json::json;

use formtree::registry::Registry;
use formtree::renderer::{Mapping, TextRenderer};
use formtree::table::{Column, TableModel, TableView};
use formtree::testing::{form, message_texts};
use formtree::widgets::*;
use formtree::{FormData, StructuralError, WidgetTree};

// ---------------------------------------------------------------------------
// Tree structure
// ---------------------------------------------------------------------------

#[test]
fn test_children_keep_insertion_order() {
    let mut tree = WidgetTree::new();
    let root = tree.insert_named(Panel::new(), "root");
    let a = tree.add_child_named(root, Static::new("a"), "a").unwrap();
    let b = tree.add_child_named(root, Static::new("b"), "b").unwrap();
    let c = tree.add_child_named(root, Static::new("c"), "c").unwrap();
    assert_eq!(tree.children(root), &[a, b, c]);
    assert_eq!(tree.render(root).unwrap(), "<span>a</span><span>b</span><span>c</span>");
}

#[test]
fn test_reparent_moves_subtree() {
    let mut tree = WidgetTree::new();
    let root = tree.insert_named(Panel::new(), "root");
    let left = tree.add_child_named(root, Panel::new(), "left").unwrap();
    let right = tree.add_child_named(root, Panel::new(), "right").unwrap();
    let item = tree.add_child_named(left, Static::new("x"), "item").unwrap();

    tree.reparent(item, right).unwrap();
    assert!(tree.children(left).is_empty());
    assert_eq!(tree.children(right), &[item]);
    assert_eq!(tree.parent(item), Some(right));
}

#[test]
fn test_capability_rejects_wrong_child_type() {
    let mut tree = WidgetTree::new();
    let root = tree.insert_named(Panel::accepting(&["Static"]), "root");
    assert!(tree.add_child(root, Static::new("ok")).is_ok());
    let err = tree.add_child(root, Entry::new()).unwrap_err();
    assert!(matches!(err, StructuralError::ChildNotAccepted { .. }));
}

// ---------------------------------------------------------------------------
// Processing and validation
// ---------------------------------------------------------------------------

#[test]
fn test_required_entry_error_leaves_siblings_alone() {
    let mut tree = WidgetTree::new();
    let root = tree.insert_named(Panel::new(), "root");
    let missing = tree
        .add_child_named(root, Entry::new().required(), "email")
        .unwrap();
    let fine = tree.add_child_named(root, Entry::new(), "note").unwrap();

    tree.process_form(root, &form(&[("note", "hello")])).unwrap();
    assert_eq!(message_texts(&tree, missing).len(), 1);
    assert!(message_texts(&tree, fine).is_empty());
    assert!(tree.has_errors(root));
}

#[test]
fn test_messages_cleared_on_next_submission() {
    let mut tree = WidgetTree::new();
    let id = tree.insert_named(Entry::new().required(), "email");
    tree.process_form(id, &FormData::new()).unwrap();
    assert_eq!(tree.messages(id).len(), 1);
    tree.process_form(id, &form(&[("email", "a@b")])).unwrap();
    assert!(tree.messages(id).is_empty());
}

#[test]
fn test_invisible_subtree_not_rendered() {
    let mut tree = WidgetTree::new();
    let root = tree.insert_named(Panel::new(), "root");
    let hidden = tree.add_child_named(root, Static::new("secret"), "s").unwrap();
    tree.add_child_named(root, Static::new("shown"), "v").unwrap();
    tree.set_visible(hidden, false);
    let out = tree.render(root).unwrap();
    assert!(!out.contains("secret"));
    assert!(out.contains("shown"));
}

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

fn text_column(name: &str, title: &str, field: &str) -> Column {
    let mut column = Column::new(name, title);
    let idx = column.renderers_mut().add_renderer(TextRenderer::new());
    column
        .renderers_mut()
        .add_mapping(idx, Mapping::new("text", field).unwrap())
        .unwrap();
    column
}

#[test]
fn test_grouped_table_emits_header_per_run() {
    let mut model = TableModel::new();
    for dept in ["A", "A", "B", "B", "A"] {
        model
            .push_row(json!({"dept": dept, "name": "x"}).as_object().unwrap().clone());
    }
    let view = TableView::new()
        .with_column(text_column("name", "Name", "name").grouped_by("dept"))
        .with_model(model);

    let mut tree = WidgetTree::new();
    let id = tree.insert_named(view, "table");
    let out = tree.render(id).unwrap();
    assert_eq!(out.matches("class=\"group\"").count(), 3);
}

#[test]
fn test_table_render_is_idempotent() {
    let mut model = TableModel::new();
    model.push_row(json!({"name": "alice"}).as_object().unwrap().clone());
    let view = TableView::new()
        .with_column(text_column("name", "Name", "name"))
        .with_model(model);

    let mut tree = WidgetTree::new();
    let id = tree.insert_named(view, "table");
    let first = tree.render(id).unwrap();
    let second = tree.render(id).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Replication
// ---------------------------------------------------------------------------

#[test]
fn test_replicated_copies_are_independent() {
    let mut tree = WidgetTree::new();
    let proto = tree.insert_detached(Panel::new(), "person");
    tree.add_child_named(proto, Entry::new(), "name").unwrap();

    let mut container = Replicated::new().with_prototype(proto);
    container.add_replicator("one", "First").unwrap();
    container.add_replicator("two", "Second").unwrap();
    let root = tree.insert_named(container, "people");
    tree.init(root).unwrap();

    let submission = form(&[("name_one", "Ada"), ("name_two", "Grace")]);
    tree.process_form(root, &submission).unwrap();

    let container = tree.widget_as::<Replicated>(root).unwrap();
    let one = container.widget_for("name", "one").unwrap();
    let two = container.widget_for("name", "two").unwrap();
    assert_eq!(tree.widget_as::<Entry>(one).unwrap().value(), "Ada");
    assert_eq!(tree.widget_as::<Entry>(two).unwrap().value(), "Grace");

    let err = container.widget_for("name", "three").unwrap_err();
    assert!(matches!(err, StructuralError::UnknownReplica { .. }));
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

fn wizard_tree() -> (WidgetTree, formtree::WidgetId) {
    let mut tree = WidgetTree::new();
    let wizard = tree.insert_named(Wizard::new(), "signup");
    for (step, field) in [("account", "email"), ("profile", "bio")] {
        let panel = tree.add_child_named(wizard, Panel::new(), step).unwrap();
        tree.add_child_named(panel, Entry::new(), field).unwrap();
    }
    tree.init(wizard).unwrap();
    (tree, wizard)
}

#[test]
fn test_wizard_walks_to_completion() {
    let (mut tree, wizard) = wizard_tree();

    tree.process_form(
        wizard,
        &form(&[("signup_step", "0"), ("email", "a@b")]),
    )
    .unwrap();
    let state = tree.widget_as::<Wizard>(wizard).unwrap().state().clone();
    assert_eq!(tree.widget_as::<Wizard>(wizard).unwrap().current_step(), 1);

    let blob = serde_json::to_string(&state).unwrap();
    tree.process_form(
        wizard,
        &form(&[("signup_step", "1"), ("signup_state", &blob), ("bio", "hi")]),
    )
    .unwrap();

    // Past the last step: complete, with both steps' state merged.
    let wizard_widget = tree.widget_as::<Wizard>(wizard).unwrap();
    assert_eq!(wizard_widget.current_step(), 2);
    assert_eq!(wizard_widget.state().get("account/email"), Some(&json!("a@b")));
    assert_eq!(wizard_widget.state().get("profile/bio"), Some(&json!("hi")));
}

#[test]
fn test_wizard_round_trips_state_through_markup() {
    let (mut tree, wizard) = wizard_tree();
    tree.process_form(wizard, &form(&[("signup_step", "0"), ("email", "a@b")]))
        .unwrap();
    let out = tree.render(wizard).unwrap();
    assert!(out.contains("name=\"signup_step\" value=\"1\""));
    assert!(out.contains("name=\"signup_state\""));
    // Step 0's field stays in the blob even though step 1 is shown.
    assert!(out.contains("account/email"));
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn test_registry_builds_a_working_form() {
    let registry = Registry::with_builtins();
    let mut tree = WidgetTree::new();
    let root = tree.insert_boxed(registry.create("Panel").unwrap(), Some("root"));
    tree.add_child_boxed(root, registry.create("Entry").unwrap(), Some("name"))
        .unwrap();
    tree.init(root).unwrap();
    tree.process_form(root, &form(&[("name", "ok")])).unwrap();
    let out = tree.render(root).unwrap();
    assert!(out.contains("value=\"ok\""));
}
