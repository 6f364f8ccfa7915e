//! Wizard: a multi-step container driven by two hidden fields.
//!
//! Each child is a step. A hidden step field carries the current index and a
//! hidden state field carries a JSON blob of every stateful widget seen so
//! far, so a wizard works without any server-side session: the browser round-
//! trips all of it.

use std::any::Any;
use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::form::FormData;
use crate::render::RenderCx;
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Widget;

/// A step-at-a-time container with browser-persisted state.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step_field: String,
    state_field: String,
    current: usize,
    state: BTreeMap<String, Value>,
    legacy_step_one_decrement: bool,
}

impl Wizard {
    /// Create a wizard at step zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reproduce the historical behavior where an error-free submission at
    /// step 1 went back to step 0 instead of forward (builder). Off by
    /// default; only for callers that depend on the old transition table.
    pub fn legacy_step_one_decrement(mut self, enabled: bool) -> Self {
        self.legacy_step_one_decrement = enabled;
        self
    }

    /// The current step index. An index past the last child means every step
    /// has been submitted without errors.
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// The accumulated state blob, keyed by slash-joined widget path.
    pub fn state(&self) -> &BTreeMap<String, Value> {
        &self.state
    }

    fn parse_state(&self, raw: &str) -> BTreeMap<String, Value> {
        match serde_json::from_str(raw) {
            Ok(state) => state,
            Err(error) => {
                warn!(%error, "discarding malformed wizard state");
                BTreeMap::new()
            }
        }
    }
}

impl Widget for Wizard {
    fn widget_type(&self) -> &'static str {
        "Wizard"
    }

    fn init(&mut self, tree: &mut WidgetTree, id: WidgetId) -> Result<()> {
        let name = tree.name(id);
        self.step_field = format!("{name}_step");
        self.state_field = format!("{name}_state");
        tree.init_children(id)
    }

    fn process(&mut self, tree: &mut WidgetTree, id: WidgetId, form: &FormData) -> Result<()> {
        self.current = form
            .value(&self.step_field)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        self.state = match form.value(&self.state_field) {
            Some(raw) if !raw.is_empty() => self.parse_state(raw),
            _ => BTreeMap::new(),
        };

        let steps = tree.children(id).to_vec();
        let Some(&active) = steps.get(self.current) else {
            // Past the last step: nothing left to process. The caller reads
            // `current_step() >= step count` as completion.
            return Ok(());
        };

        tree.restore_descendant_states(active, &self.state);
        tree.process(active, form)?;
        self.state.extend(tree.descendant_states(active));

        if !tree.has_messages(active) {
            if self.legacy_step_one_decrement && self.current == 1 {
                self.current -= 1;
            } else {
                self.current += 1;
            }
            debug!(step = self.current, "wizard advanced");
        }
        Ok(())
    }

    fn display(&mut self, tree: &mut WidgetTree, id: WidgetId, cx: &mut RenderCx) -> Result<()> {
        let steps = tree.children(id).to_vec();
        for (index, &step) in steps.iter().enumerate() {
            tree.set_visible(step, index == self.current);
        }
        if let Some(&active) = steps.get(self.current) {
            tree.restore_descendant_states(active, &self.state);
        }

        cx.write("<input type=\"hidden\" name=\"");
        cx.write_escaped(&self.step_field);
        cx.write(&format!("\" value=\"{}\" />", self.current));
        cx.write("<input type=\"hidden\" name=\"");
        cx.write_escaped(&self.state_field);
        cx.write("\" value=\"");
        cx.write_escaped(&serde_json::to_string(&self.state).unwrap_or_default());
        cx.write("\" />");

        tree.display_children(id, cx)
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
    use serde_json::json;

    use crate::widgets::{Entry, Panel};

    fn three_step_wizard() -> (WidgetTree, WidgetId) {
        let mut tree = WidgetTree::new();
        let wizard = tree.insert_named(Wizard::new(), "setup");
        for (step, field) in [("one", "a"), ("two", "b"), ("three", "c")] {
            let panel = tree.add_child_named(wizard, Panel::new(), step).unwrap();
            tree.add_child_named(panel, Entry::new(), field).unwrap();
        }
        tree.init(wizard).unwrap();
        (tree, wizard)
    }

    fn submit(tree: &mut WidgetTree, wizard: WidgetId, step: usize, fields: &[(&str, &str)]) {
        let state = tree
            .widget_as::<Wizard>(wizard)
            .unwrap()
            .state()
            .clone();
        let mut form = FormData::new()
            .with_value("setup_step", step.to_string())
            .with_value("setup_state", serde_json::to_string(&state).unwrap());
        for (key, value) in fields {
            form.append(*key, *value);
        }
        tree.process_form(wizard, &form).unwrap();
    }

    #[test]
    fn clean_submission_advances() {
        let (mut tree, wizard) = three_step_wizard();
        submit(&mut tree, wizard, 0, &[("a", "1")]);
        assert_eq!(tree.widget_as::<Wizard>(wizard).unwrap().current_step(), 1);
    }

    #[test]
    fn last_step_advances_out_of_range() {
        let (mut tree, wizard) = three_step_wizard();
        submit(&mut tree, wizard, 2, &[("c", "3")]);
        assert_eq!(tree.widget_as::<Wizard>(wizard).unwrap().current_step(), 3);
    }

    #[test]
    fn out_of_range_step_processes_nothing() {
        let (mut tree, wizard) = three_step_wizard();
        submit(&mut tree, wizard, 7, &[("a", "ignored")]);
        assert_eq!(tree.widget_as::<Wizard>(wizard).unwrap().current_step(), 7);
    }

    #[test]
    fn validation_error_blocks_advance() {
        let mut tree = WidgetTree::new();
        let wizard = tree.insert_named(Wizard::new(), "setup");
        let step = tree.add_child_named(wizard, Panel::new(), "one").unwrap();
        tree.add_child_named(step, Entry::new().required(), "a")
            .unwrap();
        tree.init(wizard).unwrap();
        submit(&mut tree, wizard, 0, &[]);
        assert_eq!(tree.widget_as::<Wizard>(wizard).unwrap().current_step(), 0);
    }

    #[test]
    fn state_accumulates_across_steps() {
        let (mut tree, wizard) = three_step_wizard();
        submit(&mut tree, wizard, 0, &[("a", "first")]);
        submit(&mut tree, wizard, 1, &[("b", "second")]);
        let state = tree.widget_as::<Wizard>(wizard).unwrap().state();
        assert_eq!(state.get("one/a"), Some(&json!("first")));
        assert_eq!(state.get("two/b"), Some(&json!("second")));
    }

    #[test]
    fn display_shows_only_active_step() {
        let (mut tree, wizard) = three_step_wizard();
        submit(&mut tree, wizard, 0, &[("a", "first")]);
        let out = tree.render(wizard).unwrap();
        assert!(out.contains("name=\"b\""));
        assert!(!out.contains("name=\"a\""));
        assert!(!out.contains("name=\"c\""));
        assert!(out.contains("name=\"setup_step\" value=\"1\""));
    }

    #[test]
    fn revisited_step_restores_values() {
        let (mut tree, wizard) = three_step_wizard();
        submit(&mut tree, wizard, 0, &[("a", "kept")]);
        // Force the view back to step 0 and check the value came back.
        tree.widget_as_mut::<Wizard>(wizard).unwrap().current = 0;
        let out = tree.render(wizard).unwrap();
        assert!(out.contains("value=\"kept\""));
    }

    #[test]
    fn malformed_state_blob_starts_fresh() {
        let (mut tree, wizard) = three_step_wizard();
        let form = FormData::new()
            .with_value("setup_step", "1")
            .with_value("setup_state", "{not json")
            .with_value("b", "x");
        tree.process_form(wizard, &form).unwrap();
        let state = tree.widget_as::<Wizard>(wizard).unwrap().state();
        assert_eq!(state.get("two/b"), Some(&json!("x")));
        assert!(!state.contains_key("one/a"));
    }

    #[test]
    fn legacy_quirk_decrements_from_step_one() {
        let mut tree = WidgetTree::new();
        let wizard = tree.insert_named(Wizard::new().legacy_step_one_decrement(true), "setup");
        for step in ["one", "two", "three"] {
            tree.add_child_named(wizard, Panel::new(), step).unwrap();
        }
        tree.init(wizard).unwrap();
        submit(&mut tree, wizard, 1, &[]);
        assert_eq!(tree.widget_as::<Wizard>(wizard).unwrap().current_step(), 0);
    }
}
