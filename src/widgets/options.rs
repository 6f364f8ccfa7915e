//! Choice options for selection widgets: flat pairs and nested trees.

/// A value + label pair offered by a selection widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// The submitted value.
    pub value: String,
    /// The visible label.
    pub label: String,
}

impl ChoiceOption {
    /// Create an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A node in a nested option tree.
///
/// Flattening produces one [`ChoiceOption`] per node, whose value is the
/// slash-joined path of ancestor ids down to the node.
#[derive(Debug, Clone)]
pub struct TreeOption {
    id: String,
    label: String,
    children: Vec<TreeOption>,
}

impl TreeOption {
    /// Create a tree node with no children.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Append a child node (builder).
    pub fn with_child(mut self, child: TreeOption) -> Self {
        self.children.push(child);
        self
    }

    /// The node's id (one path segment).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The node's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Flatten the tree depth-first into path-valued options.
    pub fn flatten(&self) -> Vec<ChoiceOption> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<ChoiceOption>) {
        let path = if prefix.is_empty() {
            self.id.clone()
        } else {
            format!("{prefix}/{}", self.id)
        };
        out.push(ChoiceOption::new(path.clone(), self.label.clone()));
        for child in &self.children {
            child.flatten_into(&path, out);
        }
    }
}
