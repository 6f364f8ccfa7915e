//! Structural errors: misconfigured trees, bad mappings, unknown lookups.
//!
//! Structural errors are programmer errors — a forbidden child type nested in
//! a container, a mapping against a property the renderer does not have, an
//! unknown replicator id. They are fatal and propagate with `?`. They are
//! strictly disjoint from *validation* failures, which are recoverable
//! [`Message`](crate::message::Message)s attached to the offending widget and
//! never interrupt processing of sibling widgets.

/// Errors from misusing the widget tree or its configuration surfaces.
#[derive(Debug, thiserror::Error)]
pub enum StructuralError {
    /// A container was asked to adopt a child type outside its capability set.
    #[error("container `{container}` does not accept `{child}` children")]
    ChildNotAccepted {
        /// Widget type of the rejecting container.
        container: String,
        /// Widget type of the offending child.
        child: String,
    },

    /// A widget id was not found in the tree (stale or foreign id).
    #[error("unknown widget id")]
    UnknownWidget,

    /// A mapping was constructed with an empty property or field name.
    #[error("mapping property and field must both be non-empty")]
    EmptyMapping,

    /// A mapping targets a property the renderer does not expose.
    #[error("renderer `{renderer}` has no property `{property}`")]
    UnknownProperty {
        /// Renderer type name.
        renderer: String,
        /// The property the mapping asked for.
        property: String,
    },

    /// A renderer index outside a renderer container's slot list.
    #[error("renderer container has no renderer at index {index}")]
    UnknownRenderer {
        /// The out-of-range index.
        index: usize,
    },

    /// A row record is missing a field a mapping or grouping column needs.
    #[error("row record has no field `{field}`")]
    MissingField {
        /// The absent field name.
        field: String,
    },

    /// A table view referenced a column name that is not in its column list.
    #[error("table has no column named `{column}`")]
    UnknownColumn {
        /// The missing column name.
        column: String,
    },

    /// A grouping column was rendered without a group field configured.
    #[error("grouping column `{column}` has no group field configured")]
    MissingGroupField {
        /// The misconfigured column name.
        column: String,
    },

    /// A replicated-container lookup for a clone that was never stamped out.
    #[error("no clone of widget `{original}` for replicator `{replicator}`")]
    UnknownReplica {
        /// Name of the prototype widget.
        original: String,
        /// The replicator id used in the lookup.
        replicator: String,
    },

    /// A widget requires a paired widget or setting that was never provided.
    #[error("widget `{widget}` requires `{missing}` to be configured")]
    MissingCrossReference {
        /// Name of the widget with the unsatisfied requirement.
        widget: String,
        /// What is missing (a paired widget name, a prototype, ...).
        missing: String,
    },

    /// A table model row id collided with an existing one.
    #[error("duplicate row id `{id}` in table model")]
    DuplicateRowId {
        /// The colliding id.
        id: String,
    },

    /// The same replicator id was registered twice.
    #[error("replicator id `{id}` registered twice")]
    DuplicateReplicator {
        /// The colliding replicator id.
        id: String,
    },

    /// A type name was not found in the widget registry.
    #[error("no widget type `{type_name}` registered")]
    UnknownType {
        /// The unregistered type name.
        type_name: String,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, StructuralError>;
