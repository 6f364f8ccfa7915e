//! # formtree
//!
//! A server-side HTML form toolkit built around a widget tree.
//!
//! Forms are composed as trees of widgets sharing one lifecycle: `init` once
//! after construction, `process` on every submission, `display` to produce
//! markup. Validation failures become messages attached to the offending
//! widget; structural mistakes (bad wiring, unknown names) are hard errors.
//!
//! ## Core Systems
//!
//! - **[`tree`]** — Slotmap-backed widget arena: parent/child structure,
//!   lifecycle dispatch, state capture, subtree cloning
//! - **[`widget`]** — The object-safe [`Widget`] trait
//! - **[`widgets`]** — Built-in widgets: Panel, Frame, Static, Entry,
//!   Checkbox, Select, Hidden, Replicated, Wizard
//! - **[`renderer`]** — Cell renderers with typed properties and field
//!   mappings for tabular output
//! - **[`table`]** — Row model and the grouping/check-all table widget
//! - **[`form`]** — Decoded submission data (multi-valued fields)
//! - **[`message`]** — Validation messages with severities
//! - **[`registry`]** — Name-keyed widget constructors
//! - **[`render`]** — Markup buffer, HTML escaping, emit-once assets
//! - **[`testing`]** — Shorthand helpers for test suites

// Foundation
pub mod error;
pub mod form;
pub mod message;
pub mod render;

// Tree and widget system
pub mod tree;
pub mod widget;
pub mod widgets;

// Tabular rendering
pub mod renderer;
pub mod table;

// Construction and test support
pub mod registry;
pub mod testing;

pub use error::{Result, StructuralError};
pub use form::FormData;
pub use message::{Message, Severity};
pub use render::{escape, RenderCx};
pub use tree::{WidgetId, WidgetTree};
pub use widget::Widget;
