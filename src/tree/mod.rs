//! Widget tree: slotmap-backed arena, pass dispatch, queries.
//!
//! - [`node`] — `WidgetId` key type and per-node `NodeData`
//! - [`arena`] — `WidgetTree`: ownership, tree shape, init/process/display
//! - [`query`] — lookups by name/type and ancestor capability checks

pub mod arena;
pub mod node;
pub mod query;

pub use arena::WidgetTree;
pub use node::{NodeData, WidgetId};
