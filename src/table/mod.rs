//! Tables: row model, columns, and the table view widget.
//!
//! - [`model`] — `TableModel`: ordered opaque rows, optional unique ids
//! - [`column`] — `Column`: renderers + mappings + grouping config
//! - [`view`] — `TableView`: the widget walking rows × columns

pub mod column;
pub mod model;
pub mod view;

pub use column::Column;
pub use model::{RowRecord, TableModel};
pub use view::{CheckAllRow, TableView};
