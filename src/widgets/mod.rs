//! The built-in widget set.
//!
//! Containers (`Panel`, `Frame`, `Replicated`, `Wizard`) arrange other
//! widgets; inputs (`Entry`, `Checkbox`, `CheckboxGroup`, `Select`, `Hidden`)
//! bind to submission fields; `Static` emits fixed markup.

mod checkbox;
mod entry;
mod frame;
mod hidden;
mod options;
mod panel;
mod replicator;
mod select;
mod static_widget;
mod wizard;

pub use checkbox::{Checkbox, CheckboxGroup};
pub use entry::{Entry, ValidationRule};
pub use frame::Frame;
pub use hidden::Hidden;
pub use options::{ChoiceOption, TreeOption};
pub use panel::Panel;
pub use replicator::Replicated;
pub use select::Select;
pub use static_widget::Static;
pub use wizard::Wizard;
