//! Widget system: the core `Widget` trait.

pub mod traits;

pub use traits::Widget;
