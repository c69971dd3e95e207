//! Helper Functions
//!
//! Utility code bundled with the skill. Replace [`example`] with your own.

pub mod example;

pub use example::{example_function, write_example, EXAMPLE_LINES};
