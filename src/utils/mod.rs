//! Utility functions

pub mod text;
pub mod validation;

pub use text::truncate_chars;
pub use validation::{check_size, sanitize_string};
