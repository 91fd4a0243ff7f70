//! Utility functions

pub mod validation;

pub use validation::{parse_path_id, parse_positive_id};
