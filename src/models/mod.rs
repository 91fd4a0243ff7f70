//! Domain models
//!
//! Database row types for users, courses and enrollments.

pub mod course;
pub mod enrollment;
pub mod user;

pub use course::*;
pub use enrollment::*;
pub use user::*;
