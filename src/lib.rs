//! EnrollHub - Course Enrollment Service
//!
//! This library provides the HTTP API for managing users, courses and
//! enrollments. Enrollment requests pass through a chain of rules (see the
//! `enrollhub-rules` crate) before they are persisted.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod app;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use app::create_router;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
