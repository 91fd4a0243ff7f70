//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod courses;
pub mod enrollments;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/user", users::routes())
        .nest("/course", courses::routes())
        .nest("/enroll", enrollments::routes())
}
