//! Course management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Course routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_courses).post(handler::create_course))
        .route("/{id}", get(handler::get_course))
        .route("/{id}/students", get(handler::get_course_students))
}
