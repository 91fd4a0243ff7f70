//! Enrollment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Enrollment database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub course_id: i32,
    pub enrolled_at: DateTime<Utc>,
}

/// A student enrolled in a course
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
}
