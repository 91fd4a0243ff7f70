//! Course model

use enrollhub_rules::context::CourseFacts;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Course database model
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub domain: Option<String>,
    pub is_public: bool,
    pub instructor_id: Option<i32>,
}

/// Course joined with its (optional) instructor
#[derive(Debug, Clone, FromRow)]
pub struct CourseWithInstructor {
    pub id: i32,
    pub title: String,
    pub domain: Option<String>,
    pub is_public: bool,
    pub instructor_id: Option<i32>,
    pub instructor_name: Option<String>,
    pub instructor_email: Option<String>,
}

impl CourseWithInstructor {
    /// The subset of this course the enrollment rules look at
    pub fn facts(&self) -> CourseFacts {
        CourseFacts {
            id: self.id,
            domain: self.domain.clone(),
            is_public: self.is_public,
        }
    }
}

/// A course a user is enrolled in, with its instructor's name
#[derive(Debug, Clone, FromRow)]
pub struct EnrolledCourse {
    pub id: i32,
    pub title: String,
    pub instructor_id: Option<i32>,
    pub instructor_name: Option<String>,
}
