//! User response DTOs

use serde::Serialize;

use crate::models::{EnrolledCourse, User};

/// Single user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub ok: bool,
    pub user: User,
}

/// Created user response
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub ok: bool,
    pub message: String,
    pub user: User,
}

/// User list response
#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub ok: bool,
    pub users: Vec<User>,
}

/// Instructor name shown next to an enrolled course
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InstructorName {
    pub id: i32,
    pub name: String,
}

/// A course the user is enrolled in
#[derive(Debug, Serialize)]
pub struct EnrolledCourseResponse {
    pub id: i32,
    pub title: String,
    pub instructor: Option<InstructorName>,
}

impl From<EnrolledCourse> for EnrolledCourseResponse {
    fn from(course: EnrolledCourse) -> Self {
        let instructor = match (course.instructor_id, course.instructor_name) {
            (Some(id), Some(name)) => Some(InstructorName { id, name }),
            _ => None,
        };

        Self {
            id: course.id,
            title: course.title,
            instructor,
        }
    }
}

/// Courses of one user
#[derive(Debug, Serialize)]
pub struct UserCoursesResponse {
    pub ok: bool,
    pub courses: Vec<EnrolledCourseResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrolled_course_without_instructor() {
        let response = EnrolledCourseResponse::from(EnrolledCourse {
            id: 3,
            title: "Private Workshop".to_string(),
            instructor_id: None,
            instructor_name: None,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 3);
        assert!(json["instructor"].is_null());
    }

    #[test]
    fn test_enrolled_course_with_instructor() {
        let response = EnrolledCourseResponse::from(EnrolledCourse {
            id: 1,
            title: "Intro to Rust".to_string(),
            instructor_id: Some(9),
            instructor_name: Some("Carol".to_string()),
        });

        assert_eq!(
            response.instructor,
            Some(InstructorName {
                id: 9,
                name: "Carol".to_string()
            })
        );
    }
}
