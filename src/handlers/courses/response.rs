//! Course response DTOs

use serde::Serialize;

use crate::models::{CourseWithInstructor, Student};

/// Instructor summary embedded in a course
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InstructorSummary {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
}

/// Public course projection
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: i32,
    pub title: String,
    pub domain: Option<String>,
    pub is_public: bool,
    pub instructor: Option<InstructorSummary>,
}

impl From<CourseWithInstructor> for CourseResponse {
    fn from(course: CourseWithInstructor) -> Self {
        let instructor = match (course.instructor_id, course.instructor_name) {
            (Some(id), Some(name)) => Some(InstructorSummary {
                id,
                name,
                email: course.instructor_email,
            }),
            _ => None,
        };

        Self {
            id: course.id,
            title: course.title,
            domain: course.domain,
            is_public: course.is_public,
            instructor,
        }
    }
}

/// Single course response
#[derive(Debug, Serialize)]
pub struct CourseEnvelope {
    pub ok: bool,
    pub course: CourseResponse,
}

/// Created course response
#[derive(Debug, Serialize)]
pub struct CreateCourseResponse {
    pub ok: bool,
    pub message: String,
    pub course: CourseResponse,
}

/// Course list response
#[derive(Debug, Serialize)]
pub struct CoursesListResponse {
    pub ok: bool,
    pub courses: Vec<CourseResponse>,
}

/// Students of one course
#[derive(Debug, Serialize)]
pub struct StudentsResponse {
    pub ok: bool,
    pub students: Vec<Student>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_projection() {
        let course = CourseResponse::from(CourseWithInstructor {
            id: 2,
            title: "School-only Course".to_string(),
            domain: Some("school.edu".to_string()),
            is_public: true,
            instructor_id: Some(3),
            instructor_name: Some("Carol".to_string()),
            instructor_email: Some("carol@school.edu".to_string()),
        });

        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["domain"], "school.edu");
        assert_eq!(json["instructor"]["name"], "Carol");
        assert_eq!(json["instructor"]["email"], "carol@school.edu");
    }

    #[test]
    fn test_course_without_instructor() {
        let course = CourseResponse::from(CourseWithInstructor {
            id: 1,
            title: "Intro".to_string(),
            domain: None,
            is_public: false,
            instructor_id: None,
            instructor_name: None,
            instructor_email: None,
        });

        assert!(course.instructor.is_none());
    }
}
