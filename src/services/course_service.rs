//! Course service

use serde_json::Value;
use sqlx::PgPool;

use crate::{
    db::repositories::{CourseRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::courses::request::CreateCourseRequest,
    models::{CourseWithInstructor, Student, User},
    utils::validation::{
        normalize_domain, optional_string, parse_positive_id, validate_boolean, validate_title,
        INVALID_DOMAIN,
    },
};

/// Course service for business logic
pub struct CourseService;

impl CourseService {
    /// Validate and persist a new course
    pub async fn create_course(
        pool: &PgPool,
        payload: CreateCourseRequest,
    ) -> AppResult<CourseWithInstructor> {
        let title = payload
            .title
            .as_ref()
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::validation("Title is required and must be a string"))?;
        let title = validate_title(title).map_err(AppError::validation)?;
        let is_public = validate_boolean(payload.is_public.as_ref())
            .map_err(AppError::validation)?
            .unwrap_or(true);
        let domain = optional_string(payload.domain.as_ref(), INVALID_DOMAIN)
            .and_then(normalize_domain)
            .map_err(AppError::validation)?;

        let instructor = match &payload.instructor_id {
            Some(raw) => Some(Self::resolve_instructor(pool, raw).await?),
            None => None,
        };

        let course = CourseRepository::create(
            pool,
            &title,
            domain.as_deref(),
            is_public,
            instructor.as_ref().map(|i| i.id),
        )
        .await?;
        tracing::info!(
            course_id = course.id,
            instructor_id = ?course.instructor_id,
            is_public = course.is_public,
            "Course created"
        );

        Ok(CourseWithInstructor {
            id: course.id,
            title: course.title,
            domain: course.domain,
            is_public: course.is_public,
            instructor_id: instructor.as_ref().map(|i| i.id),
            instructor_name: instructor.as_ref().map(|i| i.name.clone()),
            instructor_email: instructor.and_then(|i| i.email),
        })
    }

    /// Look up the user named by `instructor_id` and check they may teach
    async fn resolve_instructor(pool: &PgPool, raw: &Value) -> AppResult<User> {
        let id = parse_positive_id(raw).ok_or_else(|| AppError::validation("Invalid instructor ID"))?;

        let instructor = UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Instructor not found".to_string()))?;

        if !instructor.can_instruct() {
            return Err(AppError::validation(
                "User must be an instructor or admin to create courses",
            ));
        }
        Ok(instructor)
    }

    /// Get course by ID, with its instructor
    pub async fn get_course(pool: &PgPool, id: i32) -> AppResult<CourseWithInstructor> {
        CourseRepository::find_with_instructor(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    /// List all courses
    pub async fn list_courses(pool: &PgPool) -> AppResult<Vec<CourseWithInstructor>> {
        CourseRepository::list_with_instructor(pool).await
    }

    /// Users enrolled in a course
    pub async fn get_course_students(pool: &PgPool, id: i32) -> AppResult<Vec<Student>> {
        Self::get_course(pool, id).await?;
        CourseRepository::students(pool, id).await
    }
}
