//! Course repository

use sqlx::{PgExecutor, PgPool};

use crate::{
    error::AppResult,
    models::{Course, CourseWithInstructor, Student},
};

/// Columns of a course joined with its instructor (`c` = course, `i` = instructor)
const COURSE_WITH_INSTRUCTOR_COLUMNS: &str = r#"
    c.id,
    c.title,
    c.domain,
    c.is_public,
    i.id AS instructor_id,
    i.name AS instructor_name,
    i.email AS instructor_email
"#;

/// Repository for course database operations
pub struct CourseRepository;

impl CourseRepository {
    /// Create a new course
    pub async fn create(
        pool: &PgPool,
        title: &str,
        domain: Option<&str>,
        is_public: bool,
        instructor_id: Option<i32>,
    ) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, domain, is_public, instructor_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, domain, is_public, instructor_id
            "#,
        )
        .bind(title)
        .bind(domain)
        .bind(is_public)
        .bind(instructor_id)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Find course by ID, with its instructor
    pub async fn find_with_instructor<'e, E>(
        executor: E,
        id: i32,
    ) -> AppResult<Option<CourseWithInstructor>>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COURSE_WITH_INSTRUCTOR_COLUMNS} FROM courses c \
             LEFT JOIN users i ON c.instructor_id = i.id WHERE c.id = $1"
        );
        let course = sqlx::query_as::<_, CourseWithInstructor>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(course)
    }

    /// Find course by ID, with its instructor, locking the course row until
    /// the surrounding transaction ends
    pub async fn find_with_instructor_for_update<'e, E>(
        executor: E,
        id: i32,
    ) -> AppResult<Option<CourseWithInstructor>>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COURSE_WITH_INSTRUCTOR_COLUMNS} FROM courses c \
             LEFT JOIN users i ON c.instructor_id = i.id WHERE c.id = $1 FOR UPDATE OF c"
        );
        let course = sqlx::query_as::<_, CourseWithInstructor>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(course)
    }

    /// List all courses with their instructors
    pub async fn list_with_instructor(pool: &PgPool) -> AppResult<Vec<CourseWithInstructor>> {
        let query = format!(
            "SELECT {COURSE_WITH_INSTRUCTOR_COLUMNS} FROM courses c \
             LEFT JOIN users i ON c.instructor_id = i.id ORDER BY c.id"
        );
        let courses = sqlx::query_as::<_, CourseWithInstructor>(&query)
            .fetch_all(pool)
            .await?;

        Ok(courses)
    }

    /// Users enrolled in a course
    pub async fn students(pool: &PgPool, course_id: i32) -> AppResult<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT u.id, u.name, u.email
            FROM enrollments e
            JOIN users u ON e.user_id = u.id
            WHERE e.course_id = $1
            ORDER BY e.enrolled_at, e.id
            "#,
        )
        .bind(course_id)
        .fetch_all(pool)
        .await?;

        Ok(students)
    }
}
