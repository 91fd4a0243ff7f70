//! User repository

use sqlx::{PgExecutor, PgPool};

use crate::{
    error::{AppError, AppResult},
    models::{EnrolledCourse, User},
};

/// Message for a second user registering the same email
pub const DUPLICATE_EMAIL: &str = "User with this email already exists";

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        domain: Option<&str>,
        role: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, domain, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, domain, role
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(domain)
        .bind(role)
        .fetch_one(pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(DUPLICATE_EMAIL.to_string())
            }
            _ => err.into(),
        })?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id<'e, E>(executor: E, id: i32) -> AppResult<Option<User>>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, domain, role FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(user)
    }

    /// Find user by ID and lock the row until the surrounding transaction ends
    pub async fn find_by_id_for_update<'e, E>(executor: E, id: i32) -> AppResult<Option<User>>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, domain, role FROM users WHERE id = $1 FOR UPDATE"#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, domain, role FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// List all users
    pub async fn list(pool: &PgPool) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, domain, role FROM users ORDER BY id"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Courses a user is enrolled in, with each course's instructor
    pub async fn enrolled_courses(pool: &PgPool, user_id: i32) -> AppResult<Vec<EnrolledCourse>> {
        let courses = sqlx::query_as::<_, EnrolledCourse>(
            r#"
            SELECT
                c.id,
                c.title,
                i.id AS instructor_id,
                i.name AS instructor_name
            FROM enrollments e
            JOIN courses c ON e.course_id = c.id
            LEFT JOIN users i ON c.instructor_id = i.id
            WHERE e.user_id = $1
            ORDER BY e.enrolled_at, e.id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(courses)
    }
}
