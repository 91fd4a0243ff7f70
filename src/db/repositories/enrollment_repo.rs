//! Enrollment repository

use enrollhub_rules::rules::ALREADY_ENROLLED;
use sqlx::PgExecutor;

use crate::{
    error::{AppError, AppResult},
    models::Enrollment,
};

/// Repository for enrollment database operations
pub struct EnrollmentRepository;

impl EnrollmentRepository {
    /// Create a new enrollment
    ///
    /// A second enrollment for the same pair is reported exactly like the
    /// duplicate-enrollment rule reports it.
    pub async fn create<'e, E>(executor: E, user_id: i32, course_id: i32) -> AppResult<Enrollment>
    where
        E: PgExecutor<'e>,
    {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            INSERT INTO enrollments (user_id, course_id)
            VALUES ($1, $2)
            RETURNING id, user_id, course_id, enrolled_at
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(executor)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::RuleViolation(ALREADY_ENROLLED.to_string())
            }
            _ => err.into(),
        })?;

        Ok(enrollment)
    }
}
