//! Postgres-backed [`EnrollmentStore`] for the enrollment rules.
//!
//! The store borrows the connection of an open transaction so that rule
//! reads observe the same snapshot and locks as the enrollment insert.

use async_trait::async_trait;
use enrollhub_rules::{error::RuleError, store::EnrollmentStore};
use sqlx::PgConnection;
use tokio::sync::Mutex;

/// Enrollment lookups bound to a single database connection
pub struct PgEnrollmentStore<'c> {
    conn: Mutex<&'c mut PgConnection>,
}

impl<'c> PgEnrollmentStore<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl EnrollmentStore for PgEnrollmentStore<'_> {
    async fn count_enrollments_for_user(&self, user_id: i32) -> Result<i64, RuleError> {
        let mut conn = self.conn.lock().await;
        sqlx::query_scalar(r#"SELECT COUNT(*) FROM enrollments WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_one(&mut **conn)
            .await
            .map_err(RuleError::store)
    }

    async fn count_enrollments_for_course(&self, course_id: i32) -> Result<i64, RuleError> {
        let mut conn = self.conn.lock().await;
        sqlx::query_scalar(r#"SELECT COUNT(*) FROM enrollments WHERE course_id = $1"#)
            .bind(course_id)
            .fetch_one(&mut **conn)
            .await
            .map_err(RuleError::store)
    }

    async fn find_enrollment(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<i32>, RuleError> {
        let mut conn = self.conn.lock().await;
        sqlx::query_scalar(
            r#"SELECT id FROM enrollments WHERE user_id = $1 AND course_id = $2 LIMIT 1"#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&mut **conn)
        .await
        .map_err(RuleError::store)
    }
}
