//! Enrollment service
//!
//! Runs the enrollment rule chain and persists the enrollment when every
//! rule passes. The check and the insert happen in one transaction that
//! holds row locks on the user and the course, so concurrent requests for
//! the same user or course are evaluated one after another.

use enrollhub_rules::{
    context::EnrollmentContext,
    rule::{RuleChain, Verdict},
};
use serde_json::Value;
use sqlx::PgPool;

use crate::{
    db::{
        repositories::{CourseRepository, EnrollmentRepository, UserRepository},
        PgEnrollmentStore,
    },
    error::{AppError, AppResult},
    handlers::enrollments::request::EnrollRequest,
    models::Enrollment,
    utils::validation::parse_positive_id,
};

/// Enrollment service for business logic
pub struct EnrollmentService;

impl EnrollmentService {
    /// Enroll a user in a course if the rule chain allows it
    pub async fn enroll(
        pool: &PgPool,
        rules: &RuleChain,
        payload: EnrollRequest,
    ) -> AppResult<Enrollment> {
        let (user_id, course_id) = parse_ids(&payload)?;

        let mut tx = pool.begin().await?;

        // Users are always locked before courses.
        let user = UserRepository::find_by_id_for_update(&mut *tx, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let course = CourseRepository::find_with_instructor_for_update(&mut *tx, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        let verdict = {
            let store = PgEnrollmentStore::new(&mut *tx);
            let ctx = EnrollmentContext::new(user.facts(), course.facts(), &store);
            rules.evaluate(&ctx).await?
        };

        if let Verdict::Reject(reason) = verdict {
            tracing::info!(user_id, course_id, %reason, "Enrollment rejected");
            return Err(AppError::RuleViolation(reason));
        }

        let enrollment = EnrollmentRepository::create(&mut *tx, user.id, course.id).await?;
        tx.commit().await?;

        tracing::info!(
            enrollment_id = enrollment.id,
            user_id,
            course_id,
            instructor_id = ?course.instructor_id,
            "User enrolled"
        );
        Ok(enrollment)
    }
}

/// Extract and check `userId` / `courseId`
fn parse_ids(payload: &EnrollRequest) -> AppResult<(i32, i32)> {
    let user_id = required_id(payload.user_id.as_ref(), "userId")?;
    let course_id = required_id(payload.course_id.as_ref(), "courseId")?;
    Ok((user_id, course_id))
}

fn required_id(value: Option<&Value>, field: &str) -> AppResult<i32> {
    let value = value.ok_or_else(|| AppError::validation(format!("{field} is required")))?;
    parse_positive_id(value)
        .ok_or_else(|| AppError::validation(format!("{field} must be a positive integer")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(user_id: Option<Value>, course_id: Option<Value>) -> EnrollRequest {
        EnrollRequest { user_id, course_id }
    }

    #[test]
    fn test_parse_ids_accepts_numbers_and_strings() {
        let (user, course) = parse_ids(&request(Some(json!(1)), Some(json!("2")))).unwrap();
        assert_eq!((user, course), (1, 2));
    }

    #[test]
    fn test_parse_ids_missing_fields() {
        let err = parse_ids(&request(None, Some(json!(2)))).unwrap_err();
        assert_eq!(err.to_string(), "userId is required");

        let err = parse_ids(&request(Some(json!(1)), None)).unwrap_err();
        assert_eq!(err.to_string(), "courseId is required");
    }

    #[test]
    fn test_parse_ids_rejects_non_positive() {
        let err = parse_ids(&request(Some(json!(-1)), Some(json!(2)))).unwrap_err();
        assert_eq!(err.to_string(), "userId must be a positive integer");

        let err = parse_ids(&request(Some(json!(1)), Some(json!("x")))).unwrap_err();
        assert_eq!(err.to_string(), "courseId must be a positive integer");
    }
}
