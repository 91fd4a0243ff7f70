//! The enrollment rules.
//!
//! Each rule is independent and reads only the context it is given.

use async_trait::async_trait;

use crate::context::EnrollmentContext;
use crate::error::RuleError;
use crate::rule::{Rule, Verdict};

/// Rejection reason for a repeated (user, course) enrollment.
pub const ALREADY_ENROLLED: &str = "User is already enrolled in this course";

/// Reject if the user already holds an enrollment in the course.
pub struct DuplicateEnrollment;

#[async_trait]
impl Rule for DuplicateEnrollment {
    fn name(&self) -> &'static str {
        "duplicate_enrollment"
    }

    async fn check(&self, ctx: &EnrollmentContext<'_>) -> Result<Verdict, RuleError> {
        let existing = ctx
            .store
            .find_enrollment(ctx.user.id, ctx.course.id)
            .await?;

        Ok(match existing {
            Some(_) => Verdict::reject(ALREADY_ENROLLED),
            None => Verdict::Pass,
        })
    }
}

/// A domain-restricted course only admits users from the same domain.
pub struct DomainMatch;

#[async_trait]
impl Rule for DomainMatch {
    fn name(&self) -> &'static str {
        "domain_match"
    }

    async fn check(&self, ctx: &EnrollmentContext<'_>) -> Result<Verdict, RuleError> {
        let Some(course_domain) = ctx.course.domain.as_deref() else {
            return Ok(Verdict::Pass);
        };
        let Some(user_domain) = ctx.user.domain.as_deref() else {
            return Ok(Verdict::reject("User has no domain set"));
        };

        if !user_domain.eq_ignore_ascii_case(course_domain) {
            return Ok(Verdict::reject(format!(
                "User domain must match course domain ({course_domain})"
            )));
        }
        Ok(Verdict::Pass)
    }
}

/// A private course only admits users whose email ends with a fixed suffix.
pub struct PrivateCourseEmail {
    pub suffix: String,
}

impl PrivateCourseEmail {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into().to_lowercase(),
        }
    }
}

#[async_trait]
impl Rule for PrivateCourseEmail {
    fn name(&self) -> &'static str {
        "private_course_email"
    }

    async fn check(&self, ctx: &EnrollmentContext<'_>) -> Result<Verdict, RuleError> {
        if ctx.course.is_public {
            return Ok(Verdict::Pass);
        }
        let Some(email) = ctx.user.email.as_deref() else {
            return Ok(Verdict::reject("User has no email"));
        };

        if !email.to_lowercase().ends_with(&self.suffix) {
            return Ok(Verdict::reject(format!(
                "Only {} users can enroll in private courses",
                self.suffix
            )));
        }
        Ok(Verdict::Pass)
    }
}

/// Reject once a course holds `limit` enrollments.
pub struct CourseCapacity {
    pub limit: i64,
}

impl CourseCapacity {
    pub fn new(limit: i64) -> Self {
        Self { limit }
    }
}

#[async_trait]
impl Rule for CourseCapacity {
    fn name(&self) -> &'static str {
        "course_capacity"
    }

    async fn check(&self, ctx: &EnrollmentContext<'_>) -> Result<Verdict, RuleError> {
        let count = ctx.store.count_enrollments_for_course(ctx.course.id).await?;
        if count >= self.limit {
            return Ok(Verdict::reject(format!(
                "Course has reached maximum students ({})",
                self.limit
            )));
        }
        Ok(Verdict::Pass)
    }
}

/// Reject once a user holds `limit` enrollments.
pub struct UserEnrollmentCap {
    pub limit: i64,
}

impl UserEnrollmentCap {
    pub fn new(limit: i64) -> Self {
        Self { limit }
    }
}

#[async_trait]
impl Rule for UserEnrollmentCap {
    fn name(&self) -> &'static str {
        "user_enrollment_cap"
    }

    async fn check(&self, ctx: &EnrollmentContext<'_>) -> Result<Verdict, RuleError> {
        let count = ctx.store.count_enrollments_for_user(ctx.user.id).await?;
        if count >= self.limit {
            return Ok(Verdict::reject(format!(
                "User has reached max enrollments ({})",
                self.limit
            )));
        }
        Ok(Verdict::Pass)
    }
}
