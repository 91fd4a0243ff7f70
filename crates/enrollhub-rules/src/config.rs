//! Tunable limits for the standard rule chain.

use serde::{Deserialize, Serialize};

/// Default maximum number of students per course.
pub const DEFAULT_COURSE_CAPACITY: i64 = 50;

/// Default maximum number of courses a single user may enroll in.
pub const DEFAULT_USER_ENROLLMENT_CAP: i64 = 5;

/// Default email suffix required to join a private course.
pub const DEFAULT_PRIVATE_EMAIL_SUFFIX: &str = "@example.com";

/// Limits used by [`crate::rule::RuleChain::standard`].
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleLimits {
    pub course_capacity: i64,
    pub user_enrollment_cap: i64,
    pub private_email_suffix: String,
}

impl Default for RuleLimits {
    fn default() -> Self {
        Self {
            course_capacity: DEFAULT_COURSE_CAPACITY,
            user_enrollment_cap: DEFAULT_USER_ENROLLMENT_CAP,
            private_email_suffix: DEFAULT_PRIVATE_EMAIL_SUFFIX.to_string(),
        }
    }
}
