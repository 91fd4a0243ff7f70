//! Read access to existing enrollments.
//!
//! Rules only ever see this narrow view of the data store, which keeps them
//! free of any database coupling.

use async_trait::async_trait;

use crate::error::RuleError;

/// Enrollment queries used by the rule chain.
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Number of enrollments held by a user across all courses.
    async fn count_enrollments_for_user(&self, user_id: i32) -> Result<i64, RuleError>;

    /// Number of users enrolled in a course.
    async fn count_enrollments_for_course(&self, course_id: i32) -> Result<i64, RuleError>;

    /// Id of the enrollment linking `user_id` to `course_id`, if any.
    async fn find_enrollment(&self, user_id: i32, course_id: i32)
        -> Result<Option<i32>, RuleError>;
}

/// In-memory enrollment store.
///
/// Enrollment ids are assigned sequentially starting at 1.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    enrollments: Vec<(i32, i32)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enrollment(mut self, user_id: i32, course_id: i32) -> Self {
        self.enroll(user_id, course_id);
        self
    }

    /// Record an enrollment and return its id.
    pub fn enroll(&mut self, user_id: i32, course_id: i32) -> i32 {
        self.enrollments.push((user_id, course_id));
        self.enrollments.len() as i32
    }

    pub fn len(&self) -> usize {
        self.enrollments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrollments.is_empty()
    }
}

#[async_trait]
impl EnrollmentStore for InMemoryStore {
    async fn count_enrollments_for_user(&self, user_id: i32) -> Result<i64, RuleError> {
        Ok(self
            .enrollments
            .iter()
            .filter(|(user, _)| *user == user_id)
            .count() as i64)
    }

    async fn count_enrollments_for_course(&self, course_id: i32) -> Result<i64, RuleError> {
        Ok(self
            .enrollments
            .iter()
            .filter(|(_, course)| *course == course_id)
            .count() as i64)
    }

    async fn find_enrollment(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<i32>, RuleError> {
        Ok(self
            .enrollments
            .iter()
            .position(|&(user, course)| user == user_id && course == course_id)
            .map(|idx| idx as i32 + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_and_lookup() {
        let store = InMemoryStore::new()
            .with_enrollment(1, 10)
            .with_enrollment(1, 11)
            .with_enrollment(2, 10);

        assert_eq!(store.count_enrollments_for_user(1).await.unwrap(), 2);
        assert_eq!(store.count_enrollments_for_user(3).await.unwrap(), 0);
        assert_eq!(store.count_enrollments_for_course(10).await.unwrap(), 2);
        assert_eq!(store.find_enrollment(1, 11).await.unwrap(), Some(2));
        assert_eq!(store.find_enrollment(2, 11).await.unwrap(), None);
    }
}
