//! Context types for rule evaluation.
//!
//! A context carries the facts about the candidate user and course plus a
//! read-only handle to existing enrollments.

use serde::{Deserialize, Serialize};

use crate::store::EnrollmentStore;

/// What the rules need to know about the enrolling user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFacts {
    pub id: i32,
    pub email: Option<String>,
    pub domain: Option<String>,
}

/// What the rules need to know about the target course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFacts {
    pub id: i32,
    /// Domain restriction; `None` means anyone may enroll.
    pub domain: Option<String>,
    pub is_public: bool,
}

/// Evaluation context shared by every rule in a chain.
#[derive(Clone)]
pub struct EnrollmentContext<'a> {
    pub user: UserFacts,
    pub course: CourseFacts,
    pub store: &'a dyn EnrollmentStore,
}

impl<'a> EnrollmentContext<'a> {
    pub fn new(user: UserFacts, course: CourseFacts, store: &'a dyn EnrollmentStore) -> Self {
        Self {
            user,
            course,
            store,
        }
    }
}

impl std::fmt::Debug for EnrollmentContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrollmentContext")
            .field("user", &self.user)
            .field("course", &self.course)
            .finish_non_exhaustive()
    }
}
