//! User model

use enrollhub_rules::context::UserFacts;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::roles;

/// User database model
///
/// Every column is safe to expose, so this type doubles as the public
/// user projection.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub domain: Option<String>,
    pub role: String,
}

impl User {
    /// Check if user may be assigned as a course instructor
    pub fn can_instruct(&self) -> bool {
        roles::COURSE_INSTRUCTORS.contains(&self.role.as_str())
    }

    /// The subset of this user the enrollment rules look at
    pub fn facts(&self) -> UserFacts {
        UserFacts {
            id: self.id,
            email: self.email.clone(),
            domain: self.domain.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> User {
        User {
            id: 7,
            name: "Carol".to_string(),
            email: Some("carol@school.edu".to_string()),
            domain: Some("school.edu".to_string()),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_can_instruct() {
        assert!(user_with_role("instructor").can_instruct());
        assert!(user_with_role("admin").can_instruct());
        assert!(!user_with_role("student").can_instruct());
    }

    #[test]
    fn test_facts() {
        let facts = user_with_role("student").facts();
        assert_eq!(facts.id, 7);
        assert_eq!(facts.domain.as_deref(), Some("school.edu"));
    }
}
