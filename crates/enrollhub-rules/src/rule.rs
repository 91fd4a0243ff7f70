//! Core rule trait and the ordered rule chain.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::RuleLimits;
use crate::context::EnrollmentContext;
use crate::error::RuleError;
use crate::rules::{
    CourseCapacity, DomainMatch, DuplicateEnrollment, PrivateCourseEmail, UserEnrollmentCap,
};

/// Outcome of a single rule or of a whole chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "message", rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    /// The enrollment must not be created; carries a human-readable reason.
    Reject(String),
}

impl Verdict {
    pub fn reject(message: impl Into<String>) -> Self {
        Verdict::Reject(message.into())
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Rejection reason, `None` on pass.
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Pass => None,
            Verdict::Reject(message) => Some(message),
        }
    }
}

/// A single enrollment check.
///
/// Implementations must not write through the context's store.
#[async_trait]
pub trait Rule: Send + Sync {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    async fn check(&self, ctx: &EnrollmentContext<'_>) -> Result<Verdict, RuleError>;
}

/// A boxed rule for dynamic dispatch.
pub type BoxedRule = Arc<dyn Rule>;

/// Rules evaluated in order, stopping at the first rejection.
#[derive(Clone, Default)]
pub struct RuleChain {
    rules: Vec<BoxedRule>,
}

impl RuleChain {
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// The enrollment chain: duplicate check, domain match, private-course
    /// email check, course capacity, user enrollment cap.
    pub fn standard(limits: &RuleLimits) -> Self {
        Self::new(vec![
            Arc::new(DuplicateEnrollment),
            Arc::new(DomainMatch),
            Arc::new(PrivateCourseEmail::new(limits.private_email_suffix.clone())),
            Arc::new(CourseCapacity::new(limits.course_capacity)),
            Arc::new(UserEnrollmentCap::new(limits.user_enrollment_cap)),
        ])
    }

    /// Append a rule at the end of the chain.
    pub fn push(&mut self, rule: BoxedRule) {
        self.rules.push(rule);
    }

    /// Rule names in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule in order and return the first rejection, or
    /// [`Verdict::Pass`] if none rejects.
    pub async fn evaluate(&self, ctx: &EnrollmentContext<'_>) -> Result<Verdict, RuleError> {
        for rule in &self.rules {
            let verdict = rule.check(ctx).await?;
            if let Verdict::Reject(message) = &verdict {
                tracing::debug!(
                    rule = rule.name(),
                    user_id = ctx.user.id,
                    course_id = ctx.course.id,
                    reason = %message,
                    "Enrollment rule rejected"
                );
                return Ok(verdict);
            }
        }
        Ok(Verdict::Pass)
    }
}

impl std::fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleChain")
            .field("rules", &self.names())
            .finish()
    }
}
