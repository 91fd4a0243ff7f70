//! Enrollment rule chain.
//!
//! This crate decides whether a candidate enrollment (user, course) may be
//! created. Rules are small, independent checks evaluated in a fixed order
//! against a shared [`EnrollmentContext`]; the chain stops at the first
//! rejection and reports its reason.
//!
//! # Example
//!
//! ```ignore
//! use enrollhub_rules::prelude::*;
//!
//! let chain = RuleChain::standard(&RuleLimits::default());
//! let ctx = EnrollmentContext::new(user, course, &store);
//!
//! match chain.evaluate(&ctx).await? {
//!     Verdict::Pass => { /* persist the enrollment */ }
//!     Verdict::Reject(reason) => { /* surface reason to the caller */ }
//! }
//! ```
//!
//! Rules only read through [`EnrollmentStore`]; persisting the enrollment
//! is the caller's job.

pub mod config;
pub mod context;
pub mod error;
pub mod rule;
pub mod rules;
pub mod store;

/// Prelude module - import everything you need with `use enrollhub_rules::prelude::*`
pub mod prelude {
    pub use crate::config::RuleLimits;
    pub use crate::context::{CourseFacts, EnrollmentContext, UserFacts};
    pub use crate::error::RuleError;
    pub use crate::rule::{BoxedRule, Rule, RuleChain, Verdict};
    pub use crate::rules::*;
    pub use crate::store::{EnrollmentStore, InMemoryStore};
}
