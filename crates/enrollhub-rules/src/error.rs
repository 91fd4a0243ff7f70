//! Rule evaluation errors.
//!
//! A rejected enrollment is not an error; see [`crate::rule::Verdict`].
//! Errors here mean a rule could not reach a verdict at all.

use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("enrollment lookup failed: {0}")]
    Store(#[source] Box<dyn StdError + Send + Sync>),
}

impl RuleError {
    /// Wrap a storage backend failure.
    pub fn store<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        RuleError::Store(Box::new(err))
    }
}
