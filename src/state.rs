//! Application state management
//!
//! Shared state handed to every request handler via Axum's State extractor.

use std::sync::Arc;

use enrollhub_rules::rule::RuleChain;
use sqlx::PgPool;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Rules gating enrollment creation
    rules: RuleChain,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state with the standard rule chain
    pub fn new(db: PgPool, config: Config) -> Self {
        let rules = RuleChain::standard(&config.rules);
        Self::with_rules(db, rules, config)
    }

    /// Create a new application state with a custom rule chain
    pub fn with_rules(db: PgPool, rules: RuleChain, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { db, rules, config }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the enrollment rule chain
    pub fn rules(&self) -> &RuleChain {
        &self.inner.rules
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
