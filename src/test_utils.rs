//! Test utilities with lazy testcontainers support
//!
//! The Postgres container is started on first use and shared by every test
//! in the process. Tests keep their rows apart by using unique emails
//! instead of truncating tables.

pub mod containers {
    use std::sync::OnceLock;

    use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
    use testcontainers_modules::postgres::Postgres;

    static POSTGRES: OnceLock<ContainerAsync<Postgres>> = OnceLock::new();

    /// Get or start a PostgreSQL container (lazy initialization)
    pub async fn get_postgres() -> &'static ContainerAsync<Postgres> {
        if POSTGRES.get().is_none() {
            let container = Postgres::default()
                .with_user("enrollhub")
                .with_password("enrollhub_test")
                .with_db_name("enrollhub_test")
                .with_tag("16-alpine")
                .start()
                .await
                .expect("Failed to start PostgreSQL container");

            let _ = POSTGRES.set(container);
        }
        POSTGRES.get().unwrap()
    }

    /// Get PostgreSQL connection URL from the container
    pub async fn postgres_url() -> String {
        let container = get_postgres().await;
        let host = container.get_host().await.unwrap();
        let port = container.get_host_port_ipv4(5432).await.unwrap();
        format!("postgres://enrollhub:enrollhub_test@{host}:{port}/enrollhub_test")
    }
}

pub mod test_app {
    use std::sync::atomic::{AtomicU32, Ordering};

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use enrollhub_rules::{config::RuleLimits, rule::RuleChain};
    use serde_json::Value;
    use sqlx::PgPool;
    use tower::ServiceExt;

    use super::containers;
    use crate::{
        config::{Config, DatabaseConfig, Environment, LogFormat, ServerConfig},
        state::AppState,
    };

    static NEXT_ID: AtomicU32 = AtomicU32::new(1);

    /// Create a test application backed by the shared container
    pub async fn create_test_app(limits: RuleLimits) -> (Router, AppState) {
        let database_url = containers::postgres_url().await;

        let db_pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        crate::db::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                log_format: LogFormat::Text,
                environment: Environment::Development,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: 10,
            },
            rules: limits.clone(),
        };

        let state = AppState::with_rules(db_pool, RuleChain::standard(&limits), config);
        let app = crate::create_router(state.clone());

        (app, state)
    }

    /// A local part no other test in this process will use
    pub fn unique(prefix: &str) -> String {
        format!("{prefix}{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(app, request).await
    }

    pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }
}
