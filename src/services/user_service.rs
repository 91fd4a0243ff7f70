//! User service

use serde_json::Value;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    constants::roles,
    db::repositories::{user_repo::DUPLICATE_EMAIL, UserRepository},
    error::{AppError, AppResult},
    handlers::users::request::{CreateUserRequest, EmailInput},
    models::{EnrolledCourse, User},
    utils::validation::{
        normalize_domain, normalize_email, optional_string, validate_name, validate_role,
        INVALID_DOMAIN, INVALID_ROLE,
    },
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Validate, normalize and persist a new user
    pub async fn create_user(pool: &PgPool, payload: CreateUserRequest) -> AppResult<User> {
        let name = payload
            .name
            .as_ref()
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::validation("Name is required and must be a string"))?;
        let raw_email = payload
            .email
            .as_ref()
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::validation("Email is required and must be a string"))?;
        let name = validate_name(name).map_err(AppError::validation)?;

        EmailInput {
            email: raw_email.to_string(),
        }
        .validate()?;

        let domain = optional_string(payload.domain.as_ref(), INVALID_DOMAIN)
            .and_then(normalize_domain)
            .map_err(AppError::validation)?;
        let role = optional_string(payload.role.as_ref(), INVALID_ROLE)
            .map_err(AppError::validation)?
            .unwrap_or(roles::STUDENT);
        validate_role(role).map_err(AppError::validation)?;

        let email = normalize_email(raw_email);
        if UserRepository::find_by_email(pool, &email).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let user = UserRepository::create(pool, &name, &email, domain.as_deref(), role).await?;
        tracing::info!(user_id = user.id, role = %user.role, "User created");

        Ok(user)
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: i32) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// List all users
    pub async fn list_users(pool: &PgPool) -> AppResult<Vec<User>> {
        UserRepository::list(pool).await
    }

    /// Courses the user is enrolled in
    pub async fn get_user_courses(pool: &PgPool, id: i32) -> AppResult<Vec<EnrolledCourse>> {
        Self::get_user_by_id(pool, id).await?;
        UserRepository::enrolled_courses(pool, id).await
    }
}
