//! User handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    extract::ApiJson,
    services::UserService,
    state::AppState,
    utils::parse_path_id,
};

use super::{
    request::CreateUserRequest,
    response::{CreateUserResponse, UserCoursesResponse, UserResponse, UsersListResponse},
};

fn user_id(raw: &str) -> AppResult<i32> {
    parse_path_id(raw).ok_or_else(|| AppError::validation("Invalid user ID"))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<CreateUserResponse>)> {
    let user = UserService::create_user(state.db(), payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            ok: true,
            message: "User created successfully".to_string(),
            user,
        }),
    ))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UsersListResponse>> {
    let users = UserService::list_users(state.db()).await?;
    Ok(Json(UsersListResponse { ok: true, users }))
}

/// Get a specific user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = UserService::get_user_by_id(state.db(), user_id(&id)?).await?;
    Ok(Json(UserResponse { ok: true, user }))
}

/// Courses the user is enrolled in
pub async fn get_user_courses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserCoursesResponse>> {
    let courses = UserService::get_user_courses(state.db(), user_id(&id)?).await?;

    Ok(Json(UserCoursesResponse {
        ok: true,
        courses: courses.into_iter().map(Into::into).collect(),
    }))
}
