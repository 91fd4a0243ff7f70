//! Enrollment handler implementations

use axum::{extract::State, Json};

use crate::{
    error::AppResult, extract::ApiJson, services::EnrollmentService, state::AppState,
};

use super::{request::EnrollRequest, response::EnrollResponse};

/// Enroll a user in a course
pub async fn enroll(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EnrollRequest>,
) -> AppResult<Json<EnrollResponse>> {
    EnrollmentService::enroll(state.db(), state.rules(), payload).await?;

    Ok(Json(EnrollResponse {
        ok: true,
        message: "Enrolled successfully".to_string(),
    }))
}
