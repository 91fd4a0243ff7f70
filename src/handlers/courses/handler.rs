//! Course handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    extract::ApiJson,
    services::CourseService,
    state::AppState,
    utils::parse_path_id,
};

use super::{
    request::CreateCourseRequest,
    response::{CourseEnvelope, CoursesListResponse, CreateCourseResponse, StudentsResponse},
};

fn course_id(raw: &str) -> AppResult<i32> {
    parse_path_id(raw).ok_or_else(|| AppError::validation("Invalid course ID"))
}

/// Create a new course
pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<CreateCourseResponse>)> {
    let course = CourseService::create_course(state.db(), payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCourseResponse {
            ok: true,
            message: "Course created successfully".to_string(),
            course: course.into(),
        }),
    ))
}

/// List all courses
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<CoursesListResponse>> {
    let courses = CourseService::list_courses(state.db()).await?;

    Ok(Json(CoursesListResponse {
        ok: true,
        courses: courses.into_iter().map(Into::into).collect(),
    }))
}

/// Get a specific course
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CourseEnvelope>> {
    let course = CourseService::get_course(state.db(), course_id(&id)?).await?;

    Ok(Json(CourseEnvelope {
        ok: true,
        course: course.into(),
    }))
}

/// Users enrolled in a course
pub async fn get_course_students(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<StudentsResponse>> {
    let students = CourseService::get_course_students(state.db(), course_id(&id)?).await?;
    Ok(Json(StudentsResponse { ok: true, students }))
}
