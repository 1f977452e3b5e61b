//! Teacher CRUD handlers.
//!
//! These handlers use the repository trait object for all data access.
//! Caching is handled by the cached repository decorator.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use faculty_core::teacher::{NewTeacher, Teacher};

use crate::{
    handlers::AppError,
    models::{CreateTeacher, UpdateTeacher},
    state::AppState,
};

/// Error response for request bodies that could not be parsed.
///
/// Every JSON rejection (syntax, missing fields, wrong content type) becomes a 400.
fn bad_request(rejection: JsonRejection) -> Response {
    let msg = format!("Failed to parse JSON: {rejection}");
    tracing::warn!(message = %msg, "Rejected request body");
    (StatusCode::BAD_REQUEST, msg).into_response()
}

/// Create a teacher (POST /teacher).
pub async fn create_teacher(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeacher>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(payload) = payload.map_err(bad_request)?;
    let new_teacher = payload.into_new_teacher();

    let id = state
        .teacher_repo
        .create_teacher(&new_teacher)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(teacher_id = id, "Created teacher");

    Ok((StatusCode::CREATED, Json(new_teacher.with_id(id))))
}

/// Get a single teacher by ID (GET /teacher/{id}).
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state.teacher_repo.get_teacher(id).await?;
    Ok(Json(teacher))
}

/// Update a teacher (PUT /teacher).
///
/// The ID comes from the body. Updating an ID with no row still succeeds.
pub async fn update_teacher(
    State(state): State<AppState>,
    payload: Result<Json<UpdateTeacher>, JsonRejection>,
) -> Result<Json<Teacher>, Response> {
    let Json(payload) = payload.map_err(bad_request)?;
    let teacher = payload.into_teacher();

    tracing::debug!(teacher_id = teacher.id, "Received update teacher request");

    state
        .teacher_repo
        .update_teacher(&teacher)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(teacher_id = teacher.id, "Updated teacher");

    Ok(Json(teacher))
}

/// Delete a teacher by ID (DELETE /teacher/{id}).
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    tracing::debug!(teacher_id = id, "Received delete teacher request");

    state.teacher_repo.delete_teacher(id).await?;

    tracing::info!(teacher_id = id, "Deleted teacher");

    Ok(StatusCode::NO_CONTENT)
}

/// Create several teachers in order (POST /teachers).
///
/// Stops at the first failure. Teachers created before it are not rolled back.
pub async fn create_teachers(
    State(state): State<AppState>,
    payload: Result<Json<Vec<CreateTeacher>>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(payload) = payload.map_err(bad_request)?;
    let new_teachers: Vec<NewTeacher> = payload
        .into_iter()
        .map(CreateTeacher::into_new_teacher)
        .collect();

    let ids = state
        .teacher_repo
        .create_teachers(&new_teachers)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(count = ids.len(), "Created teachers");

    let created: Vec<Teacher> = new_teachers
        .into_iter()
        .zip(ids)
        .map(|(teacher, id)| teacher.with_id(id))
        .collect();

    Ok((StatusCode::CREATED, Json(created)))
}
