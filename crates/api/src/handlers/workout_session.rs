//! Handlers for the `/workoutsessions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fitcenter_core::error::CoreError;
use fitcenter_core::schema;
use fitcenter_core::types::DbId;
use fitcenter_db::models::workout_session::WorkoutSession;
use fitcenter_db::repositories::WorkoutSessionRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(session_id: DbId, member_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "WorkoutSession",
        key: format!("({session_id}, {member_id})"),
    })
}

/// POST /workoutsessions
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let input = schema::load_workout_session(&body).map_err(CoreError::from)?;
    let session = WorkoutSessionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        session_id = session.session_id,
        member_id = session.member_id,
        "Workout session scheduled"
    );
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "New workout session was scheduled successfully.",
        )),
    ))
}

/// PUT /workoutsessions/{session_id}/{member_id}
///
/// The session must exist before the body is validated. Every field is
/// replaced, including both key columns.
pub async fn update(
    State(state): State<AppState>,
    Path((session_id, member_id)): Path<(DbId, DbId)>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<MessageResponse>> {
    WorkoutSessionRepo::find_by_key(&state.pool, session_id, member_id)
        .await?
        .ok_or_else(|| not_found(session_id, member_id))?;

    let input = schema::load_workout_session(&body).map_err(CoreError::from)?;
    let session = WorkoutSessionRepo::update(&state.pool, session_id, member_id, &input)
        .await?
        .ok_or_else(|| not_found(session_id, member_id))?;
    tracing::info!(
        session_id = session.session_id,
        member_id = session.member_id,
        "Workout session updated"
    );
    Ok(Json(MessageResponse::new(
        "Workout session was updated successfully.",
    )))
}

/// GET /workoutsessions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WorkoutSession>>> {
    let sessions = WorkoutSessionRepo::list(&state.pool).await?;
    Ok(Json(sessions))
}

/// GET /workoutsessions/{session_id}/{member_id}
pub async fn get_by_key(
    State(state): State<AppState>,
    Path((session_id, member_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<WorkoutSession>> {
    let session = WorkoutSessionRepo::find_by_key(&state.pool, session_id, member_id)
        .await?
        .ok_or_else(|| not_found(session_id, member_id))?;
    Ok(Json(session))
}

/// DELETE /workoutsessions/{session_id}/{member_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((session_id, member_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    if !WorkoutSessionRepo::delete(&state.pool, session_id, member_id).await? {
        return Err(not_found(session_id, member_id));
    }
    tracing::info!(session_id, member_id, "Workout session removed");
    Ok(Json(MessageResponse::new(
        "Workout session was successfully removed.",
    )))
}
