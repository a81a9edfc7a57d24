//! Handlers for the `/members` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fitcenter_core::error::CoreError;
use fitcenter_core::schema;
use fitcenter_core::types::DbId;
use fitcenter_db::models::member::Member;
use fitcenter_db::repositories::MemberRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Member",
        key: id.to_string(),
    })
}

/// POST /members
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let input = schema::load_member(&body).map_err(CoreError::from)?;
    let member = MemberRepo::create(&state.pool, &input).await?;
    tracing::info!(member_id = member.id, "Member created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("New Member added successfully.")),
    ))
}

/// PUT /members/{id}
///
/// The member must exist before the body is validated. Every field is
/// replaced, including `id`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<MessageResponse>> {
    MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let input = schema::load_member(&body).map_err(CoreError::from)?;
    let member = MemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(old_id = id, member_id = member.id, "Member updated");
    Ok(Json(MessageResponse::new("Member was updated successfully.")))
}

/// GET /members
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = MemberRepo::list(&state.pool).await?;
    Ok(Json(members))
}

/// GET /members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Member>> {
    let member = MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(member))
}

/// DELETE /members/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !MemberRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(member_id = id, "Member removed");
    Ok(Json(MessageResponse::new("Member was successfully removed.")))
}
