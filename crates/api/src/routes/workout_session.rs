//! Route definitions for the `/workoutsessions` resource.
//!
//! Single sessions are addressed by their `(session_id, member_id)` pair.

use axum::routing::get;
use axum::Router;

use crate::handlers::workout_session;
use crate::state::AppState;

/// Routes mounted at `/workoutsessions`.
///
/// ```text
/// GET    /                             -> list
/// POST   /                             -> create
/// GET    /{session_id}/{member_id}     -> get_by_key
/// PUT    /{session_id}/{member_id}     -> update
/// DELETE /{session_id}/{member_id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(workout_session::list).post(workout_session::create),
        )
        .route(
            "/{session_id}/{member_id}",
            get(workout_session::get_by_key)
                .put(workout_session::update)
                .delete(workout_session::delete),
        )
}
