pub mod health;
pub mod member;
pub mod workout_session;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /members                                         list, create
/// /members/{id}                                    get, update, delete
///
/// /workoutsessions                                 list, create
/// /workoutsessions/{session_id}/{member_id}        get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/members", member::router())
        .nest("/workoutsessions", workout_session::router())
}
