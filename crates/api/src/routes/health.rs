use axum::extract::State;
use axum::{routing::get, Json, Router};
use fitcenter_db::{MEMBERS_TABLE, WORKOUT_SESSIONS_TABLE};
use serde::Serialize;

use crate::state::AppState;

/// Health of the service and the two resource tables behind it.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when every check passes, otherwise `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub tables: TableHealth,
}

/// Per-table reachability, keyed by resource.
#[derive(Serialize)]
pub struct TableHealth {
    pub members: bool,
    pub workout_sessions: bool,
}

impl TableHealth {
    fn all_reachable(&self) -> bool {
        self.members && self.workout_sessions
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (db, members, workout_sessions) = tokio::join!(
        fitcenter_db::health_check(&state.pool),
        fitcenter_db::table_check(&state.pool, MEMBERS_TABLE),
        fitcenter_db::table_check(&state.pool, WORKOUT_SESSIONS_TABLE),
    );

    for (table, result) in [(MEMBERS_TABLE, &members), (WORKOUT_SESSIONS_TABLE, &workout_sessions)] {
        if let Err(e) = result {
            tracing::warn!(table, error = %e, "Table unreachable");
        }
    }

    let db_healthy = db.is_ok();
    let tables = TableHealth {
        members: members.is_ok(),
        workout_sessions: workout_sessions.is_ok(),
    };
    let status = if db_healthy && tables.all_reachable() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        tables,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
