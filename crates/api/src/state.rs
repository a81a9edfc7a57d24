use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and cheaply cloneable (the pool is reference
/// counted and the config sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fitcenter_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
