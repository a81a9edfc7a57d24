//! Shared response types for API handlers.
//!
//! Reads return the entity or entity array directly. Writes and deletes
//! return a [`MessageResponse`].

use serde::Serialize;

/// `{ "message": "..." }` confirmation body for writes and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
