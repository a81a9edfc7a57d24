//! Member entity model.

use fitcenter_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `"Members"` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub name: String,
    pub age: i32,
}
