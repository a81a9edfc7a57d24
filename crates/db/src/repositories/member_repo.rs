//! Repository for the `"Members"` table.

use fitcenter_core::schema::MemberInput;
use fitcenter_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::Member;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age";

/// Provides CRUD operations for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member with its caller-supplied `id`, returning the created row.
    pub async fn create(pool: &PgPool, input: &MemberInput) -> Result<Member, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO "Members" (id, name, age)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(input.age)
            .fetch_one(pool)
            .await
    }

    /// Find a member by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(r#"SELECT {COLUMNS} FROM "Members" WHERE id = $1"#);
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every member ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(r#"SELECT {COLUMNS} FROM "Members" ORDER BY id"#);
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }

    /// Replace every field of the member identified by `id`, including the
    /// id itself.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MemberInput,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            r#"UPDATE "Members" SET
                id = $2,
                name = $3,
                age = $4
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(input.id)
            .bind(&input.name)
            .bind(input.age)
            .fetch_optional(pool)
            .await
    }

    /// Delete a member by id. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while the member still owns
    /// workout sessions.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM "Members" WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
