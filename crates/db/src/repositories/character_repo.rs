//! Repository for the `characters` table.

use questledger_core::progression::STARTING_CHARACTER_XP;
use questledger_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, CreateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, xp, created_at, updated_at";

/// Provides operations for characters. Characters are never deleted.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character with an empty quest queue, returning the
    /// created row. Starting XP is bound explicitly rather than left to
    /// a schema default.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, xp)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(STARTING_CHARACTER_XP)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
