//! Character entity model and DTOs.

use questledger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
///
/// `xp` only ever grows, and only through quest completion.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub xp: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
}
