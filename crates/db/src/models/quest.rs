//! Quest entity model, DTOs, and operation outcomes.

use questledger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A quest row from the `quests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Quest {
    pub id: DbId,
    pub description: String,
    pub xp: i64,
    /// NULL while the quest is unassigned.
    pub character_id: Option<DbId>,
    /// 0-based position in the owning character's queue, fixed at
    /// assignment time. NULL while unassigned.
    #[serde(rename = "order")]
    pub sort_order: Option<i64>,
    pub created_at: Timestamp,
}

/// DTO for creating a new quest.
///
/// `xp` is optional on the wire; the default is applied at the
/// operation boundary, not here and not in the schema.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuest {
    pub description: String,
    pub xp: Option<i64>,
}

/// A quest as it appears in a character's queue listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QueuedQuest {
    pub id: DbId,
    pub description: String,
    pub xp: i64,
    #[serde(rename = "order")]
    pub sort_order: i64,
}

/// Result of attempting to assign a quest to a character.
#[derive(Debug)]
pub enum AssignOutcome {
    /// The quest was appended to the character's queue.
    Assigned(Quest),
    /// The quest already has an owner (any owner).
    AlreadyAssigned,
    /// No quest with the given id exists.
    NotFound,
}

/// Result of attempting to complete a quest for a character.
#[derive(Debug)]
pub enum CompleteOutcome {
    /// XP was transferred and the quest deleted.
    Completed(Completion),
    /// The quest exists but is not owned by the given character.
    NotOwned,
    /// No quest with the given id exists.
    NotFound,
}

/// XP accounting for a successful completion.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Completion {
    /// The completed quest's reward.
    pub xp_gained: i64,
    /// The character's total after the award.
    pub xp_total: i64,
}
