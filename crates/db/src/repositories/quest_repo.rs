//! Repository for the `quests` table.
//!
//! Assignment and completion are multi-statement operations and run in
//! a transaction with a row lock on the quest, so check-then-write on
//! the same quest record serializes instead of interleaving.

use questledger_core::types::DbId;
use sqlx::PgPool;

use crate::models::quest::{AssignOutcome, CompleteOutcome, Completion, CreateQuest, Quest, QueuedQuest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, xp, character_id, sort_order, created_at";

/// Provides operations for quests across their two-state lifecycle
/// (unassigned -> assigned -> deleted on completion).
pub struct QuestRepo;

impl QuestRepo {
    /// Insert a new unassigned quest, returning the created row.
    ///
    /// `xp` must already be resolved by the caller; the wire-level
    /// default is applied at the operation boundary, not here.
    pub async fn create(pool: &PgPool, input: &CreateQuest, xp: i64) -> Result<Quest, sqlx::Error> {
        let query = format!(
            "INSERT INTO quests (description, xp)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quest>(&query)
            .bind(&input.description)
            .bind(xp)
            .fetch_one(pool)
            .await
    }

    /// Find a quest by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Quest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quests WHERE id = $1");
        sqlx::query_as::<_, Quest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a character's assigned quests ordered by queue position
    /// ascending. A snapshot, not a live view.
    pub async fn list_for_character(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<Vec<QueuedQuest>, sqlx::Error> {
        sqlx::query_as::<_, QueuedQuest>(
            "SELECT id, description, xp, sort_order FROM quests
             WHERE character_id = $1
             ORDER BY sort_order ASC, id ASC",
        )
        .bind(character_id)
        .fetch_all(pool)
        .await
    }

    /// Assign an unassigned quest to a character, appending it to the
    /// end of the character's queue.
    ///
    /// The queue position is the number of quests currently assigned to
    /// the character. Positions are never compacted, so this is an
    /// append in acceptance order rather than a dense renumbering.
    pub async fn assign(
        pool: &PgPool,
        character_id: DbId,
        quest_id: DbId,
    ) -> Result<AssignOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Lock the quest row; a concurrent assign of the same quest
        // waits here and then sees the owner we are about to set.
        let owner: Option<Option<DbId>> =
            sqlx::query_scalar("SELECT character_id FROM quests WHERE id = $1 FOR UPDATE")
                .bind(quest_id)
                .fetch_optional(&mut *tx)
                .await?;

        match owner {
            None => return Ok(AssignOutcome::NotFound),
            Some(Some(_)) => return Ok(AssignOutcome::AlreadyAssigned),
            Some(None) => {}
        }

        let queue_len: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM quests WHERE character_id = $1")
                .bind(character_id)
                .fetch_one(&mut *tx)
                .await?;

        let query = format!(
            "UPDATE quests SET character_id = $2, sort_order = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let quest = sqlx::query_as::<_, Quest>(&query)
            .bind(quest_id)
            .bind(character_id)
            .bind(queue_len)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(AssignOutcome::Assigned(quest))
    }

    /// Complete a quest owned by the given character: add its XP to the
    /// character's total and delete the quest record, both-or-neither.
    ///
    /// Remaining quests keep their queue positions; gaps are allowed.
    pub async fn complete(
        pool: &PgPool,
        character_id: DbId,
        quest_id: DbId,
    ) -> Result<CompleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM quests WHERE id = $1 FOR UPDATE");
        let quest = sqlx::query_as::<_, Quest>(&query)
            .bind(quest_id)
            .fetch_optional(&mut *tx)
            .await?;

        let quest = match quest {
            None => return Ok(CompleteOutcome::NotFound),
            Some(q) if q.character_id != Some(character_id) => {
                return Ok(CompleteOutcome::NotOwned);
            }
            Some(q) => q,
        };

        let xp_total: i64 = sqlx::query_scalar(
            "UPDATE characters SET xp = xp + $2, updated_at = NOW()
             WHERE id = $1
             RETURNING xp",
        )
        .bind(character_id)
        .bind(quest.xp)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM quests WHERE id = $1")
            .bind(quest_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(CompleteOutcome::Completed(Completion {
            xp_gained: quest.xp,
            xp_total,
        }))
    }
}
