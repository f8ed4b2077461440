//! Handlers for the `/characters` resource: character creation plus the
//! quest-queue operations scoped to one character (assign, complete,
//! list).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use questledger_core::error::CoreError;
use questledger_core::progression;
use questledger_core::types::DbId;
use questledger_db::models::character::CreateCharacter;
use questledger_db::models::quest::{AssignOutcome, CompleteOutcome, QueuedQuest};
use questledger_db::repositories::{CharacterRepo, QuestRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /characters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    progression::validate_character_name(&input.name)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let character = CharacterRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Character created", "id": character.id })),
    ))
}

/// POST /characters/{character_id}/quests/{quest_id}
///
/// Assigns an unassigned quest to the character, appending it at the
/// end of the character's queue. Not idempotent: a second call fails
/// even with the same character.
pub async fn assign_quest(
    State(state): State<AppState>,
    Path((character_id, quest_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<serde_json::Value>> {
    ensure_character_exists(&state, character_id).await?;

    match QuestRepo::assign(&state.pool, character_id, quest_id).await? {
        AssignOutcome::Assigned(_) => Ok(Json(json!({ "message": "Quest assigned" }))),
        AssignOutcome::AlreadyAssigned => Err(AppError::Core(CoreError::Conflict(
            "Quest is already assigned".to_string(),
        ))),
        AssignOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Quest",
            id: quest_id,
        })),
    }
}

/// POST /characters/{character_id}/complete/{quest_id}
///
/// Transfers the quest's XP to the owning character and deletes the
/// quest, reporting the gain and the new total.
pub async fn complete_quest(
    State(state): State<AppState>,
    Path((character_id, quest_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<serde_json::Value>> {
    ensure_character_exists(&state, character_id).await?;

    match QuestRepo::complete(&state.pool, character_id, quest_id).await? {
        CompleteOutcome::Completed(completion) => Ok(Json(json!({
            "message": "Quest completed",
            "xp_gained": completion.xp_gained,
            "xp_total": completion.xp_total,
        }))),
        CompleteOutcome::NotOwned => Err(AppError::Core(CoreError::Conflict(
            "Quest does not belong to this character".to_string(),
        ))),
        CompleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Quest",
            id: quest_id,
        })),
    }
}

/// GET /characters/{character_id}/quests
///
/// Snapshot of the character's queue, ordered by queue position
/// ascending. Positions are never renumbered, so gaps left by
/// completed quests show through.
pub async fn list_quests(
    State(state): State<AppState>,
    Path(character_id): Path<DbId>,
) -> AppResult<Json<Vec<QueuedQuest>>> {
    ensure_character_exists(&state, character_id).await?;

    let quests = QuestRepo::list_for_character(&state.pool, character_id).await?;
    Ok(Json(quests))
}

async fn ensure_character_exists(state: &AppState, character_id: DbId) -> AppResult<()> {
    CharacterRepo::find_by_id(&state.pool, character_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id: character_id,
        }))?;
    Ok(())
}
