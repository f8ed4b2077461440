//! Handlers for the `/quests` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use questledger_core::error::CoreError;
use questledger_core::progression::{self, DEFAULT_QUEST_XP};
use questledger_db::models::quest::CreateQuest;
use questledger_db::repositories::QuestRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /quests
///
/// Creates an unassigned quest. The XP reward defaults to
/// [`DEFAULT_QUEST_XP`] when the body omits it; the default is resolved
/// here at the boundary rather than by the schema.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateQuest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    progression::validate_quest_description(&input.description)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let xp = input.xp.unwrap_or(DEFAULT_QUEST_XP);
    let quest = QuestRepo::create(&state.pool, &input, xp).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Quest created", "id": quest.id })),
    ))
}
