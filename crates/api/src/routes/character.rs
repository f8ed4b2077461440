//! Route definitions for the `/characters` resource and its
//! quest-queue sub-operations.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// POST /                                    -> create
/// GET  /{character_id}/quests               -> list_quests
/// POST /{character_id}/quests/{quest_id}    -> assign_quest
/// POST /{character_id}/complete/{quest_id}  -> complete_quest
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(character::create))
        .route("/{character_id}/quests", get(character::list_quests))
        .route(
            "/{character_id}/quests/{quest_id}",
            post(character::assign_quest),
        )
        .route(
            "/{character_id}/complete/{quest_id}",
            post(character::complete_quest),
        )
}
