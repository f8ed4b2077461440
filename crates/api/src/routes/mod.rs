pub mod character;
pub mod health;
pub mod quest;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST /characters                                     create character
/// POST /quests                                         create quest
/// POST /characters/{character_id}/quests/{quest_id}    assign quest
/// POST /characters/{character_id}/complete/{quest_id}  complete quest
/// GET  /characters/{character_id}/quests               list character's queue
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/characters", character::router())
        .nest("/quests", quest::router())
}
