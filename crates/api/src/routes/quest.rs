//! Route definitions for the `/quests` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::quest;
use crate::state::AppState;

/// Routes mounted at `/quests`.
///
/// ```text
/// POST / -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(quest::create))
}
