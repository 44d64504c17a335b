use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::error::ApiResult;
use super::AppState;
use crate::game::ModeRequest;
use crate::session::GameSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRequest {
    pub col: i64,
}

/// Current game state
pub async fn get_state(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.session.snapshot())
}

/// Drop a token for the player whose turn it is
pub async fn play(
    State(state): State<AppState>,
    Json(request): Json<PlayRequest>,
) -> ApiResult<Json<GameSnapshot>> {
    Ok(Json(state.session.apply_move(request.col)?))
}

pub async fn reset(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.session.reset())
}

/// Switch board preset or size; always starts a new game
pub async fn set_mode(
    State(state): State<AppState>,
    Json(request): Json<ModeRequest>,
) -> ApiResult<Json<GameSnapshot>> {
    Ok(Json(state.session.configure_mode(&request)?))
}
