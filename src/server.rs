use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use battlesnake_game_types::wire_representation::Game;
use lib::{MoveSelector, Snapshot};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::config::SnakeInfo;

#[derive(Clone)]
pub struct AppState {
    pub info: Arc<SnakeInfo>,
    pub selector: Arc<MoveSelector>,
}

/// Turns a report into a 400 for the game host.
#[derive(Debug)]
pub struct AppError(color_eyre::Report);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!("rejecting request: {:#}", self.0);
        (StatusCode::BAD_REQUEST, format!("{:#}", self.0)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<color_eyre::Report>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub fn decode_state(text: String) -> color_eyre::Result<Game> {
    let mut bytes = text.into_bytes();
    let decoded: Game = simd_json::serde::from_slice(&mut bytes)?;
    Ok(decoded)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(info))
        .route("/info", get(info))
        .route("/start", post(start))
        .route("/move", post(get_move))
        .route("/end", post(end))
        .with_state(state)
}

async fn info(State(state): State<AppState>) -> Json<Value> {
    info!("INFO");
    Json(json!(*state.info))
}

async fn start(body: String) -> Result<Response, AppError> {
    let game_state = decode_state(body)?;
    info!(
        game = %game_state.game.id,
        "GAME START with {} snakes",
        game_state.board.snakes.len()
    );
    Ok(Response::default())
}

async fn get_move(State(state): State<AppState>, body: String) -> Result<Json<Value>, AppError> {
    let game_state = decode_state(body)?;
    let snapshot = Snapshot::try_from(&game_state)?;
    let mv = state.selector.decide(&snapshot, &mut rand::rng());
    Ok(Json(json!({ "move": mv })))
}

async fn end(body: String) -> Result<Response, AppError> {
    let game_state = decode_state(body)?;
    info!(game = %game_state.game.id, turn = game_state.turn, "GAME OVER");
    Ok(Response::default())
}
