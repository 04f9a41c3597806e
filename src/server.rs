//! Axum HTTP server: round lifecycle endpoints for the Pacdle frontend.
//!
//! All game state lives in [`AppState`]: the immutable [`GameContext`] plus
//! the in-memory round store. Shared as `Arc<AppState>` across async
//! handlers; scoring itself is pure and needs no locking.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/teams` | Team id/name list for autocomplete |
//! | GET | `/api/random` | Open a round, return its token |
//! | POST | `/api/guess` | Score a guess against the round's answer |

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rand::Rng;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::compare;
use crate::rounds::RoundStore;
use crate::types::GameContext;

pub struct AppState {
    pub ctx: GameContext,
    pub rounds: RoundStore,
}

impl AppState {
    pub fn new(ctx: GameContext) -> Self {
        Self {
            ctx,
            rounds: RoundStore::new(),
        }
    }
}

pub type SharedState = Arc<AppState>;

pub fn create_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/api/teams", get(handle_list_teams))
        .route("/api/random", get(handle_open_round))
        .route("/api/guess", post(handle_guess))
        .layer(cors)
        .with_state(state)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct GuessRequest {
    #[serde(default)]
    round_token: Option<String>,
    #[serde(default)]
    guess_name: Option<String>,
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

/// Only id and name are exposed; any other attribute would leak answers.
async fn handle_list_teams(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let teams: Vec<serde_json::Value> = state
        .ctx
        .teams
        .iter()
        .map(|t| serde_json::json!({ "id": t.id, "name": t.name }))
        .collect();
    Json(serde_json::Value::Array(teams))
}

/// Open a round: pick a random answer, mint a token, register the round.
async fn handle_open_round(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let answer_index = rand::thread_rng().gen_range(0..state.ctx.team_count());
    let token = state.rounds.open(answer_index);
    tracing::debug!(token = %token, "round opened");
    Json(serde_json::json!({ "round_token": token }))
}

// ── POST handler ────────────────────────────────────────────────────

async fn handle_guess(
    State(state): State<SharedState>,
    Json(req): Json<GuessRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let token = req.round_token.as_deref().unwrap_or_default();
    let answer_index = match state.rounds.answer_index(token) {
        Some(i) => i,
        None => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "Round not initialized. Call /api/random.",
            ))
        }
    };

    let guess_name = match req.guess_name.as_deref() {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(error_response(StatusCode::BAD_REQUEST, "Missing guess_name.")),
    };

    let guessed = match state.ctx.find_team(guess_name) {
        Some(team) => team,
        None => {
            return Err(error_response(
                StatusCode::NOT_FOUND,
                "Team not found in dataset.",
            ))
        }
    };

    let answer = &state.ctx.teams[answer_index];
    let result = match compare::score(guessed, answer, &state.ctx.colors) {
        Ok(verdict) => verdict,
        Err(e) => {
            // Only reachable if the dataset skipped validation.
            tracing::error!(error = %e, "scoring failed");
            return Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Scoring failed.",
            ));
        }
    };

    let mut body = serde_json::json!({ "result": result, "win": result.is_win() });
    if result.is_win() {
        // The answer card is revealed only once the round is solved.
        body["answer"] = serde_json::json!({
            "name": answer.name,
            "state": answer.state,
            "city": answer.city,
            "colors": answer.colors,
            "mascot": answer.mascot,
            "stadium_capacity": answer.stadium_capacity,
            "previous_conference": answer.previous_conference,
        });
    }
    Ok(Json(body))
}
