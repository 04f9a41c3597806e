//! Integration tests for the HTTP API endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt) — no TCP binding
//! needed. Each test builds its own state from the bundled dataset so rounds
//! opened in one test never leak into another.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pacdle::colors::ColorSynonymTable;
use pacdle::server::{create_router, AppState, SharedState};
use pacdle::storage::load_teams;
use pacdle::types::GameContext;

fn setup_state() -> SharedState {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/teams.json");
    let teams = load_teams(path).expect("bundled dataset loads");
    Arc::new(AppState::new(GameContext::new(
        teams,
        ColorSynonymTable::builtin(),
    )))
}

/// Parse response body as JSON.
async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn guess_request(body: serde_json::Value) -> Request<Body> {
    Request::post("/api/guess")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn team_index(state: &SharedState, name: &str) -> usize {
    state
        .ctx
        .teams
        .iter()
        .position(|t| t.name == name)
        .unwrap_or_else(|| panic!("{name} missing from dataset"))
}

// ── GET /health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_200() {
    let resp = create_router(setup_state())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["status"], "OK");
}

// ── GET /api/teams ───────────────────────────────────────────────────

#[tokio::test]
async fn teams_list_exposes_only_id_and_name() {
    let state = setup_state();
    let expected = state.ctx.team_count();
    let resp = create_router(state)
        .oneshot(Request::get("/api/teams").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), expected);
    for entry in list {
        let obj = entry.as_object().unwrap();
        assert_eq!(obj.len(), 2, "only id and name may be exposed: {entry}");
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("name"));
    }
}

// ── GET /api/random ──────────────────────────────────────────────────

#[tokio::test]
async fn random_opens_a_round() {
    let state = setup_state();
    let resp = create_router(state.clone())
        .oneshot(Request::get("/api/random").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    let token = json["round_token"].as_str().unwrap();
    assert_eq!(token.len(), 12);
    assert!(state.rounds.answer_index(token).is_some());
}

#[tokio::test]
async fn random_rounds_are_distinct() {
    let state = setup_state();
    let app = create_router(state.clone());

    let resp1 = app
        .clone()
        .oneshot(Request::get("/api/random").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let resp2 = app
        .oneshot(Request::get("/api/random").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let t1 = body_json(resp1.into_body()).await["round_token"]
        .as_str()
        .unwrap()
        .to_string();
    let t2 = body_json(resp2.into_body()).await["round_token"]
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(t1, t2);
    assert_eq!(state.rounds.len(), 2);
}

// ── POST /api/guess ──────────────────────────────────────────────────

#[tokio::test]
async fn guess_without_round_is_rejected() {
    let resp = create_router(setup_state())
        .oneshot(guess_request(serde_json::json!({ "guess_name": "Boise State" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("Round not initialized"));
}

#[tokio::test]
async fn guess_with_unknown_token_is_rejected() {
    let resp = create_router(setup_state())
        .oneshot(guess_request(serde_json::json!({
            "round_token": "nosuchtoken1",
            "guess_name": "Boise State",
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn guess_without_name_is_rejected() {
    let state = setup_state();
    let token = state.rounds.open(0);
    let resp = create_router(state)
        .oneshot(guess_request(serde_json::json!({ "round_token": token })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("guess_name"));
}

#[tokio::test]
async fn guess_unknown_team_is_404() {
    let state = setup_state();
    let token = state.rounds.open(0);
    let resp = create_router(state)
        .oneshot(guess_request(serde_json::json!({
            "round_token": token,
            "guess_name": "Narnia Tech",
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_guess_continues_without_answer_card() {
    let state = setup_state();
    let token = state.rounds.open(team_index(&state, "Boise State"));
    let resp = create_router(state)
        .oneshot(guess_request(serde_json::json!({
            "round_token": token,
            "guess_name": "Texas State",
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["win"], serde_json::json!(false));
    assert!(json.get("answer").is_none(), "answer must stay hidden");
    assert_eq!(json["result"]["outcome"], "continue");
    for field in [
        "state",
        "city",
        "colors",
        "mascot",
        "stadium_capacity",
        "previous_conference",
    ] {
        let tag = json["result"][field].as_str().unwrap();
        assert!(matches!(tag, "exact" | "close" | "none"), "bad tag {tag}");
    }
}

#[tokio::test]
async fn near_guess_reports_close_fields() {
    let state = setup_state();
    // Utah State vs Boise State: navy/blue overlap and the shared previous
    // conference survive, everything else misses.
    let token = state.rounds.open(team_index(&state, "Boise State"));
    let resp = create_router(state)
        .oneshot(guess_request(serde_json::json!({
            "round_token": token,
            "guess_name": "Utah State",
        })))
        .await
        .unwrap();
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["result"]["colors"], "close");
    assert_eq!(json["result"]["previous_conference"], "exact");
    assert_eq!(json["result"]["state"], "none");
    assert_eq!(json["result"]["outcome"], "continue");
}

#[tokio::test]
async fn correct_guess_wins_and_reveals_answer() {
    let state = setup_state();
    let token = state.rounds.open(team_index(&state, "Boise State"));
    // Lookup is case- and punctuation-insensitive.
    let resp = create_router(state)
        .oneshot(guess_request(serde_json::json!({
            "round_token": token,
            "guess_name": "boise-state",
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["win"], serde_json::json!(true));
    assert_eq!(json["result"]["outcome"], "won");
    for field in [
        "state",
        "city",
        "colors",
        "mascot",
        "stadium_capacity",
        "previous_conference",
    ] {
        assert_eq!(json["result"][field], "exact", "field {field}");
    }

    let answer = &json["answer"];
    assert_eq!(answer["name"], "Boise State");
    assert_eq!(answer["city"], "Boise");
    assert_eq!(answer["stadium_capacity"], 36363);
    assert_eq!(answer["previous_conference"], "Mountain West");
}

// ── Determinism ──────────────────────────────────────────────────────

#[tokio::test]
async fn repeated_guess_gives_identical_result() {
    let state = setup_state();
    let token = state.rounds.open(team_index(&state, "Boise State"));
    let app = create_router(state);
    let body = serde_json::json!({
        "round_token": token,
        "guess_name": "Washington State",
    });

    let resp1 = app.clone().oneshot(guess_request(body.clone())).await.unwrap();
    let json1 = body_json(resp1.into_body()).await;

    let resp2 = app.oneshot(guess_request(body)).await.unwrap();
    let json2 = body_json(resp2.into_body()).await;

    assert_eq!(json1, json2);
}
