#![allow(dead_code)]

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const VALID_TOKEN: &str = "TOKEN-ANN";
pub const REGISTERED_TOKEN: &str = "TOKEN-NEW";

/// In-process stand-in for the foosball backend.
#[derive(Clone, Default)]
pub struct FakeBackend {
    hits: Arc<Mutex<Vec<String>>>,
    added: Arc<Mutex<Vec<Value>>>,
    fail_games: Arc<AtomicBool>,
}

impl FakeBackend {
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<Value> {
        self.added.lock().unwrap().clone()
    }

    pub fn fail_games(&self) {
        self.fail_games.store(true, Ordering::SeqCst);
    }

    fn record(&self, endpoint: &str) {
        self.hits.lock().unwrap().push(endpoint.to_string());
    }

    /// Serves the backend on a random local port and returns its base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/api/v1/login", post(login))
            .route("/api/v1/register", post(register))
            .route("/api/v1/users", post(users))
            .route("/api/v1/games", post(games))
            .route("/api/v1/add_game", post(add_game))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}

fn authorized(body: &Value) -> bool {
    matches!(body["Token"].as_str(), Some(VALID_TOKEN) | Some(REGISTERED_TOKEN))
}

async fn login(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    backend.record("login");
    if body["User"] == "ann" && body["Password"] == "secret" {
        (StatusCode::ACCEPTED, Json(json!({ "Token": VALID_TOKEN })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(Value::Null))
    }
}

async fn register(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    backend.record("register");
    if body["User"] == "taken" {
        (StatusCode::FORBIDDEN, Json(Value::Null))
    } else {
        (StatusCode::CREATED, Json(json!({ "Token": REGISTERED_TOKEN })))
    }
}

async fn users(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    backend.record("users");
    if !authorized(&body) {
        return (StatusCode::UNAUTHORIZED, Json(Value::Null));
    }
    (
        StatusCode::OK,
        Json(json!([
            {"User": "az", "First": "A", "Last": "Z", "Elo": 1500.0, "Won": 4, "Lost": 2, "Games": 6},
            {"User": "ba", "First": "B", "Last": "A", "Elo": 1600.0, "Won": 5, "Lost": 1, "Games": 6},
            {"User": "cc", "First": "C", "Last": "C", "Elo": 1400.0}
        ])),
    )
}

async fn games(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Result<(StatusCode, Json<Value>), (StatusCode, String)> {
    backend.record("games");
    if !authorized(&body) {
        return Ok((StatusCode::UNAUTHORIZED, Json(Value::Null)));
    }
    if backend.fail_games.load(Ordering::SeqCst) {
        return Err((StatusCode::INTERNAL_SERVER_ERROR, "database locked".to_string()));
    }
    Ok((
        StatusCode::OK,
        Json(json!([
            {
                "Id": 2,
                "Teams": [
                    {"Front": {"User": "az", "First": "A", "Last": "Z"}, "Back": {"User": "ba", "First": "B", "Last": "A"}},
                    {"Front": {"User": "cc", "First": "C", "Last": "C"}, "Back": {"User": "dd", "First": "D", "Last": "D"}}
                ],
                "Score": [10, 7]
            },
            {
                "Front1": {"First": "C", "Last": "C"},
                "Back1": {"First": "D", "Last": "D"},
                "Front2": {"First": "A", "Last": "Z"},
                "Back2": {"First": "B", "Last": "A"},
                "Score1": 9,
                "Score2": 10
            }
        ])),
    ))
}

async fn add_game(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> StatusCode {
    backend.record("add_game");
    if !authorized(&body) {
        return StatusCode::UNAUTHORIZED;
    }
    backend.added.lock().unwrap().push(body);
    StatusCode::OK
}

pub fn unique_session_path(name: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("foosball_{name}_{}_{nanos}", std::process::id()));
    path.push("session.json");
    path
}
