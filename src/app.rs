use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/page/:page", get(handlers::show_page))
        .route("/login", post(handlers::login))
        .route("/register", post(handlers::register))
        .route("/add_game", post(handlers::add_game))
        .route("/logout", post(handlers::logout))
        .with_state(state)
}
