pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod page;
pub mod state;
pub mod storage;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use controller::Controller;
pub use state::AppState;
