use crate::state::AppState;
use axum::Router;

pub mod content;
pub mod dto;
pub mod generator;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

pub fn router() -> Router<AppState> {
    handlers::horoscope_routes()
}
