use crate::state::AppState;
use axum::Router;

pub mod analytics;
pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    handlers::diet_routes()
}
