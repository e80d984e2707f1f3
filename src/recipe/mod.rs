use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod llm;

pub fn router() -> Router<AppState> {
    handlers::recipe_routes()
}
