use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::{
    auth::{jwt::AuthUser, repo::User},
    error::AppError,
    state::AppState,
    time_utils::format_day,
    user::{
        dto::{UserGoals, UserProfile},
        repo,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/profile", get(get_profile))
        .route("/user/goals", post(set_goals))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    // The record vanishing after the token verified is a data-integrity fault.
    let user = User::find_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| {
            warn!(email = %email, "authenticated user missing from store");
            AppError::NotFound("User not found".into())
        })?;

    Ok(Json(UserProfile {
        username: user.username,
        email: user.email,
        daily_calories: user.daily_calories,
        daily_protein: user.daily_protein,
        daily_carbs: user.daily_carbs,
        daily_fats: user.daily_fats,
        account_created: format_day(user.created_at.date()),
    }))
}

#[instrument(skip(state, payload))]
pub async fn set_goals(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
    Json(payload): Json<UserGoals>,
) -> Result<Json<Value>, AppError> {
    if payload.is_empty() {
        return Err(AppError::Validation("No goal data provided".into()));
    }
    payload.validate()?;

    let matched = repo::update_goals(&state.db, &email, &payload).await?;
    if matched == 0 {
        return Err(AppError::NotFound("User not found".into()));
    }

    info!(user = %email, "goals updated");
    Ok(Json(json!({ "msg": "Goals updated successfully" })))
}
