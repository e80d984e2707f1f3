use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    diet::{
        analytics::{day_totals, fill_daily_calories, macro_totals, window_days},
        dto::{AnalyticsResponse, NewDietEntry, SummaryResponse},
        repo,
    },
    error::AppError,
    state::AppState,
    time_utils::{format_day, today_utc},
};

pub fn diet_routes() -> Router<AppState> {
    Router::new()
        .route("/diet/add", post(add_entry))
        .route("/diet/today", get(today_summary))
        .route("/diet/analytics", get(analytics))
}

#[instrument(skip(state, payload))]
pub async fn add_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<NewDietEntry>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    payload.validate()?;

    let date = match &payload.date {
        Some(d) if !d.is_empty() => d.clone(),
        _ => format_day(today_utc()),
    };

    repo::insert_entry(&state.db, &user_id, &payload, &date).await?;

    info!(user = %user_id, name = %payload.name, %date, "diet entry added");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "msg": "Diet entry added successfully" })),
    ))
}

#[instrument(skip(state))]
pub async fn today_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<SummaryResponse>, AppError> {
    let today = format_day(today_utc());
    let entries = repo::entries_for_day(&state.db, &user_id, &today).await?;
    let totals = day_totals(&entries);

    Ok(Json(SummaryResponse {
        scope: "date",
        date: today,
        totals,
        entries,
    }))
}

#[instrument(skip(state))]
pub async fn analytics(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let days = window_days(today_utc());
    let rows =
        repo::daily_totals_in_range(&state.db, &user_id, &days[0], &days[6]).await?;

    Ok(Json(AnalyticsResponse {
        last_7_days_calories: fill_daily_calories(&days, &rows),
        macro_distribution: macro_totals(&rows),
        monthly_summary: None,
    }))
}
