use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// Request body for logging a diet entry. The date defaults to the current
/// UTC day and the owner is stamped server-side.
#[derive(Debug, Deserialize)]
pub struct NewDietEntry {
    pub name: String,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
    #[serde(default)]
    pub date: Option<String>,
}

impl NewDietEntry {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fats", self.fats),
            ("calories", self.calories),
        ] {
            // Negated comparison also rejects NaN.
            if !(value >= 0.0) {
                return Err(AppError::Validation(format!("{field} must be >= 0")));
            }
        }
        Ok(())
    }
}

/// Stored diet entry as returned to its owner.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DietEntry {
    pub name: String,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
    pub date: String,
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct DayTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub scope: &'static str,
    pub date: String,
    pub totals: DayTotals,
    pub entries: Vec<DietEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCalories {
    pub date: String,
    pub calories: f64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MacroTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub last_7_days_calories: Vec<DailyCalories>,
    pub macro_distribution: MacroTotals,
    /// Reserved; omitted from the JSON body until populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_summary: Option<Vec<DailyCalories>>,
}
