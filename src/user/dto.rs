use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Partial goals update. Absent fields and explicit nulls both mean
/// "leave untouched".
#[derive(Debug, Default, Deserialize)]
pub struct UserGoals {
    #[serde(default)]
    pub daily_calories: Option<f64>,
    #[serde(default)]
    pub daily_protein: Option<f64>,
    #[serde(default)]
    pub daily_carbs: Option<f64>,
    #[serde(default)]
    pub daily_fats: Option<f64>,
}

impl UserGoals {
    pub fn is_empty(&self) -> bool {
        self.daily_calories.is_none()
            && self.daily_protein.is_none()
            && self.daily_carbs.is_none()
            && self.daily_fats.is_none()
    }

    /// Goals follow the same non-negative rule as diet entries.
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("daily_calories", self.daily_calories),
            ("daily_protein", self.daily_protein),
            ("daily_carbs", self.daily_carbs),
            ("daily_fats", self.daily_fats),
        ] {
            if let Some(v) = value {
                if !(v >= 0.0) {
                    return Err(AppError::Validation(format!("{field} must be >= 0")));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub daily_calories: Option<f64>,
    pub daily_protein: Option<f64>,
    pub daily_carbs: Option<f64>,
    pub daily_fats: Option<f64>,
    pub account_created: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_nulls_count_as_absent() {
        let goals: UserGoals = serde_json::from_str(
            r#"{"daily_calories": null, "daily_protein": null}"#,
        )
        .unwrap();
        assert!(goals.is_empty());
    }

    #[test]
    fn one_field_is_enough() {
        let goals: UserGoals = serde_json::from_str(r#"{"daily_protein": 140}"#).unwrap();
        assert!(!goals.is_empty());
        assert_eq!(goals.daily_protein, Some(140.0));
        assert!(goals.daily_calories.is_none());
    }

    #[test]
    fn negative_goal_is_rejected() {
        let goals = UserGoals {
            daily_fats: Some(-5.0),
            ..Default::default()
        };
        assert!(goals.validate().is_err());
    }

    #[test]
    fn profile_serializes_unset_goals_as_null() {
        let profile = UserProfile {
            username: "u1".into(),
            email: "u1@x.com".into(),
            daily_calories: Some(2000.0),
            daily_protein: None,
            daily_carbs: None,
            daily_fats: None,
            account_created: "2026-08-28".into(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["daily_calories"], 2000.0);
        assert!(json["daily_protein"].is_null());
        assert_eq!(json["account_created"], "2026-08-28");
    }
}
