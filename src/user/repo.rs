use sqlx::PgPool;

use crate::user::dto::UserGoals;

/// Partial merge of goal fields: only provided values overwrite, the rest
/// keep their stored value. Returns the number of matched rows.
pub async fn update_goals(db: &PgPool, email: &str, goals: &UserGoals) -> anyhow::Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE users SET
            daily_calories = COALESCE($2, daily_calories),
            daily_protein  = COALESCE($3, daily_protein),
            daily_carbs    = COALESCE($4, daily_carbs),
            daily_fats     = COALESCE($5, daily_fats)
        WHERE email = $1
        "#,
    )
    .bind(email)
    .bind(goals.daily_calories)
    .bind(goals.daily_protein)
    .bind(goals.daily_carbs)
    .bind(goals.daily_fats)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}
