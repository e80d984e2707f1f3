use sqlx::{FromRow, PgPool};

use crate::diet::dto::{DietEntry, NewDietEntry};

/// Per-day sums produced by the store-side grouping. Only days that actually
/// have entries come back; callers backfill the rest.
#[derive(Debug, Clone, FromRow)]
pub struct DailyMacroRow {
    pub date: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

pub async fn insert_entry(
    db: &PgPool,
    user_id: &str,
    entry: &NewDietEntry,
    date: &str,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO diet_entries (user_id, name, protein, carbs, fats, calories, date)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(user_id)
    .bind(&entry.name)
    .bind(entry.protein)
    .bind(entry.carbs)
    .bind(entry.fats)
    .bind(entry.calories)
    .bind(date)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn entries_for_day(
    db: &PgPool,
    user_id: &str,
    date: &str,
) -> anyhow::Result<Vec<DietEntry>> {
    let rows = sqlx::query_as::<_, DietEntry>(
        r#"
        SELECT name, protein, carbs, fats, calories, date
        FROM diet_entries
        WHERE user_id = $1 AND date = $2
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn daily_totals_in_range(
    db: &PgPool,
    user_id: &str,
    from: &str,
    to: &str,
) -> anyhow::Result<Vec<DailyMacroRow>> {
    let rows = sqlx::query_as::<_, DailyMacroRow>(
        r#"
        SELECT date,
               SUM(calories) AS calories,
               SUM(protein)  AS protein,
               SUM(carbs)    AS carbs,
               SUM(fats)     AS fats
        FROM diet_entries
        WHERE user_id = $1 AND date >= $2 AND date <= $3
        GROUP BY date
        ORDER BY date ASC
        "#,
    )
    .bind(user_id)
    .bind(from)
    .bind(to)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
