//! Pure aggregation steps behind /diet/today and /diet/analytics: totals over
//! a day's entries, the 7-day window, and gap-filling of the calorie series.

use time::{Date, Duration};

use crate::diet::dto::{DailyCalories, DayTotals, DietEntry, MacroTotals};
use crate::diet::repo::DailyMacroRow;
use crate::time_utils::format_day;

/// The inclusive 7-day window ending at `end`, in chronological order.
pub fn window_days(end: Date) -> Vec<String> {
    let start = end - Duration::days(6);
    (0..7).map(|i| format_day(start + Duration::days(i))).collect()
}

pub fn day_totals(entries: &[DietEntry]) -> DayTotals {
    let mut totals = DayTotals::default();
    for e in entries {
        totals.protein += e.protein;
        totals.carbs += e.carbs;
        totals.fats += e.fats;
        totals.calories += e.calories;
    }
    totals
}

/// The grouping only returns days that have entries; every day of the window
/// must still appear in the series, with 0 for the missing ones.
pub fn fill_daily_calories(days: &[String], rows: &[DailyMacroRow]) -> Vec<DailyCalories> {
    days.iter()
        .map(|day| DailyCalories {
            date: day.clone(),
            calories: rows
                .iter()
                .find(|r| &r.date == day)
                .map(|r| r.calories)
                .unwrap_or(0.0),
        })
        .collect()
}

pub fn macro_totals(rows: &[DailyMacroRow]) -> MacroTotals {
    MacroTotals {
        protein: rows.iter().map(|r| r.protein).sum(),
        carbs: rows.iter().map(|r| r.carbs).sum(),
        fats: rows.iter().map(|r| r.fats).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn row(date: &str, calories: f64, protein: f64, carbs: f64, fats: f64) -> DailyMacroRow {
        DailyMacroRow {
            date: date.into(),
            calories,
            protein,
            carbs,
            fats,
        }
    }

    #[test]
    fn window_covers_seven_days_in_order() {
        let days = window_days(date!(2026 - 03 - 10));
        assert_eq!(
            days,
            vec![
                "2026-03-04",
                "2026-03-05",
                "2026-03-06",
                "2026-03-07",
                "2026-03-08",
                "2026-03-09",
                "2026-03-10",
            ]
        );
    }

    #[test]
    fn window_crosses_month_boundary() {
        let days = window_days(date!(2026 - 03 - 02));
        assert_eq!(days[0], "2026-02-24");
        assert_eq!(days[6], "2026-03-02");
    }

    #[test]
    fn gap_filling_backfills_missing_days() {
        let days = window_days(date!(2026 - 03 - 10));
        // Data only on day 3 of 7.
        let rows = vec![row("2026-03-06", 1850.0, 90.0, 200.0, 60.0)];
        let series = fill_daily_calories(&days, &rows);
        assert_eq!(series.len(), 7);
        assert_eq!(series[2].date, "2026-03-06");
        assert_eq!(series[2].calories, 1850.0);
        for (i, point) in series.iter().enumerate() {
            if i != 2 {
                assert_eq!(point.calories, 0.0, "day {} should be backfilled", point.date);
            }
        }
    }

    #[test]
    fn empty_window_yields_zero_macro_distribution() {
        let totals = macro_totals(&[]);
        assert_eq!(
            totals,
            MacroTotals {
                protein: 0.0,
                carbs: 0.0,
                fats: 0.0
            }
        );
    }

    #[test]
    fn macro_totals_sum_across_days() {
        let rows = vec![
            row("2026-03-05", 500.0, 30.0, 40.0, 10.0),
            row("2026-03-06", 700.0, 20.0, 60.0, 15.0),
        ];
        let totals = macro_totals(&rows);
        assert_eq!(totals.protein, 50.0);
        assert_eq!(totals.carbs, 100.0);
        assert_eq!(totals.fats, 25.0);
    }

    #[test]
    fn day_totals_over_no_entries_is_zero() {
        assert_eq!(day_totals(&[]), DayTotals::default());
    }

    #[test]
    fn day_totals_sums_all_fields() {
        let entries = vec![
            DietEntry {
                name: "eggs".into(),
                protein: 6.0,
                carbs: 1.0,
                fats: 5.0,
                calories: 70.0,
                date: "2026-03-10".into(),
            },
            DietEntry {
                name: "toast".into(),
                protein: 4.0,
                carbs: 20.0,
                fats: 1.5,
                calories: 120.0,
                date: "2026-03-10".into(),
            },
        ];
        let totals = day_totals(&entries);
        assert_eq!(totals.protein, 10.0);
        assert_eq!(totals.carbs, 21.0);
        assert_eq!(totals.fats, 6.5);
        assert_eq!(totals.calories, 190.0);
    }
}
