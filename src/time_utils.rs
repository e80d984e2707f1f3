//! Calendar-day helpers. Entries are bucketed by `YYYY-MM-DD` strings in UTC.

use time::{Date, OffsetDateTime};

pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn format_day(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
