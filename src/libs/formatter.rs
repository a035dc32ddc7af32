//! Display formatting for durations, money and dates.
//!
//! Downtime is stored in minutes and shown as `HH:MM`; negative values are
//! clamped to `00:00`.
//!
//! ```rust
//! use machmon::libs::formatter::{format_duration, format_minutes};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&Duration::minutes(145)), "02:25");
//! assert_eq!(format_minutes(45), "00:45");
//! ```

use chrono::{Duration, NaiveDate};

pub fn format_duration(duration: &Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

pub fn format_minutes(minutes: u32) -> String {
    format_duration(&Duration::minutes(i64::from(minutes)))
}

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
