//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gatherly_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use gatherly_core::{format_rule, Frequency, RecurrenceRule, WeekDay};

fn main() {
    println!("gatherly_core ping={}", gatherly_core::ping());
    println!("gatherly_core version={}", gatherly_core::core_version());

    let Some(start) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
        eprintln!("gatherly_core sample rule date out of range");
        return;
    };
    let mut sample = RecurrenceRule::new(start, Frequency::Weekly);
    sample.interval = 2;
    sample.week_days.insert(WeekDay::Monday);
    sample.week_days.insert(WeekDay::Wednesday);
    println!("gatherly_core sample_rule=\"{}\"", format_rule(&sample));
}
