//! Recurrence text derivation.
//!
//! # Responsibility
//! - Map a structured recurrence rule to the human-readable description
//!   shown in event cards and edit modals.
//!
//! # Invariants
//! - `format_rule` is pure and deterministic; same rule, same string.
//! - When both an end date and a count are present, the end-date clause
//!   wins (documented product policy).

use crate::model::rule::{Frequency, RecurrenceRule, LAST_WEEK_DAY_OCCURRENCE};

/// Derives the human-readable description of a recurrence rule.
///
/// # Contract
/// - Total over every rule that passes `RecurrenceRule::validate`;
///   callers must not construct invalid rules.
/// - No termination clause means the series repeats indefinitely.
pub fn format_rule(rule: &RecurrenceRule) -> String {
    let mut text = interval_phrase(rule.interval, rule.frequency);

    if rule.frequency == Frequency::Weekly && !rule.week_days.is_empty() {
        text.push_str(" on ");
        text.push_str(&weekday_list(rule));
    }

    if rule.frequency == Frequency::Monthly {
        if let (Some(occurrence), Some(day)) = (
            rule.week_day_occurrence_in_month,
            rule.week_days.iter().next(),
        ) {
            text.push_str(" on the ");
            text.push_str(&occurrence_ordinal(occurrence));
            text.push(' ');
            text.push_str(day.full_name());
        }
    }

    if let Some(end) = rule.recurrence_end_date {
        // End-date clause wins over count when both are set.
        text.push_str(&format!(" until {}", end.format("%B %-d, %Y")));
    } else if let Some(count) = rule.count {
        text.push_str(&termination_by_count(count));
    }

    text
}

/// Builds the leading "every ..." phrase from interval and frequency.
fn interval_phrase(interval: u32, frequency: Frequency) -> String {
    let period = frequency.period_name();
    if interval == 1 {
        format!("every {period}")
    } else {
        format!("every {interval} {period}s")
    }
}

/// Enumerates selected weekdays in Monday-first order, short names.
fn weekday_list(rule: &RecurrenceRule) -> String {
    rule.week_days
        .iter()
        .map(|day| day.short_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ordinal text for an occurrence-in-month value.
fn occurrence_ordinal(occurrence: i32) -> String {
    if occurrence == LAST_WEEK_DAY_OCCURRENCE {
        return "last".to_string();
    }
    let suffix = match occurrence {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{occurrence}{suffix}")
}

fn termination_by_count(count: u32) -> String {
    if count == 1 {
        " for 1 time".to_string()
    } else {
        format!(" for {count} times")
    }
}

#[cfg(test)]
mod tests {
    use super::{interval_phrase, occurrence_ordinal};
    use crate::model::rule::{Frequency, LAST_WEEK_DAY_OCCURRENCE};

    #[test]
    fn interval_phrase_singular_and_plural() {
        assert_eq!(interval_phrase(1, Frequency::Daily), "every day");
        assert_eq!(interval_phrase(2, Frequency::Weekly), "every 2 weeks");
        assert_eq!(interval_phrase(3, Frequency::Monthly), "every 3 months");
        assert_eq!(interval_phrase(10, Frequency::Yearly), "every 10 years");
    }

    #[test]
    fn occurrence_ordinal_covers_suffixes_and_last() {
        assert_eq!(occurrence_ordinal(1), "1st");
        assert_eq!(occurrence_ordinal(2), "2nd");
        assert_eq!(occurrence_ordinal(3), "3rd");
        assert_eq!(occurrence_ordinal(4), "4th");
        assert_eq!(occurrence_ordinal(5), "5th");
        assert_eq!(occurrence_ordinal(LAST_WEEK_DAY_OCCURRENCE), "last");
    }
}
