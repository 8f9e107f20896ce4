//! Recurrence rule domain model.
//!
//! # Responsibility
//! - Define the canonical repetition pattern attached to a recurring event.
//! - Validate rule invariants at the form/wire boundary, before rules reach
//!   the pure decision services.
//!
//! # Invariants
//! - `interval >= 1` and `count >= 1` when present.
//! - `week_days` is non-empty when `frequency == Weekly`.
//! - `recurrence_start_date <= recurrence_end_date` when bounded.
//! - `week_day_occurrence_in_month` appears only on `Monthly` rules and is
//!   `1..=5` or [`LAST_WEEK_DAY_OCCURRENCE`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Sentinel ordinal meaning "last such weekday of the month".
pub const LAST_WEEK_DAY_OCCURRENCE: i32 = -1;

/// Repeat cadence of a recurring event series.
///
/// Serialized in SCREAMING_SNAKE_CASE to match external schema naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Singular period noun used when phrasing a rule ("every 2 weeks").
    pub fn period_name(self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

/// Weekday tag selectable in a weekly or monthly-by-weekday rule.
///
/// Ordering is Monday-first so weekday sets enumerate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekDay {
    /// Three-letter abbreviation used in weekday enumerations.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Full weekday name used in month-occurrence phrases.
    pub fn full_name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

/// Structured repetition pattern for a recurring event series.
///
/// The rule only describes the pattern; concrete instances are materialized
/// by the external backend. `recurrence_end_date` and `count` are both
/// carried when set, and downstream policy decides which one is
/// authoritative (the text formatter prefers the end date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RecurrenceRuleWire")]
pub struct RecurrenceRule {
    /// First date the pattern applies from.
    pub recurrence_start_date: NaiveDate,
    /// Inclusive bound after which no further instances occur. `None`
    /// means the series is unbounded.
    pub recurrence_end_date: Option<NaiveDate>,
    pub frequency: Frequency,
    /// Meaningful for `Weekly`, or `Monthly` with
    /// `week_day_occurrence_in_month` set.
    pub week_days: BTreeSet<WeekDay>,
    /// Repeat every N periods.
    pub interval: u32,
    /// Total number of occurrences.
    pub count: Option<u32>,
    /// Nth weekday of the month (e.g. 2 = second), only for `Monthly`.
    pub week_day_occurrence_in_month: Option<i32>,
}

impl RecurrenceRule {
    /// Creates a minimal valid rule: repeat every period, unbounded.
    pub fn new(recurrence_start_date: NaiveDate, frequency: Frequency) -> Self {
        Self {
            recurrence_start_date,
            recurrence_end_date: None,
            frequency,
            week_days: BTreeSet::new(),
            interval: 1,
            count: None,
            week_day_occurrence_in_month: None,
        }
    }

    /// Checks every rule invariant.
    ///
    /// # Contract
    /// - Must be called on the form/wire boundary before a rule is handed
    ///   to the decision services; those services do not re-validate.
    pub fn validate(&self) -> Result<(), RuleValidationError> {
        if self.interval == 0 {
            return Err(RuleValidationError::ZeroInterval);
        }
        if self.count == Some(0) {
            return Err(RuleValidationError::ZeroCount);
        }
        if self.frequency == Frequency::Weekly && self.week_days.is_empty() {
            return Err(RuleValidationError::EmptyWeekDays);
        }
        if let Some(end) = self.recurrence_end_date {
            if self.recurrence_start_date > end {
                return Err(RuleValidationError::InvalidDateWindow {
                    start: self.recurrence_start_date,
                    end,
                });
            }
        }
        if let Some(occurrence) = self.week_day_occurrence_in_month {
            if self.frequency != Frequency::Monthly {
                return Err(RuleValidationError::OccurrenceOutsideMonthly(self.frequency));
            }
            if occurrence != LAST_WEEK_DAY_OCCURRENCE && !(1..=5).contains(&occurrence) {
                return Err(RuleValidationError::InvalidOccurrence(occurrence));
            }
        }
        Ok(())
    }

    /// Returns whether the series ever terminates by end date or count.
    pub fn is_bounded(&self) -> bool {
        self.recurrence_end_date.is_some() || self.count.is_some()
    }
}

/// Raw wire shape accepted before invariant checks run.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecurrenceRuleWire {
    recurrence_start_date: NaiveDate,
    #[serde(default)]
    recurrence_end_date: Option<NaiveDate>,
    frequency: Frequency,
    #[serde(default)]
    week_days: BTreeSet<WeekDay>,
    interval: u32,
    #[serde(default)]
    count: Option<u32>,
    #[serde(default)]
    week_day_occurrence_in_month: Option<i32>,
}

impl TryFrom<RecurrenceRuleWire> for RecurrenceRule {
    type Error = RuleValidationError;

    fn try_from(wire: RecurrenceRuleWire) -> Result<Self, Self::Error> {
        let rule = Self {
            recurrence_start_date: wire.recurrence_start_date,
            recurrence_end_date: wire.recurrence_end_date,
            frequency: wire.frequency,
            week_days: wire.week_days,
            interval: wire.interval,
            count: wire.count,
            week_day_occurrence_in_month: wire.week_day_occurrence_in_month,
        };
        rule.validate()?;
        Ok(rule)
    }
}

/// Rule invariant violations reported at the form/wire boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleValidationError {
    ZeroInterval,
    ZeroCount,
    EmptyWeekDays,
    InvalidDateWindow { start: NaiveDate, end: NaiveDate },
    OccurrenceOutsideMonthly(Frequency),
    InvalidOccurrence(i32),
}

impl Display for RuleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroInterval => write!(f, "recurrence interval must be >= 1"),
            Self::ZeroCount => write!(f, "recurrence count must be >= 1 when set"),
            Self::EmptyWeekDays => {
                write!(f, "weekly rule must select at least one weekday")
            }
            Self::InvalidDateWindow { start, end } => write!(
                f,
                "recurrence_end_date ({end}) must be on or after recurrence_start_date ({start})"
            ),
            Self::OccurrenceOutsideMonthly(frequency) => write!(
                f,
                "week_day_occurrence_in_month is only valid for MONTHLY rules, got {frequency:?}"
            ),
            Self::InvalidOccurrence(value) => write!(
                f,
                "week_day_occurrence_in_month must be 1..=5 or -1 (last), got {value}"
            ),
        }
    }
}

impl Error for RuleValidationError {}
