//! Edit-session model for recurring event mutations.
//!
//! # Responsibility
//! - Hold the ephemeral before/after state of one edit or delete modal.
//! - Define the mutation scopes an edit can apply to and the derived
//!   scope decision the UI renders.
//!
//! # Invariants
//! - An `EventInstanceEdit` lives only as long as the modal that opened it;
//!   nothing here is persisted.
//! - `EditScopeDecision::default_scope` is always an element of
//!   `available_scopes`, which is never empty.

use crate::model::rule::RecurrenceRule;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which subset of a series' instances a mutation applies to.
///
/// Serialized in SCREAMING_SNAKE_CASE to match the external mutation
/// schema's `recurringEventUpdateType` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditScope {
    /// Only the instance being edited.
    ThisInstance,
    /// The edited instance and every later one (series split).
    ThisAndFollowingInstances,
    /// Every instance of the series.
    AllInstances,
}

/// Ephemeral before/after state of one edit session.
///
/// Seeded from the persisted event when a modal opens, mutated on every
/// form field change, and discarded on close or after a successful
/// mutation round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInstanceEdit {
    /// Persisted instance start before the edit.
    pub original_start: NaiveDateTime,
    /// Persisted instance end before the edit.
    pub original_end: NaiveDateTime,
    /// Current form value for the instance start.
    pub edited_start: NaiveDateTime,
    /// Current form value for the instance end.
    pub edited_end: NaiveDateTime,
    /// Persisted rule; `None` for a non-recurring event.
    pub original_rule: Option<RecurrenceRule>,
    /// Current form rule; `None` when the form turns recurrence off.
    pub edited_rule: Option<RecurrenceRule>,
}

impl EventInstanceEdit {
    /// Opens an edit session seeded from the persisted event record.
    ///
    /// Edited values start equal to the originals, so a freshly opened
    /// session reports no changes.
    pub fn open(
        start: NaiveDateTime,
        end: NaiveDateTime,
        rule: Option<RecurrenceRule>,
    ) -> Self {
        Self {
            original_start: start,
            original_end: end,
            edited_start: start,
            edited_end: end,
            original_rule: rule.clone(),
            edited_rule: rule,
        }
    }
}

/// Scope options derived from what an edit session changed.
///
/// Recomputed whenever the session changes, so the UI can reactively
/// narrow the offered radio options before submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScopeDecision {
    /// Either instance date differs from the persisted value.
    pub dates_changed: bool,
    /// The recurrence rule differs from the persisted value.
    pub rule_changed: bool,
    /// Legal scopes, in presentation order. Never empty.
    pub available_scopes: Vec<EditScope>,
    /// Recommended pre-selection; always one of `available_scopes`.
    pub default_scope: EditScope,
    /// True when more than one scope is legal and the user must choose.
    pub requires_user_choice: bool,
}
