//! Edit change detection and mutation-scope selection.
//!
//! # Responsibility
//! - Classify what an edit session changed (dates, recurrence rule).
//! - Derive the legal mutation scopes and a recommended default.
//! - Build the series-update payload, splitting the series on
//!   this-and-following edits.
//!
//! # Invariants
//! - All-instances scope is withdrawn whenever instance dates changed.
//! - This-instance scope is withdrawn whenever the rule itself changed.
//! - `recurrence_start_date` never participates in rule comparison; a
//!   start shift is already captured by the date predicate.

use crate::model::edit::{EditScope, EditScopeDecision, EventInstanceEdit};
use crate::model::rule::RecurrenceRule;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Returns whether either instance date differs from its persisted value.
///
/// # Contract
/// - Compares calendar dates only; time-of-day edits do not count as an
///   instance date change.
/// - Pure; called on every date-picker change, not just on submit.
pub fn have_instance_dates_changed(
    original_start: NaiveDateTime,
    original_end: NaiveDateTime,
    edited_start: NaiveDateTime,
    edited_end: NaiveDateTime,
) -> bool {
    original_start.date() != edited_start.date() || original_end.date() != edited_end.date()
}

/// Returns whether the recurrence rule differs from its persisted value.
///
/// # Contract
/// - Turning recurrence on or off (absent <-> present) is always a change.
/// - With both rules present, compares every structural field except
///   `recurrence_start_date`.
/// - Pure; called on every recurrence-editor change.
pub fn has_recurrence_rule_changed(
    original: Option<&RecurrenceRule>,
    edited: Option<&RecurrenceRule>,
) -> bool {
    match (original, edited) {
        (None, None) => false,
        (None, Some(_)) | (Some(_), None) => true,
        (Some(original), Some(edited)) => {
            original.frequency != edited.frequency
                || original.interval != edited.interval
                || original.week_days != edited.week_days
                || original.recurrence_end_date != edited.recurrence_end_date
                || original.count != edited.count
                || original.week_day_occurrence_in_month != edited.week_day_occurrence_in_month
        }
    }
}

/// Derives the legal mutation scopes for an edit.
///
/// Four-way decision table over the two change predicates:
///
/// - nothing changed: all scopes, default this-instance;
/// - dates changed: this-instance or this-and-following;
/// - rule changed: this-and-following or all-instances;
/// - both changed: this-and-following only, no user choice.
pub fn derive_scope_options(dates_changed: bool, rule_changed: bool) -> EditScopeDecision {
    let available_scopes = match (dates_changed, rule_changed) {
        (false, false) => vec![
            EditScope::ThisInstance,
            EditScope::ThisAndFollowingInstances,
            EditScope::AllInstances,
        ],
        (true, false) => vec![EditScope::ThisInstance, EditScope::ThisAndFollowingInstances],
        (false, true) => vec![
            EditScope::ThisAndFollowingInstances,
            EditScope::AllInstances,
        ],
        (true, true) => vec![EditScope::ThisAndFollowingInstances],
    };

    // First entry doubles as the recommended default in every row.
    let default_scope = available_scopes[0];
    let requires_user_choice = available_scopes.len() > 1;

    EditScopeDecision {
        dates_changed,
        rule_changed,
        available_scopes,
        default_scope,
        requires_user_choice,
    }
}

/// Derives scope options for a delete.
///
/// A delete edits no fields, so every scope stays legal and the safest
/// one (this instance only) is recommended.
pub fn delete_scope_options() -> EditScopeDecision {
    derive_scope_options(false, false)
}

/// Runs both change predicates on a session and derives its scopes.
pub fn evaluate_edit(edit: &EventInstanceEdit) -> EditScopeDecision {
    let dates_changed = have_instance_dates_changed(
        edit.original_start,
        edit.original_end,
        edit.edited_start,
        edit.edited_end,
    );
    let rule_changed =
        has_recurrence_rule_changed(edit.original_rule.as_ref(), edit.edited_rule.as_ref());
    derive_scope_options(dates_changed, rule_changed)
}

/// Mutation payload handed to the external update collaborator.
///
/// Field naming matches the external mutation schema; the schema itself
/// stays out of this core's scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesUpdateInput {
    pub event_id: Uuid,
    #[serde(rename = "recurringEventUpdateType")]
    pub update_scope: EditScope,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub recurrence_rule: Option<RecurrenceRule>,
}

/// Caller-contract violations in edit use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditServiceError {
    /// The chosen scope is not among the scopes derived for this edit.
    ScopeNotAvailable(EditScope),
}

impl Display for EditServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScopeNotAvailable(scope) => {
                write!(f, "edit scope {scope:?} is not available for this change set")
            }
        }
    }
}

impl Error for EditServiceError {}

/// Builds the update payload for a chosen scope.
///
/// # Contract
/// - `scope` must be one of the scopes `evaluate_edit` derives for this
///   session; anything else is rejected as a caller bug.
/// - For this-and-following with any change, the submitted rule's
///   `recurrence_start_date` becomes the edited instance's start date:
///   the original series is truncated there and a new one begins.
/// - Every other scope submits the edited rule unchanged.
pub fn build_series_update(
    event_id: Uuid,
    edit: &EventInstanceEdit,
    scope: EditScope,
) -> Result<SeriesUpdateInput, EditServiceError> {
    let decision = evaluate_edit(edit);
    if !decision.available_scopes.contains(&scope) {
        return Err(EditServiceError::ScopeNotAvailable(scope));
    }

    let mut rule = edit.edited_rule.clone();
    if scope == EditScope::ThisAndFollowingInstances
        && (decision.dates_changed || decision.rule_changed)
    {
        if let Some(rule) = rule.as_mut() {
            rule.recurrence_start_date = edit.edited_start.date();
        }
    }

    Ok(SeriesUpdateInput {
        event_id,
        update_scope: scope,
        start: edit.edited_start,
        end: edit.edited_end,
        recurrence_rule: rule,
    })
}
