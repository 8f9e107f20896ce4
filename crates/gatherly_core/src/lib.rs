//! Core domain logic for gatherly recurring-event editing.
//! This crate is the single source of truth for edit-scope invariants.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::edit::{EditScope, EditScopeDecision, EventInstanceEdit};
pub use model::rule::{
    Frequency, RecurrenceRule, RuleValidationError, WeekDay, LAST_WEEK_DAY_OCCURRENCE,
};
pub use service::edit_service::{
    build_series_update, delete_scope_options, derive_scope_options, evaluate_edit,
    has_recurrence_rule_changed, have_instance_dates_changed, EditServiceError, SeriesUpdateInput,
};
pub use service::recurrence_service::format_rule;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
