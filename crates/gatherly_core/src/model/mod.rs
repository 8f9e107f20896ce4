//! Domain model for recurring event editing.
//!
//! # Responsibility
//! - Define the canonical recurrence rule and edit-session shapes used by
//!   the decision services.
//! - Keep wire naming aligned with the external mutation schema.
//!
//! # Invariants
//! - Rule invariants are enforced at the form/wire boundary; values that
//!   reach the services are already valid.
//! - Edit-session state is ephemeral and owned by the UI session.

pub mod edit;
pub mod rule;
