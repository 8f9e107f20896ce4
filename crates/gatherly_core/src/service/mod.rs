//! Core decision services.
//!
//! # Responsibility
//! - Turn edit-session state into scope decisions and mutation payloads.
//! - Keep UI layers decoupled from rule comparison details.

pub mod edit_service;
pub mod recurrence_service;
