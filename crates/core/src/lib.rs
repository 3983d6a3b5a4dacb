//! Domain types, errors, and input validation for the taller platform.
//!
//! This crate holds everything the data-access and HTTP layers share:
//! primary-key/timestamp aliases, the [`error::CoreError`] taxonomy, and the
//! input-normalization rules for usernames, VINs, DTC batches, and report
//! recipients.

pub mod error;
pub mod types;
pub mod validation;
