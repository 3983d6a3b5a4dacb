//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input via `taller_core::validation`, delegate storage
//! to the repositories in `taller_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod auth;
pub mod errors;
pub mod imagery;
pub mod reports;
pub mod vehicles;
