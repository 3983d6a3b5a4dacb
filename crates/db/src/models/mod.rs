//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the `Deserialize` DTOs accepted by the API for that entity.

pub mod shared_report;
pub mod user;
pub mod vehicle;
pub mod vehicle_error;
