//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Vehicle queries are
//! owner-scoped: a row belonging to another user is indistinguishable from
//! a row that does not exist.

pub mod shared_report_repo;
pub mod user_repo;
pub mod vehicle_error_repo;
pub mod vehicle_repo;

pub use shared_report_repo::SharedReportRepo;
pub use user_repo::UserRepo;
pub use vehicle_error_repo::VehicleErrorRepo;
pub use vehicle_repo::{CascadeDelete, VehicleRepo};
