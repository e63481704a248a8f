//! Registry Module
//!
//! In-memory employee storage with an email uniqueness index.

mod employee;
mod store;


// Re-export public types
pub use employee::{normalize_email, Employee, NewEmployee};
pub use store::EmployeeStore;

// == Public Constants ==
/// Youngest accepted employee age
pub const MIN_AGE: u8 = 1;

/// Oldest accepted employee age
pub const MAX_AGE: u8 = 120;
