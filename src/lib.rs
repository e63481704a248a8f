//! Employee API - A small in-memory employee registry
//!
//! Serves create/read endpoints for employee records behind a shared API key.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{ApiError, Result};
