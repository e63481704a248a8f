//! Request and Response models for the employee API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    is_empty_payload, parse_create_payload, validate_create, CreateEmployeeRequest,
};
pub use responses::{ErrorResponse, HealthResponse};
