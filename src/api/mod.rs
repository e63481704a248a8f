//! API Module
//!
//! HTTP handlers, API key middleware and routing for the employee REST API.
//!
//! # Endpoints
//! - `GET /api/v1/employee` - List all employees
//! - `GET /api/v1/employee/:id` - Fetch one employee by id
//! - `POST /api/v1/employee` - Create an employee
//! - `GET /health` - Health check endpoint

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::API_KEY_HEADER;
pub use handlers::*;
pub use routes::create_router;
