//! API Routes
//!
//! Configures the Axum router with the employee endpoints.

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::auth::require_api_key;
use super::handlers::{
    create_employee_handler, get_employee_handler, health_handler, list_employees_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/v1/employee` - List all employees
/// - `GET /api/v1/employee/:id` - Fetch one employee
/// - `POST /api/v1/employee` - Create an employee
/// - `GET /health` - Health check endpoint (no API key)
///
/// # Middleware
/// - API key: required on every `/api/` path, routed or not
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/v1/employee",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route("/api/v1/employee/:id", get(get_employee_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
