//! API Handlers
//!
//! HTTP request handlers for the employee endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderName, StatusCode},
    Json,
};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{is_empty_payload, parse_create_payload, validate_create, HealthResponse};
use crate::registry::{Employee, EmployeeStore};

/// Application state shared across all handlers.
///
/// The store sits behind one `RwLock`: reads share it, creation takes it
/// exclusively for the whole uniqueness check and insert.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe employee store
    pub store: Arc<RwLock<EmployeeStore>>,
    /// Shared secret for `/api/**`; `None` rejects every API request
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    /// Creates a new AppState with the given store and API key.
    pub fn new(store: EmployeeStore, api_key: Option<String>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            api_key: api_key.map(Arc::from),
        }
    }

    /// Creates a new AppState with an empty store from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(EmployeeStore::new(), config.api_key.clone())
    }
}

/// Handler for GET /api/v1/employee
///
/// Returns every stored employee.
pub async fn list_employees_handler(State(state): State<AppState>) -> Json<Vec<Employee>> {
    let store = state.store.read().await;
    Json(store.find_all())
}

/// Handler for GET /api/v1/employee/:id
///
/// Unknown and unparseable ids both report not found.
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        debug!(id = %id, "Rejected malformed employee id");
        return Err(not_found());
    };

    let store = state.store.read().await;
    store.find_by_id(id).map(Json).ok_or_else(not_found)
}

/// Handler for POST /api/v1/employee
///
/// Validates the body, stores the employee and answers 201 with a
/// `Location` header pointing at the new record. A non-empty body must be
/// sent as `application/json`.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Employee>)> {
    if !is_empty_payload(&body) && !has_json_content_type(&headers) {
        debug!("Rejected employee creation with non-JSON content type");
        return Err(ApiError::UnsupportedMediaType(
            "Expected request with `Content-Type: application/json`".to_string(),
        ));
    }

    let fields = parse_create_payload(&body)
        .and_then(|request| validate_create(request, Utc::now()))
        .inspect_err(|err| debug!(error = %err, "Rejected employee creation"))?;

    // Write lock spans the email check and both inserts
    let created = {
        let mut store = state.store.write().await;
        store.create(fields)
    };

    let employee = match created {
        Ok(employee) => employee,
        Err(err) => {
            warn!(error = %err, "Employee creation failed");
            return Err(err);
        }
    };

    info!(employee_id = %employee.id, "Employee created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, employee.location())],
        Json(employee),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server. Not behind the API key.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.read().await;
    Json(HealthResponse::healthy(store.len()))
}

/// Accepts `application/json` and `application/*+json`, with any parameters.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some((kind, subtype)) => {
            kind == "application" && (subtype == "json" || subtype.ends_with("+json"))
        }
        None => false,
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound("Employee not found".to_string())
}
