//! Employee Record Module
//!
//! Defines the stored employee record and the validated input it is built from.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// == Employee ==
/// A stored employee record. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Server-assigned identifier
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Derived from first and last name at creation
    pub full_name: String,
    /// Normalized (trimmed, lower-cased) email
    pub email: String,
    pub job_title: String,
    pub salary: Option<u64>,
    pub age: Option<u8>,
    pub hire_date: DateTime<Utc>,
    /// Always `None`; nothing terminates an employee yet
    pub termination_date: Option<DateTime<Utc>>,
}

impl Employee {
    // == Constructor ==
    /// Builds the stored record for `fields` under the given id.
    pub(crate) fn from_new(id: Uuid, fields: NewEmployee) -> Self {
        let full_name = full_name(&fields.first_name, &fields.last_name);

        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            full_name,
            email: fields.email,
            job_title: fields.job_title,
            salary: fields.salary,
            age: fields.age,
            hire_date: fields.hire_date,
            termination_date: None,
        }
    }

    /// Location of this record under the versioned API.
    pub fn location(&self) -> String {
        format!("/api/v1/employee/{}", self.id)
    }
}

// == New Employee ==
/// Validated, normalized fields accepted by [`EmployeeStore::create`].
///
/// Produced by `CreateEmployeeRequest::validate`; strings are already trimmed
/// and `email` is already normalized.
///
/// [`EmployeeStore::create`]: super::EmployeeStore::create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: String,
    pub salary: Option<u64>,
    pub age: Option<u8>,
    pub hire_date: DateTime<Utc>,
}

/// Trims and lower-cases an email so it can be used as the uniqueness key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn full_name(first: &str, last: &str) -> String {
    format!("{} {}", first, last).trim().to_string()
}
