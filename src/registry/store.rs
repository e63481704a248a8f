//! Employee Store Module
//!
//! Primary map by id plus a secondary index by normalized email, owned by one
//! value so a single lock covers the uniqueness check and the insert.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::registry::{Employee, NewEmployee};

// == Employee Store ==
/// In-memory employee registry.
///
/// Shared as `Arc<RwLock<EmployeeStore>>`; `create` needs `&mut self`, so
/// concurrent creations are serialized by the write lock.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    /// Employees by id
    by_id: HashMap<Uuid, Employee>,
    /// Normalized email -> id
    by_email: HashMap<String, Uuid>,
}

impl EmployeeStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Find All ==
    /// Returns a copy of every stored employee, in no particular order.
    pub fn find_all(&self) -> Vec<Employee> {
        self.by_id.values().cloned().collect()
    }

    // == Find By Id ==
    /// Returns the employee with the given id, if any.
    pub fn find_by_id(&self, id: Uuid) -> Option<Employee> {
        self.by_id.get(&id).cloned()
    }

    // == Create ==
    /// Stores a new employee built from already validated fields.
    ///
    /// Fails with [`ApiError::Duplicate`] if the normalized email is taken;
    /// the store is left unchanged in that case.
    pub fn create(&mut self, fields: NewEmployee) -> Result<Employee> {
        self.insert(Uuid::new_v4(), fields)
    }

    fn insert(&mut self, id: Uuid, fields: NewEmployee) -> Result<Employee> {
        if self.by_email.contains_key(&fields.email) {
            return Err(ApiError::Duplicate(
                "Employee with email already exists".to_string(),
            ));
        }

        if self.by_id.contains_key(&id) {
            return Err(ApiError::Internal(format!(
                "Generated employee id {} already in use",
                id
            )));
        }

        let employee = Employee::from_new(id, fields);
        self.by_email.insert(employee.email.clone(), id);
        self.by_id.insert(id, employee.clone());

        Ok(employee)
    }

    // == Length ==
    /// Returns the number of stored employees.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    // == Is Empty ==
    /// Returns true if no employees are stored.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
