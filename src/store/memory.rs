//! In-memory storage backends.
//!
//! These back the API layer and tests. Both stores are `Send + Sync` via an
//! interior `RwLock`; a poisoned lock surfaces as a `Storage` error rather
//! than a panic.

use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AllocationRecord, Employee, HistoryEntry};

use super::traits::{HistoryStore, RosterStore};

fn lock_error(what: &str) -> EngineError {
    EngineError::Storage {
        message: format!("{} lock poisoned", what),
    }
}

/// An in-memory roster store.
#[derive(Debug, Default)]
pub struct MemoryRosterStore {
    entries: RwLock<Vec<Employee>>,
}

impl MemoryRosterStore {
    /// Creates an empty roster store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster store pre-populated with the given names.
    ///
    /// Seed order becomes roster order, matching how a fresh deployment is
    /// initialized from the settings' seed list.
    pub fn with_seed<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let now = Utc::now();
        let entries = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Employee {
                id: Uuid::new_v4(),
                name: name.into(),
                order: index as u32,
                created_at: now,
            })
            .collect();

        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl RosterStore for MemoryRosterStore {
    fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        let entries = self.entries.read().map_err(|_| lock_error("roster"))?;
        let mut listed = entries.clone();
        listed.sort_by_key(|employee| employee.order);
        Ok(listed)
    }

    fn add_employee(&self, name: &str) -> EngineResult<Employee> {
        let mut entries = self.entries.write().map_err(|_| lock_error("roster"))?;
        let next_order = entries
            .iter()
            .map(|employee| employee.order)
            .max()
            .map_or(0, |max| max + 1);

        let employee = Employee {
            id: Uuid::new_v4(),
            name: name.to_string(),
            order: next_order,
            created_at: Utc::now(),
        };
        entries.push(employee.clone());
        Ok(employee)
    }

    fn remove_employee(&self, id: Uuid) -> EngineResult<bool> {
        let mut entries = self.entries.write().map_err(|_| lock_error("roster"))?;
        let before = entries.len();
        entries.retain(|employee| employee.id != id);
        Ok(entries.len() < before)
    }

    fn reorder_employees(&self, ids: &[Uuid]) -> EngineResult<()> {
        let mut entries = self.entries.write().map_err(|_| lock_error("roster"))?;

        // Validate the whole sequence before mutating anything.
        for id in ids {
            if !entries.iter().any(|employee| employee.id == *id) {
                return Err(EngineError::EmployeeNotFound { id: *id });
            }
        }

        for (index, id) in ids.iter().enumerate() {
            if let Some(employee) = entries.iter_mut().find(|employee| employee.id == *id) {
                employee.order = index as u32;
            }
        }
        Ok(())
    }
}

/// An in-memory allocation history store.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl MemoryHistoryStore {
    /// Creates an empty history store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn save_record(&self, record: &AllocationRecord) -> EngineResult<Uuid> {
        let mut entries = self.entries.write().map_err(|_| lock_error("history"))?;
        let id = Uuid::new_v4();
        entries.push(HistoryEntry {
            id,
            record: record.clone(),
        });
        Ok(id)
    }

    fn list_records(&self, limit: usize) -> EngineResult<Vec<HistoryEntry>> {
        let entries = self.entries.read().map_err(|_| lock_error("history"))?;
        let mut listed = entries.clone();
        listed.sort_by(|a, b| b.record.timestamp.cmp(&a.record.timestamp));
        listed.truncate(limit);
        Ok(listed)
    }

    fn delete_record(&self, id: Uuid) -> EngineResult<bool> {
        let mut entries = self.entries.write().map_err(|_| lock_error("history"))?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        Ok(entries.len() < before)
    }
}
