//! Storage traits.
//!
//! These traits abstract the storage implementation details away from the
//! engine and API layers, so different backends can be swapped in without
//! touching the allocation logic.

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{AllocationRecord, Employee, HistoryEntry};

/// Interface for roster storage operations.
///
/// The store owns ordering and identifier uniqueness: listings come back
/// sorted by the `order` field ascending, and ids are stable across calls.
pub trait RosterStore: Send + Sync {
    /// List all employees, ordered by their `order` field ascending.
    fn list_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Add an employee to the end of the roster and return the stored row.
    fn add_employee(&self, name: &str) -> EngineResult<Employee>;

    /// Remove an employee by id.
    /// Returns true if a row was found and removed, false otherwise.
    fn remove_employee(&self, id: Uuid) -> EngineResult<bool>;

    /// Reassign roster ordering to match the given id sequence.
    /// Every listed id must exist; unknown ids fail the whole call.
    fn reorder_employees(&self, ids: &[Uuid]) -> EngineResult<()>;
}

/// Interface for allocation history storage operations.
pub trait HistoryStore: Send + Sync {
    /// Persist a confirmed allocation record and return its assigned id.
    /// Records are immutable once stored.
    fn save_record(&self, record: &AllocationRecord) -> EngineResult<Uuid>;

    /// List stored records, most recent first, up to `limit` entries.
    fn list_records(&self, limit: usize) -> EngineResult<Vec<HistoryEntry>>;

    /// Delete a record by id.
    /// Returns true if a record was found and deleted, false otherwise.
    fn delete_record(&self, id: Uuid) -> EngineResult<bool>;
}
