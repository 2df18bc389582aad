//! Core data models for the Tip Pool Allocation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allocation_record;
mod audit;
mod cash_count;
mod employee;

pub use allocation_record::{AllocationRecord, EmployeePayout, HistoryEntry};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use cash_count::CashCount;
pub use employee::Employee;
