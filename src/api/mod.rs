//! HTTP API module for the Tip Pool Allocation Engine.
//!
//! This module provides the REST endpoints for previewing and confirming
//! tip distributions, managing the roster, and browsing the saved history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AddEmployeeRequest, AllocationRequest, CashInput, ReorderRequest};
pub use response::{AllocationPreview, ApiError, SavedAllocation};
pub use state::AppState;
