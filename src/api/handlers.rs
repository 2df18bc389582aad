//! HTTP request handlers for the Tip Pool Allocation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::allocation::{
    AllocationOutcome, StaffHours, TotalsSnapshot, compute_totals, distribute_tips, parse_amount,
    validate_staff_hours,
};
use crate::error::EngineError;
use crate::models::{AllocationRecord, EmployeePayout};

use super::request::{AddEmployeeRequest, AllocationRequest, ReorderRequest};
use super::response::{AllocationPreview, ApiError, ApiErrorResponse, SavedAllocation};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/allocations/preview", post(preview_handler))
        .route("/allocations", post(save_handler))
        .route(
            "/employees",
            get(list_employees_handler).post(add_employee_handler),
        )
        .route("/employees/order", put(reorder_employees_handler))
        .route("/employees/:id", delete(remove_employee_handler))
        .route("/history", get(list_history_handler))
        .route("/history/:id", delete(delete_history_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Parses the request's free-text fields and joins hours onto the roster.
///
/// Employees with no hours entry in the request get an empty field, which
/// parses to zero under either policy.
fn assemble_inputs(
    state: &AppState,
    request: &AllocationRequest,
) -> Result<(TotalsSnapshot, Vec<StaffHours>), EngineError> {
    let policy = state.settings().numeric_policy;
    let cash = request.cash.parse(policy)?;
    let totals = compute_totals(&cash);

    let employees = state.roster().list_employees()?;
    let mut staff = Vec::with_capacity(employees.len());
    for employee in employees {
        let raw = request
            .hours
            .get(&employee.id)
            .map(String::as_str)
            .unwrap_or("");
        let hours = parse_amount(&format!("hours[{}]", employee.name), raw, policy)?;
        staff.push(StaffHours {
            employee_id: employee.id,
            employee_name: employee.name,
            hours,
        });
    }

    Ok((totals, staff))
}

fn preview_body(totals: TotalsSnapshot, outcome: AllocationOutcome) -> AllocationPreview {
    AllocationPreview {
        totals,
        tips: outcome.tips,
        remainder: outcome.remainder,
        adjusted: outcome.adjusted,
        trace: outcome.trace,
    }
}

/// Snapshots the computed distribution into an immutable record.
fn build_record(
    totals: &TotalsSnapshot,
    staff: &[StaffHours],
    outcome: &AllocationOutcome,
) -> AllocationRecord {
    let mut employee_data = BTreeMap::new();
    for (entry, tip) in staff.iter().zip(&outcome.tips) {
        employee_data.insert(
            entry.employee_name.clone(),
            EmployeePayout {
                hours: entry.hours,
                deserved_tip: tip.deserved_tip,
            },
        );
    }

    AllocationRecord {
        total_tips: totals.total_tips,
        sales_tax: totals.sales_tax,
        net_tips: totals.net_tips,
        remainder: outcome.remainder,
        employee_data,
        timestamp: Utc::now(),
    }
}

/// Handler for POST /allocations/preview.
///
/// Recomputes the full distribution from the submitted fields; the caller
/// re-posts after every edit.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing allocation preview");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, "Rejected preview payload");
            return (StatusCode::BAD_REQUEST, Json(rejection_error(rejection))).into_response();
        }
    };

    match assemble_inputs(&state, &request) {
        Ok((totals, staff)) => {
            let outcome = distribute_tips(totals.net_tips, &staff);
            info!(
                correlation_id = %correlation_id,
                employees = staff.len(),
                net_tips = %totals.net_tips,
                remainder = %outcome.remainder,
                adjusted = outcome.adjusted,
                "Preview computed"
            );
            Json(preview_body(totals, outcome)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Preview failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /allocations.
///
/// Validates hours at the confirmation boundary, recomputes the
/// distribution from the confirmed inputs, and persists the snapshot.
async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing allocation save");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, "Rejected save payload");
            return (StatusCode::BAD_REQUEST, Json(rejection_error(rejection))).into_response();
        }
    };

    let (totals, staff) = match assemble_inputs(&state, &request) {
        Ok(inputs) => inputs,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Save rejected on input");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    if let Err(err) = validate_staff_hours(&staff) {
        warn!(correlation_id = %correlation_id, error = %err, "Save rejected on hours");
        return ApiErrorResponse::from(err).into_response();
    }

    let outcome = distribute_tips(totals.net_tips, &staff);
    let record = build_record(&totals, &staff, &outcome);

    match state.history().save_record(&record) {
        Ok(id) => {
            info!(
                correlation_id = %correlation_id,
                record_id = %id,
                net_tips = %record.net_tips,
                remainder = %record.remainder,
                "Allocation saved"
            );
            (StatusCode::CREATED, Json(SavedAllocation { id })).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Allocation save failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.roster().list_employees() {
        Ok(employees) => Json(employees).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /employees.
async fn add_employee_handler(
    State(state): State<AppState>,
    Json(request): Json<AddEmployeeRequest>,
) -> impl IntoResponse {
    let name = request.name.trim();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiError::validation_error("Employee name must not be empty")),
        )
            .into_response();
    }

    match state.roster().add_employee(name) {
        Ok(employee) => {
            info!(employee_id = %employee.id, "Employee added");
            (StatusCode::CREATED, Json(employee)).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for DELETE /employees/{id}.
async fn remove_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.roster().remove_employee(id) {
        Ok(true) => {
            info!(employee_id = %id, "Employee removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::employee_not_found(id)),
        )
            .into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for PUT /employees/order.
async fn reorder_employees_handler(
    State(state): State<AppState>,
    Json(request): Json<ReorderRequest>,
) -> impl IntoResponse {
    match state.roster().reorder_employees(&request.order) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    limit: Option<usize>,
}

/// Handler for GET /history.
async fn list_history_handler(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(state.settings().history_limit);
    match state.history().list_records(limit) {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for DELETE /history/{id}.
async fn delete_history_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.history().delete_record(id) {
        Ok(true) => {
            info!(record_id = %id, "History record deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => (StatusCode::NOT_FOUND, Json(ApiError::record_not_found(id))).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}
