//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_pay_with_audit;
use crate::models::{EmployeePatch, NewEmployee, PayInputs};
use crate::report::{build_report, export_csv};
use crate::store::RosterStatus;

use super::response::{ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// File name offered to clients downloading the CSV export.
pub const EXPORT_FILE_NAME: &str = "payroll_export.csv";

type ApiResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            patch(update_employee).delete(delete_employee),
        )
        .route("/calculate", post(calculate_handler))
        .route("/payroll", get(payroll_report))
        .route("/payroll/export.csv", get(export_payroll))
        .route("/status", get(roster_status))
        .with_state(state)
}

/// Handler for GET /employees.
async fn list_employees(State(state): State<AppState>) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let employees = state.store().list().await.inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "List employees failed")
    })?;

    info!(
        correlation_id = %correlation_id,
        employee_count = employees.len(),
        "Employees listed"
    );
    Ok(Json(employees).into_response())
}

/// Handler for POST /employees.
///
/// Reads the body as raw JSON so a bad field is reported by name.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let Json(record) =
        payload.map_err(|r| ApiErrorResponse::from_json_rejection(r, correlation_id))?;
    let new_employee = NewEmployee::from_json(&record).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected employee record")
    })?;

    let employee = state.store().insert(new_employee).await.inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Create employee failed")
    })?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)).into_response())
}

/// Handler for PATCH /employees/:id.
async fn update_employee(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(ApiErrorResponse::from_path_rejection)?;
    let Json(record) =
        payload.map_err(|r| ApiErrorResponse::from_json_rejection(r, correlation_id))?;
    let patch = EmployeePatch::from_json(&record).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, employee_id = %id, error = %err, "Rejected employee update")
    })?;

    let employee = state.store().update(id, patch).await.inspect_err(|err| {
        warn!(correlation_id = %correlation_id, employee_id = %id, error = %err, "Update employee failed")
    })?;

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee updated");
    Ok(Json(employee).into_response())
}

/// Handler for DELETE /employees/:id.
async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(ApiErrorResponse::from_path_rejection)?;

    state.store().delete(id).await.inspect_err(|err| {
        warn!(correlation_id = %correlation_id, employee_id = %id, error = %err, "Delete employee failed")
    })?;

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for POST /calculate.
///
/// Accepts a raw employee record so that missing or non-numeric fields are
/// reported by name instead of as a generic deserialization failure.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let Json(record) =
        payload.map_err(|r| ApiErrorResponse::from_json_rejection(r, correlation_id))?;

    let start_time = Instant::now();
    let inputs = PayInputs::from_json(&record).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected calculation input")
    })?;
    let result = calculate_pay_with_audit(&inputs, state.policy())?;

    info!(
        correlation_id = %correlation_id,
        gross_pay = %result.breakdown.gross_pay,
        net_pay = %result.breakdown.net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    Ok(Json(CalculationResponse {
        calculation_id: correlation_id,
        inputs,
        policy: *state.policy(),
        breakdown: result.breakdown,
        audit_steps: result.audit_steps,
    })
    .into_response())
}

/// Handler for GET /payroll.
async fn payroll_report(State(state): State<AppState>) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let employees = state.store().list().await?;
    let report = build_report(employees, state.policy()).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Payroll report failed")
    })?;

    info!(
        correlation_id = %correlation_id,
        employee_count = report.totals.employee_count,
        total_net_pay = %report.totals.net_pay,
        "Payroll report built"
    );
    Ok(Json(report).into_response())
}

/// Handler for GET /payroll/export.csv.
async fn export_payroll(State(state): State<AppState>) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let employees = state.store().list().await?;
    let csv = export_csv(&employees, state.policy()).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Payroll export failed")
    })?;

    info!(
        correlation_id = %correlation_id,
        employee_count = employees.len(),
        "Payroll exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        csv,
    )
        .into_response())
}

/// Handler for GET /status.
async fn roster_status(State(state): State<AppState>) -> Json<RosterStatus> {
    Json(state.roster().status().await)
}
