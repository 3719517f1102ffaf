//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for managing employee records
//! and computing, reporting and exporting payroll.

mod handlers;
mod response;
mod state;

pub use handlers::{EXPORT_FILE_NAME, create_router};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
