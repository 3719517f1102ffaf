//! Calculation logic for the payroll engine.
//!
//! This module contains the pay rules (regular pay, overtime pay, flat tax),
//! the breakdown that chains them for one employee, and the aggregation of
//! breakdowns across a collection. Everything here is pure: no I/O, no shared
//! state, safe to call from any number of tasks at once.

mod aggregate;
mod breakdown;
mod overtime_pay;
mod regular_pay;
mod tax;

pub use aggregate::{accumulate, aggregate};
pub use breakdown::{
    BreakdownResult, calculate_pay, calculate_pay_with_audit, compute_breakdown,
};
pub use overtime_pay::{OvertimePayResult, calculate_overtime_pay};
pub use regular_pay::{RegularPayResult, calculate_regular_pay};
pub use tax::{TaxResult, calculate_taxes};
