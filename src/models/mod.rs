//! Core data models for the payroll engine.
//!
//! This module contains the employee record shapes exchanged with the store
//! and the derived pay models produced by the calculator.

mod breakdown;
mod employee;
mod fields;
mod pay_inputs;

pub use breakdown::{AuditStep, PayBreakdown, PayrollTotals};
pub use employee::{DEFAULT_HOURS_WORKED, Employee, EmployeePatch, NewEmployee};
pub use fields::MAX_AMOUNT;
pub use pay_inputs::PayInputs;
