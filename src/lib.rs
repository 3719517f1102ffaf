//! Payroll engine
//!
//! This crate turns employee records into pay breakdowns (regular pay,
//! overtime pay, gross pay, taxes, net pay) and sums them across a roster.
//! Around that pure core it provides an employee store seam with change
//! notifications, payroll reporting and CSV export, and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
