//! Flat, labeled payroll rows for spreadsheet export.
//!
//! This is the only place in the crate that turns money into text. Amounts
//! are rounded half away from zero to two places and prefixed with `$`.

use std::io::Write;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::info;

use crate::calculation::compute_breakdown;
use crate::config::PayPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Column labels, in export order.
pub const EXPORT_HEADERS: [&str; 13] = [
    "Name",
    "Position",
    "Department",
    "Hours Worked",
    "Overtime Hours",
    "Hourly Rate",
    "Regular Pay",
    "Overtime Pay",
    "Bonus",
    "Gross Pay",
    "Taxes",
    "Deductions",
    "Net Pay",
];

/// One employee's line in a payroll export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollRow {
    /// Name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Position.
    #[serde(rename = "Position")]
    pub position: String,
    /// Department.
    #[serde(rename = "Department")]
    pub department: String,
    /// Hours Worked.
    #[serde(rename = "Hours Worked")]
    pub hours_worked: u32,
    /// Overtime Hours.
    #[serde(rename = "Overtime Hours")]
    pub overtime_hours: u32,
    /// Hourly Rate.
    #[serde(rename = "Hourly Rate")]
    pub hourly_rate: String,
    /// Regular Pay.
    #[serde(rename = "Regular Pay")]
    pub regular_pay: String,
    /// Overtime Pay.
    #[serde(rename = "Overtime Pay")]
    pub overtime_pay: String,
    /// Bonus.
    #[serde(rename = "Bonus")]
    pub bonus: String,
    /// Gross Pay.
    #[serde(rename = "Gross Pay")]
    pub gross_pay: String,
    /// Taxes.
    #[serde(rename = "Taxes")]
    pub taxes: String,
    /// Deductions.
    #[serde(rename = "Deductions")]
    pub deductions: String,
    /// Net Pay.
    #[serde(rename = "Net Pay")]
    pub net_pay: String,
}

/// Formats an amount as dollars with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::report::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("1015.625").unwrap()), "$1015.63");
/// assert_eq!(format_currency(Decimal::from(-425)), "-$425.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", rounded.abs())
    } else {
        format!("${}", rounded.abs())
    }
}

/// Builds one export row per employee.
///
/// Fails with `ExportError` when there is nothing to export.
pub fn export_rows(employees: &[Employee], policy: &PayPolicy) -> EngineResult<Vec<PayrollRow>> {
    if employees.is_empty() {
        return Err(EngineError::ExportError {
            message: "no employees to export".to_string(),
        });
    }

    employees
        .iter()
        .map(|employee| {
            let pay = compute_breakdown(employee, policy)?;
            Ok(PayrollRow {
                name: employee.name.clone(),
                position: employee.position.clone(),
                department: employee.department.clone(),
                hours_worked: employee.hours_worked,
                overtime_hours: employee.overtime_hours,
                hourly_rate: format_currency(employee.hourly_rate),
                regular_pay: format_currency(pay.regular_pay),
                overtime_pay: format_currency(pay.overtime_pay),
                bonus: format_currency(employee.bonus),
                gross_pay: format_currency(pay.gross_pay),
                taxes: format_currency(pay.taxes),
                deductions: format_currency(employee.deductions),
                net_pay: format_currency(pay.net_pay),
            })
        })
        .collect()
}

/// Writes rows as CSV with a header line of [`EXPORT_HEADERS`].
pub fn write_csv<W: Write>(rows: &[PayrollRow], writer: W) -> EngineResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row).map_err(export_error)?;
    }
    csv_writer.flush().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Renders the payroll of `employees` as a CSV document.
pub fn export_csv(employees: &[Employee], policy: &PayPolicy) -> EngineResult<String> {
    let rows = export_rows(employees, policy)?;
    let mut buffer = Vec::new();
    write_csv(&rows, &mut buffer)?;

    info!(rows = rows.len(), bytes = buffer.len(), "Exported payroll");
    String::from_utf8(buffer).map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

fn export_error(err: csv::Error) -> EngineError {
    EngineError::ExportError {
        message: err.to_string(),
    }
}
