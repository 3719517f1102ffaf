//! Payroll report: one breakdown per employee plus the totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{accumulate, compute_breakdown};
use crate::config::PayPolicy;
use crate::error::EngineResult;
use crate::models::{Employee, PayBreakdown, PayrollTotals};

/// An employee record paired with its freshly computed breakdown.
///
/// The record keeps the snake_case field names it has in the store and on
/// `/employees`; everything derived from it (breakdown, totals, average) is
/// camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// The stored record.
    pub employee: Employee,
    /// Pay computed from the record.
    pub breakdown: PayBreakdown,
}

/// Everything the payroll dashboard shows: rows, totals and average.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollReport {
    /// One row per employee, in store order.
    pub rows: Vec<ReportRow>,
    /// Breakdown components summed across all rows.
    pub totals: PayrollTotals,
    /// Total net pay divided by the employee count, zero when empty.
    pub average_net_pay: Decimal,
}

/// Computes every breakdown and the totals in a single pass.
pub fn build_report(employees: Vec<Employee>, policy: &PayPolicy) -> EngineResult<PayrollReport> {
    let mut rows = Vec::with_capacity(employees.len());
    let mut totals = PayrollTotals::default();

    for employee in employees {
        let breakdown = compute_breakdown(&employee, policy)?;
        totals = accumulate(totals, &employee, &breakdown)?;
        rows.push(ReportRow {
            employee,
            breakdown,
        });
    }

    Ok(PayrollReport {
        rows,
        average_net_pay: totals.average_net_pay(),
        totals,
    })
}
