//! Derived pay models.
//!
//! This module contains the [`PayBreakdown`] for a single employee, the
//! [`PayrollTotals`] summed across many, and the [`AuditStep`] each pay rule
//! records. None of these are persisted; they are recomputed from employee
//! records every time they are needed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pay components derived from one employee record.
///
/// Serialized with the field names `regularPay`, `overtimePay`, `grossPay`,
/// `taxes` and `netPay`, which the rendering and export layers rely on.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown {
///     regular_pay: Decimal::from(3000),
///     overtime_pay: Decimal::ZERO,
///     gross_pay: Decimal::from(3000),
///     taxes: Decimal::from(750),
///     net_pay: Decimal::from(2250),
/// };
/// let json = serde_json::to_value(&breakdown).unwrap();
/// assert_eq!(json["netPay"], "2250");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayBreakdown {
    /// Regular hours times the hourly rate.
    pub regular_pay: Decimal,
    /// Overtime hours times the hourly rate times the overtime multiplier.
    pub overtime_pay: Decimal,
    /// Regular pay plus overtime pay plus bonus.
    pub gross_pay: Decimal,
    /// Gross pay times the tax rate.
    pub taxes: Decimal,
    /// Gross pay minus taxes minus deductions. May be negative.
    pub net_pay: Decimal,
}

/// Breakdown components summed across a collection of employees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    /// Number of employee records aggregated.
    pub employee_count: u64,
    /// Regular plus overtime hours across all employees.
    pub total_hours: u64,
    /// Sum of regular pay.
    pub regular_pay: Decimal,
    /// Sum of overtime pay.
    pub overtime_pay: Decimal,
    /// Sum of bonuses.
    pub bonus: Decimal,
    /// Sum of gross pay.
    pub gross_pay: Decimal,
    /// Sum of taxes.
    pub taxes: Decimal,
    /// Sum of deductions.
    pub deductions: Decimal,
    /// Sum of net pay; this is the total net payroll.
    pub net_pay: Decimal,
}

impl PayrollTotals {
    /// Average net pay per employee, or zero when there are no employees.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayrollTotals;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PayrollTotals::default().average_net_pay(), Decimal::ZERO);
    /// ```
    pub fn average_net_pay(&self) -> Decimal {
        if self.employee_count == 0 {
            return Decimal::ZERO;
        }
        self.net_pay / Decimal::from(self.employee_count)
    }
}

/// A single step in the audit trail of a pay calculation.
///
/// Each step captures the input, output, and reasoning for one pay rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
