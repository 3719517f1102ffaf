//! Pay breakdown for a single employee.
//!
//! Chains the regular pay, overtime pay and tax rules into a
//! [`PayBreakdown`]. Inputs are validated first; any negative amount is
//! rejected with [`EngineError::InvalidInput`](crate::error::EngineError)
//! rather than carried into the arithmetic.

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Employee, PayBreakdown, PayInputs};

use super::overtime_pay::calculate_overtime_pay;
use super::regular_pay::calculate_regular_pay;
use super::tax::calculate_taxes;

/// A breakdown together with the audit steps that produced it.
#[derive(Debug, Clone)]
pub struct BreakdownResult {
    /// The computed pay components.
    pub breakdown: PayBreakdown,
    /// One step per rule, in application order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes the pay breakdown for an employee record.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_breakdown;
/// use payroll_engine::config::PayPolicy;
/// use payroll_engine::models::NewEmployee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = NewEmployee {
///     name: "Ada Lovelace".to_string(),
///     email: "ada@example.com".to_string(),
///     position: "Engineer".to_string(),
///     department: "R&D".to_string(),
///     hourly_rate: Decimal::from(75),
///     hours_worked: 40,
///     overtime_hours: 5,
///     bonus: Decimal::from(500),
///     deductions: Decimal::from(200),
/// }
/// .into_employee(uuid::Uuid::new_v4(), chrono::Utc::now());
///
/// let breakdown = compute_breakdown(&employee, &PayPolicy::default()).unwrap();
/// assert_eq!(breakdown.net_pay, Decimal::from_str("2846.875").unwrap());
/// ```
pub fn compute_breakdown(employee: &Employee, policy: &PayPolicy) -> EngineResult<PayBreakdown> {
    calculate_pay(&employee.pay_inputs(), policy)
}

/// Computes a breakdown straight from pay inputs.
pub fn calculate_pay(inputs: &PayInputs, policy: &PayPolicy) -> EngineResult<PayBreakdown> {
    Ok(calculate_pay_with_audit(inputs, policy)?.breakdown)
}

/// Computes a breakdown and keeps the audit step of every rule applied.
pub fn calculate_pay_with_audit(
    inputs: &PayInputs,
    policy: &PayPolicy,
) -> EngineResult<BreakdownResult> {
    inputs.validate()?;

    let mut audit_steps = Vec::with_capacity(4);
    let mut step_number: u32 = 1;

    let regular = calculate_regular_pay(inputs.hours_worked, inputs.hourly_rate, step_number)?;
    audit_steps.push(regular.audit_step);
    step_number += 1;

    let overtime = calculate_overtime_pay(
        inputs.overtime_hours,
        inputs.hourly_rate,
        policy.overtime_multiplier,
        step_number,
    )?;
    audit_steps.push(overtime.audit_step);
    step_number += 1;

    let gross_pay = regular
        .amount
        .checked_add(overtime.amount)
        .and_then(|pay| pay.checked_add(inputs.bonus))
        .ok_or_else(|| EngineError::out_of_range("bonus"))?;

    let taxes = calculate_taxes(gross_pay, policy.tax_rate, step_number)?;
    audit_steps.push(taxes.audit_step);
    step_number += 1;

    let net_pay = gross_pay
        .checked_sub(taxes.amount)
        .and_then(|pay| pay.checked_sub(inputs.deductions))
        .ok_or_else(|| EngineError::out_of_range("deductions"))?;
    audit_steps.push(net_pay_step(gross_pay, taxes.amount, inputs.deductions, net_pay, step_number));

    Ok(BreakdownResult {
        breakdown: PayBreakdown {
            regular_pay: regular.amount,
            overtime_pay: overtime.amount,
            gross_pay,
            taxes: taxes.amount,
            net_pay,
        },
        audit_steps,
    })
}

fn net_pay_step(
    gross_pay: Decimal,
    taxes: Decimal,
    deductions: Decimal,
    net_pay: Decimal,
    step_number: u32,
) -> AuditStep {
    let mut reasoning = format!(
        "${} - ${} - ${} = ${}",
        gross_pay.normalize(),
        taxes.normalize(),
        deductions.normalize(),
        net_pay.normalize()
    );
    if net_pay < Decimal::ZERO {
        reasoning.push_str(" (deductions exceed post-tax gross)");
    }

    AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "taxes": taxes.normalize().to_string(),
            "deductions": deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_pay": net_pay.normalize().to_string()
        }),
        reasoning,
    }
}
