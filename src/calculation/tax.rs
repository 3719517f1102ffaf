//! Tax calculation functionality.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of calculating taxes, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// Gross pay times the tax rate.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates taxes as a flat `tax_rate` share of gross pay.
///
/// A product too large for [`Decimal`] is reported as an out-of-range
/// `gross_pay`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_taxes;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_taxes(
///     Decimal::from_str("4062.5").unwrap(),
///     Decimal::from_str("0.25").unwrap(),
///     3,
/// )
/// .unwrap();
/// assert_eq!(result.amount, Decimal::from_str("1015.625").unwrap());
/// ```
pub fn calculate_taxes(
    gross_pay: Decimal,
    tax_rate: Decimal,
    step_number: u32,
) -> EngineResult<TaxResult> {
    let amount = gross_pay
        .checked_mul(tax_rate)
        .ok_or_else(|| EngineError::out_of_range("gross_pay"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "flat_tax".to_string(),
        rule_name: "Flat Tax".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "tax_rate": tax_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "taxes": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} = ${}",
            gross_pay.normalize(),
            tax_rate.normalize(),
            amount.normalize()
        ),
    };

    Ok(TaxResult { amount, audit_step })
}
