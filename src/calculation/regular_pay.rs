//! Regular pay calculation functionality.
//!
//! Regular pay is the hours worked at the plain hourly rate.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of calculating regular pay, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct RegularPayResult {
    /// Regular hours times the hourly rate.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates regular pay as `hours_worked × hourly_rate`.
///
/// No rounding is applied. A product too large for [`Decimal`] is reported
/// as an out-of-range `hourly_rate`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_regular_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_regular_pay(38, Decimal::from_str("28.54").unwrap(), 1).unwrap();
/// assert_eq!(result.amount, Decimal::from_str("1084.52").unwrap());
/// ```
pub fn calculate_regular_pay(
    hours_worked: u32,
    hourly_rate: Decimal,
    step_number: u32,
) -> EngineResult<RegularPayResult> {
    let amount = Decimal::from(hours_worked)
        .checked_mul(hourly_rate)
        .ok_or_else(|| EngineError::out_of_range("hourly_rate"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "regular_pay".to_string(),
        rule_name: "Regular Pay".to_string(),
        input: serde_json::json!({
            "hours_worked": hours_worked,
            "hourly_rate": hourly_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_pay": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{}h x ${} = ${}",
            hours_worked,
            hourly_rate.normalize(),
            amount.normalize()
        ),
    };

    Ok(RegularPayResult { amount, audit_step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_forty_hours_at_seventy_five() {
        let result = calculate_regular_pay(40, dec("75"), 1).unwrap();
        assert_eq!(result.amount, dec("3000"));
    }

    #[test]
    fn test_zero_hours_is_zero_pay() {
        let result = calculate_regular_pay(0, dec("75"), 1).unwrap();
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_zero_rate_is_zero_pay() {
        let result = calculate_regular_pay(40, Decimal::ZERO, 1).unwrap();
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_rate_is_not_rounded() {
        let result = calculate_regular_pay(3, dec("10.333"), 1).unwrap();
        assert_eq!(result.amount, dec("30.999"));
    }

    #[test]
    fn test_audit_step_records_inputs_and_output() {
        let result = calculate_regular_pay(40, dec("75.00"), 3).unwrap();

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "regular_pay");
        assert_eq!(result.audit_step.input["hours_worked"], 40);
        assert_eq!(
            result.audit_step.input["hourly_rate"].as_str().unwrap(),
            "75"
        );
        assert_eq!(
            result.audit_step.output["regular_pay"].as_str().unwrap(),
            "3000"
        );
        assert_eq!(result.audit_step.reasoning, "40h x $75 = $3000");
    }

    #[test]
    fn test_overflowing_product_is_out_of_range() {
        match calculate_regular_pay(2, Decimal::MAX, 1) {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "hourly_rate");
                assert_eq!(message, "is out of range");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
