//! Overtime pay calculation functionality.
//!
//! Overtime hours are paid at the hourly rate scaled by the policy's
//! overtime multiplier (1.5 by default).

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of calculating overtime pay, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct OvertimePayResult {
    /// Overtime hours times the hourly rate times the multiplier.
    pub amount: Decimal,
    /// The rate each overtime hour was paid at.
    pub overtime_rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates overtime pay as `overtime_hours × hourly_rate × multiplier`.
///
/// Fails with an out-of-range `hourly_rate` or `overtime_hours` when a
/// product does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_overtime_pay(
///     5,
///     Decimal::from(75),
///     Decimal::from_str("1.5").unwrap(),
///     2,
/// )
/// .unwrap();
/// assert_eq!(result.amount, Decimal::from_str("562.5").unwrap());
/// ```
pub fn calculate_overtime_pay(
    overtime_hours: u32,
    hourly_rate: Decimal,
    overtime_multiplier: Decimal,
    step_number: u32,
) -> EngineResult<OvertimePayResult> {
    let overtime_rate = hourly_rate
        .checked_mul(overtime_multiplier)
        .ok_or_else(|| EngineError::out_of_range("hourly_rate"))?;
    let amount = Decimal::from(overtime_hours)
        .checked_mul(overtime_rate)
        .ok_or_else(|| EngineError::out_of_range("overtime_hours"))?;

    let reasoning = if overtime_hours == 0 {
        "No overtime hours worked".to_string()
    } else {
        format!(
            "{}h x ${} x {} = ${}",
            overtime_hours,
            hourly_rate.normalize(),
            overtime_multiplier.normalize(),
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "overtime_hours": overtime_hours,
            "hourly_rate": hourly_rate.normalize().to_string(),
            "multiplier": overtime_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_rate": overtime_rate.normalize().to_string(),
            "overtime_pay": amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(OvertimePayResult {
        amount,
        overtime_rate,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_time_and_a_half() {
        let result = calculate_overtime_pay(5, dec("75"), dec("1.5"), 1).unwrap();
        assert_eq!(result.overtime_rate, dec("112.5"));
        assert_eq!(result.amount, dec("562.5"));
    }

    #[test]
    fn test_custom_multiplier() {
        let result = calculate_overtime_pay(4, dec("30"), dec("2.0"), 1).unwrap();
        assert_eq!(result.amount, dec("240"));
    }

    #[test]
    fn test_no_overtime_hours() {
        let result = calculate_overtime_pay(0, dec("75"), dec("1.5"), 1).unwrap();
        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.audit_step.reasoning, "No overtime hours worked");
    }

    #[test]
    fn test_audit_reasoning_explains_calculation() {
        let result = calculate_overtime_pay(5, dec("75"), dec("1.5"), 2).unwrap();

        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "overtime_pay");
        assert_eq!(
            result.audit_step.input["multiplier"].as_str().unwrap(),
            "1.5"
        );
        assert_eq!(result.audit_step.reasoning, "5h x $75 x 1.5 = $562.5");
    }

    #[test]
    fn test_overflowing_product_is_out_of_range() {
        let result = calculate_overtime_pay(10, Decimal::MAX, dec("1.5"), 2);
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { ref field, .. }) if field == "hourly_rate"
        ));

        let result = calculate_overtime_pay(u32::MAX, dec("1000000000000"), dec("1000000000000000"), 2);
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { ref field, .. }) if field == "overtime_hours"
        ));
    }
}
