//! The numeric inputs to a pay calculation.
//!
//! [`PayInputs`] is the slice of an employee record the calculator reads.
//! It can be taken from a typed [`Employee`](super::Employee) or parsed from
//! an untyped JSON record, in which case every field is checked for presence,
//! numeric type and sign before any arithmetic happens.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EngineResult;

use super::fields::{decimal_value, ensure_amount, hours_value, required};

/// The five numeric fields a pay breakdown is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayInputs {
    /// Pay per regular hour.
    pub hourly_rate: Decimal,
    /// Regular hours worked.
    pub hours_worked: u32,
    /// Overtime hours worked.
    pub overtime_hours: u32,
    /// One-time addition to gross pay.
    pub bonus: Decimal,
    /// Amount subtracted from pay after tax.
    pub deductions: Decimal,
}

impl PayInputs {
    /// Parses pay inputs out of a raw JSON record.
    ///
    /// Fields are checked in the order `hourly_rate`, `hours_worked`,
    /// `overtime_hours`, `bonus`, `deductions`; the first bad field is
    /// reported as [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput). Decimal fields accept JSON
    /// numbers or numeric strings. Hour fields must be non-negative integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::error::EngineError;
    /// use payroll_engine::models::PayInputs;
    ///
    /// let record = serde_json::json!({
    ///     "hourly_rate": "75",
    ///     "hours_worked": 40,
    ///     "overtime_hours": 5,
    ///     "bonus": 500,
    /// });
    ///
    /// match PayInputs::from_json(&record) {
    ///     Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "deductions"),
    ///     other => panic!("expected InvalidInput, got {:?}", other),
    /// }
    /// ```
    pub fn from_json(record: &Value) -> EngineResult<Self> {
        let inputs = PayInputs {
            hourly_rate: decimal_value("hourly_rate", required(record, "hourly_rate")?)?,
            hours_worked: hours_value("hours_worked", required(record, "hours_worked")?)?,
            overtime_hours: hours_value("overtime_hours", required(record, "overtime_hours")?)?,
            bonus: decimal_value("bonus", required(record, "bonus")?)?,
            deductions: decimal_value("deductions", required(record, "deductions")?)?,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Checks that every decimal input is non-negative and at most
    /// [`MAX_AMOUNT`](super::MAX_AMOUNT).
    pub fn validate(&self) -> EngineResult<()> {
        ensure_amount("hourly_rate", self.hourly_rate)?;
        ensure_amount("bonus", self.bonus)?;
        ensure_amount("deductions", self.deductions)?;
        Ok(())
    }
}
