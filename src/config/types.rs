//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Flat tax rate applied to gross pay when no policy file overrides it.
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Overtime multiplier applied to the hourly rate when no policy file
/// overrides it.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Metadata about the pay policy.
///
/// Identifies which jurisdiction and revision the rates were taken from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyMetadata {
    /// Short identifier for the policy (e.g., "default").
    pub code: String,
    /// Human-readable name of the policy.
    pub name: String,
    /// Version or effective date of the policy.
    pub version: String,
    /// Jurisdiction the rates apply to.
    #[serde(default)]
    pub jurisdiction: Option<String>,
}

/// The rates a pay breakdown is computed with.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayPolicy::default();
/// assert_eq!(policy.tax_rate, Decimal::new(25, 2));
/// assert_eq!(policy.overtime_multiplier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPolicy {
    /// Fraction of gross pay withheld as tax, between 0 and 1.
    pub tax_rate: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

impl PayPolicy {
    /// Checks the tax rate lies in `[0, 1]` and the overtime multiplier is
    /// not negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(EngineError::InvalidPolicy {
                field: "tax_rate".to_string(),
                message: format!("must be between 0 and 1, got {}", self.tax_rate),
            });
        }
        if self.overtime_multiplier < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: "overtime_multiplier".to_string(),
                message: format!("must not be negative, got {}", self.overtime_multiplier),
            });
        }
        Ok(())
    }
}

/// Policy configuration file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Policy metadata.
    pub metadata: PolicyMetadata,
    /// Rates in force.
    pub rates: PayPolicy,
}
