//! Employee model and related types.
//!
//! This module defines the stored [`Employee`] record together with the
//! [`NewEmployee`] and [`EmployeePatch`] shapes used to create and update it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::fields::{ensure_amount, ensure_object, optional_decimal, optional_hours, optional_text};
use super::pay_inputs::PayInputs;

/// Regular hours assumed when a new record does not state any.
pub const DEFAULT_HOURS_WORKED: u32 = 40;

/// An employee record as held by the employee store.
///
/// `id`, `created_at` and `updated_at` are assigned by the store; the
/// calculator only reads the numeric fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier assigned by the store.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Job title.
    pub position: String,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: String,
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
    /// When the store created the record.
    pub created_at: DateTime<Utc>,
    /// When the store last changed the record.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Returns the numeric fields the calculator works from.
    pub fn pay_inputs(&self) -> PayInputs {
        PayInputs {
            hourly_rate: self.hourly_rate,
            hours_worked: self.hours_worked,
            overtime_hours: self.overtime_hours,
            bonus: self.bonus,
            deductions: self.deductions,
        }
    }

    /// Regular plus overtime hours.
    pub fn total_hours(&self) -> u64 {
        u64::from(self.hours_worked) + u64::from(self.overtime_hours)
    }
}

fn default_hours_worked() -> u32 {
    DEFAULT_HOURS_WORKED
}

/// The fields a caller supplies to create an employee.
///
/// Numeric fields fall back to the same defaults as the entry form: 40
/// regular hours and zero for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Job title.
    pub position: String,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: String,
    /// Pay per regular hour.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Regular hours worked.
    #[serde(default = "default_hours_worked")]
    pub hours_worked: u32,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: u32,
    /// One-time addition to gross pay.
    #[serde(default)]
    pub bonus: Decimal,
    /// Amount subtracted from pay after tax.
    #[serde(default)]
    pub deductions: Decimal,
}

impl NewEmployee {
    /// Reads a new record from an untyped JSON body.
    ///
    /// Absent fields take the same defaults as deserialization. A field of
    /// the wrong type is reported by name, then [`NewEmployee::validate`]
    /// runs on the result.
    pub fn from_json(record: &Value) -> EngineResult<Self> {
        ensure_object(record)?;
        let new_employee = NewEmployee {
            name: optional_text(record, "name")?.unwrap_or_default(),
            email: optional_text(record, "email")?.unwrap_or_default(),
            position: optional_text(record, "position")?.unwrap_or_default(),
            department: optional_text(record, "department")?.unwrap_or_default(),
            hourly_rate: optional_decimal(record, "hourly_rate")?.unwrap_or_default(),
            hours_worked: optional_hours(record, "hours_worked")?.unwrap_or(DEFAULT_HOURS_WORKED),
            overtime_hours: optional_hours(record, "overtime_hours")?.unwrap_or_default(),
            bonus: optional_decimal(record, "bonus")?.unwrap_or_default(),
            deductions: optional_decimal(record, "deductions")?.unwrap_or_default(),
        };
        new_employee.validate()?;
        Ok(new_employee)
    }

    /// Checks that name, email and position are present and that no
    /// money field is negative.
    pub fn validate(&self) -> EngineResult<()> {
        ensure_present("name", &self.name)?;
        ensure_present("email", &self.email)?;
        ensure_present("position", &self.position)?;
        ensure_amount("hourly_rate", self.hourly_rate)?;
        ensure_amount("bonus", self.bonus)?;
        ensure_amount("deductions", self.deductions)?;
        Ok(())
    }

    /// Builds the stored record with the given id and timestamp.
    pub fn into_employee(self, id: Uuid, now: DateTime<Utc>) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            position: self.position,
            department: self.department,
            hourly_rate: self.hourly_rate,
            hours_worked: self.hours_worked,
            overtime_hours: self.overtime_hours,
            bonus: self.bonus,
            deductions: self.deductions,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update to an employee; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePatch {
    /// New full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// New department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// New hourly rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    /// New regular hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<u32>,
    /// New overtime hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_hours: Option<u32>,
    /// New bonus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<Decimal>,
    /// New deductions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deductions: Option<Decimal>,
}

impl EmployeePatch {
    /// Reads a partial update from an untyped JSON body; `null` counts as
    /// absent.
    pub fn from_json(record: &Value) -> EngineResult<Self> {
        ensure_object(record)?;
        let patch = EmployeePatch {
            name: optional_text(record, "name")?,
            email: optional_text(record, "email")?,
            position: optional_text(record, "position")?,
            department: optional_text(record, "department")?,
            hourly_rate: optional_decimal(record, "hourly_rate")?,
            hours_worked: optional_hours(record, "hours_worked")?,
            overtime_hours: optional_hours(record, "overtime_hours")?,
            bonus: optional_decimal(record, "bonus")?,
            deductions: optional_decimal(record, "deductions")?,
        };
        patch.validate()?;
        Ok(patch)
    }

    /// Applies the same rules as [`NewEmployee::validate`] to the fields
    /// this patch carries.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(name) = &self.name {
            ensure_present("name", name)?;
        }
        if let Some(email) = &self.email {
            ensure_present("email", email)?;
        }
        if let Some(position) = &self.position {
            ensure_present("position", position)?;
        }
        if let Some(rate) = self.hourly_rate {
            ensure_amount("hourly_rate", rate)?;
        }
        if let Some(bonus) = self.bonus {
            ensure_amount("bonus", bonus)?;
        }
        if let Some(deductions) = self.deductions {
            ensure_amount("deductions", deductions)?;
        }
        Ok(())
    }

    /// Copies every present field onto `employee` and stamps `updated_at`.
    pub fn apply_to(self, employee: &mut Employee, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(rate) = self.hourly_rate {
            employee.hourly_rate = rate;
        }
        if let Some(hours) = self.hours_worked {
            employee.hours_worked = hours;
        }
        if let Some(hours) = self.overtime_hours {
            employee.overtime_hours = hours;
        }
        if let Some(bonus) = self.bonus {
            employee.bonus = bonus;
        }
        if let Some(deductions) = self.deductions {
            employee.deductions = deductions;
        }
        employee.updated_at = now;
    }
}

fn ensure_present(field: &str, value: &str) -> EngineResult<()> {
    if value.trim().is_empty() {
        return Err(EngineError::invalid_input(field, "is required"));
    }
    Ok(())
}
