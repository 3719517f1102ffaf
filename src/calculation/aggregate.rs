//! Aggregation of pay breakdowns across employees.

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayBreakdown, PayrollTotals};

use super::breakdown::compute_breakdown;

/// Sums the breakdown of every employee into [`PayrollTotals`].
///
/// The result does not depend on the order of `employees`. An empty slice
/// yields all-zero totals. The first record that fails validation aborts the
/// reduction with that record's error.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate;
/// use payroll_engine::config::PayPolicy;
/// use rust_decimal::Decimal;
///
/// let totals = aggregate(&[], &PayPolicy::default()).unwrap();
/// assert_eq!(totals.employee_count, 0);
/// assert_eq!(totals.average_net_pay(), Decimal::ZERO);
/// ```
pub fn aggregate(employees: &[Employee], policy: &PayPolicy) -> EngineResult<PayrollTotals> {
    employees
        .iter()
        .try_fold(PayrollTotals::default(), |totals, employee| {
            let breakdown = compute_breakdown(employee, policy)?;
            accumulate(totals, employee, &breakdown)
        })
}

/// Adds one employee and their breakdown to running totals.
///
/// A running sum that no longer fits in a [`Decimal`] is reported as an
/// out-of-range field named after the total.
pub fn accumulate(
    totals: PayrollTotals,
    employee: &Employee,
    breakdown: &PayBreakdown,
) -> EngineResult<PayrollTotals> {
    Ok(PayrollTotals {
        employee_count: totals.employee_count + 1,
        total_hours: totals.total_hours + employee.total_hours(),
        regular_pay: add(totals.regular_pay, breakdown.regular_pay, "regular_pay")?,
        overtime_pay: add(totals.overtime_pay, breakdown.overtime_pay, "overtime_pay")?,
        bonus: add(totals.bonus, employee.bonus, "bonus")?,
        gross_pay: add(totals.gross_pay, breakdown.gross_pay, "gross_pay")?,
        taxes: add(totals.taxes, breakdown.taxes, "taxes")?,
        deductions: add(totals.deductions, employee.deductions, "deductions")?,
        net_pay: add(totals.net_pay, breakdown.net_pay, "net_pay")?,
    })
}

fn add(total: Decimal, amount: Decimal, field: &str) -> EngineResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| EngineError::out_of_range(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewEmployee;
    use chrono::Utc;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(
        rate: &str,
        hours: u32,
        overtime: u32,
        bonus: &str,
        deductions: &str,
    ) -> Employee {
        NewEmployee {
            name: "Test Employee".to_string(),
            email: "test@example.com".to_string(),
            position: "Analyst".to_string(),
            department: "Finance".to_string(),
            hourly_rate: dec(rate),
            hours_worked: hours,
            overtime_hours: overtime,
            bonus: dec(bonus),
            deductions: dec(deductions),
        }
        .into_employee(Uuid::new_v4(), Utc::now())
    }

    #[test]
    fn test_empty_input_yields_zero_totals() {
        let totals = aggregate(&[], &PayPolicy::default()).unwrap();
        assert_eq!(totals, PayrollTotals::default());
        assert_eq!(totals.average_net_pay(), Decimal::ZERO);
    }

    #[test]
    fn test_single_employee_matches_breakdown() {
        let employee = create_test_employee("75", 40, 5, "500", "200");
        let policy = PayPolicy::default();
        let breakdown = compute_breakdown(&employee, &policy).unwrap();
        let totals = aggregate(std::slice::from_ref(&employee), &policy).unwrap();

        assert_eq!(totals.employee_count, 1);
        assert_eq!(totals.total_hours, 45);
        assert_eq!(totals.regular_pay, breakdown.regular_pay);
        assert_eq!(totals.overtime_pay, breakdown.overtime_pay);
        assert_eq!(totals.gross_pay, breakdown.gross_pay);
        assert_eq!(totals.taxes, breakdown.taxes);
        assert_eq!(totals.net_pay, breakdown.net_pay);
        assert_eq!(totals.bonus, dec("500"));
        assert_eq!(totals.deductions, dec("200"));
    }

    #[test]
    fn test_two_employees_total_and_average() {
        // Second record: gross 1600, taxes 400, deductions 200 -> net 1000
        let first = create_test_employee("75", 40, 5, "500", "200");
        let second = create_test_employee("40", 40, 0, "0", "200");
        let policy = PayPolicy::default();

        assert_eq!(compute_breakdown(&second, &policy).unwrap().net_pay, dec("1000"));

        let totals = aggregate(&[first, second], &policy).unwrap();
        assert_eq!(totals.employee_count, 2);
        assert_eq!(totals.net_pay, dec("3846.875"));
        assert_eq!(totals.average_net_pay(), dec("1923.4375"));
        assert_eq!(totals.total_hours, 85);
    }

    #[test]
    fn test_order_does_not_change_totals() {
        let employees = vec![
            create_test_employee("75", 40, 5, "500", "200"),
            create_test_employee("22.50", 38, 2, "0", "15.75"),
            create_test_employee("0", 0, 0, "0", "0"),
            create_test_employee("105.10", 20, 12, "1000", "3000"),
        ];
        let mut reversed = employees.clone();
        reversed.reverse();

        let policy = PayPolicy::default();
        assert_eq!(
            aggregate(&employees, &policy).unwrap(),
            aggregate(&reversed, &policy).unwrap()
        );
    }

    #[test]
    fn test_invalid_record_aborts_aggregation() {
        let mut bad = create_test_employee("75", 40, 0, "0", "0");
        bad.bonus = dec("-1");
        let employees = vec![create_test_employee("75", 40, 0, "0", "0"), bad];

        match aggregate(&employees, &PayPolicy::default()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "bonus"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_total_is_out_of_range() {
        let employee = create_test_employee("1", 1, 0, "0", "0");
        let breakdown = compute_breakdown(&employee, &PayPolicy::default()).unwrap();
        let totals = PayrollTotals {
            regular_pay: Decimal::MAX,
            ..Default::default()
        };

        match accumulate(totals, &employee, &breakdown) {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "regular_pay");
                assert_eq!(message, "is out of range");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
