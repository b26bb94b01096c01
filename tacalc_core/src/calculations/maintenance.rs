//! # Maintenance Capacity
//!
//! Projects whether a team can keep maintaining its automated tests while
//! adding new ones every month.
//!
//! ## Method
//!
//! Each new test is assumed to cost as much upkeep as an average existing
//! one (`MT / N` hours per month). The extra load compounds: every month's
//! additions stay on top of the previous months'.
//!
//! ```text
//! maintenance = MT
//! for month in 1..=6:
//!     maintenance += (MT / N) * A
//!     potential[month] = TH - maintenance
//! can_afford = potential[1] > 0
//! ```
//!
//! Only the first month decides the verdict; months 2-6 show the trend.
//! With `N = 0` there is no average upkeep and no result.
//!
//! ## Example
//!
//! ```rust
//! use tacalc_core::calculations::maintenance::{calculate, MaintenanceInput};
//!
//! let input = MaintenanceInput::new(40.0, 10.0, 50, 5);
//! let result = calculate(&input).unwrap().expect("N > 0");
//! assert_eq!(result.potential[0], 29.0);
//! assert!(result.can_afford);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::require_non_negative;
use crate::errors::CalcResult;

/// Months covered by the projection
pub const PROJECTION_MONTHS: usize = 6;

/// Input parameters for the maintenance-capacity model.
///
/// ## JSON Example
///
/// ```json
/// {
///   "available_hours": 40.0,
///   "current_maintenance_hours": 10.0,
///   "total_tests": 50,
///   "new_tests_per_month": 5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceInput {
    /// TH: monthly hours available for maintenance and implementation
    pub available_hours: f64,

    /// MT: monthly hours spent maintaining the existing automated tests
    pub current_maintenance_hours: f64,

    /// N: count of existing automated tests
    pub total_tests: u32,

    /// A: count of new automated tests added each month
    pub new_tests_per_month: u32,
}

impl MaintenanceInput {
    pub fn new(
        available_hours: f64,
        current_maintenance_hours: f64,
        total_tests: u32,
        new_tests_per_month: u32,
    ) -> Self {
        MaintenanceInput {
            available_hours,
            current_maintenance_hours,
            total_tests,
            new_tests_per_month,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("available_hours", self.available_hours)?;
        require_non_negative("current_maintenance_hours", self.current_maintenance_hours)?;
        Ok(())
    }
}

/// Results from the maintenance-capacity model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceResult {
    /// Inputs the result was computed from
    pub input: MaintenanceInput,

    /// Maintenance hours added each month by the new tests, `(MT / N) * A`
    pub added_hours_per_month: f64,

    /// Headroom `P` for months 1..=6 (index 0 is month 1)
    pub potential: [f64; PROJECTION_MONTHS],

    /// Verdict, decided by month 1 alone: `potential[0] > 0`
    pub can_afford: bool,
}

impl MaintenanceResult {
    /// Headroom for a 1-based month number
    pub fn potential_for_month(&self, month: usize) -> Option<f64> {
        month
            .checked_sub(1)
            .and_then(|index| self.potential.get(index))
            .copied()
    }

    /// First month (1-based) with no headroom left, if any within the projection
    pub fn first_month_without_headroom(&self) -> Option<usize> {
        self.potential.iter().position(|p| *p <= 0.0).map(|i| i + 1)
    }
}

/// Project maintenance headroom over the next six months.
///
/// # Returns
///
/// * `Ok(Some(result))` - `N > 0`
/// * `Ok(None)` - `N = 0`, the average upkeep per test is undefined
/// * `Err(CalcError::InvalidInput)` - A value is negative or not finite
pub fn calculate(input: &MaintenanceInput) -> CalcResult<Option<MaintenanceResult>> {
    input.validate()?;

    if input.total_tests == 0 {
        return Ok(None);
    }

    let th = input.available_hours;
    let mt = input.current_maintenance_hours;
    let added = (mt / f64::from(input.total_tests)) * f64::from(input.new_tests_per_month);

    let mut potential = [0.0; PROJECTION_MONTHS];
    let mut maintenance = mt;
    for slot in potential.iter_mut() {
        maintenance += added;
        *slot = th - maintenance;
    }

    let can_afford = potential[0] > 0.0;

    debug!(
        available = th,
        maintenance = mt,
        added_per_month = added,
        can_afford,
        "maintenance capacity evaluated"
    );

    Ok(Some(MaintenanceResult {
        input: *input,
        added_hours_per_month: added,
        potential,
        can_afford,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_concrete_scenario() {
        // Month 1: 40 - (10 + (10 / 50) * 5) = 29
        let result = calculate(&MaintenanceInput::new(40.0, 10.0, 50, 5)).unwrap().unwrap();
        assert_relative_eq!(result.added_hours_per_month, 1.0);
        assert_relative_eq!(result.potential[0], 29.0);
        assert_relative_eq!(result.potential[5], 24.0);
        assert!(result.can_afford);
        assert_eq!(result.first_month_without_headroom(), None);
    }

    #[test]
    fn test_no_result_without_tests() {
        assert!(calculate(&MaintenanceInput::new(40.0, 10.0, 0, 5)).unwrap().is_none());
    }

    #[test]
    fn test_load_compounds_month_over_month() {
        // 2 hours added per month: 10 - (6 + 2k)
        let result = calculate(&MaintenanceInput::new(10.0, 6.0, 3, 1)).unwrap().unwrap();
        let expected = [2.0, 0.0, -2.0, -4.0, -6.0, -8.0];
        for (actual, expected) in result.potential.iter().zip(expected) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-9);
        }
        assert!(result.can_afford);
        assert_eq!(result.first_month_without_headroom(), Some(2));
    }

    #[test]
    fn test_verdict_uses_first_month_only() {
        // Month 1 affordable, month 6 deep in the red: verdict stays "afford"
        let result = calculate(&MaintenanceInput::new(11.5, 10.0, 10, 1)).unwrap().unwrap();
        assert!(result.potential[0] > 0.0);
        assert!(result.potential[5] < 0.0);
        assert!(result.can_afford);

        // Exactly zero headroom is not affordable
        let result = calculate(&MaintenanceInput::new(11.0, 10.0, 10, 1)).unwrap().unwrap();
        assert_relative_eq!(result.potential[0], 0.0);
        assert!(!result.can_afford);
    }

    #[test]
    fn test_no_new_tests_keeps_headroom_flat() {
        let result = calculate(&MaintenanceInput::new(20.0, 5.0, 100, 0)).unwrap().unwrap();
        assert!(result.potential.iter().all(|p| *p == 15.0));
    }

    #[test]
    fn test_potential_for_month() {
        let result = calculate(&MaintenanceInput::new(40.0, 10.0, 50, 5)).unwrap().unwrap();
        assert_eq!(result.potential_for_month(1), Some(result.potential[0]));
        assert_eq!(result.potential_for_month(6), Some(result.potential[5]));
        assert_eq!(result.potential_for_month(0), None);
        assert_eq!(result.potential_for_month(7), None);
    }

    #[test]
    fn test_invalid_input() {
        assert!(calculate(&MaintenanceInput::new(-1.0, 10.0, 50, 5)).is_err());
        assert!(calculate(&MaintenanceInput::new(40.0, f64::NAN, 50, 5)).is_err());
    }

    proptest! {
        #[test]
        fn prop_projection_formula(
            th in 0.0f64..500.0,
            mt in 0.0f64..500.0,
            n in 1u32..1000,
            a in 0u32..100,
        ) {
            let result = calculate(&MaintenanceInput::new(th, mt, n, a)).unwrap().unwrap();
            let step = (mt / f64::from(n)) * f64::from(a);

            for i in 1..=PROJECTION_MONTHS {
                let expected = th - (mt + step * i as f64);
                prop_assert!((result.potential[i - 1] - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
            }
            if a > 0 && mt > 0.0 {
                prop_assert!(result.potential.windows(2).all(|w| w[1] <= w[0]));
            }
            prop_assert_eq!(result.can_afford, result.potential[0] > 0.0);
        }
    }
}
