//! # Stored Inputs
//!
//! The fixed set of persisted input identifiers, the input boundary that
//! keeps negative numbers away from the models, and a typed snapshot of
//! the whole record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::store::InputStore;

/// Identifier of a persisted input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKey {
    /// Manual run time of the whole suite, hours
    ManualTestExecutionTime,
    /// Automated run time of the whole suite, minutes
    AutomatedTestExecutionTimeMin,
    /// One-off effort to build the automation, hours
    AutomationDevelopmentTime,
    /// Break-even: initial investment, hours
    InitialInvestment,
    /// Break-even: time saved per automated run, hours
    TimeSavingsPerRun,
    /// TH
    MonthlyMaintenanceBudget,
    /// MT
    MonthlyMaintenanceUsed,
    /// N
    TotalTestCount,
    /// A
    NewTestsPerMonth,
}

impl InputKey {
    /// Every key, in display order
    pub const ALL: [InputKey; 9] = [
        InputKey::ManualTestExecutionTime,
        InputKey::AutomatedTestExecutionTimeMin,
        InputKey::AutomationDevelopmentTime,
        InputKey::InitialInvestment,
        InputKey::TimeSavingsPerRun,
        InputKey::MonthlyMaintenanceBudget,
        InputKey::MonthlyMaintenanceUsed,
        InputKey::TotalTestCount,
        InputKey::NewTestsPerMonth,
    ];

    /// The identifier used in the persisted record
    pub fn as_str(self) -> &'static str {
        match self {
            InputKey::ManualTestExecutionTime => "manual_test_execution_time",
            InputKey::AutomatedTestExecutionTimeMin => "automated_test_execution_time_min",
            InputKey::AutomationDevelopmentTime => "automation_development_time",
            InputKey::InitialInvestment => "initial_investment",
            InputKey::TimeSavingsPerRun => "time_savings_per_run",
            InputKey::MonthlyMaintenanceBudget => "monthly_maintenance_budget",
            InputKey::MonthlyMaintenanceUsed => "monthly_maintenance_used",
            InputKey::TotalTestCount => "total_test_count",
            InputKey::NewTestsPerMonth => "new_tests_per_month",
        }
    }

    /// Parse a persisted identifier.
    pub fn parse(key: &str) -> CalcResult<Self> {
        InputKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| CalcError::unknown_key(key))
    }

    /// Whether the value is a count (stored as a number, used as an integer)
    pub fn is_count(self) -> bool {
        matches!(self, InputKey::TotalTestCount | InputKey::NewTestsPerMonth)
    }
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKey {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputKey::parse(s)
    }
}

/// Apply the input boundary: negative values become 0, NaN and infinities
/// are rejected.
pub fn clamp_input(key: InputKey, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            key.as_str(),
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    Ok(value.max(0.0))
}

/// Convert a stored number to a count. Fractions are truncated.
fn to_count(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.trunc().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// All inputs read from the store at one point in time (missing = 0).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub manual_hours: f64,
    pub automated_minutes: f64,
    pub development_hours: f64,
    pub investment_hours: f64,
    pub savings_per_run_hours: f64,
    pub available_hours: f64,
    pub current_maintenance_hours: f64,
    pub total_tests: u32,
    pub new_tests_per_month: u32,
}

impl InputSnapshot {
    /// Read every key from `store` in a single load.
    pub fn from_store(store: &InputStore) -> Self {
        let record = store.load();
        let value = |key: InputKey| {
            record
                .get(key.as_str())
                .copied()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0)
                .max(0.0)
        };

        InputSnapshot {
            manual_hours: value(InputKey::ManualTestExecutionTime),
            automated_minutes: value(InputKey::AutomatedTestExecutionTimeMin),
            development_hours: value(InputKey::AutomationDevelopmentTime),
            investment_hours: value(InputKey::InitialInvestment),
            savings_per_run_hours: value(InputKey::TimeSavingsPerRun),
            available_hours: value(InputKey::MonthlyMaintenanceBudget),
            current_maintenance_hours: value(InputKey::MonthlyMaintenanceUsed),
            total_tests: to_count(value(InputKey::TotalTestCount)),
            new_tests_per_month: to_count(value(InputKey::NewTestsPerMonth)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_key_roundtrip() {
        for key in InputKey::ALL {
            assert_eq!(InputKey::parse(key.as_str()).unwrap(), key);
            assert_eq!(key.to_string().parse::<InputKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = InputKey::parse("manual_time").unwrap_err();
        assert_eq!(err, CalcError::unknown_key("manual_time"));
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&InputKey::AutomatedTestExecutionTimeMin).unwrap();
        assert_eq!(json, "\"automated_test_execution_time_min\"");
        let json = serde_json::to_string(&InputKey::MonthlyMaintenanceBudget).unwrap();
        assert_eq!(json, "\"monthly_maintenance_budget\"");
    }

    #[test]
    fn test_clamp() {
        let key = InputKey::InitialInvestment;
        assert_eq!(clamp_input(key, -4.0).unwrap(), 0.0);
        assert_eq!(clamp_input(key, 2.5).unwrap(), 2.5);
        assert!(clamp_input(key, f64::NAN).is_err());
        assert!(clamp_input(key, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_counts() {
        assert!(InputKey::TotalTestCount.is_count());
        assert!(!InputKey::MonthlyMaintenanceUsed.is_count());
        assert_eq!(to_count(50.9), 50);
        assert_eq!(to_count(-3.0), 0);
        assert_eq!(to_count(f64::NAN), 0);
    }

    #[test]
    fn test_snapshot_from_store() {
        let dir = TempDir::new().unwrap();
        let store = InputStore::open(dir.path().join("inputs.json"));
        store.set("manual_test_execution_time", 10.0).unwrap();
        store.set("automated_test_execution_time_min", 30.0).unwrap();
        store.set("total_test_count", 50.0).unwrap();
        // Written by hand, bypassing the boundary
        store.set("new_tests_per_month", -5.0).unwrap();

        let snapshot = InputSnapshot::from_store(&store);
        assert_eq!(snapshot.manual_hours, 10.0);
        assert_eq!(snapshot.automated_minutes, 30.0);
        assert_eq!(snapshot.total_tests, 50);
        assert_eq!(snapshot.new_tests_per_month, 0);
        assert_eq!(snapshot.investment_hours, 0.0);
    }
}
