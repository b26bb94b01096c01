//! # Time Savings per Run
//!
//! Compares the manual run time of a test suite with its automated run time.
//!
//! ## Method
//!
//! ```text
//! automated_hours = automated_minutes / 60
//! savings_per_run = manual_hours - automated_hours
//! ```
//!
//! A result exists only when both run times are positive. The savings may
//! be negative (automation slower than manual); that is a valid result.
//!
//! When a development effort is given, the first run also has to pay for
//! building the automation:
//!
//! ```text
//! first_run_balance = manual_hours - (automated_hours + development_hours)
//! amortization_runs = ceil(|first_run_balance| / savings_per_run)
//! ```
//!
//! The amortization count exists only for a non-positive balance with
//! positive savings per run.
//!
//! ## Example
//!
//! ```rust
//! use tacalc_core::calculations::time_savings::{calculate, TimeSavingsInput};
//!
//! let input = TimeSavingsInput::new(10.0, 30.0);
//! let result = calculate(&input).unwrap().expect("both times are positive");
//! assert_eq!(result.automated_hours, 0.5);
//! assert_eq!(result.savings_per_run_hours, 9.5);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::require_non_negative;
use crate::errors::CalcResult;
use crate::units::{Hours, Minutes};

/// Input parameters for the time-savings model.
///
/// ## JSON Example
///
/// ```json
/// {
///   "manual_hours": 10.0,
///   "automated_minutes": 30.0,
///   "development_hours": 0.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSavingsInput {
    /// Manual run time of the whole suite, hours
    pub manual_hours: f64,

    /// Automated run time of the whole suite, minutes
    pub automated_minutes: f64,

    /// One-off effort to build the automation, hours (0 = not considered)
    #[serde(default)]
    pub development_hours: f64,
}

impl TimeSavingsInput {
    /// Input without a development effort
    pub fn new(manual_hours: f64, automated_minutes: f64) -> Self {
        TimeSavingsInput {
            manual_hours,
            automated_minutes,
            development_hours: 0.0,
        }
    }

    /// Add a development effort to be recovered by the first runs
    pub fn with_development_hours(mut self, development_hours: f64) -> Self {
        self.development_hours = development_hours;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("manual_hours", self.manual_hours)?;
        require_non_negative("automated_minutes", self.automated_minutes)?;
        require_non_negative("development_hours", self.development_hours)?;
        Ok(())
    }

    /// Automated run time converted to hours
    pub fn automated_hours(&self) -> f64 {
        Hours::from(Minutes(self.automated_minutes)).value()
    }
}

/// Balance of the very first run once development effort is included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FirstRunBalance {
    /// Hours gained (positive) or lost (zero or negative) on the first run
    pub balance_hours: f64,

    /// Additional runs needed to recover a deficit, if it can be recovered
    pub amortization_runs: Option<u64>,
}

impl FirstRunBalance {
    /// True when the first run already saves time
    pub fn is_gain(&self) -> bool {
        self.balance_hours > 0.0
    }
}

/// Results from the time-savings model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSavingsResult {
    /// Inputs the result was computed from
    pub input: TimeSavingsInput,

    /// Automated run time in hours
    pub automated_hours: f64,

    /// Hours saved per automated run (negative if automation is slower)
    pub savings_per_run_hours: f64,

    /// First-run balance, present when a development effort was given
    pub first_run: Option<FirstRunBalance>,
}

impl TimeSavingsResult {
    /// True when each automated run is faster than a manual run
    pub fn saves_time(&self) -> bool {
        self.savings_per_run_hours > 0.0
    }
}

/// Calculate the time saved per automated run.
///
/// # Returns
///
/// * `Ok(Some(result))` - Both run times are positive
/// * `Ok(None)` - Manual or automated run time is zero
/// * `Err(CalcError::InvalidInput)` - A value is negative or not finite
pub fn calculate(input: &TimeSavingsInput) -> CalcResult<Option<TimeSavingsResult>> {
    input.validate()?;

    let manual = Hours(input.manual_hours);
    let automated: Hours = Minutes(input.automated_minutes).into();

    if manual.value() <= 0.0 || automated.value() <= 0.0 {
        debug!(
            manual_hours = input.manual_hours,
            automated_minutes = input.automated_minutes,
            "time savings not evaluated, a run time is zero"
        );
        return Ok(None);
    }

    let savings = manual - automated;

    let first_run = if input.development_hours > 0.0 {
        let balance = manual - (automated + Hours(input.development_hours));
        Some(first_run_balance(balance.value(), savings.value()))
    } else {
        None
    };

    debug!(
        manual_hours = input.manual_hours,
        automated_hours = automated.value(),
        savings_per_run = savings.value(),
        "time savings evaluated"
    );

    Ok(Some(TimeSavingsResult {
        input: *input,
        automated_hours: automated.value(),
        savings_per_run_hours: savings.value(),
        first_run,
    }))
}

fn first_run_balance(balance_hours: f64, savings_per_run: f64) -> FirstRunBalance {
    let amortization_runs = if balance_hours <= 0.0 && savings_per_run > 0.0 {
        let runs = (balance_hours.abs() / savings_per_run).ceil();
        (runs.is_finite() && runs <= u64::MAX as f64).then(|| runs as u64)
    } else {
        None
    };

    FirstRunBalance {
        balance_hours,
        amortization_runs,
    }
}
