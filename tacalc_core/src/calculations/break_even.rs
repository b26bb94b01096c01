//! # Break-Even Run Count
//!
//! Number of automated runs after which the cumulative time savings cover
//! the initial automation investment.
//!
//! ## Method
//!
//! ```text
//! runs_to_break_even = ceil(investment / savings_per_run)    if savings_per_run > 0
//!                    = never                                 if savings_per_run <= 0
//! ```
//!
//! Zero and negative savings are both "never": a run that saves nothing (or
//! costs time) can not pay anything back, and a negative run count is
//! meaningless.
//!
//! The trend series for the chart covers runs `0..=runs_to_break_even + 10`
//! and exists only when both the investment and the savings are positive.
//! It is evaluated on demand, so a break-even in the billions of runs still
//! carries its whole series without allocating it.
//!
//! ## Example
//!
//! ```rust
//! use tacalc_core::calculations::break_even::{calculate, BreakEven, BreakEvenInput};
//!
//! let result = calculate(&BreakEvenInput::new(100.0, 12.0)).unwrap();
//! assert_eq!(result.break_even, BreakEven::Runs(9));
//! ```

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{require_finite, require_non_negative};
use crate::errors::CalcResult;

/// Runs shown past the break-even point in the trend series
pub const TREND_EXTRA_RUNS: u64 = 10;

/// Largest run count reported; the trend's last run must fit in `u64`
pub const MAX_RUNS: u64 = u64::MAX - TREND_EXTRA_RUNS - 1;

/// Input parameters for the break-even model.
///
/// ## JSON Example
///
/// ```json
/// {
///   "investment_hours": 100.0,
///   "savings_per_run_hours": 12.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenInput {
    /// Initial investment for the automation, hours
    pub investment_hours: f64,

    /// Hours saved by each automated run (any sign)
    pub savings_per_run_hours: f64,
}

impl BreakEvenInput {
    pub fn new(investment_hours: f64, savings_per_run_hours: f64) -> Self {
        BreakEvenInput {
            investment_hours,
            savings_per_run_hours,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("investment_hours", self.investment_hours)?;
        require_finite("savings_per_run_hours", self.savings_per_run_hours)?;
        Ok(())
    }
}

/// Break-even point: a run count, or never.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "runs", rename_all = "snake_case")]
pub enum BreakEven {
    /// The investment is recovered after this many runs
    Runs(u64),
    /// The investment is never recovered
    Never,
}

impl BreakEven {
    /// Run count, if the investment is ever recovered
    pub fn runs(self) -> Option<u64> {
        match self {
            BreakEven::Runs(runs) => Some(runs),
            BreakEven::Never => None,
        }
    }

    pub fn is_never(self) -> bool {
        matches!(self, BreakEven::Never)
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEven::Runs(runs) => write!(f, "{}", runs),
            BreakEven::Never => f.write_str("never"),
        }
    }
}

/// One point of the cumulative-savings trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub run: u64,
    pub cumulative_savings_hours: f64,
}

/// Cumulative savings for runs `0..=last_run`, one point per run.
///
/// Points are computed when asked for. Serializes as the full JSON array of
/// [`TrendPoint`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    savings_per_run_hours: f64,
    last_run: u64,
}

impl Trend {
    fn new(runs: u64, savings_per_run_hours: f64) -> Self {
        Trend {
            savings_per_run_hours,
            last_run: runs.saturating_add(TREND_EXTRA_RUNS),
        }
    }

    /// Last run in the series (`runs_to_break_even + 10`)
    pub fn last_run(&self) -> u64 {
        self.last_run
    }

    /// Number of points, run 0 included
    pub fn point_count(&self) -> u64 {
        self.last_run.saturating_add(1)
    }

    /// The point for `run`, if it is part of the series
    pub fn point(&self, run: u64) -> Option<TrendPoint> {
        (run <= self.last_run).then(|| TrendPoint {
            run,
            cumulative_savings_hours: run as f64 * self.savings_per_run_hours,
        })
    }

    /// Every point in run order
    pub fn points(&self) -> impl Iterator<Item = TrendPoint> {
        let savings = self.savings_per_run_hours;
        (0..=self.last_run).map(move |run| TrendPoint {
            run,
            cumulative_savings_hours: run as f64 * savings,
        })
    }

    /// At most `max_points` evenly spaced points, always including the first
    /// and last run. Series that already fit are returned whole.
    pub fn sample(&self, max_points: usize) -> Vec<TrendPoint> {
        let max_points = max_points.max(2);
        if self.point_count() <= max_points as u64 {
            return self.points().collect();
        }

        let intervals = (max_points - 1) as u128;
        (0..max_points as u128)
            .filter_map(|i| self.point((i * self.last_run as u128 / intervals) as u64))
            .collect()
    }
}

impl Serialize for Trend {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.points())
    }
}

impl<'de> Deserialize<'de> for Trend {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let points = Vec::<TrendPoint>::deserialize(deserializer)?;
        let last = points
            .last()
            .ok_or_else(|| de::Error::custom("trend series is empty"))?;
        let savings_per_run_hours = if last.run > 0 {
            last.cumulative_savings_hours / last.run as f64
        } else {
            0.0
        };
        Ok(Trend {
            savings_per_run_hours,
            last_run: last.run,
        })
    }
}

/// Results from the break-even model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// Inputs the result was computed from
    pub input: BreakEvenInput,

    /// Break-even point
    pub break_even: BreakEven,

    /// Cumulative savings for runs `0..=break_even + 10`, when charted
    pub trend: Option<Trend>,
}

/// Calculate the break-even run count and its trend series.
///
/// # Returns
///
/// * `Ok(result)` - Always, for valid input; "never" is a value, not an error
/// * `Err(CalcError::InvalidInput)` - Negative investment or non-finite value
pub fn calculate(input: &BreakEvenInput) -> CalcResult<BreakEvenResult> {
    input.validate()?;

    let break_even = runs_to_break_even(input.investment_hours, input.savings_per_run_hours);

    let trend = match break_even {
        BreakEven::Runs(runs) if input.investment_hours > 0.0 && input.savings_per_run_hours > 0.0 => {
            Some(Trend::new(runs, input.savings_per_run_hours))
        }
        _ => None,
    };

    debug!(
        investment = input.investment_hours,
        savings_per_run = input.savings_per_run_hours,
        %break_even,
        "break-even evaluated"
    );

    Ok(BreakEvenResult {
        input: *input,
        break_even,
        trend,
    })
}

fn runs_to_break_even(investment: f64, savings_per_run: f64) -> BreakEven {
    if savings_per_run <= 0.0 {
        return BreakEven::Never;
    }

    let runs = (investment / savings_per_run).ceil();
    if !runs.is_finite() || runs >= u64::MAX as f64 {
        return BreakEven::Never;
    }

    match runs as u64 {
        runs if runs <= MAX_RUNS => BreakEven::Runs(runs),
        _ => BreakEven::Never,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_concrete_scenario() {
        // ceil(100 / 12) = ceil(8.33) = 9
        let result = calculate(&BreakEvenInput::new(100.0, 12.0)).unwrap();
        assert_eq!(result.break_even, BreakEven::Runs(9));

        let trend: Vec<TrendPoint> = result.trend.unwrap().points().collect();
        assert_eq!(trend.len(), 20);
        assert_eq!(trend.first().unwrap().run, 0);
        assert_eq!(trend.last().unwrap().run, 19);
        assert_eq!(trend[9].cumulative_savings_hours, 108.0);
    }

    #[test]
    fn test_zero_savings_never_breaks_even() {
        let result = calculate(&BreakEvenInput::new(100.0, 0.0)).unwrap();
        assert_eq!(result.break_even, BreakEven::Never);
        assert!(result.break_even.runs().is_none());
        assert!(result.trend.is_none());
    }

    #[test]
    fn test_negative_savings_never_breaks_even() {
        let result = calculate(&BreakEvenInput::new(100.0, -2.0)).unwrap();
        assert!(result.break_even.is_never());
        assert!(result.trend.is_none());
    }

    #[test]
    fn test_zero_investment() {
        let result = calculate(&BreakEvenInput::new(0.0, 5.0)).unwrap();
        assert_eq!(result.break_even, BreakEven::Runs(0));
        // Nothing to chart without an investment
        assert!(result.trend.is_none());
    }

    #[test]
    fn test_exact_division() {
        let result = calculate(&BreakEvenInput::new(120.0, 12.0)).unwrap();
        assert_eq!(result.break_even, BreakEven::Runs(10));
    }

    #[test]
    fn test_long_trend_is_complete() {
        let result = calculate(&BreakEvenInput::new(100_000.0, 1.0)).unwrap();
        assert_eq!(result.break_even, BreakEven::Runs(100_000));

        let trend = result.trend.unwrap();
        assert_eq!(trend.last_run(), 100_010);
        assert_eq!(trend.point_count(), 100_011);
        assert_eq!(trend.points().count(), 100_011);
        assert_eq!(trend.point(100_000).unwrap().cumulative_savings_hours, 100_000.0);
        assert!(trend.point(100_011).is_none());
    }

    #[test]
    fn test_huge_run_count_keeps_trend() {
        let result = calculate(&BreakEvenInput::new(1e18, 1.0)).unwrap();
        assert_eq!(result.break_even, BreakEven::Runs(1_000_000_000_000_000_000));

        let trend = result.trend.unwrap();
        assert_eq!(trend.last_run(), 1_000_000_000_000_000_010);
        let last = trend.point(trend.last_run()).unwrap();
        assert!(last.cumulative_savings_hours >= 1e18);

        let result = calculate(&BreakEvenInput::new(1e300, 1e-300)).unwrap();
        assert!(result.break_even.is_never());
        assert!(result.trend.is_none());
    }

    #[test]
    fn test_sample_keeps_endpoints() {
        let trend = calculate(&BreakEvenInput::new(100_000.0, 1.0)).unwrap().trend.unwrap();
        let sample = trend.sample(500);
        assert_eq!(sample.len(), 500);
        assert_eq!(sample.first().unwrap().run, 0);
        assert_eq!(sample.last().unwrap().run, 100_010);
        assert!(sample.windows(2).all(|w| w[0].run < w[1].run));

        // Short series come back whole
        let trend = calculate(&BreakEvenInput::new(100.0, 12.0)).unwrap().trend.unwrap();
        assert_eq!(trend.sample(500).len(), 20);
    }

    #[test]
    fn test_trend_json_roundtrip() {
        let result = calculate(&BreakEvenInput::new(100.0, 12.0)).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["trend"].as_array().unwrap().len(), 20);
        assert_eq!(json["trend"][19]["cumulative_savings_hours"], 228.0);

        let back: BreakEvenResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_invalid_input() {
        assert!(calculate(&BreakEvenInput::new(-1.0, 12.0)).is_err());
        assert!(calculate(&BreakEvenInput::new(1.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&BreakEven::Runs(9)).unwrap();
        assert_eq!(json, r#"{"kind":"runs","runs":9}"#);
        let json = serde_json::to_string(&BreakEven::Never).unwrap();
        assert_eq!(json, r#"{"kind":"never"}"#);
    }

    proptest! {
        #[test]
        fn prop_runs_and_trend(investment in 0.01f64..10_000.0, savings in 0.5f64..100.0) {
            let result = calculate(&BreakEvenInput::new(investment, savings)).unwrap();
            let runs = result.break_even.runs().unwrap();
            prop_assert_eq!(runs, (investment / savings).ceil() as u64);

            let trend = result.trend.unwrap();
            prop_assert_eq!(trend.point_count(), runs + TREND_EXTRA_RUNS + 1);
            for (i, point) in trend.points().enumerate() {
                prop_assert_eq!(point.run, i as u64);
                prop_assert_eq!(point.cumulative_savings_hours, i as f64 * savings);
            }
        }

        #[test]
        fn prop_non_positive_savings_is_never(investment in 0.0f64..10_000.0, savings in -100.0f64..=0.0) {
            let result = calculate(&BreakEvenInput::new(investment, savings)).unwrap();
            prop_assert!(result.break_even.is_never());
            prop_assert!(result.trend.is_none());
        }
    }
}
