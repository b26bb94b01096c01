//! # Calculation Models
//!
//! The three independent questions the calculator answers. Each model
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, copied into the result)
//! - `*Result` - Immutable calculation result
//! - `calculate(&input)` - Pure function, no I/O, no shared state
//!
//! A model whose preconditions do not hold returns `Ok(None)`; `Err` is
//! reserved for inputs that should never have passed the input boundary
//! (negative or non-finite numbers).
//!
//! ## Available Calculations
//!
//! - [`time_savings`] - Hours saved per automated run
//! - [`break_even`] - Runs needed to recover the automation investment
//! - [`maintenance`] - Whether the team can maintain more automated tests

pub mod break_even;
pub mod maintenance;
pub mod time_savings;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// Re-export commonly used types
pub use break_even::{BreakEven, BreakEvenInput, BreakEvenResult, Trend, TrendPoint};
pub use maintenance::{MaintenanceInput, MaintenanceResult};
pub use time_savings::{TimeSavingsInput, TimeSavingsResult};

/// Identifies one of the three models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    /// Question 1: time saved per run
    TimeSavings,
    /// Question 2: break-even run count
    BreakEven,
    /// Question 3: maintenance capacity
    Maintenance,
}

impl Model {
    /// All models in question order
    pub const ALL: [Model; 3] = [Model::TimeSavings, Model::BreakEven, Model::Maintenance];

    /// Fixed question number, also used to number report sections
    pub fn number(self) -> u8 {
        match self {
            Model::TimeSavings => 1,
            Model::BreakEven => 2,
            Model::Maintenance => 3,
        }
    }

    /// Short identifier (`savings`, `break-even`, `maintenance`)
    pub fn slug(self) -> &'static str {
        match self {
            Model::TimeSavings => "savings",
            Model::BreakEven => "break-even",
            Model::Maintenance => "maintenance",
        }
    }
}

/// Reject negative and non-finite values.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value cannot be negative",
        ));
    }
    Ok(())
}

/// Reject NaN and infinities.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    Ok(())
}
