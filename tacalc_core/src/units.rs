//! # Time Units
//!
//! Newtype wrappers for the two time units the calculator deals with.
//! Manual test runs are measured in hours, automated runs in minutes, and
//! mixing the two up silently is the classic bug in this kind of sheet.
//!
//! ## Example
//!
//! ```rust
//! use tacalc_core::units::{Hours, Minutes};
//!
//! let automated = Minutes(30.0);
//! let hours: Hours = automated.into();
//! assert_eq!(hours.0, 0.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

/// Duration in minutes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

impl From<Minutes> for Hours {
    fn from(min: Minutes) -> Self {
        Hours(min.0 / MINUTES_PER_HOUR)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                Self(self.0 + other.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, other: Self) -> Self {
                Self(self.0 - other.0)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Hours);
impl_arithmetic!(Minutes);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_to_hours() {
        let hours: Hours = Minutes(90.0).into();
        assert_eq!(hours.0, 1.5);
    }

    #[test]
    fn test_arithmetic() {
        let a = Hours(10.0);
        let b = Hours(0.5);
        assert_eq!((a - b).0, 9.5);
        assert_eq!((a + b).value(), 10.5);
    }

    #[test]
    fn test_serialization() {
        let h = Hours(12.5);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, "12.5");
    }
}
