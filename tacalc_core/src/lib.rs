//! # tacalc_core - Test Automation Cost Calculator
//!
//! `tacalc_core` answers three questions a team asks before investing in
//! test automation:
//!
//! 1. How many hours does each automated run save over a manual run?
//! 2. After how many runs is the initial automation investment recovered?
//! 3. Can the team keep maintaining its automated tests while adding more?
//!
//! All inputs and outputs are JSON-serializable, so front-ends can pass
//! them around or print them as-is.
//!
//! ## Design Philosophy
//!
//! - **Pure models**: calculations take an input value and return a result
//!   value, with no I/O and no shared state
//! - **Typed "no result"**: unmet preconditions are `Ok(None)` or
//!   [`calculations::BreakEven::Never`], never a magic number
//! - **Explicit context**: language and storage live in a [`Session`]
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use tacalc_core::calculations::break_even::{calculate, BreakEven, BreakEvenInput};
//!
//! let result = calculate(&BreakEvenInput::new(100.0, 12.0)).unwrap();
//! assert_eq!(result.break_even, BreakEven::Runs(9));
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The three models
//! - [`store`] - Durable key/value storage for inputs
//! - [`inputs`] - Input identifiers, input boundary and snapshots
//! - [`i18n`] - Localized strings, months and number formatting
//! - [`charts`] - Chart descriptions and SVG rendering
//! - [`report`] - Report assembly and PDF rendering
//! - [`session`] - Language plus store, the entry point for front-ends
//! - [`config`] - TOML settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod charts;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod inputs;
pub mod report;
pub mod session;
pub mod store;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use config::AppConfig;
pub use errors::{CalcError, CalcResult};
pub use i18n::{Language, TextKey};
pub use inputs::{InputKey, InputSnapshot};
pub use session::{ExportedReport, Session};
pub use store::InputStore;
