//! # Session
//!
//! The explicit context every front-end operation goes through: the active
//! display language plus the input store. Nothing here is process-wide, so
//! two sessions on different files (or languages) never interfere.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tacalc_core::i18n::Language;
//! use tacalc_core::inputs::InputKey;
//! use tacalc_core::session::Session;
//! use tacalc_core::store::InputStore;
//!
//! let session = Session::new(Language::De, InputStore::open("user_inputs.json"));
//! session.set_input(InputKey::ManualTestExecutionTime, 10.0)?;
//! session.set_input(InputKey::AutomatedTestExecutionTimeMin, 30.0)?;
//!
//! let result = session.time_savings()?.expect("both run times are set");
//! assert_eq!(result.savings_per_run_hours, 9.5);
//! # Ok::<(), tacalc_core::errors::CalcError>(())
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculations::{
    break_even, maintenance, time_savings, BreakEvenInput, BreakEvenResult, MaintenanceInput,
    MaintenanceResult, Model, TimeSavingsInput, TimeSavingsResult,
};
use crate::charts::{break_even_chart, maintenance_chart, time_savings_chart, Chart};
use crate::config::AppConfig;
use crate::errors::CalcResult;
use crate::i18n::Language;
use crate::inputs::{clamp_input, InputKey, InputSnapshot};
use crate::report::{assemble, render_pdf, report_filename, ReportBundle, ReportBundles, ReportDocument};
use crate::store::InputStore;

/// A rendered report ready to be written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedReport {
    /// Suggested file name, `test_automation_summary_<timestamp>.pdf`
    pub filename: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub sections: usize,
}

/// Language plus input store.
#[derive(Debug, Clone)]
pub struct Session {
    language: Language,
    store: InputStore,
}

impl Session {
    pub fn new(language: Language, store: InputStore) -> Self {
        Session { language, store }
    }

    /// Session with the configured language and data file
    pub fn from_config(config: &AppConfig) -> Self {
        Session::new(config.language, InputStore::open(config.data_file_path()))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn store(&self) -> &InputStore {
        &self.store
    }

    /// Store an input after applying the input boundary.
    ///
    /// Returns the value actually stored (negative input is stored as 0).
    /// A failed write is logged and returned; the previous record stays.
    pub fn set_input(&self, key: InputKey, value: f64) -> CalcResult<f64> {
        let value = clamp_input(key, value)?;
        match self.store.set(key.as_str(), value) {
            Ok(()) => Ok(value),
            Err(e) => {
                warn!(key = %key, error = %e, "input not saved");
                Err(e)
            }
        }
    }

    /// Stored value for `key`, 0 when absent
    pub fn input(&self, key: InputKey) -> f64 {
        self.store.get(key.as_str(), 0.0)
    }

    /// Every input, read in one pass
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot::from_store(&self.store)
    }

    /// Forget every stored input.
    pub fn clear_inputs(&self) -> CalcResult<()> {
        self.store.clear_all().inspect_err(|e| {
            warn!(error = %e, "inputs not cleared");
        })
    }

    pub fn time_savings(&self) -> CalcResult<Option<TimeSavingsResult>> {
        Self::evaluate_time_savings(&self.snapshot())
    }

    pub fn break_even(&self) -> CalcResult<BreakEvenResult> {
        Self::evaluate_break_even(&self.snapshot())
    }

    pub fn maintenance(&self) -> CalcResult<Option<MaintenanceResult>> {
        Self::evaluate_maintenance(&self.snapshot())
    }

    fn evaluate_time_savings(inputs: &InputSnapshot) -> CalcResult<Option<TimeSavingsResult>> {
        let input = TimeSavingsInput::new(inputs.manual_hours, inputs.automated_minutes)
            .with_development_hours(inputs.development_hours);
        time_savings::calculate(&input)
    }

    fn evaluate_break_even(inputs: &InputSnapshot) -> CalcResult<BreakEvenResult> {
        break_even::calculate(&BreakEvenInput::new(
            inputs.investment_hours,
            inputs.savings_per_run_hours,
        ))
    }

    fn evaluate_maintenance(inputs: &InputSnapshot) -> CalcResult<Option<MaintenanceResult>> {
        maintenance::calculate(&MaintenanceInput::new(
            inputs.available_hours,
            inputs.current_maintenance_hours,
            inputs.total_tests,
            inputs.new_tests_per_month,
        ))
    }

    /// Chart for one model, if the model has something to draw.
    pub fn chart(&self, model: Model, today: NaiveDate) -> CalcResult<Option<Chart>> {
        let language = self.language;
        Ok(match model {
            Model::TimeSavings => self.time_savings()?.map(|r| time_savings_chart(&r, language)),
            Model::BreakEven => break_even_chart(&self.break_even()?, language),
            Model::Maintenance => self
                .maintenance()?
                .map(|r| maintenance_chart(&r, language, today)),
        })
    }

    /// Result bundles for every model with enough data.
    ///
    /// - time savings: the model yields a result
    /// - break-even: an investment was entered
    /// - maintenance: the model yields a result (N > 0)
    pub fn report_bundles(&self, today: NaiveDate) -> CalcResult<ReportBundles> {
        let inputs = self.snapshot();
        let language = self.language;

        let time_savings = Self::evaluate_time_savings(&inputs)?.map(|result| {
            ReportBundle::new(result).with_chart(Some(time_savings_chart(&result, language)))
        });

        let break_even = if inputs.investment_hours > 0.0 {
            let result = Self::evaluate_break_even(&inputs)?;
            let chart = break_even_chart(&result, language);
            Some(ReportBundle::new(result).with_chart(chart))
        } else {
            None
        };

        let maintenance = Self::evaluate_maintenance(&inputs)?.map(|result| {
            ReportBundle::new(result).with_chart(Some(maintenance_chart(&result, language, today)))
        });

        Ok(ReportBundles {
            time_savings,
            break_even,
            maintenance,
        })
    }

    /// Assemble the localized report for the current inputs.
    pub fn build_report(&self, now: NaiveDateTime) -> CalcResult<ReportDocument> {
        let bundles = self.report_bundles(now.date())?;
        Ok(assemble(self.language, &bundles, now))
    }

    /// Build and render the report to PDF.
    pub fn export_report(&self, now: NaiveDateTime) -> CalcResult<ExportedReport> {
        let document = self.build_report(now)?;
        let bytes = render_pdf(&document)?;
        let filename = report_filename(now);

        info!(
            filename = %filename,
            language = %self.language,
            sections = document.sections.len(),
            "report exported"
        );

        Ok(ExportedReport {
            filename,
            bytes,
            sections: document.sections.len(),
        })
    }
}
