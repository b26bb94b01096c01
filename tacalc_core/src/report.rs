//! # Report Generation
//!
//! Turns already-computed model results into a localized summary document
//! and renders it to PDF with Typst.
//!
//! ## Architecture
//!
//! - [`assemble`] is a pure transformation from (language, result bundles)
//!   to a [`ReportDocument`]; it performs no calculation
//! - [`ReportDocument::to_typst_source`] lays the document out as Typst markup
//! - [`render_pdf`] compiles that markup; chart SVGs are served to the
//!   compiler as in-memory files under `/charts/`
//!
//! A model contributes a section only when its bundle is present. Sections
//! keep their fixed question numbers (1, 2, 3) even when a predecessor is
//! missing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Local;
//! use tacalc_core::calculations::time_savings::{calculate, TimeSavingsInput};
//! use tacalc_core::i18n::Language;
//! use tacalc_core::report::{assemble, render_pdf, ReportBundle, ReportBundles};
//!
//! let result = calculate(&TimeSavingsInput::new(10.0, 30.0)).unwrap().unwrap();
//! let bundles = ReportBundles {
//!     time_savings: Some(ReportBundle::new(result)),
//!     ..Default::default()
//! };
//! let document = assemble(Language::En, &bundles, Local::now().naive_local());
//! let pdf = render_pdf(&document).unwrap();
//! std::fs::write("summary.pdf", pdf).unwrap();
//! ```

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDateTime};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::{BreakEven, BreakEvenResult, MaintenanceResult, Model, TimeSavingsResult};
use crate::charts::Chart;
use crate::errors::{CalcError, CalcResult};
use crate::i18n::{fill, format_number, Language, TextKey};

/// Prefix of exported report file names
pub const FILENAME_PREFIX: &str = "test_automation_summary";

/// A model result together with the chart to embed next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportBundle<R> {
    pub result: R,
    pub chart: Option<Chart>,
}

impl<R> ReportBundle<R> {
    pub fn new(result: R) -> Self {
        ReportBundle { result, chart: None }
    }

    pub fn with_chart(mut self, chart: Option<Chart>) -> Self {
        self.chart = chart;
        self
    }
}

/// Per-model inputs to the assembler. Absent bundles produce no section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportBundles {
    pub time_savings: Option<ReportBundle<TimeSavingsResult>>,
    pub break_even: Option<ReportBundle<BreakEvenResult>>,
    pub maintenance: Option<ReportBundle<MaintenanceResult>>,
}

impl ReportBundles {
    /// True when no model has enough data for a section
    pub fn is_empty(&self) -> bool {
        self.time_savings.is_none() && self.break_even.is_none() && self.maintenance.is_none()
    }
}

/// One row of a section's input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRow {
    pub label: String,
    pub value: String,
}

/// One numbered section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub number: u8,
    pub model: Model,
    pub title: String,
    pub inputs: Vec<InputRow>,
    /// Result paragraphs, in display order
    pub results: Vec<String>,
    pub chart: Option<Chart>,
}

/// Executive summary entry: the model's short label and its key finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub label: String,
    pub text: String,
}

/// The assembled, fully localized report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub language: Language,
    pub title: String,
    /// "Generated on: 2026-10-16 14:05"
    pub generated: String,
    pub summary_heading: String,
    pub summary_intro: String,
    pub summary: Vec<SummaryLine>,
    pub inputs_heading: String,
    pub results_heading: String,
    pub sections: Vec<ReportSection>,
    pub footer: String,
}

/// Assemble the report document.
///
/// Sections appear in question order, one per present bundle.
pub fn assemble(language: Language, bundles: &ReportBundles, generated_at: NaiveDateTime) -> ReportDocument {
    let mut sections = Vec::new();
    let mut summary = Vec::new();

    if let Some(bundle) = &bundles.time_savings {
        let section = time_savings_section(language, bundle);
        summary.push(summary_line(language, TextKey::PdfQ1SummaryLabel, &section));
        sections.push(section);
    }
    if let Some(bundle) = &bundles.break_even {
        let section = break_even_section(language, bundle);
        summary.push(summary_line(language, TextKey::PdfQ2SummaryLabel, &section));
        sections.push(section);
    }
    if let Some(bundle) = &bundles.maintenance {
        let section = maintenance_section(language, bundle);
        summary.push(summary_line(language, TextKey::PdfQ3SummaryLabel, &section));
        sections.push(section);
    }

    debug!(language = %language, sections = sections.len(), "report assembled");

    ReportDocument {
        language,
        title: language.text(TextKey::PdfTitle).to_string(),
        generated: format!(
            "{} {}",
            language.text(TextKey::PdfGeneratedDate),
            generated_at.format("%Y-%m-%d %H:%M")
        ),
        summary_heading: language.text(TextKey::PdfExecutiveSummary).to_string(),
        summary_intro: language.text(TextKey::PdfSummaryIntro).to_string(),
        summary,
        inputs_heading: language.text(TextKey::PdfInputsLabel).to_string(),
        results_heading: language.text(TextKey::PdfResultsLabel).to_string(),
        sections,
        footer: language.text(TextKey::PdfFooterNote).to_string(),
    }
}

/// `test_automation_summary_<YYYYMMDD_HHMMSS>.pdf`
pub fn report_filename(now: NaiveDateTime) -> String {
    format!("{}_{}.pdf", FILENAME_PREFIX, now.format("%Y%m%d_%H%M%S"))
}

fn summary_line(language: Language, key: TextKey, section: &ReportSection) -> SummaryLine {
    SummaryLine {
        label: language.text(key).to_string(),
        text: section.results.first().cloned().unwrap_or_default(),
    }
}

/// Input labels end with a colon in the interactive forms; tables do not.
fn table_label(language: Language, key: TextKey) -> String {
    language.text(key).trim_end().trim_end_matches(':').trim_end().to_string()
}

fn hours(value: f64, decimals: usize, language: Language) -> String {
    format!(
        "{} {}",
        format_number(value, decimals, language),
        language.text(TextKey::UnitHours)
    )
}

fn row(language: Language, key: TextKey, value: String) -> InputRow {
    InputRow {
        label: table_label(language, key),
        value,
    }
}

fn time_savings_section(language: Language, bundle: &ReportBundle<TimeSavingsResult>) -> ReportSection {
    let result = &bundle.result;
    let input = &result.input;

    let mut inputs = vec![
        row(language, TextKey::Q1InputManual, hours(input.manual_hours, 1, language)),
        row(
            language,
            TextKey::Q1InputAutomated,
            format!(
                "{} {}",
                format_number(input.automated_minutes, 0, language),
                language.text(TextKey::UnitMinutes)
            ),
        ),
    ];
    if input.development_hours > 0.0 {
        inputs.push(row(
            language,
            TextKey::Q1InputDevelopment,
            hours(input.development_hours, 1, language),
        ));
    }

    let mut results = vec![fill(
        language.text(TextKey::Q1ResultMessage),
        &[("time", &format_number(result.savings_per_run_hours, 2, language))],
    )];

    if let Some(first_run) = &result.first_run {
        let time = format_number(first_run.balance_hours.abs(), 2, language);
        let key = if first_run.is_gain() {
            TextKey::Q1FirstRunGain
        } else {
            TextKey::Q1FirstRunLoss
        };
        results.push(fill(language.text(key), &[("time", &time)]));

        if let Some(runs) = first_run.amortization_runs {
            results.push(fill(
                language.text(TextKey::Q1Amortization),
                &[("runs", &runs.to_string())],
            ));
        }
    }

    ReportSection {
        number: Model::TimeSavings.number(),
        model: Model::TimeSavings,
        title: language.text(TextKey::Q1Title).to_string(),
        inputs,
        results,
        chart: bundle.chart.clone(),
    }
}

fn break_even_section(language: Language, bundle: &ReportBundle<BreakEvenResult>) -> ReportSection {
    let result = &bundle.result;

    let inputs = vec![
        row(
            language,
            TextKey::Q2InputInvestment,
            hours(result.input.investment_hours, 1, language),
        ),
        row(
            language,
            TextKey::Q2InputSavings,
            hours(result.input.savings_per_run_hours, 2, language),
        ),
    ];

    let verdict = match result.break_even {
        BreakEven::Runs(runs) => fill(
            language.text(TextKey::Q2ResultMessage),
            &[("runs", &runs.to_string())],
        ),
        BreakEven::Never => language.text(TextKey::Q2ResultNever).to_string(),
    };

    ReportSection {
        number: Model::BreakEven.number(),
        model: Model::BreakEven,
        title: language.text(TextKey::Q2Title).to_string(),
        inputs,
        results: vec![verdict],
        chart: bundle.chart.clone(),
    }
}

fn maintenance_section(language: Language, bundle: &ReportBundle<MaintenanceResult>) -> ReportSection {
    let result = &bundle.result;
    let input = &result.input;

    let inputs = vec![
        row(language, TextKey::Q3InputTh, hours(input.available_hours, 0, language)),
        row(
            language,
            TextKey::Q3InputMt,
            hours(input.current_maintenance_hours, 0, language),
        ),
        row(language, TextKey::Q3InputN, input.total_tests.to_string()),
        row(language, TextKey::Q3InputA, input.new_tests_per_month.to_string()),
    ];

    let verdict = if result.can_afford {
        fill(
            language.text(TextKey::Q3SuccessMessage),
            &[("count", &input.new_tests_per_month.to_string())],
        )
    } else {
        language.text(TextKey::Q3WarningMessage).to_string()
    };

    ReportSection {
        number: Model::Maintenance.number(),
        model: Model::Maintenance,
        title: language.text(TextKey::Q3Title).to_string(),
        inputs,
        results: vec![verdict],
        chart: bundle.chart.clone(),
    }
}

// ============================================================================
// Typst Layout
// ============================================================================

const PAGE_SETUP: &str = r##"#set page(
  paper: "a4",
  margin: (top: 2.2cm, bottom: 2.2cm, left: 2cm, right: 2cm),
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(2pt)
    #align(center)[#text(size: 9pt)[#counter(page).display()]]
  ]
)
#set text(font: "Libertinus Serif", size: 11pt)
#set par(justify: true)
"##;

fn chart_path(section: &ReportSection) -> String {
    format!("/charts/q{}.svg", section.number)
}

impl ReportDocument {
    /// Lay the document out as a Typst source file.
    pub fn to_typst_source(&self) -> String {
        let mut out = String::from(PAGE_SETUP);
        out.push_str(&format!("#set text(lang: \"{}\")\n\n", self.language.code()));

        out.push_str(&format!(
            "#align(center)[\n  #block(width: 100%, fill: rgb(\"#f0f0f0\"), inset: 12pt, radius: 4pt)[\n    #text(size: 18pt, weight: \"bold\")[{}]\n    #v(4pt)\n    #text(size: 10pt)[{}]\n  ]\n]\n\n",
            escape_typst(&self.title),
            escape_typst(&self.generated)
        ));

        out.push_str(&format!("== {}\n\n", escape_typst(&self.summary_heading)));
        out.push_str(&format!("{}\n\n", escape_typst(&self.summary_intro)));
        for line in &self.summary {
            out.push_str(&format!(
                "#block(inset: (left: 8pt))[*{}*: {}]\n",
                escape_typst(&line.label),
                escape_typst(&line.text)
            ));
        }
        out.push('\n');

        for section in &self.sections {
            out.push_str("#line(length: 100%, stroke: 0.5pt)\n\n");
            out.push_str(&format!(
                "== {}\\. {}\n\n",
                section.number,
                escape_typst(&section.title)
            ));

            out.push_str(&format!("=== {}\n\n", escape_typst(&self.inputs_heading)));
            out.push_str(
                "#table(\n  columns: (1fr, auto),\n  inset: 6pt,\n  stroke: 0.5pt,\n  align: (left, right),\n",
            );
            for input in &section.inputs {
                out.push_str(&format!(
                    "  [{}], [{}],\n",
                    escape_typst(&input.label),
                    escape_typst(&input.value)
                ));
            }
            out.push_str(")\n\n");

            out.push_str(&format!("=== {}\n\n", escape_typst(&self.results_heading)));
            for paragraph in &section.results {
                out.push_str(&format!("{}\n\n", escape_typst(paragraph)));
            }

            if section.chart.is_some() {
                out.push_str(&format!(
                    "#align(center)[#image(\"{}\", width: 95%)]\n\n",
                    chart_path(section)
                ));
            }
        }

        out.push_str(&format!(
            "#v(16pt)\n#line(length: 100%, stroke: 0.5pt)\n#text(size: 9pt, fill: gray)[{}]\n",
            escape_typst(&self.footer)
        ));
        out
    }

    /// Chart SVGs keyed by the path the Typst source refers to them by
    fn chart_files(&self) -> Vec<(PathBuf, Bytes)> {
        self.sections
            .iter()
            .filter_map(|section| {
                let chart = section.chart.as_ref()?;
                let path = chart_path(section);
                Some((
                    PathBuf::from(path.trim_start_matches('/')),
                    Bytes::new(chart.to_svg().into_bytes()),
                ))
            })
            .collect()
    }
}

/// Escape characters with a meaning in Typst markup.
fn escape_typst(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(
            c,
            '*' | '_' | '#' | '$' | '@' | '<' | '>' | '\\' | '`' | '[' | ']' | '~' | '/' | '=' | '-' | '+'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Typst World Implementation
// ============================================================================

/// Bundled fonts, loaded once per process.
static FONTS: Lazy<Vec<Font>> = Lazy::new(|| {
    typst_assets::fonts()
        .flat_map(|data| Font::iter(Bytes::new(data.to_vec())))
        .collect()
});

/// An in-memory Typst world: one source plus the chart images.
struct PdfWorld {
    main: Source,
    files: Vec<(PathBuf, Bytes)>,
    book: LazyHash<FontBook>,
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String, files: Vec<(PathBuf, Bytes)>) -> Self {
        PdfWorld {
            main: Source::detached(source),
            files,
            book: LazyHash::new(FontBook::from_fonts(FONTS.iter())),
            library: LazyHash::new(Library::default()),
        }
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        let path: &Path = id.vpath().as_rootless_path();
        self.files
            .iter()
            .find(|(file, _)| file == path)
            .map(|(_, bytes)| bytes.clone())
            .ok_or_else(|| FileError::NotFound(path.into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Local::now();
        Datetime::from_ymd(now.year(), now.month() as u8, now.day() as u8)
    }
}

/// Render the document to PDF bytes.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError::RenderFailed)` - Typst compilation or PDF export failed
pub fn render_pdf(document: &ReportDocument) -> CalcResult<Vec<u8>> {
    let world = PdfWorld::new(document.to_typst_source(), document.chart_files());

    let warned = typst::compile(&world);
    let compiled = warned.output.map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::render_failed("compile", messages.join("; "))
    })?;

    let pdf = typst_pdf::pdf(&compiled, &PdfOptions::default()).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::render_failed("pdf", messages.join("; "))
    })?;

    debug!(bytes = pdf.len(), sections = document.sections.len(), "report rendered");
    Ok(pdf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{break_even, maintenance, time_savings};
    use crate::charts::{break_even_chart, maintenance_chart, time_savings_chart};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    fn full_bundles(language: Language) -> ReportBundles {
        let ts = time_savings::calculate(
            &time_savings::TimeSavingsInput::new(10.0, 30.0).with_development_hours(40.0),
        )
        .unwrap()
        .unwrap();
        let be = break_even::calculate(&break_even::BreakEvenInput::new(100.0, 12.0)).unwrap();
        let mt = maintenance::calculate(&maintenance::MaintenanceInput::new(40.0, 10.0, 50, 5))
            .unwrap()
            .unwrap();

        ReportBundles {
            time_savings: Some(ReportBundle::new(ts).with_chart(Some(time_savings_chart(&ts, language)))),
            break_even: Some(ReportBundle::new(be.clone()).with_chart(break_even_chart(&be, language))),
            maintenance: Some(
                ReportBundle::new(mt).with_chart(Some(maintenance_chart(&mt, language, now().date()))),
            ),
        }
    }

    #[test]
    fn test_report_filename() {
        assert_eq!(report_filename(now()), "test_automation_summary_20261016_140509.pdf");
    }

    #[test]
    fn test_assemble_full_report() {
        let doc = assemble(Language::En, &full_bundles(Language::En), now());

        assert_eq!(doc.title, "Test Automation Executive Summary");
        assert_eq!(doc.generated, "Generated on: 2026-10-16 14:05");
        let numbers: Vec<u8> = doc.sections.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(doc.summary.len(), 3);

        let q1 = &doc.sections[0];
        assert_eq!(
            q1.inputs[0],
            InputRow {
                label: "Manual Test Run Time of Test Suite (in hours)".into(),
                value: "10.0 hours".into(),
            }
        );
        assert_eq!(q1.inputs[1].value, "30 min");
        assert_eq!(q1.inputs[2].value, "40.0 hours");
        assert_eq!(q1.results[0], "Each automated test run will save you about 9.50 hours.");
        assert!(q1.results[1].contains("lose approximately 30.50 hours"));
        assert!(q1.results[2].contains("4 additional runs"));

        assert!(doc.sections[1].results[0].ends_with(": 9"));
        assert_eq!(
            doc.sections[2].results[0],
            "You can afford to add and maintain 5 more automated tests next month."
        );
    }

    #[test]
    fn test_missing_sections_are_omitted() {
        let mut bundles = full_bundles(Language::En);
        bundles.time_savings = None;
        let doc = assemble(Language::En, &bundles, now());

        // Question numbers stay fixed
        let numbers: Vec<u8> = doc.sections.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![2, 3]);
        assert!(!doc.to_typst_source().contains("/charts/q1.svg"));

        let empty = assemble(Language::En, &ReportBundles::default(), now());
        assert!(empty.sections.is_empty());
        assert!(empty.summary.is_empty());
    }

    #[test]
    fn test_localized_number_formatting() {
        let doc = assemble(Language::De, &full_bundles(Language::De), now());
        let q1 = &doc.sections[0];
        assert_eq!(q1.inputs[0].value, "10,0 Stunden");
        assert!(q1.results[0].contains("9,50"));
        assert_eq!(doc.sections[1].inputs[1].value, "12,00 Stunden");
    }

    #[test]
    fn test_never_and_warning_verdicts() {
        let be = break_even::calculate(&break_even::BreakEvenInput::new(50.0, 0.0)).unwrap();
        let mt = maintenance::calculate(&maintenance::MaintenanceInput::new(10.0, 10.0, 10, 1))
            .unwrap()
            .unwrap();
        let bundles = ReportBundles {
            time_savings: None,
            break_even: Some(ReportBundle::new(be)),
            maintenance: Some(ReportBundle::new(mt)),
        };
        let doc = assemble(Language::Fr, &bundles, now());
        assert_eq!(doc.sections[0].results[0], Language::Fr.text(TextKey::Q2ResultNever));
        assert_eq!(doc.sections[1].results[0], Language::Fr.text(TextKey::Q3WarningMessage));
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("a*b_c"), "a\\*b\\_c");
        assert_eq!(escape_typst("#x $y @z"), "\\#x \\$y \\@z");
        assert_eq!(escape_typst("[n] // -1"), "\\[n\\] \\/\\/ \\-1");
        assert_eq!(escape_typst("Zäit"), "Zäit");
    }

    #[test]
    fn test_typst_source_references_charts() {
        let doc = assemble(Language::Lb, &full_bundles(Language::Lb), now());
        let source = doc.to_typst_source();
        assert!(source.contains("#set text(lang: \"lb\")"));
        for n in 1..=3 {
            assert!(source.contains(&format!("/charts/q{}.svg", n)));
        }

        let files = doc.chart_files();
        assert_eq!(files.len(), 3);
        assert_eq!(files[0].0, PathBuf::from("charts/q1.svg"));
    }

    #[test]
    fn test_pdf_generation() {
        let doc = assemble(Language::Fr, &full_bundles(Language::Fr), now());
        let pdf = render_pdf(&doc);

        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());
        let bytes = pdf.unwrap();
        assert!(bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        assert!(bytes.len() > 1000, "PDF seems too small");
    }
}
