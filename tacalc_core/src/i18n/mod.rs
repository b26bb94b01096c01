//! # Localization
//!
//! Display strings for English, German, French and Luxembourgish, plus
//! month abbreviations and number formatting.
//!
//! Every string is addressed by a [`TextKey`], and each language module
//! matches exhaustively over it, so a translation that is missing in one
//! language is a compile error rather than a placeholder at render time.
//!
//! The string-addressed [`lookup`] remains for callers that only have a
//! language code and a `section.key` pair (CLI arguments, templates). It
//! falls back to the visible placeholder `"[Missing: <section>.<key>]"`.
//!
//! ## Example
//!
//! ```rust
//! use tacalc_core::i18n::{format_number, Language, TextKey};
//!
//! let de = Language::De;
//! assert_eq!(de.text(TextKey::Q3ChartXAxis), "Monate");
//! assert_eq!(format_number(1.5, 1, de), "1,5");
//! ```

mod de;
mod en;
mod fr;
mod lb;

use std::borrow::Cow;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    Lb,
}

impl Language {
    /// Every supported language
    pub const ALL: [Language; 4] = [Language::En, Language::De, Language::Fr, Language::Lb];

    /// ISO-style code (`en`, `de`, `fr`, `lb`)
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Lb => "lb",
        }
    }

    /// Native name of the language
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
            Language::Fr => "Français",
            Language::Lb => "Lëtzebuergesch",
        }
    }

    /// Match a code from the closed set. Codes are matched exactly.
    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL.iter().copied().find(|l| l.code() == code)
    }

    /// Like [`Language::from_code`], but an unknown code is an error.
    pub fn parse(code: &str) -> CalcResult<Self> {
        Language::from_code(code).ok_or_else(|| CalcError::unsupported_language(code))
    }

    /// Localized string for `key`
    pub fn text(self, key: TextKey) -> &'static str {
        match self {
            Language::En => en::text(key),
            Language::De => de::text(key),
            Language::Fr => fr::text(key),
            Language::Lb => lb::text(key),
        }
    }

    /// The 12 month abbreviations, January first
    pub fn months(self) -> &'static [&'static str; 12] {
        match self {
            Language::En => &en::MONTHS,
            Language::De => &de::MONTHS,
            Language::Fr => &fr::MONTHS,
            Language::Lb => &lb::MONTHS,
        }
    }

    /// Decimal separator used by [`format_number`]
    pub fn decimal_separator(self) -> char {
        match self {
            Language::En => '.',
            Language::De | Language::Fr | Language::Lb => ',',
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

macro_rules! text_keys {
    ($($variant:ident => ($section:literal, $key:literal),)*) => {
        /// Address of a localized string: a section plus a key within it.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TextKey {
            $($variant,)*
        }

        impl TextKey {
            /// Every key
            pub const ALL: &'static [TextKey] = &[$(TextKey::$variant,)*];

            /// Section name (`question1`, `pdf`, ...)
            pub fn section(self) -> &'static str {
                match self {
                    $(TextKey::$variant => $section,)*
                }
            }

            /// Key name within the section
            pub fn key(self) -> &'static str {
                match self {
                    $(TextKey::$variant => $key,)*
                }
            }
        }
    };
}

text_keys! {
    AppTitle => ("main", "app_title"),
    LanguageLabel => ("main", "language_label"),
    Instructions => ("home", "instructions"),
    UnitHours => ("units", "hours"),
    UnitMinutes => ("units", "minutes"),

    Q1Title => ("question1", "title"),
    Q1InputManual => ("question1", "input_manual"),
    Q1InputAutomated => ("question1", "input_automated"),
    Q1InputDevelopment => ("question1", "input_development"),
    Q1ResultMessage => ("question1", "result_message"),
    Q1FirstRunGain => ("question1", "first_run_gain"),
    Q1FirstRunLoss => ("question1", "first_run_loss"),
    Q1Amortization => ("question1", "amortization_message"),
    Q1ChartTitle => ("question1", "chart_title"),
    Q1ChartYAxis => ("question1", "chart_yaxis"),
    Q1LabelManual => ("question1", "label_manual"),
    Q1LabelAutomated => ("question1", "label_automated"),
    Q1LabelSaved => ("question1", "label_saved"),

    Q2Title => ("question2", "title"),
    Q2InputInvestment => ("question2", "input_investment"),
    Q2InputSavings => ("question2", "input_savings"),
    Q2ResultMessage => ("question2", "result_message"),
    Q2ResultNever => ("question2", "result_never"),
    Q2ChartTitle => ("question2", "chart_title"),
    Q2ChartXAxis => ("question2", "chart_xaxis"),
    Q2ChartYAxis => ("question2", "chart_yaxis"),
    Q2ChartAnnotation => ("question2", "chart_annotation"),
    Q2ChartTrace => ("question2", "chart_trace"),

    Q3Title => ("question3", "title"),
    Q3InputTh => ("question3", "input_th"),
    Q3InputMt => ("question3", "input_mt"),
    Q3InputN => ("question3", "input_n"),
    Q3InputA => ("question3", "input_a"),
    Q3WarningMessage => ("question3", "warning_message"),
    Q3SuccessMessage => ("question3", "success_message"),
    Q3ChartTitle => ("question3", "chart_title"),
    Q3ChartXAxis => ("question3", "chart_xaxis"),
    Q3ChartYAxis => ("question3", "chart_yaxis"),

    PdfTitle => ("pdf", "title"),
    PdfGeneratedDate => ("pdf", "generated_date"),
    PdfExecutiveSummary => ("pdf", "executive_summary"),
    PdfSummaryIntro => ("pdf", "summary_intro"),
    PdfQ1SummaryLabel => ("pdf", "q1_summary_label"),
    PdfQ2SummaryLabel => ("pdf", "q2_summary_label"),
    PdfQ3SummaryLabel => ("pdf", "q3_summary_label"),
    PdfInputsLabel => ("pdf", "inputs_label"),
    PdfResultsLabel => ("pdf", "results_label"),
    PdfFooterNote => ("pdf", "footer_note"),
}

impl TextKey {
    /// Find the key for a `section`/`key` pair
    pub fn from_parts(section: &str, key: &str) -> Option<Self> {
        TextKey::ALL
            .iter()
            .copied()
            .find(|k| k.section() == section && k.key() == key)
    }
}

/// Placeholder shown in place of a missing translation
pub fn missing_placeholder(section: &str, key: &str) -> String {
    format!("[Missing: {}.{}]", section, key)
}

/// Look up a string by language code, section and key.
///
/// Unknown languages, sections or keys produce the placeholder
/// `"[Missing: <section>.<key>]"` instead of failing.
pub fn lookup(code: &str, section: &str, key: &str) -> Cow<'static, str> {
    match (Language::from_code(code), TextKey::from_parts(section, key)) {
        (Some(language), Some(text_key)) => Cow::Borrowed(language.text(text_key)),
        _ => Cow::Owned(missing_placeholder(section, key)),
    }
}

/// Month abbreviations for a language code; unknown codes get English.
pub fn months_for_code(code: &str) -> &'static [&'static str; 12] {
    Language::from_code(code).unwrap_or_default().months()
}

/// Abbreviations of the six months following `today`'s month.
///
/// ```rust
/// use chrono::NaiveDate;
/// use tacalc_core::i18n::{next_six_months, Language};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// assert_eq!(
///     next_six_months(Language::En, today),
///     ["Nov", "Dec", "Jan", "Feb", "Mar", "Apr"]
/// );
/// ```
pub fn next_six_months(language: Language, today: NaiveDate) -> [&'static str; 6] {
    let months = language.months();
    let current = today.month0() as usize;
    std::array::from_fn(|i| months[(current + i + 1) % 12])
}

/// Format `value` with `decimals` places and the language's decimal separator.
pub fn format_number(value: f64, decimals: usize, language: Language) -> String {
    let formatted = format!("{:.*}", decimals, value);
    match language.decimal_separator() {
        '.' => formatted,
        sep => formatted.replace('.', &sep.to_string()),
    }
}

/// Replace `{name}` placeholders in a localized template.
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{}}}", name), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_language_codes() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code("es"), None);
        assert!(Language::parse("xx").is_err());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.5, 1, Language::En), "1.5");
        assert_eq!(format_number(1.5, 1, Language::De), "1,5");
        assert_eq!(format_number(1.5, 1, Language::Fr), "1,5");
        assert_eq!(format_number(1.5, 1, Language::Lb), "1,5");
        assert_eq!(format_number(9.5, 2, Language::En), "9.50");
        assert_eq!(format_number(29.0, 0, Language::De), "29");
        assert_eq!(format_number(-0.25, 2, Language::Lb), "-0,25");
    }

    #[test]
    fn test_lookup_and_placeholders() {
        assert_eq!(lookup("de", "question3", "chart_xaxis"), "Monate");
        assert_eq!(lookup("en", "question9", "title"), "[Missing: question9.title]");
        assert_eq!(lookup("en", "question1", "nope"), "[Missing: question1.nope]");
        // Unknown languages produce placeholders for section lookups
        assert_eq!(lookup("es", "question1", "title"), "[Missing: question1.title]");
    }

    #[test]
    fn test_months_fallback() {
        assert_eq!(months_for_code("de")[2], "Mär");
        assert_eq!(months_for_code("fr")[7], "août");
        assert_eq!(months_for_code("xx"), Language::En.months());
    }

    #[test]
    fn test_next_six_months_wraps_year() {
        let december = NaiveDate::from_ymd_opt(2026, 12, 3).unwrap();
        assert_eq!(
            next_six_months(Language::De, december),
            ["Jan", "Feb", "Mär", "Apr", "Mai", "Jun"]
        );

        let june = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        assert_eq!(
            next_six_months(Language::Lb, june),
            ["Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez."]
        );
    }

    #[test]
    fn test_fill() {
        let text = fill(Language::En.text(TextKey::Q2ResultMessage), &[("runs", "9")]);
        assert_eq!(
            text,
            "Number of test runs needed to counter-balance the initial investment: 9"
        );
    }

    #[test]
    fn test_keys_are_unique() {
        let pairs: HashSet<_> = TextKey::ALL.iter().map(|k| (k.section(), k.key())).collect();
        assert_eq!(pairs.len(), TextKey::ALL.len());
        for key in TextKey::ALL {
            assert_eq!(TextKey::from_parts(key.section(), key.key()), Some(*key));
        }
    }

    #[test]
    fn test_every_language_fills_every_key() {
        for language in Language::ALL {
            for key in TextKey::ALL {
                assert!(
                    !language.text(*key).is_empty(),
                    "{}: {}.{} is empty",
                    language,
                    key.section(),
                    key.key()
                );
            }
        }
    }

    #[test]
    fn test_templates_keep_placeholders() {
        for language in Language::ALL {
            assert!(language.text(TextKey::Q1ResultMessage).contains("{time}"));
            assert!(language.text(TextKey::Q1FirstRunGain).contains("{time}"));
            assert!(language.text(TextKey::Q1FirstRunLoss).contains("{time}"));
            assert!(language.text(TextKey::Q1Amortization).contains("{runs}"));
            assert!(language.text(TextKey::Q2ResultMessage).contains("{runs}"));
            assert!(language.text(TextKey::Q3SuccessMessage).contains("{count}"));
            assert!(language.text(TextKey::Q3ChartTitle).contains("{count}"));
        }
    }
}
