//! # Charts
//!
//! Typed chart descriptions built from model results, and a small SVG
//! renderer for them. The report embeds the SVG output; the CLI can write
//! it to a file.
//!
//! | Model | Kind | X axis | Reference line |
//! |-------|------|--------|----------------|
//! | Time savings | Bar | manual / automated / saved | none |
//! | Break-even | Line | run number | investment |
//! | Maintenance | Line | next six months | 0 |
//!
//! ## Example
//!
//! ```rust
//! use tacalc_core::calculations::time_savings::{calculate, TimeSavingsInput};
//! use tacalc_core::charts::time_savings_chart;
//! use tacalc_core::i18n::Language;
//!
//! let result = calculate(&TimeSavingsInput::new(10.0, 30.0)).unwrap().unwrap();
//! let svg = time_savings_chart(&result, Language::En).to_svg();
//! assert!(svg.starts_with("<svg"));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculations::{BreakEvenResult, MaintenanceResult, TimeSavingsResult};
use crate::i18n::{fill, format_number, next_six_months, Language, TextKey};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 84.0;
const MARGIN_RIGHT: f64 = 28.0;
const MARGIN_TOP: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 68.0;

const Y_TICKS: usize = 6;
const MAX_X_LABELS: usize = 10;
const MAX_MARKERS: usize = 50;
/// Line charts draw at most this many samples of a long series
pub const MAX_LINE_POINTS: usize = 500;

const FONT_FAMILY: &str = "Libertinus Serif";
const BAR_COLORS: [&str; 3] = ["#4c78a8", "#f58518", "#54a24b"];
const LINE_COLOR: &str = "#4c78a8";
const REFERENCE_COLOR: &str = "#d62728";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// One category (bar chart) or sample (line chart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Horizontal line drawn across the plot at a fixed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub value: f64,
    pub label: Option<String>,
}

/// A fully localized chart, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: String,
    /// Legend entry for the data series, if any
    pub series_label: Option<String>,
    pub points: Vec<ChartPoint>,
    pub reference: Option<ReferenceLine>,
    /// Language used for tick and value labels
    pub language: Language,
}

/// Bar chart comparing manual, automated and saved hours per run.
pub fn time_savings_chart(result: &TimeSavingsResult, language: Language) -> Chart {
    let bars = [
        (TextKey::Q1LabelManual, result.input.manual_hours),
        (TextKey::Q1LabelAutomated, result.automated_hours),
        (TextKey::Q1LabelSaved, result.savings_per_run_hours),
    ];

    Chart {
        kind: ChartKind::Bar,
        title: language.text(TextKey::Q1ChartTitle).to_string(),
        x_label: None,
        y_label: language.text(TextKey::Q1ChartYAxis).to_string(),
        series_label: None,
        points: bars
            .iter()
            .map(|(key, value)| ChartPoint {
                label: language.text(*key).to_string(),
                value: *value,
            })
            .collect(),
        reference: None,
        language,
    }
}

/// Cumulative savings per run against the investment.
///
/// Returns `None` when the model produced no trend series. Long series are
/// thinned to [`MAX_LINE_POINTS`] evenly spaced runs, first and last kept.
pub fn break_even_chart(result: &BreakEvenResult, language: Language) -> Option<Chart> {
    let trend = result.trend?;

    Some(Chart {
        kind: ChartKind::Line,
        title: language.text(TextKey::Q2ChartTitle).to_string(),
        x_label: Some(language.text(TextKey::Q2ChartXAxis).to_string()),
        y_label: language.text(TextKey::Q2ChartYAxis).to_string(),
        series_label: Some(language.text(TextKey::Q2ChartTrace).to_string()),
        points: trend
            .sample(MAX_LINE_POINTS)
            .into_iter()
            .map(|p| ChartPoint {
                label: p.run.to_string(),
                value: p.cumulative_savings_hours,
            })
            .collect(),
        reference: Some(ReferenceLine {
            value: result.input.investment_hours,
            label: Some(language.text(TextKey::Q2ChartAnnotation).to_string()),
        }),
        language,
    })
}

/// Six-month headroom projection, labelled with the months after `today`.
pub fn maintenance_chart(result: &MaintenanceResult, language: Language, today: NaiveDate) -> Chart {
    let count = result.input.new_tests_per_month.to_string();
    let months = next_six_months(language, today);

    Chart {
        kind: ChartKind::Line,
        title: fill(language.text(TextKey::Q3ChartTitle), &[("count", &count)]),
        x_label: Some(language.text(TextKey::Q3ChartXAxis).to_string()),
        y_label: language.text(TextKey::Q3ChartYAxis).to_string(),
        series_label: None,
        points: months
            .iter()
            .zip(result.potential.iter())
            .map(|(month, value)| ChartPoint {
                label: (*month).to_string(),
                value: *value,
            })
            .collect(),
        reference: Some(ReferenceLine {
            value: 0.0,
            label: None,
        }),
        language,
    }
}

/// Maps a value domain onto a pixel span.
#[derive(Debug, Clone, Copy)]
struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    fn new(domain_start: f64, domain_end: f64) -> Self {
        // A flat domain would divide by zero
        if domain_end - domain_start <= f64::EPSILON {
            return LinearScale {
                domain_start,
                domain_end: domain_start + 1.0,
            };
        }
        LinearScale {
            domain_start,
            domain_end,
        }
    }

    fn ratio(self, value: f64) -> f64 {
        (value - self.domain_start) / (self.domain_end - self.domain_start)
    }

    fn ticks(self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.domain_start];
        }
        let step = (self.domain_end - self.domain_start) / (count - 1) as f64;
        (0..count).map(|i| self.domain_start + step * i as f64).collect()
    }
}

impl Chart {
    fn y_scale(&self) -> LinearScale {
        let values = self
            .points
            .iter()
            .map(|p| p.value)
            .chain(self.reference.iter().map(|r| r.value))
            .filter(|v| v.is_finite());

        let (lo, hi) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let pad = (hi - lo) * 0.05;
        LinearScale::new(if lo < 0.0 { lo - pad } else { lo }, hi + pad)
    }

    fn plot_width(&self) -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height(&self) -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn y_px(&self, scale: LinearScale, value: f64) -> f64 {
        MARGIN_TOP + self.plot_height() * (1.0 - scale.ratio(value))
    }

    fn tick_decimals(scale: LinearScale) -> usize {
        let step = (scale.domain_end - scale.domain_start) / (Y_TICKS - 1) as f64;
        if step >= 5.0 {
            0
        } else if step >= 0.5 {
            1
        } else {
            2
        }
    }

    /// Render as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let scale = self.y_scale();
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"{font}\">\n",
            w = WIDTH,
            h = HEIGHT,
            font = FONT_FAMILY,
        );
        svg.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
            WIDTH, HEIGHT
        ));

        self.push_axes(&mut svg, scale);

        match self.kind {
            ChartKind::Bar => self.push_bars(&mut svg, scale),
            ChartKind::Line => self.push_line(&mut svg, scale),
        }

        if let Some(reference) = &self.reference {
            self.push_reference(&mut svg, scale, reference);
        }

        self.push_labels(&mut svg);
        svg.push_str("</svg>\n");
        svg
    }

    fn push_axes(&self, svg: &mut String, scale: LinearScale) {
        let left = MARGIN_LEFT;
        let right = MARGIN_LEFT + self.plot_width();
        let decimals = Self::tick_decimals(scale);

        for tick in scale.ticks(Y_TICKS) {
            let y = self.y_px(scale, tick);
            svg.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#e0e0e0\" stroke-width=\"1\"/>\n",
                left, y, right, y
            ));
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"end\">{}</text>\n",
                left - 6.0,
                y + 4.0,
                xml_escape(&format_number(tick, decimals, self.language))
            ));
        }

        let bottom = MARGIN_TOP + self.plot_height();
        svg.push_str(&format!(
            "<line x1=\"{l:.1}\" y1=\"{t:.1}\" x2=\"{l:.1}\" y2=\"{b:.1}\" stroke=\"#333333\" stroke-width=\"1\"/>\n",
            l = left,
            t = MARGIN_TOP,
            b = bottom
        ));
        let zero = self.y_px(scale, 0.0);
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{z:.1}\" x2=\"{:.1}\" y2=\"{z:.1}\" stroke=\"#333333\" stroke-width=\"1\"/>\n",
            left,
            right,
            z = zero
        ));
    }

    fn push_bars(&self, svg: &mut String, scale: LinearScale) {
        if self.points.is_empty() {
            return;
        }
        let slot = self.plot_width() / self.points.len() as f64;
        let bar_width = slot * 0.6;
        let zero = self.y_px(scale, 0.0);
        let bottom = MARGIN_TOP + self.plot_height();

        for (i, point) in self.points.iter().enumerate() {
            let center = MARGIN_LEFT + slot * (i as f64 + 0.5);
            let y = self.y_px(scale, point.value);
            let (top, height) = if y <= zero { (y, zero - y) } else { (zero, y - zero) };

            svg.push_str(&format!(
                "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>\n",
                center - bar_width / 2.0,
                top,
                bar_width,
                height,
                BAR_COLORS[i % BAR_COLORS.len()]
            ));

            let value_y = if point.value >= 0.0 { top - 6.0 } else { top + height + 14.0 };
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\">{}</text>\n",
                center,
                value_y,
                xml_escape(&format_number(point.value, 1, self.language))
            ));
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\">{}</text>\n",
                center,
                bottom + 20.0,
                xml_escape(&point.label)
            ));
        }
    }

    fn x_px(&self, index: usize) -> f64 {
        match self.points.len() {
            0 | 1 => MARGIN_LEFT + self.plot_width() / 2.0,
            n => MARGIN_LEFT + self.plot_width() * index as f64 / (n - 1) as f64,
        }
    }

    fn push_line(&self, svg: &mut String, scale: LinearScale) {
        if self.points.is_empty() {
            return;
        }

        let coords: Vec<String> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{:.1},{:.1}", self.x_px(i), self.y_px(scale, p.value)))
            .collect();
        svg.push_str(&format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            coords.join(" "),
            LINE_COLOR
        ));

        if self.points.len() <= MAX_MARKERS {
            for (i, p) in self.points.iter().enumerate() {
                svg.push_str(&format!(
                    "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"{}\"/>\n",
                    self.x_px(i),
                    self.y_px(scale, p.value),
                    LINE_COLOR
                ));
            }
        }

        let bottom = MARGIN_TOP + self.plot_height();
        let stride = self.points.len().div_ceil(MAX_X_LABELS).max(1);
        for (i, p) in self.points.iter().enumerate().step_by(stride) {
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"middle\">{}</text>\n",
                self.x_px(i),
                bottom + 18.0,
                xml_escape(&p.label)
            ));
        }

        if let Some(series) = &self.series_label {
            let x = WIDTH - MARGIN_RIGHT - 150.0;
            svg.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
                x,
                x + 18.0,
                LINE_COLOR,
                y = MARGIN_TOP - 14.0
            ));
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\">{}</text>\n",
                x + 24.0,
                MARGIN_TOP - 10.0,
                xml_escape(series)
            ));
        }
    }

    fn push_reference(&self, svg: &mut String, scale: LinearScale, reference: &ReferenceLine) {
        let y = self.y_px(scale, reference.value);
        let right = MARGIN_LEFT + self.plot_width();
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{}\" stroke-width=\"1.5\" stroke-dasharray=\"6 4\"/>\n",
            MARGIN_LEFT,
            right,
            REFERENCE_COLOR,
            y = y
        ));
        if let Some(label) = &reference.label {
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"end\" fill=\"{}\">{}</text>\n",
                right - 4.0,
                y - 6.0,
                REFERENCE_COLOR,
                xml_escape(label)
            ));
        }
    }

    fn push_labels(&self, svg: &mut String) {
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"26\" font-size=\"15\" font-weight=\"bold\" text-anchor=\"middle\">{}</text>\n",
            WIDTH / 2.0,
            xml_escape(&self.title)
        ));

        let mid_y = MARGIN_TOP + self.plot_height() / 2.0;
        svg.push_str(&format!(
            "<text x=\"18\" y=\"{y:.1}\" font-size=\"12\" text-anchor=\"middle\" transform=\"rotate(-90 18 {y:.1})\">{}</text>\n",
            xml_escape(&self.y_label),
            y = mid_y
        ));

        if let Some(x_label) = &self.x_label {
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\">{}</text>\n",
                MARGIN_LEFT + self.plot_width() / 2.0,
                HEIGHT - 14.0,
                xml_escape(x_label)
            ));
        }
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
