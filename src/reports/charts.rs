//! Text renderings of the dashboard's cards and charts.

use crate::config::Color;
use crate::metrics::{DistributionEntry, MetricsSummary, TimeSeriesPoint, TrendMetric};
use crate::view::YearRange;
use crate::view::formatters::{format_number, format_percentage};
use core::fmt::Write;
use owo_colors::OwoColorize;

const CARD_WIDTH: usize = 19;
const CHART_ROWS: usize = 11;
const MAX_COLUMN_WIDTH: usize = 6;
const YEAR_LABEL_WIDTH: usize = 5;
const MAX_LABEL_WIDTH: usize = 28;
const MIN_BAR_WIDTH: usize = 10;

/// Applies terminal styling when colors are enabled and passes text through otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub fn color(self, text: &str, color: Color) -> String {
        if self.enabled {
            let (r, g, b) = color.components();
            text.truecolor(r, g, b).to_string()
        } else {
            text.to_string()
        }
    }

    #[must_use]
    pub fn bold(self, text: &str) -> String {
        if self.enabled { text.bold().to_string() } else { text.to_string() }
    }

    #[must_use]
    pub fn dimmed(self, text: &str) -> String {
        if self.enabled { text.dimmed().to_string() } else { text.to_string() }
    }

    #[must_use]
    pub fn error(self, text: &str) -> String {
        if self.enabled { text.red().bold().to_string() } else { text.to_string() }
    }
}

/// Legend label of the trend line.
#[must_use]
pub const fn metric_legend(metric: TrendMetric) -> &'static str {
    match metric {
        TrendMetric::OpenCode => "Open Code %",
        TrendMetric::OpenData => "Open Data %",
    }
}

#[must_use]
pub fn metric_color(metric: TrendMetric) -> Color {
    match metric {
        TrendMetric::OpenCode => Color::rgb(0x10, 0xB9, 0x81),
        TrendMetric::OpenData => Color::rgb(0x8B, 0x5C, 0xF6),
    }
}

/// The five headline cards, wrapped to fit `width` columns.
#[must_use]
pub fn summary_cards(summary: &MetricsSummary, width: usize, painter: Painter) -> String {
    let cards = [
        ("Total Records", format_number(summary.total_records)),
        ("Open Code %", format_percentage(summary.open_code_percentage)),
        ("Open Data %", format_percentage(summary.open_data_percentage)),
        ("Unique Journals", format_number(summary.unique_journals)),
        ("Countries", format_number(summary.unique_countries)),
    ];

    let inner = CARD_WIDTH - 4;
    let border = "─".repeat(CARD_WIDTH - 2);
    let per_row = (width / (CARD_WIDTH + 1)).clamp(1, cards.len());
    let mut out = String::new();

    for row in cards.chunks(per_row) {
        let tops: Vec<_> = row.iter().map(|_| format!("┌{border}┐")).collect();
        let titles: Vec<_> = row
            .iter()
            .map(|(title, _)| format!("│ {} │", painter.dimmed(&format!("{title:<inner$}"))))
            .collect();
        let values: Vec<_> = row
            .iter()
            .map(|(_, value)| format!("│ {} │", painter.bold(&format!("{:<inner$}", truncate(value, inner)))))
            .collect();
        let bottoms: Vec<_> = row.iter().map(|_| format!("└{border}┘")).collect();

        for line in [tops, titles, values, bottoms] {
            let _ = writeln!(out, "{}", line.join(" "));
        }
    }

    out
}

/// Row (0 = bottom, `CHART_ROWS - 1` = top) at which a percentage is plotted.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "value is clamped to 0..=100 and the row count is small"
)]
fn value_row(value: f64) -> usize {
    let steps = (CHART_ROWS - 1) as f64;
    (value.clamp(0.0, 100.0) / 100.0 * steps).round() as usize
}

/// Plot of the selected metric per year of `range` on a 0-100% scale.
#[must_use]
pub fn trend_chart(
    points: &[TimeSeriesPoint],
    range: YearRange,
    metric: TrendMetric,
    width: usize,
    painter: Painter,
) -> String {
    let color = metric_color(metric);
    let mut out = String::new();

    let _ = writeln!(out, "{}", painter.bold("Open Science Trends Over Time"));
    let _ = writeln!(out, "{} {}", painter.color("●", color), metric_legend(metric));

    if points.is_empty() {
        if range.is_empty() {
            let _ = writeln!(
                out,
                "  No data for the selected range ({} is after {})",
                range.from_year, range.to_year
            );
        } else {
            let _ = writeln!(out, "  No data for the selected range");
        }
        return out;
    }

    let available = width.saturating_sub(8).max(points.len());
    let column_width = (available / points.len()).clamp(1, MAX_COLUMN_WIDTH);
    let rows: Vec<_> = points.iter().map(|p| value_row(p.value(metric))).collect();
    let marker = painter.color("●", color);

    for row in (0..CHART_ROWS).rev() {
        let label = if row % 2 == 0 {
            format!("{}%", row * 100 / (CHART_ROWS - 1))
        } else {
            String::new()
        };

        let mut line = format!("{label:>4} │");
        for &point_row in &rows {
            line.push_str(&" ".repeat(column_width / 2));
            if point_row == row {
                line.push_str(&marker);
            } else {
                line.push(' ');
            }
            line.push_str(&" ".repeat(column_width - column_width / 2 - 1));
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let _ = writeln!(out, "     └{}", "─".repeat(column_width * points.len()));

    let label_every = YEAR_LABEL_WIDTH.div_ceil(column_width);
    let mut labels = vec![' '; column_width * points.len() + YEAR_LABEL_WIDTH];
    for (i, point) in points.iter().enumerate().step_by(label_every) {
        for (offset, c) in point.year.to_string().chars().enumerate() {
            if let Some(slot) = labels.get_mut(i * column_width + offset) {
                *slot = c;
            }
        }
    }
    let labels: String = labels.into_iter().collect();
    let _ = writeln!(out, "      {}", labels.trim_end());

    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

fn bar_length(value: u64, max: u64, bar_width: usize) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }

    let scaled = (u128::from(value) * bar_width as u128 + u128::from(max) / 2) / u128::from(max);
    usize::try_from(scaled).unwrap_or(bar_width).clamp(1, bar_width)
}

/// Horizontal bars, one per entry, in the order given.
#[must_use]
pub fn bar_chart(title: &str, entries: &[DistributionEntry], color: Color, width: usize, painter: Painter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", painter.bold(title));

    if entries.is_empty() {
        let _ = writeln!(out, "  No data");
        return out;
    }

    let label_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH);
    let value_width = entries.iter().map(|e| format_number(e.value).len()).max().unwrap_or(1);
    let bar_width = width.saturating_sub(label_width + value_width + 4).max(MIN_BAR_WIDTH);
    let max = entries.iter().map(|e| e.value).max().unwrap_or(0);

    for entry in entries {
        let name = truncate(&entry.name, label_width);
        let bar = "█".repeat(bar_length(entry.value, max, bar_width));
        let _ = writeln!(
            out,
            "{name:<label_width$} │{} {}",
            painter.color(&bar, color),
            format_number(entry.value)
        );
    }

    out
}
