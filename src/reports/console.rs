use super::charts::{self, Painter};
use crate::config::Color;
use crate::view::formatters::format_date;
use crate::view::{Dashboard, TOP_N};
use core::fmt::Display;
use std::io::{Result, Write};

/// Rendering parameters for the console report.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    pub use_colors: bool,

    /// Number of terminal columns available.
    pub width: usize,

    pub country_color: Color,
    pub journal_color: Color,
}

/// Write the dashboard as a terminal report.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails
pub fn generate<W: Write>(dashboard: &Dashboard, options: &ConsoleOptions, writer: &mut W) -> Result<()> {
    let painter = Painter::new(options.use_colors);

    writeln!(writer, "{}", painter.bold("OpenSciMetrics Dashboard"))?;
    writeln!(
        writer,
        "{}",
        painter.dimmed(&format!("Years {} | Trend metric: {}", dashboard.range, dashboard.metric))
    )?;
    writeln!(writer)?;

    write!(writer, "{}", charts::summary_cards(&dashboard.summary, options.width, painter))?;
    writeln!(writer)?;

    write!(
        writer,
        "{}",
        charts::trend_chart(
            &dashboard.time_series,
            dashboard.range,
            dashboard.metric,
            options.width,
            painter
        )
    )?;
    writeln!(writer)?;

    write!(
        writer,
        "{}",
        charts::bar_chart(
            &format!("Top {TOP_N} Countries by Publications"),
            &dashboard.top_countries,
            options.country_color,
            options.width,
            painter
        )
    )?;
    writeln!(writer)?;

    write!(
        writer,
        "{}",
        charts::bar_chart(
            &format!("Top {TOP_N} Journals by Publications"),
            &dashboard.top_journals,
            options.journal_color,
            options.width,
            painter
        )
    )?;
    writeln!(writer)?;

    let generated = format_date(&dashboard.generated_at.to_rfc3339());
    writeln!(writer, "{}", painter.dimmed(&format!("Generated on {generated}")))?;

    Ok(())
}

/// Write a failure as `Error: <description>`.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails
pub fn write_error<W: Write>(error: &dyn Display, use_colors: bool, writer: &mut W) -> Result<()> {
    let painter = Painter::new(use_colors);
    writeln!(writer, "{}", painter.error(&format!("Error: {error}")))
}
