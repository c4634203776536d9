use super::Host;
use crate::client::ApiClient;
use crate::config::Config;
use crate::loading::{LoadHandle, ProgressReporter, RequestTracker};
use crate::metrics::TrendMetric;
use crate::misc::ColorMode;
use crate::reports::{self, ConsoleOptions};
use crate::view::{Dashboard, YearRange};
use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::{Args, ValueEnum};
use core::time::Duration;
use serde::de::value::{Error as ValueError, StrDeserializer};
use std::io::{self, IsTerminal};
use terminal_size::{Width, terminal_size};
use url::Url;

const PROGRESS_DELAY: Duration = Duration::from_millis(500);
const DEFAULT_WIDTH: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Console,
    Json,
}

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Root URL of the metrics backend API
    #[arg(long, env = "OSM_DASH_BASE_URL", value_name = "URL")]
    pub base_url: Option<Url>,

    /// First year shown by the trend chart
    #[arg(long, value_name = "YEAR")]
    pub from_year: Option<i32>,

    /// Last year shown by the trend chart
    #[arg(long, value_name = "YEAR")]
    pub to_year: Option<i32>,

    /// Metric plotted by the trend chart
    #[arg(long, value_enum)]
    pub metric: Option<TrendMetric>,

    /// Output format
    #[arg(long, value_enum, default_value = "console")]
    pub format: ReportFormat,

    /// When to use colors in console output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorMode,

    /// Path to a configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Maximum duration of a single backend request (e.g. "10s", "1m")
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub timeout: Option<Duration>,
}

impl ShowArgs {
    /// Override configuration values with those given on the command line.
    fn apply_to(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(from_year) = self.from_year {
            config.from_year = from_year;
        }
        if let Some(to_year) = self.to_year {
            config.to_year = to_year;
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout = timeout;
        }
    }
}

fn parse_duration(value: &str) -> Result<Duration, String> {
    humantime_serde::deserialize(StrDeserializer::<ValueError>::new(value)).map_err(|e| e.to_string())
}

fn terminal_width() -> usize {
    terminal_size().map_or(DEFAULT_WIDTH, |(Width(width), _)| usize::from(width))
}

/// Load the metrics and render the dashboard.
///
/// A failed load is reported as `Error: <description>` on the host's error stream and
/// exits with code 1.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the report cannot be written
pub async fn show_dashboard<H: Host>(host: &mut H, args: &ShowArgs) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    args.apply_to(&mut config);
    config.validate()?;

    let progress = ProgressReporter::new(PROGRESS_DELAY);
    progress.set_prefix("Loading");
    progress.set_message("metrics");
    progress.enable_indeterminate_mode();
    let _visibility = progress.start_visibility_checking();

    let client = ApiClient::new(&config.base_url, config.request_timeout)?.with_tracker(RequestTracker::new(progress.clone()));
    let mut handle = LoadHandle::spawn(client);
    let state = handle.settled().await;
    progress.finish_and_clear();

    if let Some(error) = &state.error {
        {
            let mut err = host.error();
            reports::write_error(&**error, args.color.use_colors(io::stderr().is_terminal()), &mut err)?;
        }
        host.exit(1);
        return Ok(());
    }

    let range = YearRange::new(config.from_year, config.to_year);
    let dashboard = Dashboard::new(&state, range, config.metric, Utc::now());

    let mut out = host.output();
    match args.format {
        ReportFormat::Console => {
            let options = ConsoleOptions {
                use_colors: args.color.use_colors(io::stdout().is_terminal()),
                width: terminal_width(),
                country_color: config.country_color,
                journal_color: config.journal_color,
            };
            reports::generate_console(&dashboard, &options, &mut out).context("writing the console report")?;
        }
        ReportFormat::Json => {
            reports::generate_json(&dashboard, &mut out).context("writing the JSON report")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("10s").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_duration("1m 30s").unwrap(), Duration::from_secs(90));
        let _ = parse_duration("soon").unwrap_err();
    }

    #[test]
    fn test_command_line_overrides_config() {
        let args = ShowArgs {
            base_url: Some(Url::parse("https://metrics.example.org/api").unwrap()),
            from_year: Some(2010),
            metric: Some(TrendMetric::OpenData),
            timeout: Some(Duration::from_secs(5)),
            ..ShowArgs::default()
        };

        let mut config = Config::default();
        args.apply_to(&mut config);

        assert_eq!(config.base_url.as_str(), "https://metrics.example.org/api");
        assert_eq!(config.from_year, 2010);
        assert_eq!(config.to_year, 2024);
        assert_eq!(config.metric, TrendMetric::OpenData);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = Config::default();
        ShowArgs::default().apply_to(&mut config);
        assert_eq!(config, Config::default());
    }
}
