use super::{Host, InitArgs, ShowArgs, init_config, show_dashboard};
use crate::reports;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::{Builder, Env};
use std::ffi::OsString;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "osm-dash", version, about = "Terminal dashboard for open science publication metrics")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Increase logging verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<DashCommand>,

    #[command(flatten)]
    show: ShowArgs,
}

#[derive(Subcommand, Debug)]
enum DashCommand {
    /// Load the metrics and render the dashboard (default)
    Show(ShowArgs),

    /// Write the default configuration file
    Init(InitArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    // Embedders may already have installed a logger.
    let _ = Builder::from_env(Env::default().default_filter_or(level)).try_init();
}

/// Parse `args` (including the program name) and run the selected command.
///
/// Output goes to `host`; failures are written as `Error: <description>` and end with
/// exit code 1. Invalid command lines exit with clap's exit code.
pub async fn run<H, I, T>(host: &mut H, args: I)
where
    H: Host,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = if e.use_stderr() {
                write!(host.error(), "{}", e.render())
            } else {
                write!(host.output(), "{}", e.render())
            };
            host.exit(e.exit_code());
            return;
        }
    };

    init_logging(cli.verbose);

    let result = match &cli.command {
        Some(DashCommand::Show(args)) => show_dashboard(host, args).await,
        Some(DashCommand::Init(args)) => init_config(host, args),
        None => show_dashboard(host, &cli.show).await,
    };

    if let Err(e) = result {
        let message = format!("{e:#}");
        {
            let mut err = host.error();
            let _ = reports::write_error(&message, false, &mut err);
        }
        host.exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ReportFormat;
    use crate::metrics::TrendMetric;
    use crate::misc::ColorMode;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_shows() {
        let cli = Cli::try_parse_from(["osm-dash", "--from-year", "2010", "--metric", "open-data"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.show.from_year, Some(2010));
        assert_eq!(cli.show.metric, Some(TrendMetric::OpenData));
        assert_eq!(cli.show.format, ReportFormat::Console);
        assert_eq!(cli.show.color, ColorMode::Auto);
    }

    #[test]
    fn test_show_subcommand() {
        let cli = Cli::try_parse_from(["osm-dash", "show", "-vv", "--format", "json", "--color", "never"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Some(DashCommand::Show(args)) = cli.command else {
            panic!("expected the show command");
        };
        assert_eq!(args.format, ReportFormat::Json);
        assert_eq!(args.color, ColorMode::Never);
    }

    #[test]
    fn test_init_subcommand() {
        let cli = Cli::try_parse_from(["osm-dash", "init", "--output", "dash.toml", "--force"]).unwrap();
        let Some(DashCommand::Init(args)) = cli.command else {
            panic!("expected the init command");
        };
        assert_eq!(args.output, "dash.toml");
        assert!(args.force);
    }

    #[test]
    fn test_init_defaults_to_config_file_name() {
        let cli = Cli::try_parse_from(["osm-dash", "init"]).unwrap();
        let Some(DashCommand::Init(args)) = cli.command else {
            panic!("expected the init command");
        };
        assert_eq!(args.output, crate::config::CONFIG_FILE_NAME);
    }

    #[test]
    fn test_invalid_metric_rejected() {
        let _ = Cli::try_parse_from(["osm-dash", "--metric", "open-access"]).unwrap_err();
    }
}
