use super::Host;
use crate::config::{CONFIG_FILE_NAME, Config};
use anyhow::{Result, bail};
use camino::Utf8PathBuf;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(long, short, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    pub output: Utf8PathBuf,

    /// Replace the file if it already exists
    #[arg(long)]
    pub force: bool,
}

/// Write the default configuration file.
///
/// # Errors
///
/// Returns an error if the file exists and `--force` was not given, or if it cannot be written
pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!("'{}' already exists, use --force to overwrite it", args.output);
    }

    Config::save_default(&args.output)?;
    let _ = writeln!(host.output(), "Wrote default configuration to '{}'", args.output);

    Ok(())
}
