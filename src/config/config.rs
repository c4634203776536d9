use super::{Color, LOG_TARGET};
use crate::metrics::TrendMetric;
use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "osm-dash.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root URL of the metrics backend API
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// Maximum duration of a single backend request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// First year shown by the trend chart
    #[serde(default = "default_from_year")]
    pub from_year: i32,

    /// Last year shown by the trend chart
    #[serde(default = "default_to_year")]
    pub to_year: i32,

    /// Metric plotted by the trend chart
    #[serde(default)]
    pub metric: TrendMetric,

    /// Bar color of the country chart
    #[serde(default = "default_country_color")]
    pub country_color: Color,

    /// Bar color of the journal chart
    #[serde(default = "default_journal_color")]
    pub journal_color: Color,
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:8000/api").expect("default base URL must be valid")
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

const fn default_from_year() -> i32 {
    2000
}

const fn default_to_year() -> i32 {
    2024
}

fn default_country_color() -> Color {
    Color::rgb(0x3B, 0x82, 0xF6)
}

fn default_journal_color() -> Color {
    Color::rgb(0x10, 0xB9, 0x81)
}

impl Config {
    /// Load configuration from `config_path`, or from the first `osm-dash.toml` found in the
    /// current directory or the user's configuration directory, or use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read, parsed or validated
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        Self::load_from(config_path, &Self::search_paths())
    }

    /// Like [`Self::load`], with an explicit list of candidate files.
    pub fn load_from(config_path: Option<&Utf8Path>, candidates: &[Utf8PathBuf]) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).with_context(|| format!("reading configuration file '{path}'"))?;
            (path.to_path_buf(), text)
        } else if let Some(found) = read_first_existing(candidates)? {
            found
        } else {
            log::debug!(target: LOG_TARGET, "No configuration file found, using defaults");
            return Ok(Self::default());
        };

        log::info!(target: LOG_TARGET, "Using configuration file '{final_path}'");

        let config: Self = toml::from_str(&text).with_context(|| format!("parsing configuration file '{final_path}'"))?;
        config
            .validate()
            .with_context(|| format!("validating configuration file '{final_path}'"))?;

        Ok(config)
    }

    /// Candidate configuration files, most specific first.
    #[must_use]
    pub fn search_paths() -> Vec<Utf8PathBuf> {
        let mut paths = vec![Utf8PathBuf::from(CONFIG_FILE_NAME)];

        if let Some(dirs) = ProjectDirs::from("org", "OpenSciMetrics", "osm-dash")
            && let Ok(dir) = Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf())
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        paths
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).with_context(|| format!("writing default configuration to '{output_path}'"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an HTTP(S) URL or the timeout is zero
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            bail!("base_url must be an http or https URL, got '{}'", self.base_url);
        }

        if self.request_timeout.is_zero() {
            bail!("request_timeout must be greater than zero");
        }

        Ok(())
    }
}

fn read_first_existing(candidates: &[Utf8PathBuf]) -> Result<Option<(Utf8PathBuf, String)>> {
    for path in candidates {
        match fs::read_to_string(path) {
            Ok(text) => return Ok(Some((path.clone(), text))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).with_context(|| format!("reading configuration file '{path}'")),
        }
    }
    Ok(None)
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/api");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.from_year, 2000);
        assert_eq!(config.to_year, 2024);
        assert_eq!(config.metric, TrendMetric::OpenCode);
        assert_eq!(config.country_color, Color::rgb(0x3B, 0x82, 0xF6));
        assert_eq!(config.journal_color, Color::rgb(0x10, 0xB9, 0x81));
    }

    #[test]
    fn test_empty_file_uses_field_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = Config {
            base_url: Url::parse("ftp://example.com/api").unwrap(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            request_timeout: Duration::ZERO,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = toml::from_str("refresh_interval = \"5s\"");
        let _ = result.unwrap_err();
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_save_default_and_load() {
        let (_tmp, dir) = temp_dir();
        let output_path = dir.join(CONFIG_FILE_NAME);
        Config::save_default(&output_path).unwrap();
        let loaded = Config::load_from(Some(&output_path), &[]).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_missing_config_uses_defaults() {
        let (_tmp, dir) = temp_dir();
        let config = Config::load_from(None, &[dir.join(CONFIG_FILE_NAME)]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_explicit_missing_file_errors() {
        let (_tmp, dir) = temp_dir();
        let err = Config::load_from(Some(&dir.join("missing.toml")), &[]).unwrap_err();
        assert!(format!("{err:#}").contains("reading configuration file"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_first_candidate_wins() {
        let (_tmp, dir) = temp_dir();
        let first = dir.join("first.toml");
        let second = dir.join("second.toml");
        fs::write(&first, "from_year = 2010\nmetric = \"open_data\"\n").unwrap();
        fs::write(&second, "from_year = 2015\n").unwrap();

        let config = Config::load_from(None, &[dir.join("absent.toml"), first, second]).unwrap();
        assert_eq!(config.from_year, 2010);
        assert_eq!(config.to_year, 2024);
        assert_eq!(config.metric, TrendMetric::OpenData);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_with_custom_values() {
        let (_tmp, dir) = temp_dir();
        let path = dir.join(CONFIG_FILE_NAME);
        let toml_content = r##"
base_url = "https://metrics.example.org/api/"
request_timeout = "2m"
country_color = "orange"
journal_color = "#123456"
"##;
        fs::write(&path, toml_content).unwrap();

        let config = Config::load_from(Some(&path), &[]).unwrap();
        assert_eq!(config.base_url.as_str(), "https://metrics.example.org/api/");
        assert_eq!(config.request_timeout, Duration::from_secs(120));
        assert_eq!(config.country_color, Color::rgb(255, 165, 0));
        assert_eq!(config.journal_color, Color::rgb(0x12, 0x34, 0x56));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_invalid_file_errors() {
        let (_tmp, dir) = temp_dir();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, "base_url = \"file:///tmp/metrics\"\n").unwrap();

        let err = Config::load_from(Some(&path), &[]).unwrap_err();
        assert!(format!("{err:#}").contains("base_url must be an http or https URL"));
    }

    #[test]
    fn test_search_paths_start_with_current_dir() {
        let paths = Config::search_paths();
        assert_eq!(paths[0], Utf8PathBuf::from(CONFIG_FILE_NAME));
    }
}
