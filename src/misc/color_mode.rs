//! Color mode configuration for reports.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Always,
    Never,
    #[default]
    Auto,
}

impl ColorMode {
    /// Whether to emit colors on a stream, given whether that stream is a terminal.
    #[must_use]
    pub const fn use_colors(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_colors() {
        assert!(ColorMode::Always.use_colors(false));
        assert!(!ColorMode::Never.use_colors(true));
        assert!(ColorMode::Auto.use_colors(true));
        assert!(!ColorMode::Auto.use_colors(false));
    }

    #[test]
    fn test_parse_from_cli_value() {
        assert_eq!(ColorMode::from_str("never", true).unwrap(), ColorMode::Never);
        assert_eq!(ColorMode::default(), ColorMode::Auto);
    }
}
