//! CLI argument definitions for the word generator demo.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "happylibs",
    version,
    about = "HappyLibsWordGen - print a random word from every category",
    long_about = "Load a categorized word list and print one random word per category.\n\n\
                  The word list defaults to words.json in the workspace root; pass\n\
                  --words-file to load another one."
)]
pub struct Cli {
    /// Word source to load instead of the default words.json.
    #[arg(long = "words-file", value_name = "PATH")]
    pub words_file: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Build logging configuration from CLI flags with consistent precedence.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let mut config = LogConfig::default()
            .with_level(level_filter)
            .with_format(format)
            .with_log_file(self.log_file.clone());
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["happylibs"]).unwrap();
        assert!(cli.words_file.is_none());
        assert!(cli.log_level.is_none());
        assert_eq!(cli.log_format, LogFormatArg::Pretty);
        assert!(!cli.verbosity.is_present());
    }

    #[test]
    fn test_words_file_and_logging_flags() {
        let cli = Cli::try_parse_from([
            "happylibs",
            "--words-file",
            "custom.json",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.words_file, Some(PathBuf::from("custom.json")));
        assert_eq!(cli.log_level, Some(LogLevelArg::Debug));
        assert_eq!(cli.log_format, LogFormatArg::Json);
        assert!(cli.verbosity.is_present());
    }

    #[test]
    fn test_log_config_from_flags() {
        let cli = Cli::try_parse_from([
            "happylibs",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-file",
            "happylibs.log",
        ])
        .unwrap();
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_file, Some(PathBuf::from("happylibs.log")));
        assert!(!config.use_env_filter);
        assert!(!config.with_ansi);
    }

    #[test]
    fn test_log_config_defaults() {
        let config = Cli::try_parse_from(["happylibs"]).unwrap().log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.log_file.is_none());
        assert!(config.use_env_filter);
    }

    #[test]
    fn test_quiet_flag_lowers_level() {
        let config = Cli::try_parse_from(["happylibs", "-q"]).unwrap().log_config();
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["happylibs", "nouns"]).is_err());
    }
}
