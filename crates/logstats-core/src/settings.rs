use clap::Parser;
use std::path::PathBuf;

/// Input path used when none is given.
pub const DEFAULT_INPUT: &str = "generated_logs.txt";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise a batch of text log records
#[derive(Parser, Debug, Clone)]
#[command(
    name = "logstats",
    about = "Summarise level, action, user and daily-volume statistics from text logs",
    version
)]
pub struct Settings {
    /// Log file, or directory of *.log / *.txt files
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Report format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Show only the N most frequent levels/actions in text output (0 = all)
    #[arg(long, default_value = "0")]
    pub top: usize,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments.
    ///
    /// Nothing is carried over between runs: every value comes from the
    /// command line or its default.
    pub fn load() -> Self {
        Self::parse().with_debug_applied()
    }

    /// Same as [`Settings::load`] with an explicit argument list.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args).with_debug_applied()
    }

    /// `--debug` overrides the log level.
    fn with_debug_applied(mut self) -> Self {
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }
        self
    }

    /// Whether JSON output was requested.
    pub fn wants_json(&self) -> bool {
        self.format == "json"
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::load_from(["logstats"]);
        assert_eq!(settings.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(settings.format, "text");
        assert_eq!(settings.top, 0);
        assert_eq!(settings.log_level, "INFO");
        assert!(settings.log_file.is_none());
        assert!(!settings.debug);
        assert!(!settings.wants_json());
    }

    #[test]
    fn test_settings_cli_parsing() {
        let settings = Settings::load_from([
            "logstats",
            "/tmp/app.log",
            "--format",
            "json",
            "--top",
            "2",
            "--log-file",
            "/tmp/logstats.log",
        ]);
        assert_eq!(settings.input, PathBuf::from("/tmp/app.log"));
        assert!(settings.wants_json());
        assert_eq!(settings.top, 2);
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/logstats.log")));
    }

    #[test]
    fn test_settings_rejects_unknown_format() {
        assert!(Settings::try_parse_from(["logstats", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_settings_no_clear_flag() {
        assert!(Settings::try_parse_from(["logstats", "--clear"]).is_err());
    }

    #[test]
    fn test_bare_invocation_after_explicit_input_uses_default() {
        let first = Settings::load_from(["logstats", "/other/dir", "--format", "json"]);
        assert_eq!(first.input, PathBuf::from("/other/dir"));

        let second = Settings::load_from(["logstats"]);
        assert_eq!(second.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(second.format, "text");
    }

    #[test]
    fn test_debug_flag_overrides_log_level() {
        let settings = Settings::load_from(["logstats", "--log-level", "ERROR", "--debug"]);
        assert_eq!(settings.log_level, "DEBUG");

        let settings = Settings::load_from(["logstats", "--log-level", "ERROR"]);
        assert_eq!(settings.log_level, "ERROR");
    }
}
