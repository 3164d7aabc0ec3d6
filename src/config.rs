//! Runtime settings gathered from the command line

use std::path::PathBuf;

/// Default log location, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = ".flow-control/logs/latest.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub verbose: bool,

    /// Log debug-level messages (also turns logging on)
    pub debug: bool,

    /// Clear the screen before each menu and task
    pub clear_screen: bool,

    /// Style output with colors when stdout is a terminal
    pub color: bool,

    /// Explicit log file; logging is off unless this or `debug` is set
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            debug: false,
            clear_screen: true,
            color: true,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn logging_enabled(&self) -> bool {
        self.debug || self.log_file.is_some()
    }

    /// Where the log goes when logging is enabled
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.clear_screen);
        assert!(config.color);
        assert!(!config.logging_enabled());
        assert_eq!(config.log_path(), PathBuf::from(DEFAULT_LOG_PATH));
    }

    #[test]
    fn test_logging_switches() {
        let config = AppConfig {
            debug: true,
            ..AppConfig::default()
        };
        assert!(config.logging_enabled());

        let config = AppConfig {
            log_file: Some(PathBuf::from("/tmp/menu.log")),
            ..AppConfig::default()
        };
        assert!(config.logging_enabled());
        assert_eq!(config.log_path(), PathBuf::from("/tmp/menu.log"));
    }
}
