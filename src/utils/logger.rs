use crate::config::AppConfig;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Appends timestamped lines to a log file. Never writes to the console.
#[derive(Clone)]
pub struct Logger {
    log_file_path: PathBuf,
    min_level: LogLevel,
    file_handle: Arc<Mutex<Option<std::fs::File>>>,
}

impl Logger {
    pub fn new(log_file_path: impl AsRef<Path>, min_level: LogLevel) -> Result<Self> {
        let log_file_path = log_file_path.as_ref().to_path_buf();

        if let Some(parent) = log_file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file_path)?;

        Ok(Self {
            log_file_path,
            min_level,
            file_handle: Arc::new(Mutex::new(Some(file))),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let level = if config.debug { LogLevel::Debug } else { LogLevel::Info };
        Self::new(config.log_path(), level)
    }

    pub fn path(&self) -> &Path {
        &self.log_file_path
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let timestamp: DateTime<Utc> = Utc::now();
        let formatted_timestamp = timestamp.format("%Y-%m-%d %H:%M:%S%.3f UTC");

        let log_line = format!("[{}] [{}] {}\n", formatted_timestamp, level, message);

        if let Ok(mut file_guard) = self.file_handle.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.write_all(log_line.as_bytes());
                let _ = file.flush();
            }
        }
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide logger. Logging calls before this are dropped.
pub fn init_global_logger(config: &AppConfig) -> Result<()> {
    let logger = Logger::from_config(config)?;
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| anyhow!("Logger already initialized"))?;
    Ok(())
}

pub fn get_global_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

// Convenience functions for global logging
pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = get_global_logger() {
        logger.log(level, message);
    }
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn warn(message: &str) {
    log(LogLevel::Warn, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
