//! File logger with size-based rotation.
//!
//! Lines go to `~/.config/veil/logs/veil.log`. Once the file grows past
//! `max_file_mb` it is renamed to `veil.log.1` (a single backup) and a
//! fresh file is started.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "veil.log";
const BACKUP_FILE_NAME: &str = "veil.log.1";

/// `[logging]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Off unless the user opts in.
    pub enabled: bool,
    /// Minimum level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Size in megabytes at which the file is rotated. 0 disables rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Parses a config level name; anything unknown means `Info`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    file: File,
    path: PathBuf,
    backup: PathBuf,
    min_level: Level,
    max_bytes: u64,
    written: u64,
}

impl Logger {
    fn open(dir: &Path, config: &LogConfig) -> std::io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(LOG_FILE_NAME);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            file,
            backup: dir.join(BACKUP_FILE_NAME),
            path,
            min_level: Level::parse(&config.level),
            max_bytes: config.max_file_mb * 1024 * 1024,
            written,
        })
    }

    fn write_line(&mut self, level: Level, args: fmt::Arguments<'_>) {
        if level < self.min_level {
            return;
        }
        let line = format!("{} [{}] {args}\n", timestamp(), level.as_str());
        if self.file.write_all(line.as_bytes()).is_err() {
            return;
        }
        self.written += line.len() as u64;

        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.rotate();
        }
    }

    fn rotate(&mut self) {
        let _ = fs::remove_file(&self.backup);
        let _ = fs::rename(&self.path, &self.backup);
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.written = 0;
    }
}

/// Returns the directory log files are written to.
pub fn log_dir() -> Option<PathBuf> {
    crate::config::config_dir().map(|d| d.join("logs"))
}

/// Initialises the global logger. Call once at daemon startup.
///
/// Does nothing if logging is disabled or the log file cannot be opened;
/// logging never stops the daemon from running.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = log_dir() else {
        return;
    };
    match Logger::open(&dir, config) {
        Ok(logger) => {
            let _ = LOGGER.set(Mutex::new(logger));
        }
        Err(e) => eprintln!("Warning: could not open log file in {}: {e}", dir.display()),
    }
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    if let Ok(mut logger) = mutex.lock() {
        logger.write_line(level, args);
    }
}

/// Wall-clock `HH:MM:SS` (UTC).
fn timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("veil-log-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn level_parse_falls_back_to_info() {
        assert_eq!(Level::parse("DEBUG"), Level::Debug);
        assert_eq!(Level::parse("warning"), Level::Warn);
        assert_eq!(Level::parse("verbose"), Level::Info);
    }

    #[test]
    fn lines_below_min_level_are_dropped() {
        // Arrange
        let dir = scratch_dir("level");
        let config = LogConfig {
            enabled: true,
            level: "warn".into(),
            max_file_mb: 0,
        };
        let mut logger = Logger::open(&dir, &config).unwrap();

        // Act
        logger.write_line(Level::Info, format_args!("hidden"));
        logger.write_line(Level::Error, format_args!("shown"));

        // Assert
        let content = fs::read_to_string(dir.join(LOG_FILE_NAME)).unwrap();
        assert!(!content.contains("hidden"));
        assert!(content.contains("[ERROR] shown"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn rotation_keeps_one_backup() {
        // Arrange
        let dir = scratch_dir("rotate");
        let config = LogConfig {
            enabled: true,
            level: "debug".into(),
            max_file_mb: 1,
        };
        let mut logger = Logger::open(&dir, &config).unwrap();
        logger.max_bytes = 64;

        // Act
        for i in 0..10 {
            logger.write_line(Level::Info, format_args!("line number {i}"));
        }

        // Assert
        assert!(dir.join(BACKUP_FILE_NAME).exists());
        assert!(logger.written < 64);
        let _ = fs::remove_dir_all(&dir);
    }
}
