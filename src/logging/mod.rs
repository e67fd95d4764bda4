// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use env_logger::{Builder, Target};
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Maximum size of the log file before it is rotated at startup.
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Installs the global logger. Without a log file, output goes to stderr.
pub fn init(config: &Config) -> Result<()> {
    let mut builder = builder(config)?;
    builder.try_init()?;
    Ok(())
}

pub fn builder(config: &Config) -> Result<Builder> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        // Keep third-party noise out unless explicitly asked for
        .filter_module("actix_server", log::LevelFilter::Warn)
        .parse_env("PASSFORGE_LOG");

    if let Some(path) = &config.log_file {
        let file = open_log_file(path, MAX_LOG_SIZE)?;
        builder.target(Target::Pipe(Box::new(file)));
    } else {
        builder.target(Target::Stderr);
    }

    Ok(builder)
}

/// Opens `path` for appending, creating parent directories. A file larger
/// than `max_size` is first renamed with a timestamp suffix.
pub fn open_log_file(path: &Path, max_size: u64) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    if let Ok(metadata) = fs::metadata(path) {
        if metadata.len() > max_size {
            fs::rename(path, rotated_name(path))?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

fn rotated_name(path: &Path) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "passforge".to_string());
    path.with_file_name(format!("{}-{}.log", stem, timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("passforge.log");
        let mut file = open_log_file(&path, MAX_LOG_SIZE).unwrap();
        writeln!(file, "hello").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rotates_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passforge.log");
        fs::write(&path, vec![b'x'; 64]).unwrap();

        open_log_file(&path, 16).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
        let rotated: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("passforge-"))
            .collect();
        assert_eq!(rotated.len(), 1);
    }

    #[test]
    fn appends_to_small_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passforge.log");
        fs::write(&path, b"first\n").unwrap();
        let mut file = open_log_file(&path, MAX_LOG_SIZE).unwrap();
        write!(file, "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn builder_accepts_file_target() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: Some(dir.path().join("app.log")),
            ..Config::default()
        };
        assert!(builder(&config).is_ok());
        assert!(dir.path().join("app.log").exists());
    }
}
