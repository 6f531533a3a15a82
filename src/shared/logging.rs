//! Log output setup for the binary.
//!
//! Library code only talks to the `log` facade; the backend is installed
//! once by `main` through [`init_logging`].

use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::PathBuf;

/// Environment variable naming a custom log file.
pub const LOG_FILE_ENV: &str = "SUSECONNECT_LOG_FILE";

/// Log file used when [`LOG_FILE_ENV`] is not set.
pub const DEFAULT_LOG_PATH: &str = "/var/log/suseconnect.log";

/// Returns the log file path, honoring [`LOG_FILE_ENV`].
pub fn log_file_path() -> PathBuf {
    log_file_path_from(std::env::var(LOG_FILE_ENV).ok())
}

fn log_file_path_from(value: Option<String>) -> PathBuf {
    match value {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_LOG_PATH),
    }
}

/// Installs the global logger.
///
/// Output goes to the log file when it can be created, otherwise to stderr.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    match File::create(log_file_path()) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.target(Target::Stderr);
        }
    }

    // A second initialization (e.g. from tests) is harmless.
    let _ = builder.try_init();
}
