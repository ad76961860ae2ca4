//! Logging setup
//!
//! Off unless `GROUPIE_SEARCH_LOG` or `RUST_LOG` is set; the former wins
//! when both are.
//! The interactive UI owns the terminal, so its log lines go to a file;
//! the one-shot mode logs to stderr.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

const LOG_ENV: &str = "GROUPIE_SEARCH_LOG";
const FALLBACK_LOG_ENV: &str = "RUST_LOG";
const LOG_FILE_ENV: &str = "GROUPIE_SEARCH_LOG_FILE";
const LOG_DIR: &str = "groupie-search";
const LOG_FILE: &str = "groupie-search.log";

/// Where log records are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    File,
    Stderr,
}

/// Default log file: `$GROUPIE_SEARCH_LOG_FILE`, else the user cache dir
pub fn log_file_path() -> Option<PathBuf> {
    resolve_log_file(std::env::var_os(LOG_FILE_ENV), dirs::cache_dir())
}

fn resolve_log_file(override_path: Option<OsString>, cache_dir: Option<PathBuf>) -> Option<PathBuf> {
    match override_path {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => cache_dir.map(|p| p.join(LOG_DIR).join(LOG_FILE)),
    }
}

/// Name of the variable holding the log filter, `None` when logging is off
fn filter_variable(app_filter_set: bool, rust_log_set: bool) -> Option<&'static str> {
    if app_filter_set {
        Some(LOG_ENV)
    } else if rust_log_set {
        Some(FALLBACK_LOG_ENV)
    } else {
        None
    }
}

/// Install the global logger; a second call or an unwritable log file
/// leaves logging disabled
pub fn init(destination: LogDestination) {
    let Some(filter_env) = filter_variable(
        std::env::var_os(LOG_ENV).is_some(),
        std::env::var_os(FALLBACK_LOG_ENV).is_some(),
    ) else {
        return;
    };

    let mut builder = Builder::from_env(Env::new().filter(filter_env));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    match destination {
        LogDestination::Stderr => {
            builder.target(Target::Stderr);
        }
        LogDestination::File => {
            let Some(path) = log_file_path() else {
                return;
            };
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
                return;
            };
            builder.target(Target::Pipe(Box::new(file)));
        }
    }

    let _ = builder.try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod logging_tests;
