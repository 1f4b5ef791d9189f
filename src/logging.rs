// Conditional logging macros - only active in debug builds

use log::LevelFilter;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const LOG_DIR_NAME: &str = "word-scramble";
const LOG_FILE_NAME: &str = "word-scramble.log";

/// Where logs go while the full-screen UI owns the terminal.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

fn default_level(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Info } else { LevelFilter::Warn }
}

/// Initialize `env_logger`. `RUST_LOG` overrides the default level.
///
/// With `to_file` set, output is appended to [`log_file_path`] instead of
/// stderr; if that file can't be opened logging falls back to stderr.
pub fn init_logging(verbose: bool, to_file: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(verbose))
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });

    if to_file && let Some(file) = open_log_file() {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A logger may already be installed (tests); that's fine.
    let _ = builder.try_init();
}

fn open_log_file() -> Option<File> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path).ok()
}
