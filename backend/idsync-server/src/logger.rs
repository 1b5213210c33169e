//! Process-wide `log` backend.
//!
//! Every line has the shape `[<rfc3339> - LEVEL] message [file:line]`.
//! Levels are colored only on stdout, never in a log file.

use crate::error::{Result as ServerErrorResult, ServerError};

use idsync_config::LogLevel;

use std::fmt;
use std::fs::{File, OpenOptions};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{Record, info};

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn write_line(
    out: FormatCallback,
    message: &fmt::Arguments,
    record: &Record,
    colors: Option<ColoredLevelConfig>,
) {
    let date = humantime::format_rfc3339(SystemTime::now());
    let file = record.file().unwrap_or("unknown");
    let line = record.line().unwrap_or(0);

    match colors {
        Some(colors) => out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            date,
            colors.color(record.level()),
            message,
            file,
            line
        )),
        None => out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            date,
            record.level(),
            message,
            file,
            line
        )),
    }
}

pub(crate) fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global logger.
///
/// `log_file` switches output from stdout to an append-only file (its
/// directory is created if needed). `colored` only applies to stdout.
#[track_caller]
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let caller = Location::caller();
    let logger_error = |message: String| ServerError::Logger {
        message,
        location: ErrorLocation::from(caller),
    };

    let (output, colors, target): (Output, _, String) = match log_file {
        Some(ref path) => {
            let file = open_log_file(path).map_err(|e| {
                logger_error(format!("Failed to open log file {}: {}", path.display(), e))
            })?;
            (file.into(), None, path.display().to_string())
        }
        None => (
            std::io::stdout().into(),
            colored.then(level_colors),
            "stdout".to_string(),
        ),
    };

    Dispatch::new()
        .level(log_level.0)
        .format(move |out, message, record| write_line(out, message, record, colors))
        .chain(output)
        .apply()
        .map_err(|e| logger_error(format!("Failed to initialize logger: {e}")))?;

    info!("Logger initialized: level={:?}, target={}", log_level.0, target);

    Ok(())
}
