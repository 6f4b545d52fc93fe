use crate::error::{Result as ServerErrorResult, ServerError};

use circle_config::LogLevel;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Install the global fern logger.
///
/// With `log_file` set, records are appended to that file with source
/// locations; otherwise they go to stdout, ANSI-colored when `colored`.
/// Records emitted through `tracing` (sqlx, tower-http) are bridged in.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = LevelFilter::from(log_level);

    let output = match &log_file {
        Some(path) => file_output(path)?,
        None => stdout_output(colored),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx reports every statement at info
        .level_for("sqlx", level_filter.min(LevelFilter::Warn))
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to install logger: {e}"),
        })?;

    tracing_log::LogTracer::init().ok();

    match &log_file {
        Some(path) => info!("Logging at {} to {}", level_filter, path.display()),
        None => info!("Logging at {} to stdout", level_filter),
    }

    Ok(())
}

fn file_output(path: &Path) -> ServerErrorResult<Dispatch> {
    let file = fern::log_file(path).map_err(|e| ServerError::Logger {
        message: format!("Failed to open log file {}: {}", path.display(), e),
    })?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339_millis(SystemTime::now()),
                record.level(),
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        })
        .chain(file))
}

fn stdout_output(colored: bool) -> Dispatch {
    let colors = colored.then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    Dispatch::new()
        .format(move |out, message, record| {
            let level = match &colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };

            out.finish(format_args!(
                "[{} - {}] {} [{}]",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                level,
                message,
                record.target(),
            ))
        })
        .chain(std::io::stdout())
}
