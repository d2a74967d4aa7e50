use anyhow::Result;
use chrono::SecondsFormat;
use fern::colors::{Color, ColoredLevelConfig};
use fern::Dispatch;
use log::LevelFilter;

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warning,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug, info, warning, and error messages
    Debug,
    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Derive the verbosity level from the number of `-v` flags
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Info,  // Default
            1 => LogLevel::Debug, // -v
            _ => LogLevel::Trace, // -vv or more
        }
    }
}

/// Initialise the logger with the given verbosity level
///
/// Stdout output is coloured per level. When `log_file` is non-empty, a
/// second dispatch writes timestamped records to that file.
pub fn init_logger(verbosity: LogLevel, log_file: &str) -> Result<()> {
    let base_logger = Dispatch::new().level(verbosity.to_level_filter());

    let level_colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    let stdout_logger = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "\x1B[{}m{}\x1B[0m",
                level_colors.get_color(&record.level()).to_fg_str(),
                message
            ))
        })
        .level(verbosity.to_level_filter())
        .chain(std::io::stdout());

    if log_file.is_empty() {
        base_logger.chain(stdout_logger).apply()?;
    } else {
        let file_logger = Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(verbosity.to_level_filter())
            .chain(fern::log_file(log_file)?);
        base_logger
            .chain(file_logger)
            .chain(stdout_logger)
            .apply()?;
    }

    log::debug!("Logging initialised at {verbosity:?} verbosity");

    Ok(())
}

/// Format a message with colour support
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
