use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, CustomError>
{
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{}'", level)))
    }
}

pub fn setup_logging(log_level: &str)
{
    let level = match parse_log_level(log_level) {
        Ok(level) => level,
        Err(error) => panic!("{}", error)
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}

/// True when `value` carries PEM armour rather than, say, a file name.
pub fn is_pem_text(value: &str) -> bool
{
    value.contains("-----BEGIN ")
}

/// Heuristic for configuration values that point at a file instead of holding PEM text.
pub fn looks_like_path(value: &str) -> bool
{
    let trimmed = value.trim();
    if trimmed.is_empty() || is_pem_text(trimmed) || trimmed.contains('\n') {
        return false;
    }
    trimmed.starts_with('/')
        || trimmed.starts_with("./")
        || trimmed.starts_with("../")
        || trimmed.starts_with('~')
        || trimmed.contains('\\')
        || (trimmed.len() > 2 && trimmed.as_bytes()[1] == b':')
        || [".pem", ".crt", ".cer", ".key"].iter().any(|ext| trimmed.to_lowercase().ends_with(ext))
}
