use fern::colors::{Color, ColoredLevelConfig};
pub use fern::InitError;
use std::time::SystemTime;

pub fn parse_level(log_level: &str) -> log::LevelFilter {
    match log_level.to_lowercase().trim() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Info,
    }
}

/// Installs the global logger. Records go to stderr, stdout is left to commands.
pub fn setup_logger(log_level: &str) -> Result<(), InitError> {
    let level = parse_level(log_level);

    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .debug(Color::Cyan)
        .trace(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level("DEBUG"), log::LevelFilter::Debug);
        assert_eq!(parse_level(" warn "), log::LevelFilter::Warn);
        assert_eq!(parse_level("off"), log::LevelFilter::Off);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("loud"), log::LevelFilter::Info);
        assert_eq!(parse_level(""), log::LevelFilter::Info);
    }
}
