use std::env;

use chrono::Local;
use log::LevelFilter;

fn level_from_env(debug: bool, log_level: Option<&str>) -> LevelFilter {
    if debug {
        return LevelFilter::Debug;
    }
    match log_level {
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}

/// Sends log records to stderr so that stdout only carries rendered output.
/// `debug` overrides the `LOG_LEVEL` environment variable.
pub fn setup_logging(debug: bool) -> Result<(), fern::InitError> {
    let level = level_from_env(debug, env::var("LOG_LEVEL").ok().as_deref());

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
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
    fn test_level_from_env() {
        assert_eq!(level_from_env(false, None), LevelFilter::Warn);
        assert_eq!(level_from_env(false, Some("info")), LevelFilter::Info);
        assert_eq!(level_from_env(false, Some("error")), LevelFilter::Error);
        assert_eq!(level_from_env(false, Some("verbose")), LevelFilter::Warn);
        assert_eq!(level_from_env(true, Some("error")), LevelFilter::Debug);
    }
}
