use log::LevelFilter;

pub mod client;
pub mod error;
pub mod listener;
pub mod net;

pub use client::Client;
pub use error::BotError;
pub use net::ChannelSender;

/// Sets up `simple_logger` as configured in `features.toml`. Does nothing when logging is
/// disabled.
pub fn init_logger() -> Result<(), log::SetLoggerError> {
    use pumpkin_config::ADVANCED_CONFIG;
    if !ADVANCED_CONFIG.logging.enabled {
        return Ok(());
    }
    let mut logger = simple_logger::SimpleLogger::new();
    logger = logger.with_timestamp_format(time::macros::format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    if !ADVANCED_CONFIG.logging.timestamp {
        logger = logger.without_timestamps();
    }

    if ADVANCED_CONFIG.logging.env {
        logger = logger.env();
    }

    logger = logger.with_level(convert_logger_filter(ADVANCED_CONFIG.logging.level));

    logger = logger.with_colors(ADVANCED_CONFIG.logging.color);
    logger = logger.with_threads(ADVANCED_CONFIG.logging.threads);
    logger.init()
}

const fn convert_logger_filter(level: pumpkin_config::logging::LevelFilter) -> LevelFilter {
    match level {
        pumpkin_config::logging::LevelFilter::Off => LevelFilter::Off,
        pumpkin_config::logging::LevelFilter::Error => LevelFilter::Error,
        pumpkin_config::logging::LevelFilter::Warn => LevelFilter::Warn,
        pumpkin_config::logging::LevelFilter::Info => LevelFilter::Info,
        pumpkin_config::logging::LevelFilter::Debug => LevelFilter::Debug,
        pumpkin_config::logging::LevelFilter::Trace => LevelFilter::Trace,
    }
}
