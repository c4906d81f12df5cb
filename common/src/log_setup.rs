use flexi_logger::{detailed_format, Logger, LoggerHandle};

/// Starts the stderr logger.
///
/// `RUST_LOG` takes precedence over `base_level` when set. The returned
/// handle must be kept alive for the lifetime of the program.
pub fn setup_logging(base_level: &str) -> LoggerHandle {
    let handle = Logger::try_with_env_or_str(base_level)
        .unwrap_or_else(|e| panic!("Invalid log filter: {}", e))
        .log_to_stderr()
        .format(detailed_format)
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed: {}", e));

    log::debug!("Logging initialized at level {}", base_level);

    handle
}
