//! Verbose-mode progress logging.

use log::info;

use crate::config::{ResolverConfig, LOG_PREFIX};

/// Logs a resolution step when `verbose_mode` is enabled; otherwise a no-op.
///
/// Messages go through the `log` facade at info level, so they still need an
/// installed logger (see [`crate::initialization::init_logger_with`]) to show up.
pub fn log_message(config: &ResolverConfig, message: impl std::fmt::Display) {
    if config.verbose_mode {
        info!("{LOG_PREFIX} {message}");
    }
}
