//! Helpers shared by the resolver: URL normalization and verbose logging.

mod logging;
mod url;

pub use logging::log_message;
pub use self::url::format_url;
