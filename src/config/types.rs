//! Configuration types and CLI options.
//!
//! This module defines the resolver configuration, the partial overrides that
//! are merged over its defaults, and the structs used for command-line parsing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::config::constants::{
    DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, MAX_RESPONSE_BODY_SIZE,
};
use crate::error_handling::InitializationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Resolver configuration.
///
/// Captured once when a [`crate::FaviconResolver`] is built and never mutated
/// afterwards, so calls that are already in flight always see the same values.
///
/// # Examples
///
/// ```
/// use get_favicon::ResolverConfig;
///
/// let config = ResolverConfig {
///     default_icon: b"\x00\x00\x01\x00".to_vec(),
///     ignore_query: false,
///     ..Default::default()
/// };
/// assert!(!config.verbose_mode);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Emit `[get-favicon]` progress messages through the logger
    pub verbose_mode: bool,

    /// Bytes returned whenever no real icon can be retrieved (may be empty)
    pub default_icon: Vec<u8>,

    /// Drop the query string when normalizing the input URL
    pub ignore_query: bool,

    /// Drop `user:password@` when normalizing the input URL
    pub ignore_auth: bool,

    /// Drop an explicit `:port` when normalizing the input URL
    pub ignore_port: bool,

    /// Timeout applied to each network call
    pub timeout: Duration,

    /// Maximum redirect hops followed by each network call
    pub max_redirects: usize,

    /// Largest response body read by each network call; bigger bodies count
    /// as a transport failure
    pub max_body_bytes: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            verbose_mode: false,
            default_icon: Vec::new(),
            ignore_query: true,
            ignore_auth: true,
            ignore_port: false,
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            max_body_bytes: MAX_RESPONSE_BODY_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Builds a configuration by merging `overrides` over the defaults.
    pub fn merged(overrides: ConfigOverrides) -> Self {
        overrides.apply(Self::default())
    }
}

/// Partial configuration.
///
/// Every field is optional; fields left as `None` keep the value of the
/// configuration they are applied to. Deserializes from JSON with camelCase
/// keys (`verboseMode`, `ignoreQuery`, `defaultIconPath`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    /// See [`ResolverConfig::verbose_mode`]
    pub verbose_mode: Option<bool>,

    /// Inline default icon bytes (not read from JSON, see `default_icon_path`)
    #[serde(skip)]
    pub default_icon: Option<Vec<u8>>,

    /// File whose contents become the default icon
    pub default_icon_path: Option<PathBuf>,

    /// See [`ResolverConfig::ignore_query`]
    pub ignore_query: Option<bool>,

    /// See [`ResolverConfig::ignore_auth`]
    pub ignore_auth: Option<bool>,

    /// See [`ResolverConfig::ignore_port`]
    pub ignore_port: Option<bool>,

    /// Per-request timeout in seconds
    pub timeout_seconds: Option<u64>,

    /// See [`ResolverConfig::max_redirects`]
    pub max_redirects: Option<usize>,

    /// See [`ResolverConfig::max_body_bytes`]
    pub max_body_bytes: Option<usize>,

    /// See [`ResolverConfig::user_agent`]
    pub user_agent: Option<String>,
}

impl ConfigOverrides {
    /// Loads overrides from a JSON file.
    ///
    /// A `defaultIconPath` entry is resolved relative to the current directory
    /// and read immediately, so the returned value carries the icon bytes.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ConfigError` if the file (or the icon it
    /// points at) cannot be read, or the JSON is malformed.
    pub fn from_json_file(path: &Path) -> Result<Self, InitializationError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            InitializationError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let overrides: ConfigOverrides = serde_json::from_str(&raw).map_err(|e| {
            InitializationError::ConfigError(format!("invalid JSON in {}: {e}", path.display()))
        })?;
        overrides.load_default_icon()
    }

    /// Reads `default_icon_path` into `default_icon` (no-op when unset).
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ConfigError` if the icon file cannot be read.
    pub fn load_default_icon(mut self) -> Result<Self, InitializationError> {
        if let Some(path) = self.default_icon_path.as_deref() {
            let bytes = std::fs::read(path).map_err(|e| {
                InitializationError::ConfigError(format!(
                    "cannot read default icon {}: {e}",
                    path.display()
                ))
            })?;
            self.default_icon = Some(bytes);
        }
        Ok(self)
    }

    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: ConfigOverrides) -> Self {
        Self {
            verbose_mode: other.verbose_mode.or(self.verbose_mode),
            default_icon: other.default_icon.or(self.default_icon),
            default_icon_path: other.default_icon_path.or(self.default_icon_path),
            ignore_query: other.ignore_query.or(self.ignore_query),
            ignore_auth: other.ignore_auth.or(self.ignore_auth),
            ignore_port: other.ignore_port.or(self.ignore_port),
            timeout_seconds: other.timeout_seconds.or(self.timeout_seconds),
            max_redirects: other.max_redirects.or(self.max_redirects),
            max_body_bytes: other.max_body_bytes.or(self.max_body_bytes),
            user_agent: other.user_agent.or(self.user_agent),
        }
    }

    /// Applies the set fields to `base` and returns the result.
    pub fn apply(self, base: ResolverConfig) -> ResolverConfig {
        ResolverConfig {
            verbose_mode: self.verbose_mode.unwrap_or(base.verbose_mode),
            default_icon: self.default_icon.unwrap_or(base.default_icon),
            ignore_query: self.ignore_query.unwrap_or(base.ignore_query),
            ignore_auth: self.ignore_auth.unwrap_or(base.ignore_auth),
            ignore_port: self.ignore_port.unwrap_or(base.ignore_port),
            timeout: self
                .timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(base.timeout),
            max_redirects: self.max_redirects.unwrap_or(base.max_redirects),
            max_body_bytes: self.max_body_bytes.unwrap_or(base.max_body_bytes),
            user_agent: self.user_agent.unwrap_or(base.user_agent),
        }
    }
}

/// Command-line options for the `get-favicon` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "get-favicon",
    version,
    about = "Fetch a website's favicon and write the icon bytes to a file or stdout"
)]
pub struct Opt {
    /// Site URL (scheme optional, `http://` is assumed)
    pub url: String,

    /// Write the icon here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File returned when no icon can be fetched
    #[arg(long)]
    pub default_icon: Option<PathBuf>,

    /// JSON file with resolver settings (camelCase keys); CLI flags win over it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log every resolution step
    #[arg(short, long)]
    pub verbose: bool,

    /// Keep the query string of the input URL
    #[arg(long)]
    pub keep_query: bool,

    /// Keep `user:password@` of the input URL
    #[arg(long)]
    pub keep_auth: bool,

    /// Drop an explicit port from the input URL
    #[arg(long)]
    pub ignore_port: bool,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Maximum redirect hops per request
    #[arg(long)]
    pub max_redirects: Option<usize>,

    /// Largest response body read per request, in bytes
    #[arg(long)]
    pub max_body_bytes: Option<usize>,

    /// HTTP User-Agent header value
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Opt {
    /// Converts the flags that were actually given into overrides.
    ///
    /// Boolean switches only override when present, so a config file can
    /// still turn e.g. `ignoreQuery` off without the CLI resetting it.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            verbose_mode: self.verbose.then_some(true),
            default_icon: None,
            default_icon_path: self.default_icon.clone(),
            ignore_query: self.keep_query.then_some(false),
            ignore_auth: self.keep_auth.then_some(false),
            ignore_port: self.ignore_port.then_some(true),
            timeout_seconds: self.timeout_seconds,
            max_redirects: self.max_redirects,
            max_body_bytes: self.max_body_bytes,
            user_agent: self.user_agent.clone(),
        }
    }
}
