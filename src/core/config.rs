//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Default `tracing` filter when neither `LOG_FILTER` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false, yes/no, on/off, 1/0), got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` env-filter directives
    /// Example: info,tower_http=debug
    pub log_filter: String,

    /// Compress responses with Brotli/Gzip
    pub compression: bool,

    /// Serve pre-compressed `.br`/`.gz` siblings from `/pkg`
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let nonblank = |s: &String| !s.trim().is_empty();
        let log_filter = lookup("LOG_FILTER")
            .filter(nonblank)
            .or_else(|| lookup("RUST_LOG").filter(nonblank))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            log_filter,
            compression: parse_flag("COMPRESSION", lookup("COMPRESSION"), true)?,
            precompressed_assets: parse_flag(
                "PRECOMPRESSED_ASSETS",
                lookup("PRECOMPRESSED_ASSETS"),
                true,
            )?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
            precompressed_assets: true,
        }
    }
}

fn parse_flag(
    var: &'static str,
    value: Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value }),
    }
}
