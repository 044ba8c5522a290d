use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}.")]
    MissingVar(&'static str),
}

/// Process-wide configuration, read once at startup and injected into the
/// clients. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct SplicrConfig {
    pub youtube_key: String,
    pub ga_tracking_id: String,
}

impl SplicrConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(SplicrConfig {
            youtube_key: require_var("YOUTUBE_KEY")?,
            ga_tracking_id: require_var("GA_TRACKING_ID")?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
