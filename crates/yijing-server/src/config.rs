//! Server configuration from the environment
//!
//! `.env` is loaded by `main` before this runs, so both real environment
//! variables and `.env` entries are visible here.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;
/// Bundled front-end, independent of the working directory
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT {0:?}: expected an integer between 0 and 65535")]
    InvalidPort(String),

    #[error("Invalid HOST {0:?}: expected an IP address")]
    InvalidHost(String),

    #[error("Invalid LLM_TIMEOUT_SECS {0:?}: expected a positive integer")]
    InvalidTimeout(String),
}

/// OpenAI collaborator settings, present only when an API key is configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub openai: Option<OpenAiConfig>,
    pub static_dir: PathBuf,
    pub persona_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset, the same as a missing variable
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let host = match get("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let timeout = match get("LLM_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw.clone())),
            },
            None => Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        };

        let openai = get("OPENAI_API_KEY").map(|api_key| OpenAiConfig {
            api_key: api_key.trim().to_string(),
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            timeout,
        });

        Ok(Self {
            host,
            port,
            openai,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            persona_file: get("PERSONA_FILE").map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
