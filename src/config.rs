//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_JUDGE_BASE_URL,
    DEFAULT_JUDGE_CONNECT_TIMEOUT_SECONDS, DEFAULT_JUDGE_WAIT_SECONDS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub judge: JudgeConfig,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Emit JSON log lines instead of the human-readable format
    pub log_json: bool,
}

/// Remote judge configuration
///
/// The credential lives here and only here; it is handed to the judge client
/// at construction and never serialized into a response.
#[derive(Clone)]
pub struct JudgeConfig {
    pub base_url: String,
    pub credential: JudgeCredential,
    /// Overall budget for one "wait for completion" call
    pub wait_timeout: Duration,
    pub connect_timeout: Duration,
}

/// How the judge authenticates us
#[derive(Clone, PartialEq, Eq)]
pub enum JudgeCredential {
    /// No credential (self-hosted judge without auth)
    None,
    /// Hosted judge behind RapidAPI
    RapidApi { key: String, host: String },
    /// Self-hosted judge with `AUTHN_TOKEN` enabled
    AuthToken(String),
}

impl std::fmt::Debug for JudgeCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::RapidApi { host, .. } => write!(f, "RapidApi {{ host: {host:?}, key: <redacted> }}"),
            Self::AuthToken(_) => write!(f, "AuthToken(<redacted>)"),
        }
    }
}

impl std::fmt::Debug for JudgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JudgeConfig")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .field("wait_timeout", &self.wait_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Database configuration (persistent history)
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// JWT verification configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            judge: JudgeConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_json: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => true,
                Ok("text") | Err(_) => false,
                Ok(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
            },
        })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("JUDGE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_JUDGE_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("JUDGE_BASE_URL".to_string()));
        }

        let credential = JudgeCredential::from_parts(
            &base_url,
            env::var("JUDGE_RAPIDAPI_KEY").ok(),
            env::var("JUDGE_RAPIDAPI_HOST").ok(),
            env::var("JUDGE_AUTH_TOKEN").ok(),
        )?;

        Ok(Self {
            base_url,
            credential,
            wait_timeout: Duration::from_secs(parse_secs(
                "JUDGE_WAIT_TIMEOUT_SECONDS",
                DEFAULT_JUDGE_WAIT_SECONDS,
            )?),
            connect_timeout: Duration::from_secs(parse_secs(
                "JUDGE_CONNECT_TIMEOUT_SECONDS",
                DEFAULT_JUDGE_CONNECT_TIMEOUT_SECONDS,
            )?),
        })
    }
}

impl JudgeCredential {
    /// Pick the credential from the configured pieces.
    ///
    /// A RapidAPI key without a host falls back to the host of `base_url`.
    pub fn from_parts(
        base_url: &str,
        rapidapi_key: Option<String>,
        rapidapi_host: Option<String>,
        auth_token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let rapidapi_key = rapidapi_key.filter(|k| !k.trim().is_empty());
        let auth_token = auth_token.filter(|t| !t.trim().is_empty());

        match (rapidapi_key, auth_token) {
            (Some(_), Some(_)) => Err(ConfigError::InvalidValue(
                "JUDGE_RAPIDAPI_KEY and JUDGE_AUTH_TOKEN are mutually exclusive".to_string(),
            )),
            (Some(key), None) => {
                let host = match rapidapi_host.filter(|h| !h.trim().is_empty()) {
                    Some(host) => host,
                    None => reqwest::Url::parse(base_url)
                        .ok()
                        .and_then(|url| url.host_str().map(str::to_string))
                        .ok_or_else(|| ConfigError::InvalidValue("JUDGE_BASE_URL".to_string()))?,
                };
                Ok(Self::RapidApi { key, host })
            }
            (None, Some(token)) => Ok(Self::AuthToken(token)),
            (None, None) => Ok(Self::None),
        }
    }
}

impl DatabaseConfig {
    /// History is persisted only when `DATABASE_URL` is present
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(url) = env::var("DATABASE_URL") else {
            return Ok(None);
        };

        Ok(Some(Self {
            url,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        }))
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
        })
    }
}

fn parse_secs(name: &str, default: u64) -> Result<u64, ConfigError> {
    let secs: u64 = env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))?;

    if secs == 0 {
        return Err(ConfigError::InvalidValue(name.to_string()));
    }
    Ok(secs)
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
