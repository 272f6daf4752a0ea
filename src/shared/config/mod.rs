//! Application configuration module
//!
//! Configuration is assembled from three layers, lowest precedence first:
//! built-in defaults, an optional TOML file named by `COURTDESK_CONFIG`, and
//! environment variables (`BIND_ADDR`, `SERVER_PORT`, `JWT_SECRET`,
//! `SESSION_COOKIE`, `RUST_LOG`).

use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default name of the cookie carrying the session token
pub const DEFAULT_SESSION_COOKIE: &str = "courtdesk_session";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variable naming the optional TOML config file
pub const CONFIG_PATH_VAR: &str = "COURTDESK_CONFIG";

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// HMAC secret used to verify session tokens
    pub jwt_secret: String,
    /// Cookie name checked when no bearer token is present
    pub session_cookie: String,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("jwt_secret", &"<redacted>")
            .field("session_cookie", &self.session_cookie)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    ///
    /// Reads the TOML file named by `COURTDESK_CONFIG` if set, then applies
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => AppConfigBuilder::from_file(path)?,
            Err(_) => AppConfigBuilder::default(),
        };

        builder.with_env(|key| std::env::var(key).ok()).build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if self.session_cookie.is_empty() {
            return Err(ConfigError::MissingValue("session_cookie"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfigBuilder {
    bind_addr: Option<String>,
    port: Option<u16>,
    jwt_secret: Option<String>,
    session_cookie: Option<String>,
    log_filter: Option<String>,
}

impl AppConfigBuilder {
    /// Parse a TOML document into a builder
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    /// Apply overrides from an environment-style lookup
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(addr) = lookup("BIND_ADDR") {
            self.bind_addr = Some(addr);
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse().ok()) {
            self.port = Some(port);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = Some(secret);
        }
        if let Some(cookie) = lookup("SESSION_COOKIE") {
            self.session_cookie = Some(cookie);
        }
        if let Some(filter) = lookup("RUST_LOG") {
            self.log_filter = Some(filter);
        }
        self
    }

    /// Set the listen address
    pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.bind_addr = Some(addr.into());
        self
    }

    /// Override only the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the session token secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the session cookie name
    pub fn session_cookie(mut self, name: impl Into<String>) -> Self {
        self.session_cookie = Some(name.into());
        self
    }

    /// Set the tracing filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let raw_addr = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        let mut bind_addr: SocketAddr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(raw_addr.to_string()))?;
        if let Some(port) = self.port {
            bind_addr.set_port(port);
        }

        let config = AppConfig {
            bind_addr,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("jwt_secret"))?,
            session_cookie: self
                .session_cookie
                .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string()),
            log_filter: self
                .log_filter
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to read config file {0}")]
    Io(String),
    #[error("failed to parse config file: {0}")]
    Parse(String),
}
