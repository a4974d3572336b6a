//! Server configuration
//!
//! Built in layers: defaults, then `BIZDAYS_*` environment variables, then
//! command-line overrides applied by the binary.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Deployment mode. Request logging is only enabled in development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (the default).
    #[default]
    Development,
    /// Production.
    Production,
}

impl Environment {
    /// Whether every request is logged.
    pub fn request_logging(self) -> bool {
        self == Environment::Development
    }

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => bail!("unknown environment {other:?} (expected development or production)"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Mount point of the API routes
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Country used when a request names none
    #[serde(default = "default_country")]
    pub default_country: String,

    /// Deployment mode
    #[serde(default)]
    pub environment: Environment,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup("BIZDAYS_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("BIZDAYS_PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("BIZDAYS_PORT: invalid port {port:?}"))?;
        }
        if let Some(prefix) = lookup("BIZDAYS_API_PREFIX") {
            config.api_prefix = prefix;
        }
        if let Some(country) = lookup("BIZDAYS_DEFAULT_COUNTRY") {
            config.default_country = country;
        }
        if let Some(env) = lookup("BIZDAYS_ENV") {
            config.environment = env.parse().context("BIZDAYS_ENV")?;
        }
        config.validated()
    }

    /// Normalize the API prefix and check the default country.
    pub fn validated(mut self) -> Result<Self> {
        let trimmed = self.api_prefix.trim().trim_end_matches('/');
        self.api_prefix = match trimmed {
            "" => String::new(),
            p if p.starts_with('/') => p.to_string(),
            p => format!("/{p}"),
        };
        let code = bd_time::CountryCode::parse(&self.default_country)
            .with_context(|| format!("default country {:?}", self.default_country))?;
        bd_time::calendar_for(&code)
            .with_context(|| format!("no holiday calendar for default country {code}"))?;
        self.default_country = code.to_string();
        Ok(self)
    }

    /// `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_prefix: default_api_prefix(),
            default_country: default_country(),
            environment: Environment::default(),
        }
    }
}
