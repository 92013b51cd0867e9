//! Server configuration from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

const HOST_ENV: &str = "USSD_HOST";
const PORT_ENV: &str = "USSD_PORT";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid USSD_HOST value '{value}': {source}")]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("Invalid USSD_PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Where the webhook listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables fall back to
    /// defaults; set but unparseable ones are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup(HOST_ENV) {
            Some(value) => {
                let parsed = value.trim().parse::<IpAddr>();
                parsed.map_err(|source| ConfigError::InvalidHost { value, source })?
            }
            None => defaults.host,
        };

        let port = match lookup(PORT_ENV) {
            Some(value) => {
                let parsed = value.trim().parse::<u16>();
                parsed.map_err(|source| ConfigError::InvalidPort { value, source })?
            }
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
