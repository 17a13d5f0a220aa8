use std::net::SocketAddr;
use thiserror::Error;

pub const BIND_VAR: &str = "MAHJONG_WEB_BIND";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: {source}")]
    Bind {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_bind(std::env::var(BIND_VAR).ok().as_deref())
    }

    /// `None` falls back to the default address.
    pub fn from_bind(bind: Option<&str>) -> Result<Self, ConfigError> {
        let value = bind.unwrap_or(DEFAULT_BIND);
        let bind = value.parse::<SocketAddr>().map_err(|source| ConfigError::Bind {
            var: BIND_VAR,
            value: value.to_string(),
            source,
        })?;
        Ok(Self { bind })
    }
}
