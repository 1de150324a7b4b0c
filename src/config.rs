use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Server configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    /// LISTEN_ADDR defaults to "0.0.0.0:8080"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_listen_addr(std::env::var("LISTEN_ADDR").ok().as_deref())
    }

    fn from_listen_addr(value: Option<&str>) -> Result<Self, ConfigError> {
        let listen_addr = value
            .unwrap_or(DEFAULT_LISTEN_ADDR)
            .parse()
            .map_err(|_| ConfigError::Invalid("LISTEN_ADDR", "must be a valid socket address"))?;

        Ok(Config { listen_addr })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listen_addr() {
        let config = Config::from_listen_addr(None).unwrap();
        assert_eq!(
            config.listen_addr,
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_custom_listen_addr() {
        let config = Config::from_listen_addr(Some("127.0.0.1:9000")).unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
    }

    #[test]
    fn test_invalid_listen_addr() {
        let err = Config::from_listen_addr(Some("localhost")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for LISTEN_ADDR: must be a valid socket address"
        );
    }
}
