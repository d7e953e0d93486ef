//! Server configuration from the environment
//!
//! Variables may come from a `.env` file (loaded in `main`).

use anyhow::{Context, Result};
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "iziwei=info,iziwei_server=info,tower_http=info";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Bearer key for /iziwei routes; None disables auth
    pub api_key: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind = lookup("IZIWEI_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind
            .parse()
            .with_context(|| format!("Invalid IZIWEI_BIND address: {}", bind))?;
        let api_key = lookup("IZIWEI_API_KEY").filter(|k| !k.is_empty());

        Ok(Self { bind, api_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_empty_api_key_disables_auth() {
        let config = ServerConfig::from_lookup(lookup(&[("IZIWEI_API_KEY", "")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_invalid_bind_is_error() {
        assert!(ServerConfig::from_lookup(lookup(&[("IZIWEI_BIND", "nowhere")])).is_err());
    }

    #[test]
    fn test_custom_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("IZIWEI_BIND", "127.0.0.1:9000"),
            ("IZIWEI_API_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }
}
