use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {var}: {value:?} is not an IP address")]
    InvalidHost { var: &'static str, value: String },

    #[error("Invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// Server Config
// ─────────────────────────────────────────────────────────────────────────────

pub const HOST_VAR: &str = "SENTI_HOST";
pub const PORT_VAR: &str = "SENTI_PORT";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Reads `SENTI_HOST` and `SENTI_PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Unset or blank
    /// variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = non_blank(lookup(HOST_VAR)) {
            config.host = value
                .parse()
                .map_err(|_| ConfigError::InvalidHost { var: HOST_VAR, value })?;
        }

        if let Some(value) = non_blank(lookup(PORT_VAR)) {
            config.port = value
                .parse()
                .map_err(|_| ConfigError::InvalidPort { var: PORT_VAR, value })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_bind_all_interfaces() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config =
            ServerConfig::from_lookup(lookup(&[(HOST_VAR, "127.0.0.1"), (PORT_VAR, " 9090 ")]))
                .unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[(HOST_VAR, ""), (PORT_VAR, "  ")])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_invalid_host() {
        let err = ServerConfig::from_lookup(lookup(&[(HOST_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
        assert!(err.to_string().contains("SENTI_HOST"));
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }
}
