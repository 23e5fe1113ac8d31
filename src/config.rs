use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use anyhow::Context;

use crate::mode::ModeParameterTable;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL_NAME: &str = "llama3.2";

/// Process-wide settings, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub backend_url: String,
    pub model_name: String,
    /// `None` leaves the backend call unbounded.
    pub backend_timeout: Option<Duration>,
    pub mode_parameters: ModeParameterTable,
}

impl AppConfig {
    /// Only the listening port can be overridden, through `PORT`.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = parse_port(env::var("PORT").ok().as_deref())?;

        Ok(Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
            ..Self::default()
        })
    }
}

/// An absent value falls back to `DEFAULT_PORT`; anything else must be a valid `u16`.
pub fn parse_port(raw: Option<&str>) -> anyhow::Result<u16> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid PORT value {raw:?}")),
        None => Ok(DEFAULT_PORT),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            backend_timeout: None,
            mode_parameters: ModeParameterTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 5000);
    }

    #[test]
    fn port_tolerates_surrounding_whitespace() {
        assert_eq!(parse_port(Some(" 8081 ")).unwrap(), 8081);
    }

    #[test]
    fn port_rejects_garbage_and_out_of_range() {
        let err = parse_port(Some("abc")).unwrap_err();
        assert!(err.to_string().contains("invalid PORT value \"abc\""));

        assert!(parse_port(Some("70000")).is_err());
        assert!(parse_port(Some("")).is_err());
    }

    #[test]
    fn default_config_listens_on_all_interfaces() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:5000");
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.model_name, DEFAULT_MODEL_NAME);
        assert!(config.backend_timeout.is_none());
    }
}
