use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads configuration from the process environment, loading `.env` first if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = var("SL_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("Invalid SL_LISTEN_ADDR '{}'", raw_addr))?;
        let cors_allow = var("SL_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("SL_REQUEST_TIMEOUT_MS")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = config_from(&[(
            "SL_CORS_ALLOW_ORIGINS",
            "http://localhost:3000, https://stocklens.app ,",
        )])
        .unwrap();
        assert_eq!(
            config.cors_allow,
            vec![
                "http://localhost:3000".to_string(),
                "https://stocklens.app".to_string()
            ]
        );
    }

    #[test]
    fn non_numeric_timeout_falls_back_to_default() {
        let config = config_from(&[("SL_REQUEST_TIMEOUT_MS", "soon")]).unwrap();
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));

        let config = config_from(&[("SL_REQUEST_TIMEOUT_MS", "1500")]).unwrap();
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn invalid_listen_addr_is_an_error() {
        let err = config_from(&[("SL_LISTEN_ADDR", "not-an-addr")]).unwrap_err();
        assert!(err.to_string().contains("SL_LISTEN_ADDR"));
    }
}
