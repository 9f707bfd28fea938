//! Server Configuration
//!
//! Read from the environment (after `.env` is loaded).

use anyhow::Context;
use auth::AuthConfig;
use platform::crypto::from_base64;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Postgres URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let mut auth = AuthConfig::default();

        if let Some(secs) = lookup("SESSION_TTL_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .context("SESSION_TTL_SECS must be a whole number of seconds")?;
            anyhow::ensure!(secs > 0, "SESSION_TTL_SECS must be positive");
            auth = auth.with_session_ttl(Duration::from_secs(secs));
        }

        if let Some(pepper_b64) = lookup("PASSWORD_PEPPER") {
            let pepper = from_base64(pepper_b64.trim()).context("PASSWORD_PEPPER must be base64")?;
            auth = auth.with_pepper(pepper);
        }

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.bind_addr.port(), 31113);
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(config.auth.session_ttl, Duration::from_secs(7 * 24 * 3600));
        assert!(config.auth.pepper().is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/auth"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("FRONTEND_ORIGINS", "https://a.example, https://b.example,"),
            ("SESSION_TTL_SECS", "60"),
            ("PASSWORD_PEPPER", "c2VjcmV0"),
        ])
        .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/auth"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(
            config.frontend_origins,
            ["https://a.example", "https://b.example"]
        );
        assert_eq!(config.auth.session_ttl_ms(), 60_000);
        assert_eq!(config.auth.pepper(), Some(&b"secret"[..]));
    }

    #[test]
    fn test_empty_database_url_selects_memory() {
        assert!(config(&[("DATABASE_URL", "  ")]).unwrap().database_url.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config(&[("BIND_ADDR", "nope")]).is_err());
        assert!(config(&[("SESSION_TTL_SECS", "0")]).is_err());
        assert!(config(&[("SESSION_TTL_SECS", "soon")]).is_err());
        assert!(config(&[("PASSWORD_PEPPER", "***")]).is_err());
    }
}
