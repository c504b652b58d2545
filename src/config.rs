// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration loading and resolution.
//!
//! Every setting resolves as: explicit flag, then environment variable, then
//! built-in default.

use crate::acquisition::http_client::DEFAULT_USER_AGENT;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "SCRAPER_HOST";
pub const ENV_ARTIFACT_DIR: &str = "SCRAPER_ARTIFACT_DIR";
pub const ENV_FETCH_TIMEOUT_MS: &str = "SCRAPER_FETCH_TIMEOUT_MS";
pub const ENV_USER_AGENT: &str = "SCRAPER_USER_AGENT";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Fully resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Where per-request CSV files are written before download.
    pub artifact_dir: PathBuf,
    /// `None` leaves the HTTP client without a request timeout.
    pub fetch_timeout_ms: Option<u64>,
    pub user_agent: String,
}

/// Settings the HTTP fetcher needs; all the one-shot `scrape` command reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub fetch_timeout_ms: Option<u64>,
    pub user_agent: String,
}

/// Values supplied on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub artifact_dir: Option<PathBuf>,
    pub fetch_timeout_ms: Option<u64>,
    pub user_agent: Option<String>,
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

impl FetchConfig {
    /// Resolve from overrides and the process environment.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment. Server
    /// settings such as `PORT` are never read.
    pub fn resolve_with<F>(overrides: &ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch_timeout_ms = match overrides.fetch_timeout_ms {
            Some(ms) => Some(ms),
            None => non_blank(&lookup, ENV_FETCH_TIMEOUT_MS)
                .map(|v| {
                    v.trim()
                        .parse::<u64>()
                        .with_context(|| format!("invalid {ENV_FETCH_TIMEOUT_MS} value {v:?}"))
                })
                .transpose()?,
        };

        Ok(Self {
            fetch_timeout_ms,
            user_agent: overrides
                .user_agent
                .clone()
                .or_else(|| non_blank(&lookup, ENV_USER_AGENT))
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

impl ServerConfig {
    /// Resolve from overrides and the process environment.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn resolve_with<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = FetchConfig::resolve_with(&overrides, &lookup)?;
        let env = |key: &str| non_blank(&lookup, key);

        let port = match overrides.port {
            Some(p) => p,
            None => match env(ENV_PORT) {
                Some(v) => v
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid {ENV_PORT} value {v:?}"))?,
                None => DEFAULT_PORT,
            },
        };

        Ok(Self {
            host: overrides
                .host
                .or_else(|| env(ENV_HOST))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            artifact_dir: overrides
                .artifact_dir
                .or_else(|| env(ENV_ARTIFACT_DIR).map(PathBuf::from))
                .unwrap_or_else(std::env::temp_dir),
            fetch_timeout_ms: fetch.fetch_timeout_ms,
            user_agent: fetch.user_agent,
        })
    }

    /// Socket address to bind.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
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
        let cfg = ServerConfig::resolve_with(ConfigOverrides::default(), lookup(&[])).unwrap();
        assert_eq!(cfg.host, DEFAULT_HOST);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.artifact_dir, std::env::temp_dir());
        assert_eq!(cfg.fetch_timeout_ms, None);
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_env_applies() {
        let cfg = ServerConfig::resolve_with(
            ConfigOverrides::default(),
            lookup(&[
                (ENV_PORT, "8080"),
                (ENV_ARTIFACT_DIR, "/var/tmp/exports"),
                (ENV_FETCH_TIMEOUT_MS, "2500"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.artifact_dir, PathBuf::from("/var/tmp/exports"));
        assert_eq!(cfg.fetch_timeout_ms, Some(2500));
    }

    #[test]
    fn test_flags_win_over_env() {
        let overrides = ConfigOverrides {
            port: Some(9000),
            host: Some("0.0.0.0".into()),
            ..Default::default()
        };
        let cfg = ServerConfig::resolve_with(
            overrides,
            lookup(&[(ENV_PORT, "8080"), (ENV_HOST, "10.0.0.1")]),
        )
        .unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.listen_addr().unwrap().to_string(), "0.0.0.0:9000");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let cfg =
            ServerConfig::resolve_with(ConfigOverrides::default(), lookup(&[(ENV_PORT, "  ")]))
                .unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = ServerConfig::resolve_with(
            ConfigOverrides::default(),
            lookup(&[(ENV_PORT, "eighty")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_fetch_config_ignores_invalid_port() {
        let overrides = ConfigOverrides {
            user_agent: Some("cli-agent".into()),
            ..Default::default()
        };
        let fetch = FetchConfig::resolve_with(
            &overrides,
            lookup(&[(ENV_PORT, "eighty"), (ENV_FETCH_TIMEOUT_MS, "1500")]),
        )
        .unwrap();
        assert_eq!(fetch.fetch_timeout_ms, Some(1500));
        assert_eq!(fetch.user_agent, "cli-agent");
    }

    #[test]
    fn test_fetch_config_invalid_timeout_is_error() {
        let err = FetchConfig::resolve_with(
            &ConfigOverrides::default(),
            lookup(&[(ENV_FETCH_TIMEOUT_MS, "soon")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains(ENV_FETCH_TIMEOUT_MS));
    }
}
