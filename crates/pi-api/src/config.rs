//! API server configuration.

use std::collections::HashMap;

use crate::auth::Principal;

/// Default location of the CI run export.
pub const DEFAULT_RUNS_PATH: &str = "/data/gha-runs.json";

/// Configuration errors raised while reading the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    #[error("invalid PI_AUTH_TOKENS entry '{0}': expected token=user:<ref> or token=service:<subject>")]
    InvalidToken(String),
}

/// Top-level API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Path of the CI run document read by `/v1/summary` (GHA_RUNS_PATH).
    pub runs_path: String,
    /// Bearer token table for the todo routes. Empty means guest mode.
    pub auth_tokens: HashMap<String, Principal>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7007
}

fn default_runs_path() -> String {
    DEFAULT_RUNS_PATH.to_string()
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => default_port(),
        };
        let auth_tokens = match var("PI_AUTH_TOKENS") {
            Some(raw) => parse_auth_tokens(&raw)?,
            None => HashMap::new(),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(default_host),
            port,
            runs_path: var("GHA_RUNS_PATH").unwrap_or_else(default_runs_path),
            auth_tokens,
        })
    }
}

/// Parse `tok=user:default/alice,tok2=service:ci` into a token table.
pub fn parse_auth_tokens(raw: &str) -> Result<HashMap<String, Principal>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (token, reference) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::InvalidToken(entry.to_string()))?;
            let token = token.trim();
            let principal = Principal::parse(reference.trim())
                .filter(|_| !token.is_empty())
                .ok_or_else(|| ConfigError::InvalidToken(entry.to_string()))?;
            Ok((token.to_string(), principal))
        })
        .collect()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            runs_path: default_runs_path(),
            auth_tokens: HashMap::new(),
        }
    }
}
