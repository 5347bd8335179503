//! Environment-driven configuration.
//!
//! | Variable            | Used by            |
//! |---------------------|--------------------|
//! | `FOLIO_BASE_URL`    | backend API client |
//! | `FOLIO_BUCKET_NAME` | storage client     |
//! | `FOLIO_REGION`      | storage client     |
//! | `FOLIO_ACCESS_KEY`  | storage client     |
//! | `FOLIO_SECRET_KEY`  | storage client     |
//!
//! Native builds read them from the process environment at startup. The web
//! build has no process environment, so [`Settings::from_build_env`] bakes
//! them in at compile time instead.

use std::fmt;

use tracing::warn;
use url::Url;

use crate::error::ConfigError;

pub const BASE_URL_VAR: &str = "FOLIO_BASE_URL";
pub const BUCKET_VAR: &str = "FOLIO_BUCKET_NAME";
pub const REGION_VAR: &str = "FOLIO_REGION";
pub const ACCESS_KEY_VAR: &str = "FOLIO_ACCESS_KEY";
pub const SECRET_KEY_VAR: &str = "FOLIO_SECRET_KEY";

/// Backend API location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base URL without a trailing slash
    pub base_url: String,
}

impl ApiSettings {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = required(&lookup, BASE_URL_VAR)?;
        let parsed = Url::parse(&raw).map_err(|e| ConfigError::Invalid {
            key: BASE_URL_VAR,
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::Invalid {
                key: BASE_URL_VAR,
                reason: format!("unsupported scheme {} (only http/https)", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Bucket and credentials for the object store.
#[derive(Clone, PartialEq, Eq)]
pub struct StorageSettings {
    pub bucket: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl StorageSettings {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bucket: required(&lookup, BUCKET_VAR)?,
            region: required(&lookup, REGION_VAR)?,
            access_key_id: required(&lookup, ACCESS_KEY_VAR)?,
            secret_access_key: required(&lookup, SECRET_KEY_VAR)?,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl fmt::Debug for StorageSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageSettings")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

/// Everything the app needs: backend and storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api: ApiSettings,
    pub storage: StorageSettings,
}

impl Settings {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            api: ApiSettings::from_lookup(&lookup)?,
            storage: StorageSettings::from_lookup(&lookup)?,
        })
    }

    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads values captured when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        BASE_URL_VAR => option_env!("FOLIO_BASE_URL"),
        BUCKET_VAR => option_env!("FOLIO_BUCKET_NAME"),
        REGION_VAR => option_env!("FOLIO_REGION"),
        ACCESS_KEY_VAR => option_env!("FOLIO_ACCESS_KEY"),
        SECRET_KEY_VAR => option_env!("FOLIO_SECRET_KEY"),
        _ => None,
    };
    value.map(str::to_string)
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|value| value.trim().to_string()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            warn!("Environment variable {key} not set");
            Err(ConfigError::Missing(key))
        }
    }
}
