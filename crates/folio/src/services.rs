//! Process-wide backend and storage clients.
//!
//! Built on first use and shared by every component afterwards; nothing is
//! re-created per render.

use dioxus::logger::tracing::info;
use folio_core::s3::S3ObjectStore;
use folio_core::{ApiClient, ConfigError, Settings};
use once_cell::sync::OnceCell;

use crate::error::AppError;

/// Clients configured from [`Settings`].
#[derive(Debug)]
pub struct Services {
    pub settings: Settings,
    pub api: ApiClient,
    pub store: S3ObjectStore,
}

static SERVICES: OnceCell<Services> = OnceCell::new();

/// The shared clients, initialising them on first call.
///
/// A configuration error is returned on every call until the settings are
/// fixed; nothing is cached on failure.
pub fn services() -> Result<&'static Services, AppError> {
    SERVICES.get_or_try_init(|| {
        let settings = load_settings()?;
        let api = ApiClient::from_settings(&settings.api)?;
        let store = S3ObjectStore::from_settings(&settings.storage);

        info!(
            "Configured backend {} and bucket {} ({})",
            api.base_url(),
            settings.storage.bucket,
            settings.storage.region
        );

        Ok(Services {
            settings,
            api,
            store,
        })
    })
}

#[cfg(target_arch = "wasm32")]
fn load_settings() -> Result<Settings, ConfigError> {
    Settings::from_build_env()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> Result<Settings, ConfigError> {
    Settings::from_env().or_else(|_| Settings::from_build_env())
}
