//! Backend API client.
//!
//! Thin wrapper over reqwest for the two request shapes the front end uses:
//! a credentialed `GET` and a credentialed JSON `POST`, both against
//! `{base_url}/{path}`. On WASM reqwest goes through the browser's `fetch()`
//! and the requests carry `credentials: "include"` so session cookies travel
//! with them.

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use crate::config::{PORTFOLIO_FILE_PATH, PORTFOLIO_SUBMIT_PATH, VERIFICATION_CODE_PATH};
use crate::content::PortfolioContent;
use crate::error::ApiError;
use crate::form::PortfolioSubmission;
use crate::settings::ApiSettings;

/// Client for the portfolio backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client for `base_url` (`http` or `https`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ApiError::InvalidUrl(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                parsed.scheme()
            )));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ApiError> {
        Self::new(&settings.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/{path}`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    #[cfg(target_arch = "wasm32")]
    fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        builder.fetch_credentials_include()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        builder
    }

    /// Raw credentialed `GET`; the status is not inspected.
    pub async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let url = self.endpoint(path)?;
        debug!("GET {url}");
        Ok(Self::with_credentials(self.http.get(url)).send().await?)
    }

    /// `GET` decoded as JSON. Non-success statuses are errors.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = ensure_success(self.get(path).await?)?;
        decode(response).await
    }

    /// Credentialed JSON `POST`, response decoded as JSON.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let payload =
            serde_json::to_vec(body).map_err(|e| ApiError::Request(format!("Encode body: {e}")))?;
        debug!("POST {url} ({} bytes)", payload.len());

        let builder = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        let response = ensure_success(Self::with_credentials(builder).send().await?)?;
        decode(response).await
    }

    /// Portfolio page data.
    pub async fn fetch_portfolio(&self) -> Result<PortfolioContent, ApiError> {
        self.get_json(PORTFOLIO_FILE_PATH).await
    }

    /// Forwards a gated form payload to the backend.
    pub async fn submit_portfolio(&self, submission: &PortfolioSubmission) -> Result<Value, ApiError> {
        self.post_json(PORTFOLIO_SUBMIT_PATH, submission).await
    }

    /// Asks the backend to mail a verification code to `email`.
    pub async fn request_code(&self, email: &str) -> Result<Value, ApiError> {
        self.post_json(VERIFICATION_CODE_PATH, &json!({ "email": email }))
            .await
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
