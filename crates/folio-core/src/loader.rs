//! Portfolio page data loader.
//!
//! Issues exactly one read against the backend and hands the result to the
//! page. There is no retry and no fallback content: when the request fails
//! the error is returned as-is, which fails a build that depends on it.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::api::ApiClient;
use crate::content::PortfolioContent;
use crate::error::ApiError;

/// Everything the portfolio page renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioPage {
    pub content: PortfolioContent,
}

impl PortfolioPage {
    /// Parses the JSON form produced by [`PortfolioPage::to_json`].
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        serde_json::from_str(json).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub async fn load_portfolio_page(api: &ApiClient) -> Result<PortfolioPage, ApiError> {
    info!("Loading portfolio page data from {}", api.base_url());

    match api.fetch_portfolio().await {
        Ok(content) => {
            info!("Loaded portfolio \"{}\"", content.title);
            Ok(PortfolioPage { content })
        }
        Err(e) => {
            error!("Failed to load portfolio page data: {e}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_roundtrip_shape() {
        let page = PortfolioPage {
            content: PortfolioContent {
                title: "Showreel".to_string(),
                ..Default::default()
            },
        };
        let json = page.to_json();
        assert!(json.contains("\"content\""));
        assert!(json.contains("\"portfolioDate\""));
        assert_eq!(PortfolioPage::from_json(&json).unwrap(), page);
    }

    #[test]
    fn test_bad_snapshot_is_decode_error() {
        assert!(matches!(
            PortfolioPage::from_json("{\"content\": 3}"),
            Err(ApiError::Decode(_))
        ));
    }
}
