//! Portfolio content as served by the backend.

use serde::{Deserialize, Serialize};

use crate::validate::parse_date;

/// Body of `GET /portfolios/file`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub message: String,
    pub range: String,
    pub title: String,
    /// Bucket key stem of the video (the hashed file name)
    pub file_name: String,
    pub extension: String,
    /// `YYYYMMDD`
    pub portfolio_date: String,
    pub about: String,
    pub email: String,
    pub created_date: String,
}

impl PortfolioContent {
    /// Bucket key of the portfolio video.
    pub fn video_key(&self) -> String {
        if self.extension.is_empty() {
            self.file_name.clone()
        } else {
            format!("{}.{}", self.file_name, self.extension)
        }
    }

    /// Public URL of the video in a virtual-hosted S3 bucket.
    pub fn video_url(&self, bucket: &str, region: &str) -> String {
        format!(
            "https://{bucket}.s3.{region}.amazonaws.com/{}",
            crate::s3::encode_key(&self.video_key())
        )
    }

    /// `2024.02.29` for a valid `YYYYMMDD` date, the raw value otherwise.
    pub fn display_date(&self) -> String {
        parse_date(&self.portfolio_date)
            .map(|date| date.format("%Y.%m.%d").to_string())
            .unwrap_or_else(|| self.portfolio_date.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PortfolioContent {
        serde_json::from_str(
            r#"{
                "message": "ok",
                "range": "FE",
                "title": "Showreel",
                "fileName": "ab12",
                "extension": "mp4",
                "portfolioDate": "20240229",
                "about": "Frontend work",
                "email": "dev@example.com",
                "createdDate": "2024-03-01T10:00:00Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decodes_camel_case() {
        let content = sample();
        assert_eq!(content.file_name, "ab12");
        assert_eq!(content.portfolio_date, "20240229");
        assert_eq!(content.created_date, "2024-03-01T10:00:00Z");
    }

    #[test]
    fn test_video_key_and_url() {
        let content = sample();
        assert_eq!(content.video_key(), "ab12.mp4");
        assert_eq!(
            content.video_url("folio", "ap-northeast-2"),
            "https://folio.s3.ap-northeast-2.amazonaws.com/ab12.mp4"
        );
    }

    #[test]
    fn test_display_date() {
        assert_eq!(sample().display_date(), "2024.02.29");

        let content = PortfolioContent {
            portfolio_date: "someday".to_string(),
            ..sample()
        };
        assert_eq!(content.display_date(), "someday");
    }
}
