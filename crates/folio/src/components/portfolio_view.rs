//! Portfolio page: the content served at `portfolios/file`, video included.

use chrono::Utc;
use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use folio_core::{load_portfolio_page, PortfolioPage};

use crate::error::AppError;
use crate::services::services;
use crate::utils::format_uploaded;

/// Load status of the page data.
#[derive(Clone, PartialEq)]
pub enum PageStatus {
    /// Request in flight
    Loading,
    /// Page data plus the public URL of its video
    Ready {
        page: PortfolioPage,
        video_url: String,
    },
    /// The single load attempt failed; there is no fallback content
    Failed(String),
}

#[component]
pub fn PortfolioView() -> Element {
    let mut status = use_signal(|| PageStatus::Loading);

    use_effect(move || {
        spawn(async move {
            match load().await {
                Ok((page, video_url)) => status.set(PageStatus::Ready { page, video_url }),
                Err(e) => {
                    error!("Failed to load portfolio: {e}");
                    status.set(PageStatus::Failed(e.to_string()));
                }
            }
        });
    });

    match status() {
        PageStatus::Loading => rsx! {
            section { class: "fo-portfolio fo-portfolio--loading",
                p { class: "fo-muted", "Loading portfolio..." }
            }
        },
        PageStatus::Failed(message) => rsx! {
            section { class: "fo-portfolio fo-portfolio--error",
                h2 { "Portfolio unavailable" }
                p { class: "fo-muted", "{message}" }
            }
        },
        PageStatus::Ready { page, video_url } => {
            let content = page.content;
            let uploaded = format_uploaded(&content.created_date, Utc::now());

            rsx! {
                section { class: "fo-portfolio",
                    div { class: "fo-portfolio-heading",
                        span { class: "fo-badge", "{content.range}" }
                        h2 { class: "fo-portfolio-title", "{content.title}" }
                    }
                    video {
                        class: "fo-portfolio-video",
                        src: "{video_url}",
                        controls: true,
                        preload: "metadata",
                    }
                    dl { class: "fo-portfolio-meta",
                        dt { "Date." }
                        dd { "{content.display_date()}" }
                        dt { "About." }
                        dd { "{content.about}" }
                        dt { "Email." }
                        dd {
                            a { href: "mailto:{content.email}", "{content.email}" }
                        }
                    }
                    if let Some(uploaded) = uploaded {
                        p { class: "fo-muted", "Uploaded {uploaded}" }
                    }
                }
            }
        }
    }
}

async fn load() -> Result<(PortfolioPage, String), AppError> {
    let services = services()?;
    let page = load_portfolio_page(&services.api).await?;
    let storage = &services.settings.storage;
    let video_url = page.content.video_url(&storage.bucket, &storage.region);
    Ok((page, video_url))
}
