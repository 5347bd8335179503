//! UI components for the Folio application.
//!
//! - [`Header`]: title bar with the Upload button
//! - [`PortfolioView`]: the portfolio page, loaded once on mount
//! - [`ModalForm`]: "Upload your Box" modal composing [`Dropzone`] and [`FormList`]
//!
//! Components reach the backend and the bucket through
//! [`services`](crate::services::services), which builds both clients once
//! per process.

mod dropzone;
mod form_list;
mod header;
mod modal_form;
mod portfolio_view;

pub use dropzone::{resolve_content_type, DragState, Dropzone};
pub use form_list::FormList;
pub use header::Header;
pub use modal_form::ModalForm;
pub use portfolio_view::{PageStatus, PortfolioView};

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::services::services;

/// Whether the upload modal is shown.
pub fn use_modal_open() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

#[component]
pub fn App() -> Element {
    let modal_open = use_signal(|| false);
    use_context_provider(|| modal_open);

    // Configuration errors surface here, at startup.
    use_effect(|| {
        if let Err(e) = services() {
            warn!("Services unavailable: {e}");
        }
    });

    rsx! {
        div { class: "fo-app",
            AppHeader {}
            main { class: "fo-main",
                PortfolioView {}
            }
            UploadModal {}
        }
    }
}

#[component]
fn AppHeader() -> Element {
    let mut modal_open = use_modal_open();
    rsx! {
        Header { on_upload: move |_| modal_open.set(true) }
    }
}

#[component]
fn UploadModal() -> Element {
    let mut modal_open = use_modal_open();
    rsx! {
        if modal_open() {
            ModalForm { on_close: move |_| modal_open.set(false) }
        }
    }
}
