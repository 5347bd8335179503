//! "Upload your Box" modal: drop zone plus metadata form.

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use folio_core::PortfolioSubmission;

use crate::components::{Dropzone, FormList};
use crate::error::AppError;
use crate::services::services;

/// Modal overlay holding the upload flow.
///
/// The bucket key reported by the drop zone is attached to the submission;
/// a successful submission closes the modal.
#[component]
pub fn ModalForm(on_close: EventHandler<()>) -> Element {
    let mut file_key = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |submission: PortfolioSubmission| {
        submitting.set(true);

        spawn(async move {
            match submit(&submission).await {
                Ok(()) => {
                    info!("Submitted portfolio \"{}\"", submission.title);
                    on_close.call(());
                }
                Err(e) => error!("Portfolio submission failed: {e}"),
            }
            submitting.set(false);
        });
    };

    rsx! {
        // Modal backdrop
        div {
            class: "fo-modal-backdrop",
            onclick: move |_| on_close.call(()),

            // Clicks inside the dialog must not reach the backdrop
            div {
                class: "fo-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "fo-modal-header",
                    h2 { class: "fo-modal-title", "Upload your Box" }
                    button {
                        class: "fo-modal-close",
                        onclick: move |_| on_close.call(()),
                        "aria-label": "Close upload form",
                        "\u{2715}"
                    }
                }

                div { class: "fo-modal-content",
                    Dropzone { on_key: move |key: String| file_key.set(key) }
                    FormList {
                        file_key: file_key(),
                        busy: submitting(),
                        on_submit: handle_submit,
                    }
                }
            }
        }
    }
}

async fn submit(submission: &PortfolioSubmission) -> Result<(), AppError> {
    services()?.api.submit_portfolio(submission).await?;
    Ok(())
}
