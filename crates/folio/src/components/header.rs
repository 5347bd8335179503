use dioxus::prelude::*;

/// Top bar with the app title and the button that opens the upload modal.
#[component]
pub fn Header(on_upload: EventHandler<()>) -> Element {
    rsx! {
        header { class: "fo-header",
            div { class: "fo-header-brand",
                span { class: "fo-header-logo", "▣" }
                h1 { class: "fo-header-title", "Folio" }
            }
            button {
                class: "fo-btn fo-btn--primary",
                onclick: move |_| on_upload.call(()),
                "Upload"
            }
        }
    }
}
