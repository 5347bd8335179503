//! Video drop zone.
//!
//! Takes the first file dropped (or picked), checks its type, hands the
//! bucket key to the parent and uploads the bytes straight to S3 while
//! showing the percentage. Upload failures are logged only.

use dioxus::logger::tracing::{info, warn};
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use folio_core::config::ACCEPTED_VIDEO_TYPES;
use folio_core::upload::{content_type_for_extension, is_accepted};
use folio_core::{upload_to_bucket, UploadTarget};

use crate::error::AppError;
use crate::services::services;
use crate::utils::format_bytes;

/// What the zone shows while something is dragged over it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Accept,
    Reject,
}

impl DragState {
    /// State for a drag whose first file reports `content_type`.
    ///
    /// Browsers usually withhold the type until the drop, so an unknown
    /// type reads as acceptable.
    pub fn for_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(content_type) if !is_accepted(content_type) => DragState::Reject,
            _ => DragState::Accept,
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            DragState::Idle => "File Upload",
            DragState::Accept => "You can upload!",
            DragState::Reject => "File type is not allowed",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            DragState::Idle | DragState::Accept => "Drop files here.",
            DragState::Reject => "Please upload another file.",
        }
    }

    fn class(self) -> &'static str {
        match self {
            DragState::Idle => "fo-dropzone",
            DragState::Accept => "fo-dropzone fo-dropzone--accept",
            DragState::Reject => "fo-dropzone fo-dropzone--reject",
        }
    }
}

/// Nesting depth of an in-progress drag.
///
/// `dragenter` and `dragleave` also fire for the zone's children, so the
/// zone is only left once every enter has been matched by a leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragDepth(u32);

impl DragDepth {
    pub fn enter(&mut self) {
        self.0 += 1;
    }

    /// Returns true when the pointer has left the zone itself.
    pub fn leave(&mut self) -> bool {
        self.0 = self.0.saturating_sub(1);
        self.0 == 0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// MIME type for a picked file: the reported one, or one derived from the
/// extension when the platform reports nothing.
pub fn resolve_content_type(file_name: &str, reported: Option<String>) -> String {
    match reported.filter(|t| !t.is_empty()) {
        Some(content_type) => content_type,
        None => file_name
            .rsplit_once('.')
            .and_then(|(_, ext)| content_type_for_extension(ext))
            .unwrap_or("application/octet-stream")
            .to_string(),
    }
}

#[component]
pub fn Dropzone(on_key: EventHandler<String>) -> Element {
    let mut drag_state = use_signal(DragState::default);
    let mut drag_depth = use_signal(DragDepth::default);
    let progress = use_signal(|| 0u8);
    let mut selected = use_signal(|| None::<(String, u64)>);

    let mut take_first = move |files: Vec<FileData>| {
        let Some(file) = files.into_iter().next() else {
            drag_state.set(DragState::Idle);
            return;
        };

        spawn(async move {
            let name = file.name();
            let content_type = resolve_content_type(&name, file.content_type());

            if !is_accepted(&content_type) {
                warn!("Rejected {name}: {content_type} is not an accepted video type");
                drag_state.set(DragState::Reject);
                return;
            }

            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    warn!("{}", AppError::FileRead(format!("{name}: {e}")));
                    drag_state.set(DragState::Idle);
                    return;
                }
            };

            match UploadTarget::from_file(&name, &content_type, bytes) {
                Ok(target) => {
                    selected.set(Some((name, target.size())));
                    drag_state.set(DragState::Accept);
                    on_key.call(target.key.clone());
                    upload(target, progress).await;
                }
                Err(e) => {
                    warn!("{e}");
                    drag_state.set(DragState::Reject);
                }
            }
        });
    };

    let state = drag_state();
    let accept = ACCEPTED_VIDEO_TYPES.join(",");

    rsx! {
        div {
            class: state.class(),
            ondragenter: move |evt: DragEvent| {
                evt.prevent_default();
                drag_depth.write().enter();
                let first = evt.files().first().and_then(|f| f.content_type());
                drag_state.set(DragState::for_type(first.as_deref()));
            },
            ondragover: move |evt: DragEvent| evt.prevent_default(),
            ondragleave: move |_| {
                if drag_depth.write().leave() {
                    drag_state.set(DragState::Idle);
                }
            },
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                drag_depth.write().reset();
                take_first(evt.files());
            },

            input {
                id: "fo-file-input",
                r#type: "file",
                class: "fo-hidden-input",
                accept: "{accept}",
                onchange: move |evt: FormEvent| take_first(evt.files()),
            }

            label { r#for: "fo-file-input", class: "fo-dropzone-body",
                div { class: "fo-dropzone-icon", "🎬" }
                div { class: "fo-dropzone-title", "{state.headline()}" }
                div { class: "fo-dropzone-subtitle", "{state.hint()}" }
                if let Some((name, size)) = selected() {
                    div { class: "fo-dropzone-file", "{name} · {format_bytes(size)}" }
                }
                div { class: "fo-progress",
                    div {
                        class: "fo-progress-bar",
                        style: "width: {progress()}%",
                    }
                }
                div { class: "fo-progress-label", "{progress()}%" }
            }
        }
    }
}

async fn upload(target: UploadTarget, mut progress: Signal<u8>) {
    let services = match services() {
        Ok(services) => services,
        Err(e) => {
            warn!("Upload skipped: {e}");
            return;
        }
    };

    progress.set(0);
    let bucket = &services.settings.storage.bucket;
    // Failures are logged inside upload_to_bucket; the bar keeps its value.
    if let Ok(receipt) =
        upload_to_bucket(&services.store, bucket, target, |p| progress.set(p)).await
    {
        info!("Video stored as {} ({})", receipt.key, format_bytes(receipt.size));
    }
}
