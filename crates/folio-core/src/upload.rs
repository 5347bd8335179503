//! Upload targets, bucket keys and the object-store seam.
//!
//! A dropped file becomes an [`UploadTarget`] once its MIME type passes the
//! drop-zone filter. Its bucket key is derived from the file name alone:
//!
//! ```text
//! key = hex(sha256(file_name)) + "." + mime_subtype
//! ```
//!
//! so the same file name always lands on the same object (last write wins).
//!
//! The transfer itself goes through the [`ObjectStore`] trait. The app and
//! CLI use [`S3ObjectStore`](crate::s3::S3ObjectStore); tests use
//! [`MemoryObjectStore`].

use std::collections::HashMap;
use std::sync::Mutex;

use futures::channel::mpsc::{self, UnboundedSender};
use futures::{FutureExt, StreamExt};
use sha2::{Digest, Sha256};
use tracing::{error, info};

use crate::config::{ACCEPTED_VIDEO_TYPES, PUBLIC_READ_ACL, UPLOAD_CHUNK_BYTES};
use crate::error::UploadError;
use crate::progress::{ProgressTracker, TransferProgress};

/// Channel the store reports byte counts on. Dropping it ends the stream.
pub type ProgressSender = UnboundedSender<TransferProgress>;

/// Whether the drop zone accepts `content_type`.
pub fn is_accepted(content_type: &str) -> bool {
    ACCEPTED_VIDEO_TYPES.contains(&content_type)
}

/// Extension appended to the key: the MIME subtype (`video/mp4` → `mp4`).
pub fn extension_for(content_type: &str) -> &str {
    content_type
        .split_once('/')
        .map(|(_, subtype)| subtype)
        .unwrap_or(content_type)
}

/// Maps a file extension back to an accepted MIME type.
///
/// Used where no browser reports a type for us (CLI, desktop file dialogs).
pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    let extension = extension.to_ascii_lowercase();
    ACCEPTED_VIDEO_TYPES
        .into_iter()
        .find(|mime| extension_for(mime) == extension)
}

/// Bucket key for a file: `hex(sha256(file_name)).subtype`.
pub fn object_key(file_name: &str, content_type: &str) -> String {
    let digest = Sha256::digest(file_name.as_bytes());
    format!("{}.{}", hex::encode(digest), extension_for(content_type))
}

/// A file that passed the drop-zone filter, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub key: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadTarget {
    /// Builds a target from a dropped file, rejecting non-video types.
    pub fn from_file(
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Self, UploadError> {
        if !is_accepted(content_type) {
            return Err(UploadError::UnsupportedType(format!(
                "{file_name} ({content_type})"
            )));
        }

        Ok(Self {
            key: object_key(file_name, content_type),
            content_type: content_type.to_string(),
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Parameters of a single `PutObject` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObjectRequest {
    pub acl: String,
    pub body: Vec<u8>,
    pub bucket: String,
    pub key: String,
    pub content_type: String,
}

impl PutObjectRequest {
    /// Public-read request for `target` in `bucket`.
    pub fn public_read(bucket: &str, target: UploadTarget) -> Self {
        Self {
            acl: PUBLIC_READ_ACL.to_string(),
            body: target.bytes,
            bucket: bucket.to_string(),
            key: target.key,
            content_type: target.content_type,
        }
    }
}

/// Destination for uploaded objects.
///
/// Implementations report progress on `progress` while the body is being
/// sent and must drop the sender when the transfer ends.
#[async_trait::async_trait(?Send)]
pub trait ObjectStore {
    async fn put_object(
        &self,
        request: PutObjectRequest,
        progress: ProgressSender,
    ) -> Result<(), UploadError>;
}

/// Outcome of a finished upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub key: String,
    pub size: u64,
}

/// Stores `target` in `bucket`, forwarding percentages to `on_progress`.
///
/// `on_progress` receives 0 first, then one value per progress event, then
/// 100 on success. A failed transfer is logged and returned; the percentage
/// stays wherever it was.
pub async fn upload_to_bucket<S, F>(
    store: &S,
    bucket: &str,
    target: UploadTarget,
    mut on_progress: F,
) -> Result<UploadReceipt, UploadError>
where
    S: ObjectStore + ?Sized,
    F: FnMut(u8),
{
    let key = target.key.clone();
    let size = target.size();

    let mut tracker = ProgressTracker::new();
    tracker.start(size);
    on_progress(tracker.percentage());

    let (sender, mut receiver) = mpsc::unbounded();
    let transfer = store
        .put_object(PutObjectRequest::public_read(bucket, target), sender)
        .fuse();
    futures::pin_mut!(transfer);

    // The transport may hold the sender past completion, so the transfer
    // future, not the channel, decides when we stop listening.
    let result = loop {
        futures::select! {
            event = receiver.next() => {
                if let Some(event) = event {
                    on_progress(tracker.record(event));
                }
            }
            result = transfer => break result,
        }
    };
    while let Ok(event) = receiver.try_recv() {
        on_progress(tracker.record(event));
    }

    match result {
        Ok(()) => {
            tracker.complete();
            on_progress(tracker.percentage());
            info!("Uploaded {key} ({size} bytes) to {bucket}");
            Ok(UploadReceipt { key, size })
        }
        Err(e) => {
            tracker.abandon();
            error!("Upload of {key} failed at {}%: {e}", tracker.percentage());
            Err(e)
        }
    }
}

/// An object held by [`MemoryObjectStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub acl: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// In-process object store.
///
/// Emits one progress event per [`UPLOAD_CHUNK_BYTES`] slice of the body, the
/// same cadence the S3 client uses on native targets.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    failure: Option<String>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every transfer fails halfway with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            failure: Some(message.into()),
        }
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .ok()?
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|objects| objects.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait(?Send)]
impl ObjectStore for MemoryObjectStore {
    async fn put_object(
        &self,
        request: PutObjectRequest,
        progress: ProgressSender,
    ) -> Result<(), UploadError> {
        let total = request.body.len() as u64;
        let mut loaded = 0u64;

        for chunk in request.body.chunks(UPLOAD_CHUNK_BYTES) {
            loaded += chunk.len() as u64;
            if let Some(message) = &self.failure {
                if loaded * 2 > total {
                    return Err(UploadError::Transfer(message.clone()));
                }
            }
            let _ = progress.unbounded_send(TransferProgress::new(loaded, total));
        }

        let mut objects = self
            .objects
            .lock()
            .map_err(|e| UploadError::Transfer(format!("Store lock poisoned: {e}")))?;
        objects.insert(
            (request.bucket, request.key),
            StoredObject {
                acl: request.acl,
                content_type: request.content_type,
                body: request.body,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_sha256_of_name() {
        // sha256("abc")
        assert_eq!(
            object_key("abc", "video/mp4"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad.mp4"
        );
    }

    #[test]
    fn test_key_is_deterministic() {
        assert_eq!(
            object_key("reel.mp4", "video/mp4"),
            object_key("reel.mp4", "video/mp4")
        );
        assert_ne!(
            object_key("reel.mp4", "video/mp4"),
            object_key("reel2.mp4", "video/mp4")
        );
    }

    #[test]
    fn test_extension_uses_mime_subtype() {
        assert_eq!(extension_for("video/webm"), "webm");
        assert_eq!(extension_for("video/mov"), "mov");
        assert_eq!(extension_for("plain"), "plain");
    }

    #[test]
    fn test_content_type_for_extension() {
        assert_eq!(content_type_for_extension("MP4"), Some("video/mp4"));
        assert_eq!(content_type_for_extension("avi"), Some("video/avi"));
        assert_eq!(content_type_for_extension("mkv"), None);
    }

    #[test]
    fn test_target_rejects_non_video() {
        let result = UploadTarget::from_file("notes.txt", "text/plain", b"hi".to_vec());
        assert!(matches!(result, Err(UploadError::UnsupportedType(_))));

        // Standard but unlisted video types are rejected too
        let result = UploadTarget::from_file("clip.mov", "video/quicktime", vec![0; 4]);
        assert!(matches!(result, Err(UploadError::UnsupportedType(_))));
    }

    #[test]
    fn test_target_accepts_listed_types() {
        for mime in ACCEPTED_VIDEO_TYPES {
            let target = UploadTarget::from_file("clip", mime, vec![1, 2, 3]).unwrap();
            assert_eq!(target.content_type, mime);
            assert!(target.key.ends_with(extension_for(mime)));
            assert_eq!(target.size(), 3);
        }
    }

    #[test]
    fn test_public_read_request() {
        let target = UploadTarget::from_file("clip", "video/mp4", vec![9]).unwrap();
        let key = target.key.clone();
        let request = PutObjectRequest::public_read("bucket", target);
        assert_eq!(request.acl, "public-read");
        assert_eq!(request.bucket, "bucket");
        assert_eq!(request.key, key);
        assert_eq!(request.body, vec![9]);
    }
}
