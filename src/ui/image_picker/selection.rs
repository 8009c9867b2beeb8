// SPDX-License-Identifier: MPL-2.0
//! Picked files and the previews leased for them.

use crate::error::{Error, Result};
use iced::widget::image;
use mime_guess::mime;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::AsyncReadExt;

/// Extensions offered by the file dialog filter.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

/// An image file read from disk, ready to preview and upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    pub file_name: String,
    /// Always an `image/*` type.
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

/// Leading bytes read to sniff a file whose extension says nothing.
const SNIFF_LEN: u64 = 64;

/// Returns the `image/*` MIME type of a file, or `None` if it is not an image.
///
/// A known extension decides on its own. Files with an unknown or missing
/// extension are sniffed from their leading bytes.
#[must_use]
pub fn image_mime(path: &Path, bytes: &[u8]) -> Option<String> {
    if let Some(guess) = mime_guess::from_path(path).first() {
        return (guess.type_() == mime::IMAGE).then(|| guess.essence_str().to_owned());
    }
    sniff_mime(bytes)
}

fn sniff_mime(head: &[u8]) -> Option<String> {
    image_rs::guess_format(head)
        .ok()
        .map(|format| format.to_mime_type().to_owned())
        .filter(|mime| mime.starts_with("image/"))
}

async fn read_head(path: &Path) -> Result<Vec<u8>> {
    let file = tokio::fs::File::open(path).await?;
    let mut head = Vec::new();
    file.take(SNIFF_LEN).read_to_end(&mut head).await?;
    Ok(head)
}

/// Reads `path` and keeps it only if it is an image.
///
/// Files whose extension names another media type are rejected before any
/// read. Unknown extensions cost a short header read, never the whole file.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be read, [`Error::UnsupportedMedia`]
/// when it is not an image.
pub async fn load_picked_image(path: PathBuf) -> Result<PickedImage> {
    let unsupported = || Error::UnsupportedMedia(path.display().to_string());

    let mime = match mime_guess::from_path(&path).first() {
        Some(guess) if guess.type_() == mime::IMAGE => guess.essence_str().to_owned(),
        Some(_) => return Err(unsupported()),
        None => sniff_mime(&read_head(&path).await?).ok_or_else(unsupported)?,
    };

    let bytes = tokio::fs::read(&path).await?;
    let file_name = path
        .file_name()
        .map_or_else(|| "image".to_owned(), |name| name.to_string_lossy().into_owned());

    Ok(PickedImage {
        file_name,
        mime,
        bytes: Arc::from(bytes),
    })
}

/// Issues preview leases and counts the ones still alive.
///
/// Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct PreviewLedger {
    live: Arc<AtomicUsize>,
    issued: Arc<AtomicUsize>,
}

impl PreviewLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a display handle for `bytes`. The lease ends when the returned
    /// [`Preview`] is dropped.
    #[must_use]
    pub fn lease(&self, bytes: &Arc<[u8]>) -> Preview {
        let id = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.live.fetch_add(1, Ordering::SeqCst);
        log::trace!("leased preview #{id}");

        Preview {
            id,
            handle: image::Handle::from_bytes(bytes.to_vec()),
            live: Arc::clone(&self.live),
        }
    }

    /// Previews not yet released.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Previews ever leased.
    #[must_use]
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

/// Display handle for one selected image.
#[derive(Debug)]
pub struct Preview {
    id: usize,
    handle: image::Handle,
    live: Arc<AtomicUsize>,
}

impl Preview {
    /// Lease number, starting at 1.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }
}

impl Drop for Preview {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        log::trace!("released preview #{}", self.id);
    }
}

/// The current image: file data plus its preview.
#[derive(Debug)]
pub struct ImageSelection {
    picked: PickedImage,
    preview: Preview,
}

impl ImageSelection {
    #[must_use]
    pub fn new(picked: PickedImage, ledger: &PreviewLedger) -> Self {
        let preview = ledger.lease(&picked.bytes);
        Self { picked, preview }
    }

    #[must_use]
    pub fn picked(&self) -> &PickedImage {
        &self.picked
    }

    #[must_use]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    fn picked(name: &str) -> PickedImage {
        PickedImage {
            file_name: name.into(),
            mime: "image/png".into(),
            bytes: Arc::from(PNG_MAGIC.to_vec()),
        }
    }

    #[test]
    fn known_extensions_decide_mime() {
        assert_eq!(image_mime(Path::new("cat.png"), b""), Some("image/png".into()));
        assert_eq!(image_mime(Path::new("cat.JPG"), b""), Some("image/jpeg".into()));
        assert_eq!(image_mime(Path::new("notes.txt"), PNG_MAGIC), None);
    }

    #[test]
    fn unknown_extension_is_sniffed() {
        assert_eq!(image_mime(Path::new("scan"), PNG_MAGIC), Some("image/png".into()));
        assert_eq!(image_mime(Path::new("scan.zzq"), b"plain text"), None);
    }

    #[test]
    fn dialog_filter_extensions_are_images() {
        for ext in IMAGE_EXTENSIONS {
            let name = format!("file.{ext}");
            assert!(image_mime(Path::new(&name), b"").is_some(), "{ext}");
        }
    }

    #[tokio::test]
    async fn load_keeps_name_and_bytes() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("cat.png");
        fs::write(&path, PNG_MAGIC).expect("write");

        let image = load_picked_image(path).await.expect("image should load");
        assert_eq!(image.file_name, "cat.png");
        assert_eq!(image.mime, "image/png");
        assert_eq!(&*image.bytes, PNG_MAGIC);
    }

    #[tokio::test]
    async fn load_rejects_non_images() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello").expect("write");

        let result = load_picked_image(path).await;
        assert!(matches!(result, Err(Error::UnsupportedMedia(_))));
    }

    #[tokio::test]
    async fn non_image_extension_is_rejected_without_reading() {
        let dir = tempdir().expect("tempdir");
        let result = load_picked_image(dir.path().join("movie.mkv")).await;
        assert!(matches!(result, Err(Error::UnsupportedMedia(_))));
    }

    #[tokio::test]
    async fn unknown_extension_is_sniffed_from_disk() {
        let dir = tempdir().expect("tempdir");
        let image = dir.path().join("scan");
        fs::write(&image, PNG_MAGIC).expect("write");
        let other = dir.path().join("scan.zzq");
        fs::write(&other, "plain text").expect("write");

        let picked = load_picked_image(image).await.expect("sniffed image loads");
        assert_eq!(picked.mime, "image/png");
        assert_eq!(&*picked.bytes, PNG_MAGIC);
        assert!(matches!(
            load_picked_image(other).await,
            Err(Error::UnsupportedMedia(_))
        ));
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let dir = tempdir().expect("tempdir");
        let result = load_picked_image(dir.path().join("gone.png")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn dropping_a_selection_returns_its_lease() {
        let ledger = PreviewLedger::new();
        let first = ImageSelection::new(picked("a.png"), &ledger);
        let second = ImageSelection::new(picked("b.png"), &ledger);
        assert_eq!(ledger.live(), 2);
        assert_eq!(first.preview().id(), 1);
        assert_eq!(second.preview().id(), 2);

        drop(first);
        assert_eq!(ledger.live(), 1);
        drop(second);
        assert_eq!(ledger.live(), 0);
        assert_eq!(ledger.issued(), 2);
    }
}
