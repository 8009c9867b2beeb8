// SPDX-License-Identifier: MPL-2.0
//! Image picker: file dialog and drag-and-drop intake.
//!
//! The picker owns the native dialog and the window drop gestures. It reads
//! the chosen file, keeps only images, and hands a [`PickedImage`] to its
//! parent through [`Effect::Selected`]. Previews are the parent's business.

mod selection;
mod state;
mod view;

pub use selection::{
    image_mime, load_picked_image, ImageSelection, PickedImage, Preview, PreviewLedger,
    IMAGE_EXTENSIONS,
};
pub use state::{DropGesture, State, DROP_GESTURE_WINDOW};
pub use view::view;

use crate::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    /// The drop region was clicked.
    OpenRequested,
    /// The native dialog closed, with the chosen path if any.
    DialogClosed(Option<PathBuf>),
    /// A file is being dragged over the window.
    FileHovered,
    /// The drag left the window without dropping.
    HoverLeft,
    FileDropped(PathBuf),
    /// A file finished reading. Carries the number of the load that read it.
    Loaded(u64, Result<PickedImage, Error>),
}

/// What the parent must do after a picker message.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// A readable image was chosen.
    Selected(PickedImage),
}
