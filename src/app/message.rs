// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::ImageItem;
use crate::ui::{gallery, lightbox};
use iced::{window, Size};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    /// Result from the open folder dialog.
    FolderDialogResult(Option<PathBuf>),
    /// Result from async directory scanning.
    DirectoryScanned {
        result: Result<Vec<ImageItem>, Error>,
        /// Image to open in the lightbox once the scan lands (if any).
        open_at: Option<PathBuf>,
    },
    /// A file or folder was dropped on the window.
    FileDropped(PathBuf),
    /// The window was resized while the lightbox is closed.
    WindowResized { window: window::Id, size: Size },
    /// Tears down the lightbox once its close effect has run.
    CloseLightbox,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional folder to browse, or image file to open straight in the
    /// lightbox.
    pub path: Option<PathBuf>,
}
