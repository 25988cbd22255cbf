// SPDX-License-Identifier: MPL-2.0
//! Asynchronous image loading.
//!
//! Decoding happens on the blocking thread pool so large files never stall
//! the UI thread. Decoded pixels are converted to RGBA once, here, and the
//! resulting handle is cheap to clone.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Loads and decodes an image file off the UI thread.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`]
/// if decoding fails.
pub async fn load_image(path: PathBuf) -> Result<LoadedImage> {
    tokio::task::spawn_blocking(move || decode_image(&path))
        .await
        .map_err(|e| Error::Io(format!("image decode task failed: {e}")))?
}

fn decode_image(path: &Path) -> Result<LoadedImage> {
    let bytes = std::fs::read(path)?;
    let decoded = image_rs::load_from_memory(&bytes)?;

    let width = decoded.width();
    let height = decoded.height();
    let rgba = decoded.to_rgba8();

    Ok(LoadedImage {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}
