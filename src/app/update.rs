// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! `App::update` builds an [`UpdateContext`] over its state and dispatches
//! here. The handlers own the side effects the lightbox component only
//! requests: window mode changes, dialogs, directory scans.

use super::Message;
use crate::config::{Config, SortOrder};
use crate::error::Error;
use crate::gallery::{scan_directory, ImageCollection, ImageItem};
use crate::ui::gallery;
use crate::ui::lightbox;
use iced::{event, window, Size, Task};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Mutable application state threaded through the message handlers.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub gallery: &'a mut gallery::Content,
    pub lightbox: &'a mut Option<lightbox::State>,
    pub window_id: &'a mut Option<window::Id>,
    pub window_size: &'a mut Size,
}

/// Handles gallery screen messages.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::OpenFolderRequested => open_folder_dialog(),
        gallery::Message::ThumbnailPressed(index) => {
            let gallery::Content::Grid(collection) = &*ctx.gallery else {
                return Task::none();
            };

            let (state, task) = lightbox::State::new(collection.clone(), index, *ctx.window_size);
            *ctx.lightbox = Some(state);
            task.map(Message::Lightbox)
        }
    }
}

/// Handles lightbox component messages, peeking at raw events for the
/// window bookkeeping the component cannot do itself.
pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    if let lightbox::Message::RawEvent { window, event } = &message {
        *ctx.window_id = Some(*window);
        if let event::Event::Window(window::Event::Resized(size)) = event {
            *ctx.window_size = *size;
        }
    }

    let Some(state) = ctx.lightbox.as_mut() else {
        return Task::none();
    };

    let (effect, task) = state.handle_message(message, Instant::now());
    let effect_task = match effect {
        lightbox::Effect::None => Task::none(),
        lightbox::Effect::SetFullscreen(fullscreen) => {
            set_fullscreen(ctx.window_id, fullscreen)
        }
        lightbox::Effect::Close => close_lightbox(ctx.window_id, state.is_fullscreen()),
    };

    Task::batch([task.map(Message::Lightbox), effect_task])
}

/// Handles the folder choice coming back from the native dialog.
pub fn handle_folder_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    match path {
        Some(directory) => scan_directory_task(ctx.config.sort_order(), directory, None),
        None => Task::none(),
    }
}

/// Handles a finished directory scan.
pub fn handle_directory_scanned(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<ImageItem>, Error>,
    open_at: Option<PathBuf>,
) -> Task<Message> {
    let items = match result {
        Ok(items) => items,
        Err(error) => {
            *ctx.gallery = gallery::Content::ScanFailed(error.to_string());
            return Task::none();
        }
    };

    let Some(collection) = ImageCollection::new(items) else {
        *ctx.gallery = gallery::Content::EmptyFolder;
        return Task::none();
    };

    *ctx.gallery = gallery::Content::Grid(collection.clone());

    // A scan started for a file jumps straight into the lightbox on it.
    let Some(index) = open_at.and_then(|path| collection.position_of(&path)) else {
        return Task::none();
    };

    let (state, task) = lightbox::State::new(collection, index, *ctx.window_size);
    *ctx.lightbox = Some(state);
    task.map(Message::Lightbox)
}

/// Handles a file or folder dropped on the window.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    open_path_task(ctx.config.sort_order(), path)
}

/// Builds the scan task for a dropped or CLI-supplied path. A directory is
/// scanned as-is; for a file the parent is scanned and the file becomes the
/// lightbox target.
pub fn open_path_task(sort_order: SortOrder, path: PathBuf) -> Task<Message> {
    if path.is_dir() {
        scan_directory_task(sort_order, path, None)
    } else if let Some(parent) = path.parent().map(Path::to_path_buf) {
        scan_directory_task(sort_order, parent, Some(path))
    } else {
        Task::none()
    }
}

/// Scans `directory` on the blocking pool, remembering which image to open
/// once the scan lands.
fn scan_directory_task(
    sort_order: SortOrder,
    directory: PathBuf,
    open_at: Option<PathBuf>,
) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || scan_directory(&directory, sort_order))
                .await
                .map_err(|e| Error::Io(format!("directory scan task failed: {e}")))?
        },
        move |result| Message::DirectoryScanned {
            result,
            open_at: open_at.clone(),
        },
    )
}

/// Opens the native folder picker off the UI thread.
fn open_folder_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FolderDialogResult,
    )
}

/// Applies a fullscreen change and reports back the mode that actually took
/// effect, so component state follows the window instead of assuming.
fn set_fullscreen(window_id: &Option<window::Id>, fullscreen: bool) -> Task<Message> {
    let Some(id) = *window_id else {
        return Task::none();
    };

    let mode = if fullscreen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };

    window::set_mode(id, mode).chain(window::mode(id).map(|mode| {
        Message::Lightbox(lightbox::Message::FullscreenChanged(
            mode == window::Mode::Fullscreen,
        ))
    }))
}

/// Leaves fullscreen if needed, then asks the shell to drop the lightbox.
fn close_lightbox(window_id: &Option<window::Id>, fullscreen: bool) -> Task<Message> {
    let teardown = Task::done(Message::CloseLightbox);

    if !fullscreen {
        return teardown;
    }

    let Some(id) = *window_id else {
        return teardown;
    };

    window::set_mode(id, window::Mode::Windowed).chain(teardown)
}
