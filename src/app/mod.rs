// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! lightbox.
//!
//! The `App` struct wires together the domains (gallery content, lightbox
//! component, localization, settings) and translates component effects into
//! window side effects. This module keeps policy decisions (window sizing,
//! what happens on a dropped path, how the lightbox is torn down) close to
//! the main update loop so it is easy to audit user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::lightbox;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the gallery, the lightbox, and
/// localization.
pub struct App {
    pub i18n: I18n,
    config: Config,
    gallery: gallery::Content,
    lightbox: Option<lightbox::State>,
    window_id: Option<window::Id>,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("lightbox_open", &self.lightbox.is_some())
            .field("window_size", &self.window_size)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            gallery: gallery::Content::Idle,
            lightbox: None,
            window_id: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off the startup
    /// directory scan based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        // A degraded config load is reported on stderr in the user's language.
        if let Some(key) = config_warning {
            eprintln!("{}", i18n.tr(&key));
        }

        let app = App {
            i18n,
            config,
            ..Self::default()
        };

        let task = match flags.path {
            Some(path) => update::open_path_task(app.config.sort_order(), path),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        if let Some(item) = self.lightbox.as_ref().and_then(lightbox::State::current_item) {
            let name = item.alt_text.clone().unwrap_or_else(|| item.file_name());
            return format!("{name} - {app_name}");
        }

        app_name
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &self.config,
            gallery: &mut self.gallery,
            lightbox: &mut self.lightbox,
            window_id: &mut self.window_id,
            window_size: &mut self.window_size,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::FolderDialogResult(path) => {
                update::handle_folder_dialog_result(&mut ctx, path)
            }
            Message::DirectoryScanned { result, open_at } => {
                update::handle_directory_scanned(&mut ctx, result, open_at)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::WindowResized { window, size } => {
                *ctx.window_id = Some(window);
                *ctx.window_size = size;
                Task::none()
            }
            Message::CloseLightbox => {
                *ctx.lightbox = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            gallery: &self.gallery,
            lightbox: self.lightbox.as_ref(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.lightbox.is_some());
        let lightbox_sub = match &self.lightbox {
            Some(state) => state.subscription().map(Message::Lightbox),
            None => Subscription::none(),
        };

        Subscription::batch([event_sub, lightbox_sub])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gallery::{ImageCollection, ImageItem};
    use crate::ui::gallery::Content;
    use std::path::PathBuf;

    fn collection_of(names: &[&str]) -> ImageCollection {
        let items = names
            .iter()
            .map(|name| ImageItem::from_path(PathBuf::from(format!("/pics/{name}"))))
            .collect();
        ImageCollection::new(items).expect("non-empty collection")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dynamic window title
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn title_shows_app_name_without_lightbox() {
        let app = App::default();

        assert_eq!(app.title(), "Iced Lightbox");
    }

    #[test]
    fn title_shows_image_name_in_lightbox() {
        let mut app = App::default();
        app.gallery = Content::Grid(collection_of(&["sunset-beach.png", "b.png"]));

        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(0)));

        assert_eq!(app.title(), "sunset beach - Iced Lightbox");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Update flow
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn thumbnail_press_opens_the_lightbox_at_that_image() {
        let mut app = App::default();
        app.gallery = Content::Grid(collection_of(&["a.png", "b.png", "c.png"]));

        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(2)));

        let lightbox = app.lightbox.as_ref().expect("lightbox open");
        assert_eq!(lightbox.position(), (2, 3));
    }

    #[test]
    fn thumbnail_press_without_a_grid_is_ignored() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(0)));

        assert!(app.lightbox.is_none());
    }

    #[test]
    fn scan_result_builds_the_grid() {
        let mut app = App::default();

        let _ = app.update(Message::DirectoryScanned {
            result: Ok(vec![ImageItem::from_path(PathBuf::from("/pics/a.png"))]),
            open_at: None,
        });

        assert!(matches!(app.gallery, Content::Grid(_)));
        assert!(app.lightbox.is_none());
    }

    #[test]
    fn empty_scan_shows_the_empty_notice() {
        let mut app = App::default();

        let _ = app.update(Message::DirectoryScanned {
            result: Ok(Vec::new()),
            open_at: None,
        });

        assert!(matches!(app.gallery, Content::EmptyFolder));
    }

    #[test]
    fn failed_scan_shows_the_error() {
        let mut app = App::default();

        let _ = app.update(Message::DirectoryScanned {
            result: Err(Error::Io("permission denied".into())),
            open_at: None,
        });

        match &app.gallery {
            Content::ScanFailed(reason) => assert!(reason.contains("permission denied")),
            other => panic!("expected scan failure, got {other:?}"),
        }
    }

    #[test]
    fn scan_started_for_a_file_opens_its_lightbox() {
        let mut app = App::default();
        let items = vec![
            ImageItem::from_path(PathBuf::from("/pics/a.png")),
            ImageItem::from_path(PathBuf::from("/pics/b.png")),
        ];

        let _ = app.update(Message::DirectoryScanned {
            result: Ok(items),
            open_at: Some(PathBuf::from("/pics/b.png")),
        });

        assert!(matches!(app.gallery, Content::Grid(_)));
        let lightbox = app.lightbox.as_ref().expect("lightbox open");
        assert_eq!(lightbox.position(), (1, 2));
    }

    #[test]
    fn close_message_drops_the_lightbox() {
        let mut app = App::default();
        app.gallery = Content::Grid(collection_of(&["a.png"]));
        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(0)));
        assert!(app.lightbox.is_some());

        let _ = app.update(Message::CloseLightbox);

        assert!(app.lightbox.is_none());
    }

    #[test]
    fn window_resize_updates_the_stored_size() {
        let mut app = App::default();

        let _ = app.update(Message::WindowResized {
            window: window::Id::unique(),
            size: Size::new(1440.0, 900.0),
        });

        assert_eq!(app.window_size, Size::new(1440.0, 900.0));
        assert!(app.window_id.is_some());
    }
}
