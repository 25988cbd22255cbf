// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use iced_lightbox::config::{self, BackdropStyle, Config, GeneralConfig, SortOrder};
use iced_lightbox::error::Error;
use iced_lightbox::gallery::{loader, scan_directory, ImageCollection};
use iced_lightbox::i18n::fluent::I18n;
use iced_lightbox::ui::lightbox::component::ImageLoadState;
use iced_lightbox::ui::lightbox::{self, NavigationDirection};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const VIEWPORT: Size = Size {
    width: 1000.0,
    height: 800.0,
};

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: es
    let spanish_config = Config {
        general: GeneralConfig {
            language: Some("es".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&spanish_config, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_es = I18n::new(None, &loaded);
    assert_eq!(i18n_es.tr("lightbox-loading"), "Cargando…");

    // 2. Change config to en-US
    let english_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english_config, &config_path).expect("Failed to write english config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.tr("lightbox-loading"), "Loading…");

    // 3. CLI override beats the config file
    let i18n_cli = I18n::new(Some("es".to_string()), &loaded);
    assert_eq!(i18n_cli.tr("lightbox-loading"), "Cargando…");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn config_round_trip_preserves_choices() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.gallery.sort_order = Some(SortOrder::ModifiedDate);
    config.lightbox.backdrop = Some(BackdropStyle::Black);
    config.lightbox.show_position_counter = Some(false);

    config::save_to_path(&config, &config_path).expect("Failed to save config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(loaded, config);
    assert_eq!(loaded.sort_order(), SortOrder::ModifiedDate);
    assert_eq!(loaded.backdrop(), BackdropStyle::Black);
    assert!(!loaded.show_position_counter());
}

#[test]
fn malformed_config_degrades_to_defaults_with_a_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "sort_order = [broken").expect("write file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn absent_config_is_silently_default() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_none());
}

#[test]
fn scan_keeps_only_supported_images_sorted_by_name() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["photo_b.PNG", "photo_a.jpg", "notes.txt", "archive.zip"] {
        fs::write(dir.path().join(name), b"x").expect("write file");
    }
    // A directory named like an image must not be picked up
    fs::create_dir(dir.path().join("nested.png")).expect("create dir");

    let items = scan_directory(dir.path(), SortOrder::Alphabetical).expect("scan");

    let names: Vec<String> = items.iter().map(|item| item.file_name()).collect();
    assert_eq!(names, ["photo_a.jpg", "photo_b.PNG"]);
    assert_eq!(items[0].alt_text.as_deref(), Some("photo a"));
}

#[test]
fn scan_by_modified_date_orders_oldest_first() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("z_first.png"), b"x").expect("write file");
    std::thread::sleep(Duration::from_millis(25));
    fs::write(dir.path().join("a_second.png"), b"x").expect("write file");

    let by_date = scan_directory(dir.path(), SortOrder::ModifiedDate).expect("scan");
    let by_name = scan_directory(dir.path(), SortOrder::Alphabetical).expect("scan");

    let names: Vec<String> = by_date.iter().map(|item| item.file_name()).collect();
    assert_eq!(names, ["z_first.png", "a_second.png"]);
    let names: Vec<String> = by_name.iter().map(|item| item.file_name()).collect();
    assert_eq!(names, ["a_second.png", "z_first.png"]);
}

#[test]
fn scan_of_a_missing_directory_fails() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let result = scan_directory(&dir.path().join("absent"), SortOrder::Alphabetical);

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn lightbox_session_over_a_scanned_folder() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["a.png", "b.png", "c.png"] {
        fs::write(dir.path().join(name), b"x").expect("write file");
    }

    let items = scan_directory(dir.path(), SortOrder::Alphabetical).expect("scan");
    let collection = ImageCollection::new(items).expect("non-empty collection");

    // 1. Open on the second image
    let (mut state, _task) = lightbox::State::new(collection, 1, VIEWPORT);
    let now = Instant::now();
    assert_eq!(state.position(), (1, 3));

    // 2. Navigation wraps past the end
    let next = lightbox::Message::NavigatePressed(NavigationDirection::Next);
    let (effect, _task) = state.handle_message(next.clone(), now);
    assert_eq!(effect, lightbox::Effect::None);
    assert_eq!(state.position(), (2, 3));

    let (_effect, _task) = state.handle_message(next, now + Duration::from_millis(50));
    assert_eq!(state.position(), (0, 3));

    // 3. Closing fires exactly once
    let (effect, _task) =
        state.handle_message(lightbox::Message::ClosePressed, now + Duration::from_millis(100));
    assert_eq!(effect, lightbox::Effect::Close);

    let (effect, _task) =
        state.handle_message(lightbox::Message::ClosePressed, now + Duration::from_millis(150));
    assert_eq!(effect, lightbox::Effect::None);
}

#[tokio::test]
async fn decoded_image_flows_back_into_the_session() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("tiny.png");
    image_rs::RgbaImage::from_pixel(4, 3, image_rs::Rgba([200, 10, 10, 255]))
        .save(&path)
        .expect("write test png");

    let items = scan_directory(dir.path(), SortOrder::Alphabetical).expect("scan");
    let collection = ImageCollection::new(items).expect("non-empty collection");
    let (mut state, _task) = lightbox::State::new(collection, 0, VIEWPORT);

    // The task returned by `new` is inert outside the runtime, so decode
    // explicitly and feed the result back the way the runtime would.
    let result = loader::load_image(path).await;
    let (_effect, _task) = state.handle_message(
        lightbox::Message::ImageLoaded { index: 0, result },
        Instant::now(),
    );

    match state.image_state() {
        ImageLoadState::Ready(image) => assert_eq!((image.width, image.height), (4, 3)),
        other => panic!("expected a decoded image, got {other:?}"),
    }
}
