// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a folder-based image gallery with a modal lightbox,
//! built with the Iced GUI framework.
//!
//! The gallery screen shows a thumbnail grid of a chosen folder; pressing a
//! thumbnail opens the lightbox over it for full-size viewing, zooming,
//! panning, and a simple slideshow. Localization uses Fluent, preferences a
//! small TOML file.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
