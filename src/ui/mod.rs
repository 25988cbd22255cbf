// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Thumbnail grid over the scanned folder
//! - [`lightbox`] - Modal image viewer with zoom, pan, slideshow, and
//!   fullscreen
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner, input shield)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and styling helpers

pub mod design_tokens;
pub mod gallery;
pub mod lightbox;
pub mod styles;
pub mod theme;
pub mod widgets;
