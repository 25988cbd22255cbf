// SPDX-License-Identifier: MPL-2.0
//! Modal image viewer laid over the gallery grid.
//!
//! The lightbox owns its collection snapshot and index, loads images
//! asynchronously, and handles navigation, zoom, pan, slideshow, and
//! fullscreen through [`component::State`]. Rendering lives in [`pane`];
//! the small geometry/animation helpers have their own modules.

pub mod component;
pub mod drag;
pub mod geometry;
pub mod pan;
pub mod pane;
pub mod transition;

pub use component::{Effect, Message, NavigationDirection, State};
