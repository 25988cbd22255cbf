// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for user-configurable settings.
//!
//! Interaction constants that are part of the lightbox contract (zoom
//! factor, click threshold, slideshow period) are deliberately not here:
//! they are fixed behavior, not preferences, and live next to the state
//! machine that owns them.

/// Whether the "current/total" position counter is shown in the lightbox.
pub const DEFAULT_SHOW_POSITION_COUNTER: bool = true;
