// SPDX-License-Identifier: MPL-2.0
//! Reusable custom widgets shared across the UI.

pub mod animated_spinner;
pub mod input_shield;

pub use animated_spinner::AnimatedSpinner;
pub use input_shield::input_shield;
