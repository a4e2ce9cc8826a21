// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded toast message (tap or tick).
    Toast(toast::Message),
    ShowPressed,
    FlashPressed,
    LongTextPressed,
    HidePressed,
    WindowResized(Size),
    Tick(Instant), // Periodic tick for fades and auto-hide
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Directory holding `settings.toml`, overriding the platform default.
    pub config_dir: Option<String>,
}
