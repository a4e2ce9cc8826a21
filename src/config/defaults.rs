// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Appearance**: Colours, fonts, border and corner radius
//! - **Placement**: Bottom offset and width estimate
//! - **Layout**: Text padding and insets
//! - **Timing**: Fade duration and flash delay

use iced::Color;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Translucent black toast background.
pub const BACKGROUND_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.6);

pub const TITLE_COLOR: Color = Color::WHITE;

pub const CONTENT_COLOR: Color = Color::WHITE;

pub const BORDER_COLOR: Color = Color::TRANSPARENT;

/// Title font size in points.
pub const TITLE_FONT_SIZE: f32 = 14.0;

/// Body font size in points.
pub const CONTENT_FONT_SIZE: f32 = 12.0;

pub const CORNER_RADIUS: f32 = 8.0;

pub const BORDER_WIDTH: f32 = 1.0;

// ==========================================================================
// Shadow Defaults
// ==========================================================================

/// Alpha of the shadow colour before the shadow opacity is applied.
pub const SHADOW_COLOR_ALPHA: f32 = 0.3;

pub const SHADOW_OPACITY: f32 = 0.8;

pub const SHADOW_OFFSET: f32 = 1.0;

pub const SHADOW_BLUR_RADIUS: f32 = 4.0;

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Gap between the toast and the bottom safe area.
pub const BOTTOM_OFFSET: f32 = 44.0;

/// When no width is configured, the toast takes `surface width / divisor`.
pub const ESTIMATE_WIDTH_DIVISOR: f32 = 4.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Padding unit around and between the text regions.
pub const TEXT_PADDING: f32 = 5.0;

/// Total horizontal inset subtracted from the toast width to get the text width.
pub const HORIZONTAL_INSET: f32 = 20.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Fade-in and fade-out duration in milliseconds.
pub const FADE_DURATION_MS: u64 = 300;

/// Minimum fade duration accepted from the settings file.
pub const MIN_FADE_DURATION_MS: u64 = 0;

/// Maximum fade duration accepted from the settings file.
pub const MAX_FADE_DURATION_MS: u64 = 5_000;

/// Auto-hide delay used by `flash` when none is given, in seconds.
pub const FLASH_DELAY_SECS: f64 = 1.0;
