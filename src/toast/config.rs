// SPDX-License-Identifier: MPL-2.0
//! Appearance and content records for a single toast.
//!
//! [`ToastUIConfig`] holds the visual knobs (colours, fonts, border, shadow,
//! placement) and is usually shared across many toasts. [`ToastContentConfig`]
//! holds the text of one toast and is owned by the view built from it.

use super::surface::SurfaceMetrics;
use crate::config::defaults;
use iced::{Color, Font};

/// A font face paired with its point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastFont {
    pub font: Font,
    pub size: f32,
}

impl ToastFont {
    /// Creates a font spec using the default font face.
    #[must_use]
    pub fn sized(size: f32) -> Self {
        Self {
            font: Font::DEFAULT,
            size,
        }
    }
}

/// Visual and placement options for a toast.
///
/// `estimate_width` is advisory: layout may widen the toast when its text
/// would not fit comfortably (see [`crate::toast::layout`]). When unset, a
/// quarter of the surface width is used.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastUIConfig {
    pub background_color: Color,
    pub title_color: Color,
    pub title_font: ToastFont,
    pub content_color: Color,
    pub content_font: ToastFont,
    pub corner_radius: f32,
    pub border_width: f32,
    pub border_color: Color,
    /// Distance between the toast's bottom edge and the bottom safe area.
    pub bottom_offset: f32,
    pub estimate_width: Option<f32>,
    pub tap_to_dismiss: bool,
    pub shadow_enabled: bool,
}

impl Default for ToastUIConfig {
    fn default() -> Self {
        Self {
            background_color: defaults::BACKGROUND_COLOR,
            title_color: defaults::TITLE_COLOR,
            title_font: ToastFont::sized(defaults::TITLE_FONT_SIZE),
            content_color: defaults::CONTENT_COLOR,
            content_font: ToastFont::sized(defaults::CONTENT_FONT_SIZE),
            corner_radius: defaults::CORNER_RADIUS,
            border_width: defaults::BORDER_WIDTH,
            border_color: defaults::BORDER_COLOR,
            bottom_offset: defaults::BOTTOM_OFFSET,
            estimate_width: None,
            tap_to_dismiss: true,
            shadow_enabled: true,
        }
    }
}

impl ToastUIConfig {
    /// Returns the configured width, or a quarter of the surface width when unset.
    #[must_use]
    pub fn resolved_estimate_width(&self, surface: &SurfaceMetrics) -> f32 {
        self.estimate_width
            .unwrap_or(surface.size.width / defaults::ESTIMATE_WIDTH_DIVISOR)
    }

    #[must_use]
    pub fn with_estimate_width(mut self, width: f32) -> Self {
        self.estimate_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_title_style(mut self, color: Color, font: ToastFont) -> Self {
        self.title_color = color;
        self.title_font = font;
        self
    }

    #[must_use]
    pub fn with_content_style(mut self, color: Color, font: ToastFont) -> Self {
        self.content_color = color;
        self.content_font = font;
        self
    }

    #[must_use]
    pub fn with_border(mut self, width: f32, color: Color) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    #[must_use]
    pub fn with_bottom_offset(mut self, offset: f32) -> Self {
        self.bottom_offset = offset;
        self
    }

    #[must_use]
    pub fn with_tap_to_dismiss(mut self, enabled: bool) -> Self {
        self.tap_to_dismiss = enabled;
        self
    }

    #[must_use]
    pub fn with_shadow(mut self, enabled: bool) -> Self {
        self.shadow_enabled = enabled;
        self
    }
}

/// The text shown by one toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastContentConfig {
    title: Option<String>,
    content: String,
}

impl ToastContentConfig {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: content.into(),
        }
    }

    /// Sets the title. An empty title is treated the same as no title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the title only when it is present and non-empty.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn has_title(&self) -> bool {
        self.title().is_some()
    }
}

impl From<&str> for ToastContentConfig {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for ToastContentConfig {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}
