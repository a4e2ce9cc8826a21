// SPDX-License-Identifier: MPL-2.0
//! Geometry of a toast.
//!
//! [`layout`] is a pure function: it measures the title and body, derives the
//! toast height, widens the toast when the text would make it too tall for its
//! width, and places it centred horizontally above the bottom safe area.
//!
//! The input [`ToastUIConfig`] is never modified; the widened width is reported
//! through [`ToastLayout::config`].

use super::config::{ToastContentConfig, ToastUIConfig};
use super::metrics::TextMeasure;
use super::surface::SurfaceMetrics;
use crate::config::defaults::{HORIZONTAL_INSET, TEXT_PADDING};
use iced::Rectangle;

/// Computed geometry for one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastLayout {
    /// The configuration the toast is rendered with. Its `estimate_width` is
    /// always resolved and may be larger than the requested one.
    pub config: ToastUIConfig,
    /// Toast bounds in surface coordinates.
    pub frame: Rectangle,
    /// Title bounds relative to the toast. Zero height when there is no title.
    pub title: Rectangle,
    /// Body bounds relative to the toast.
    pub body: Rectangle,
    /// Whether the auto-widen rule replaced the requested width.
    pub widened: bool,
}

impl ToastLayout {
    #[must_use]
    pub fn width(&self) -> f32 {
        self.frame.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.frame.height
    }
}

/// Computes the layout of a toast on `surface`.
pub fn layout(
    ui: &ToastUIConfig,
    content: &ToastContentConfig,
    surface: &SurfaceMetrics,
    measurer: &dyn TextMeasure,
) -> ToastLayout {
    let requested_width = ui.resolved_estimate_width(surface);
    let text_width = requested_width - HORIZONTAL_INSET;

    let title_height = content
        .title()
        .map_or(0.0, |title| measurer.height(title, text_width, &ui.title_font));
    let body_height = measurer.height(content.content(), text_width, &ui.content_font);

    let padding_units = if content.has_title() { 3.0 } else { 2.0 };
    let total_height = title_height + body_height + TEXT_PADDING * padding_units;

    // Long text in a narrow toast grows tall; trade height for width instead.
    let widened = total_height > text_width;
    let width = if widened {
        total_height + total_height / 2.0
    } else {
        requested_width
    };

    let frame = Rectangle {
        x: surface.size.width / 2.0 - width / 2.0,
        y: surface.size.height - surface.safe_area_bottom - ui.bottom_offset - total_height,
        width,
        height: total_height,
    };

    let title = Rectangle {
        x: TEXT_PADDING,
        y: TEXT_PADDING,
        width: width - TEXT_PADDING * 2.0,
        height: title_height,
    };

    let title_gap = if content.has_title() { TEXT_PADDING } else { 0.0 };
    let body = Rectangle {
        x: HORIZONTAL_INSET / 2.0,
        y: title_height + title_gap + TEXT_PADDING,
        width: width - HORIZONTAL_INSET,
        height: body_height,
    };

    let mut config = ui.clone();
    config.estimate_width = Some(width);

    ToastLayout {
        config,
        frame,
        title,
        body,
        widened,
    }
}
