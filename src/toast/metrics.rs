// SPDX-License-Identifier: MPL-2.0
//! Text measurement used by toast layout.
//!
//! Layout only needs to know how tall a string becomes when wrapped at a given
//! width. [`IcedMeasurer`] shapes text with the same engine the toast renders
//! with; [`HeuristicMeasurer`] assumes a fixed average glyph advance and needs
//! no font system, which keeps geometry deterministic in tests.

use super::config::ToastFont;
use iced::advanced::text::{self, Paragraph as _};
use iced::widget::text::{LineHeight, Shaping, Wrapping};
use iced::{alignment, Size};

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE_EM: f32 = 0.55;

/// Line height as a fraction of the font size.
const LINE_HEIGHT_EM: f32 = 1.3;

/// Measures rendered text extents.
pub trait TextMeasure {
    /// Height needed to render `text` wrapped at `max_width`, rounded up.
    fn height(&self, text: &str, max_width: f32, font: &ToastFont) -> f32;

    /// Width needed to render `text` without wrapping, rounded up.
    fn width(&self, text: &str, max_height: f32, font: &ToastFont) -> f32;
}

/// Measures text by shaping it with the renderer's font system.
///
/// Shaping, wrapping and line height match what [`super::ToastView`] renders,
/// so a laid-out text region fits its rendered text.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcedMeasurer;

impl IcedMeasurer {
    fn bounds(text: &str, bounds: Size, font: &ToastFont) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let paragraph = <iced::Renderer as text::Renderer>::Paragraph::with_text(text::Text {
            content: text,
            bounds,
            size: font.size.into(),
            line_height: LineHeight::default(),
            font: font.font,
            align_x: text::Alignment::Left,
            align_y: alignment::Vertical::Top,
            shaping: Shaping::Advanced,
            wrapping: Wrapping::Word,
        });
        paragraph.min_bounds()
    }
}

impl TextMeasure for IcedMeasurer {
    fn height(&self, text: &str, max_width: f32, font: &ToastFont) -> f32 {
        Self::bounds(text, Size::new(max_width.max(0.0), f32::INFINITY), font)
            .height
            .ceil()
    }

    fn width(&self, text: &str, max_height: f32, font: &ToastFont) -> f32 {
        Self::bounds(text, Size::new(f32::INFINITY, max_height.max(0.0)), font)
            .width
            .ceil()
    }
}

/// Glyph-count based measurer.
///
/// Each `\n`-separated paragraph wraps at `floor(max_width / advance)` glyphs
/// per line (never fewer than one), so narrowing the width can only add lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

impl HeuristicMeasurer {
    fn advance(font: &ToastFont) -> f32 {
        font.size * GLYPH_ADVANCE_EM
    }

    fn line_height(font: &ToastFont) -> f32 {
        font.size * LINE_HEIGHT_EM
    }

    /// Number of wrapped lines `text` occupies at `max_width`.
    #[must_use]
    pub fn line_count(&self, text: &str, max_width: f32, font: &ToastFont) -> usize {
        if text.is_empty() {
            return 0;
        }

        let advance = Self::advance(font);
        let glyphs_per_line = if advance > 0.0 && max_width.is_finite() {
            ((max_width / advance).floor() as usize).max(1)
        } else {
            usize::MAX
        };

        text.split('\n')
            .map(|paragraph| {
                let glyphs = paragraph.chars().count();
                glyphs.div_ceil(glyphs_per_line).max(1)
            })
            .sum()
    }
}

impl TextMeasure for HeuristicMeasurer {
    fn height(&self, text: &str, max_width: f32, font: &ToastFont) -> f32 {
        let lines = self.line_count(text, max_width, font);
        (lines as f32 * Self::line_height(font)).ceil()
    }

    fn width(&self, text: &str, _max_height: f32, font: &ToastFont) -> f32 {
        let longest = text
            .split('\n')
            .map(|paragraph| paragraph.chars().count())
            .max()
            .unwrap_or(0);
        (longest as f32 * Self::advance(font)).ceil()
    }
}
