// SPDX-License-Identifier: MPL-2.0
//! The toast overlay itself.
//!
//! A [`ToastView`] is built once from its configs and never changes shape
//! afterwards; only its opacity moves while it fades in and out.

use super::config::{ToastContentConfig, ToastFont, ToastUIConfig};
use super::layout::ToastLayout;
use crate::config::defaults::{
    SHADOW_BLUR_RADIUS, SHADOW_COLOR_ALPHA, SHADOW_OFFSET, SHADOW_OPACITY,
};
use iced::widget::text::{LineHeight, Shaping, Wrapping};
use iced::widget::{container, mouse_area, Container, Stack, Text};
use iced::{alignment, Border, Color, Element, Length, Padding, Rectangle, Shadow, Theme, Vector};
use std::time::{Duration, Instant};

/// Unique identifier for a toast view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear opacity animation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Fade {
    fn value(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * progress
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

/// A laid-out toast with its fade state.
#[derive(Debug, Clone)]
pub struct ToastView {
    id: ToastId,
    content: ToastContentConfig,
    layout: ToastLayout,
    fade: Fade,
}

impl ToastView {
    /// Creates an invisible view that starts fading in at `now`.
    #[must_use]
    pub fn new(
        content: ToastContentConfig,
        layout: ToastLayout,
        now: Instant,
        fade_duration: Duration,
    ) -> Self {
        Self {
            id: ToastId::new(),
            content,
            layout,
            fade: Fade {
                from: 0.0,
                to: 1.0,
                started_at: now,
                duration: fade_duration,
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &ToastContentConfig {
        &self.content
    }

    #[must_use]
    pub fn layout(&self) -> &ToastLayout {
        &self.layout
    }

    /// The configuration the view was laid out with (possibly widened).
    #[must_use]
    pub fn config(&self) -> &ToastUIConfig {
        &self.layout.config
    }

    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.fade.value(now)
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.fade.is_finished(now)
    }

    #[must_use]
    pub fn is_fading_out(&self) -> bool {
        self.fade.to == 0.0
    }

    /// Starts fading to fully transparent from the current opacity.
    pub fn fade_out(&mut self, now: Instant, duration: Duration) {
        self.fade = Fade {
            from: self.opacity(now),
            to: 0.0,
            started_at: now,
            duration,
        };
    }

    /// Renders the toast at its frame inside a surface-sized layer.
    ///
    /// When `on_tap` is given, pressing anywhere on the toast emits it.
    pub fn view<'a, Message: Clone + 'a>(
        &'a self,
        now: Instant,
        on_tap: Option<Message>,
    ) -> Element<'a, Message> {
        let opacity = self.opacity(now);
        let config = &self.layout.config;
        let frame = self.layout.frame;

        let mut regions = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill);
        if let Some(title) = self.content.title() {
            regions = regions.push(text_region(
                title,
                config.title_font,
                config.title_color,
                self.layout.title,
                opacity,
            ));
        }
        regions = regions.push(text_region(
            self.content.content(),
            config.content_font,
            config.content_color,
            self.layout.body,
            opacity,
        ));

        let toast = Container::new(regions)
            .width(Length::Fixed(frame.width))
            .height(Length::Fixed(frame.height))
            .clip(clips_content(config))
            .style(move |_theme: &Theme| toast_style(config, opacity));

        let toast: Element<'a, Message> = match on_tap {
            Some(message) => mouse_area(toast).on_press(message).into(),
            None => toast.into(),
        };

        Container::new(toast)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: frame.y.max(0.0),
                left: frame.x.max(0.0),
                ..Padding::ZERO
            })
            .into()
    }
}

/// Whether the toast clips its content to its frame.
///
/// Clipping would also cut off the drop shadow, so it is only on without one.
fn clips_content(config: &ToastUIConfig) -> bool {
    !config.shadow_enabled
}

/// Returns `color` with its alpha scaled by `opacity`.
fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// A centred, wrapping text block placed at `bounds` within the toast.
fn text_region<'a, Message: 'a>(
    text: &'a str,
    font: ToastFont,
    color: Color,
    bounds: Rectangle,
    opacity: f32,
) -> Element<'a, Message> {
    let label = Text::new(text)
        .font(font.font)
        .size(font.size)
        .line_height(LineHeight::default())
        .shaping(Shaping::Advanced)
        .wrapping(Wrapping::Word)
        .color(faded(color, opacity))
        .width(Length::Fixed(bounds.width))
        .align_x(alignment::Horizontal::Center);

    Container::new(Container::new(label).height(Length::Fixed(bounds.height)))
        .padding(Padding {
            top: bounds.y,
            left: bounds.x,
            ..Padding::ZERO
        })
        .into()
}

/// Style function for the toast container.
fn toast_style(config: &ToastUIConfig, opacity: f32) -> container::Style {
    let shadow = if config.shadow_enabled {
        Shadow {
            color: Color {
                a: SHADOW_COLOR_ALPHA * SHADOW_OPACITY * opacity,
                ..Color::BLACK
            },
            offset: Vector::new(SHADOW_OFFSET, SHADOW_OFFSET),
            blur_radius: SHADOW_BLUR_RADIUS,
        }
    } else {
        Shadow::default()
    };

    container::Style {
        background: Some(iced::Background::Color(faded(
            config.background_color,
            opacity,
        ))),
        border: Border {
            color: faded(config.border_color, opacity),
            width: config.border_width,
            radius: config.corner_radius.into(),
        },
        shadow,
        ..Default::default()
    }
}
