// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastPresenter` owns the single "current toast" slot. It shows at most
//! one toast at a time, runs the optional auto-hide timer, and keeps hidden
//! toasts around until their fade-out finishes.

use super::config::{ToastContentConfig, ToastUIConfig};
use super::layout::layout;
use super::metrics::{IcedMeasurer, TextMeasure};
use super::scheduler::{Clock, SystemClock, TimerId, Timeline};
use super::surface::SurfaceProvider;
use super::view::{ToastId, ToastView};
use crate::config::defaults::FADE_DURATION_MS;
use iced::widget::Stack;
use iced::{Element, Length};
use std::fmt;
use std::time::Duration;

/// Messages for toast state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user pressed a toast.
    Tapped(ToastId),
    /// Tick for running due timers.
    Tick,
}

/// Whether a toast is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterState {
    Idle,
    Showing,
}

/// Work deferred until a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    AutoHide,
    Detach(ToastId),
}

/// Presents one toast at a time on a surface.
pub struct ToastPresenter<P, C = SystemClock> {
    surface: P,
    clock: C,
    measurer: Box<dyn TextMeasure>,
    fade_duration: Duration,
    /// The visible toast, if any.
    current: Option<ToastView>,
    /// Hidden toasts still fading out.
    outgoing: Vec<ToastView>,
    auto_hide: Option<TimerId>,
    timeline: Timeline<Deferred>,
}

impl<P: fmt::Debug, C> fmt::Debug for ToastPresenter<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastPresenter")
            .field("surface", &self.surface)
            .field("current", &self.current.as_ref().map(ToastView::id))
            .field("outgoing", &self.outgoing.len())
            .field("auto_hide", &self.auto_hide)
            .finish()
    }
}

impl<P: SurfaceProvider> ToastPresenter<P, SystemClock> {
    /// Creates a presenter driven by wall-clock time.
    pub fn new(surface: P) -> Self {
        Self::with_clock(surface, SystemClock)
    }
}

impl<P: SurfaceProvider, C: Clock> ToastPresenter<P, C> {
    /// Creates a presenter using the given time source.
    pub fn with_clock(surface: P, clock: C) -> Self {
        Self {
            surface,
            clock,
            measurer: Box::new(IcedMeasurer),
            fade_duration: Duration::from_millis(FADE_DURATION_MS),
            current: None,
            outgoing: Vec::new(),
            auto_hide: None,
            timeline: Timeline::new(),
        }
    }

    /// Replaces the text measurer used for layout.
    #[must_use]
    pub fn with_measurer(mut self, measurer: impl TextMeasure + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Sets the fade-in and fade-out duration.
    #[must_use]
    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Shows a toast.
    ///
    /// Does nothing while another toast is showing, or when no surface is
    /// available.
    pub fn show(&mut self, ui: &ToastUIConfig, content: ToastContentConfig) {
        if let Some(current) = &self.current {
            tracing::debug!(current = ?current.id(), "toast already showing, ignoring show");
            return;
        }

        self.cancel_auto_hide();

        let Some(surface) = self.surface.metrics() else {
            tracing::warn!("no surface available, toast not shown");
            return;
        };

        let layout = layout(ui, &content, &surface, self.measurer.as_ref());
        if layout.widened {
            tracing::debug!(width = layout.width(), "toast widened to fit content");
        }

        let view = ToastView::new(content, layout, self.clock.now(), self.fade_duration);
        tracing::debug!(id = ?view.id(), "showing toast");
        self.current = Some(view);
    }

    /// Shows a toast and hides it after `delay`.
    ///
    /// If a toast is already showing it stays, but its auto-hide timer is
    /// re-armed with the new delay. A delay too large to represent leaves the
    /// toast up until [`ToastPresenter::hide`].
    pub fn flash(&mut self, delay: Duration, ui: &ToastUIConfig, content: ToastContentConfig) {
        self.show(ui, content);
        if self.current.is_none() {
            return;
        }

        self.cancel_auto_hide();
        let Some(due) = self.clock.now().checked_add(delay) else {
            tracing::debug!(?delay, "auto-hide delay out of range, toast stays until hidden");
            return;
        };
        self.auto_hide = Some(self.timeline.schedule(due, Deferred::AutoHide));
        tracing::debug!(?delay, "auto-hide scheduled");
    }

    /// Hides the current toast, if any.
    ///
    /// The presenter is idle as soon as this returns; the toast itself keeps
    /// rendering until its fade-out completes.
    pub fn hide(&mut self) {
        self.cancel_auto_hide();

        let Some(mut view) = self.current.take() else {
            return;
        };

        let now = self.clock.now();
        tracing::debug!(id = ?view.id(), "hiding toast");
        let Some(due) = now.checked_add(self.fade_duration) else {
            tracing::debug!(id = ?view.id(), "fade-out out of range, toast detached");
            return;
        };
        view.fade_out(now, self.fade_duration);
        self.timeline.schedule(due, Deferred::Detach(view.id()));
        self.outgoing.push(view);
    }

    /// Runs every timer that is due.
    pub fn tick(&mut self) {
        for event in self.timeline.drain_due(self.clock.now()) {
            match event {
                Deferred::AutoHide => {
                    self.auto_hide = None;
                    self.hide();
                }
                Deferred::Detach(id) => {
                    self.outgoing.retain(|view| view.id() != id);
                    tracing::trace!(?id, "toast detached");
                }
            }
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tapped(id) => {
                let dismissible = self
                    .current
                    .as_ref()
                    .is_some_and(|view| view.id() == *id && view.config().tap_to_dismiss);
                if dismissible {
                    self.hide();
                }
            }
            Message::Tick => self.tick(),
        }
    }

    /// Views in paint order: toasts fading out first, the current toast last.
    ///
    /// Only the current toast reacts to taps, and only when its config allows it.
    fn layers(&self) -> impl Iterator<Item = (&ToastView, Option<Message>)> {
        self.outgoing
            .iter()
            .map(|view| (view, None))
            .chain(self.current.iter().map(|view| (view, tap_message(view))))
    }

    /// Renders the current toast above any toasts still fading out.
    pub fn view(&self) -> Element<'_, Message> {
        let now = self.clock.now();
        let layers = self
            .layers()
            .map(|(view, on_tap)| view.view(now, on_tap));

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    #[must_use]
    pub fn state(&self) -> PresenterState {
        if self.current.is_some() {
            PresenterState::Showing
        } else {
            PresenterState::Idle
        }
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.state() == PresenterState::Showing
    }

    /// Returns the visible toast.
    #[must_use]
    pub fn current(&self) -> Option<&ToastView> {
        self.current.as_ref()
    }

    /// Returns the number of hidden toasts still fading out.
    #[must_use]
    pub fn outgoing_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns whether an auto-hide timer is pending.
    #[must_use]
    pub fn has_pending_auto_hide(&self) -> bool {
        self.auto_hide.is_some()
    }

    /// Returns whether the host should keep sending ticks.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        let now = self.clock.now();
        !self.timeline.is_empty()
            || self
                .current
                .iter()
                .chain(self.outgoing.iter())
                .any(|view| view.is_animating(now))
    }

    #[must_use]
    pub fn surface(&self) -> &P {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut P {
        &mut self.surface
    }

    fn cancel_auto_hide(&mut self) {
        if let Some(id) = self.auto_hide.take() {
            self.timeline.cancel(id);
        }
    }
}

/// The message a tap on `view` emits, if tapping dismisses it.
fn tap_message(view: &ToastView) -> Option<Message> {
    view.config()
        .tap_to_dismiss
        .then(|| Message::Tapped(view.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::metrics::HeuristicMeasurer;
    use crate::toast::scheduler::ManualClock;
    use crate::toast::surface::{FixedSurface, SurfaceMetrics, WindowSurface};
    use iced::Size;

    const FADE: Duration = Duration::from_millis(FADE_DURATION_MS);

    fn presenter() -> (ToastPresenter<FixedSurface, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let surface = FixedSurface(SurfaceMetrics::new(Size::new(800.0, 600.0), 0.0));
        let presenter =
            ToastPresenter::with_clock(surface, clock.clone()).with_measurer(HeuristicMeasurer);
        (presenter, clock)
    }

    #[test]
    fn new_presenter_is_idle() {
        let (presenter, _) = presenter();
        assert_eq!(presenter.state(), PresenterState::Idle);
        assert!(presenter.current().is_none());
        assert!(!presenter.needs_tick());
    }

    #[test]
    fn show_makes_toast_visible() {
        let (mut presenter, _) = presenter();
        presenter.show(&ToastUIConfig::default(), "Hi".into());

        assert!(presenter.is_showing());
        let current = presenter.current().expect("toast should be showing");
        assert_eq!(current.content().content(), "Hi");
        assert!(presenter.needs_tick());
    }

    #[test]
    fn show_while_showing_keeps_first_toast() {
        let (mut presenter, _) = presenter();
        let ui = ToastUIConfig::default();
        presenter.show(&ui, "first".into());
        let first = presenter.current().map(ToastView::id);

        presenter.show(&ui, "second".into());
        assert_eq!(presenter.current().map(ToastView::id), first);
        assert_eq!(
            presenter.current().map(|view| view.content().content()),
            Some("first")
        );
    }

    #[test]
    fn hide_is_idempotent() {
        let (mut presenter, _) = presenter();
        presenter.show(&ToastUIConfig::default(), "Hi".into());

        presenter.hide();
        presenter.hide();
        assert_eq!(presenter.state(), PresenterState::Idle);
        assert_eq!(presenter.outgoing_count(), 1);
    }

    #[test]
    fn hidden_toast_is_detached_after_fade_out() {
        let (mut presenter, clock) = presenter();
        presenter.show(&ToastUIConfig::default(), "Hi".into());
        presenter.hide();

        clock.advance(FADE / 2);
        presenter.tick();
        assert_eq!(presenter.outgoing_count(), 1);

        clock.advance(FADE);
        presenter.tick();
        assert_eq!(presenter.outgoing_count(), 0);
        assert!(!presenter.needs_tick());
    }

    #[test]
    fn show_proceeds_while_previous_toast_fades_out() {
        let (mut presenter, _) = presenter();
        let ui = ToastUIConfig::default();
        presenter.show(&ui, "first".into());
        presenter.hide();
        presenter.show(&ui, "second".into());

        assert!(presenter.is_showing());
        assert_eq!(presenter.outgoing_count(), 1);
        assert_eq!(
            presenter.current().map(|view| view.content().content()),
            Some("second")
        );
    }

    #[test]
    fn flash_hides_after_delay() {
        let (mut presenter, clock) = presenter();
        presenter.flash(
            Duration::from_secs(1),
            &ToastUIConfig::default(),
            "Saved".into(),
        );
        assert!(presenter.is_showing());
        assert!(presenter.has_pending_auto_hide());

        clock.advance(Duration::from_millis(999));
        presenter.tick();
        assert!(presenter.is_showing());

        clock.advance(Duration::from_millis(2));
        presenter.tick();
        assert_eq!(presenter.state(), PresenterState::Idle);
        assert!(!presenter.has_pending_auto_hide());
    }

    #[test]
    fn manual_hide_cancels_auto_hide() {
        let (mut presenter, clock) = presenter();
        let ui = ToastUIConfig::default();
        presenter.flash(Duration::from_secs(1), &ui, "first".into());
        presenter.hide();
        presenter.show(&ui, "second".into());

        clock.advance(Duration::from_secs(2));
        presenter.tick();
        assert!(presenter.is_showing());
        assert_eq!(
            presenter.current().map(|view| view.content().content()),
            Some("second")
        );
    }

    #[test]
    fn flash_while_showing_rearms_timer() {
        let (mut presenter, clock) = presenter();
        let ui = ToastUIConfig::default();
        presenter.flash(Duration::from_secs(1), &ui, "first".into());

        clock.advance(Duration::from_millis(800));
        presenter.flash(Duration::from_secs(1), &ui, "second".into());

        clock.advance(Duration::from_millis(800));
        presenter.tick();
        assert!(presenter.is_showing());

        clock.advance(Duration::from_millis(300));
        presenter.tick();
        assert!(!presenter.is_showing());
    }

    #[test]
    fn tap_hides_dismissible_toast() {
        let (mut presenter, _) = presenter();
        presenter.show(&ToastUIConfig::default(), "Hi".into());
        let id = presenter.current().map(ToastView::id).expect("showing");

        presenter.handle_message(&Message::Tapped(id));
        assert!(!presenter.is_showing());
    }

    #[test]
    fn tap_is_ignored_when_dismiss_disabled() {
        let (mut presenter, _) = presenter();
        let ui = ToastUIConfig::default().with_tap_to_dismiss(false);
        presenter.show(&ui, "Hi".into());
        let id = presenter.current().map(ToastView::id).expect("showing");

        presenter.handle_message(&Message::Tapped(id));
        assert!(presenter.is_showing());
    }

    #[test]
    fn tap_on_fading_toast_does_not_hide_new_one() {
        let (mut presenter, _) = presenter();
        let ui = ToastUIConfig::default();
        presenter.show(&ui, "first".into());
        let old = presenter.current().map(ToastView::id).expect("showing");
        presenter.hide();
        presenter.show(&ui, "second".into());

        presenter.handle_message(&Message::Tapped(old));
        assert!(presenter.is_showing());
    }

    #[test]
    fn show_without_surface_is_a_no_op() {
        let mut presenter = ToastPresenter::with_clock(WindowSurface::new(), ManualClock::new());
        presenter.show(&ToastUIConfig::default(), "Hi".into());
        presenter.flash(
            Duration::from_secs(1),
            &ToastUIConfig::default(),
            "Hi".into(),
        );

        assert!(!presenter.is_showing());
        assert!(!presenter.has_pending_auto_hide());
    }

    #[test]
    fn surface_can_be_attached_later() {
        let mut presenter = ToastPresenter::with_clock(WindowSurface::new(), ManualClock::new());
        presenter.surface_mut().resize(Size::new(640.0, 480.0));
        presenter.show(&ToastUIConfig::default(), "Hi".into());
        assert!(presenter.is_showing());
    }

    #[test]
    fn handle_message_tick_runs_timers() {
        let (mut presenter, clock) = presenter();
        presenter.flash(
            Duration::from_millis(500),
            &ToastUIConfig::default(),
            "Saved".into(),
        );

        clock.advance(Duration::from_millis(500));
        presenter.handle_message(&Message::Tick);
        assert!(!presenter.is_showing());
    }

    #[test]
    fn flash_with_unbounded_delay_never_auto_hides() {
        let (mut presenter, clock) = presenter();
        presenter.flash(Duration::MAX, &ToastUIConfig::default(), "Saved".into());

        assert!(presenter.is_showing());
        assert!(!presenter.has_pending_auto_hide());

        clock.advance(Duration::from_secs(60 * 60 * 24));
        presenter.tick();
        assert!(presenter.is_showing());

        presenter.hide();
        assert!(!presenter.is_showing());
    }

    #[test]
    fn hide_with_unbounded_fade_detaches_at_once() {
        let clock = ManualClock::new();
        let surface = FixedSurface(SurfaceMetrics::new(Size::new(800.0, 600.0), 0.0));
        let mut presenter = ToastPresenter::with_clock(surface, clock)
            .with_measurer(HeuristicMeasurer)
            .with_fade_duration(Duration::MAX);

        presenter.show(&ToastUIConfig::default(), "Hi".into());
        presenter.hide();

        assert!(!presenter.is_showing());
        assert_eq!(presenter.outgoing_count(), 0);
    }

    #[test]
    fn current_toast_is_painted_above_fading_ones() {
        let (mut presenter, _) = presenter();
        let ui = ToastUIConfig::default();
        presenter.show(&ui, "first".into());
        presenter.hide();
        presenter.show(&ui, "second".into());

        let order: Vec<&str> = presenter
            .layers()
            .map(|(view, _)| view.content().content())
            .collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    #[test]
    fn only_current_dismissible_toast_gets_a_tap_message() {
        let (mut presenter, _) = presenter();
        let ui = ToastUIConfig::default();
        presenter.show(&ui, "first".into());
        presenter.hide();
        presenter.show(&ui, "second".into());

        let taps: Vec<Option<Message>> = presenter.layers().map(|(_, tap)| tap).collect();
        let current = presenter.current().map(ToastView::id).expect("showing");
        assert_eq!(taps, vec![None, Some(Message::Tapped(current))]);
    }

    #[test]
    fn toast_without_tap_to_dismiss_gets_no_tap_message() {
        let (mut presenter, _) = presenter();
        let ui = ToastUIConfig::default().with_tap_to_dismiss(false);
        presenter.show(&ui, "Hi".into());

        let current = presenter.current().expect("showing");
        assert_eq!(tap_message(current), None);
    }
}
