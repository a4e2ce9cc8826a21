// SPDX-License-Identifier: MPL-2.0
//! Convenience entry points for showing toasts.
//!
//! `Toasty` is the session object an application keeps for its lifetime. It
//! pairs a [`ToastPresenter`] with a default [`ToastUIConfig`] so call sites
//! only pass the text.

use super::config::{ToastContentConfig, ToastUIConfig};
use super::presenter::{Message, ToastPresenter};
use super::scheduler::{Clock, SystemClock};
use super::surface::SurfaceProvider;
use crate::config::defaults::FLASH_DELAY_SECS;
use iced::Element;
use std::time::Duration;

/// Default auto-hide delay for [`Toasty::flash`].
pub const DEFAULT_FLASH_DELAY: Duration = Duration::from_millis((FLASH_DELAY_SECS * 1000.0) as u64);

#[derive(Debug)]
pub struct Toasty<P, C = SystemClock> {
    presenter: ToastPresenter<P, C>,
    default_config: ToastUIConfig,
    flash_delay: Duration,
}

impl<P: SurfaceProvider> Toasty<P, SystemClock> {
    pub fn new(surface: P) -> Self {
        Self::from_presenter(ToastPresenter::new(surface))
    }
}

impl<P: SurfaceProvider, C: Clock> Toasty<P, C> {
    /// Wraps an existing presenter, using the default look.
    pub fn from_presenter(presenter: ToastPresenter<P, C>) -> Self {
        Self {
            presenter,
            default_config: ToastUIConfig::default(),
            flash_delay: DEFAULT_FLASH_DELAY,
        }
    }

    /// Sets the look used when no config is passed.
    #[must_use]
    pub fn with_default_config(mut self, config: ToastUIConfig) -> Self {
        self.default_config = config;
        self
    }

    /// Sets the delay used by [`Toasty::flash`].
    #[must_use]
    pub fn with_flash_delay(mut self, delay: Duration) -> Self {
        self.flash_delay = delay;
        self
    }

    pub fn show(&mut self, content: impl Into<ToastContentConfig>) {
        self.presenter.show(&self.default_config, content.into());
    }

    pub fn show_with(&mut self, content: impl Into<ToastContentConfig>, ui: &ToastUIConfig) {
        self.presenter.show(ui, content.into());
    }

    /// Shows a toast that hides itself after the default flash delay.
    pub fn flash(&mut self, content: impl Into<ToastContentConfig>) {
        self.presenter
            .flash(self.flash_delay, &self.default_config, content.into());
    }

    pub fn flash_for(&mut self, delay: Duration, content: impl Into<ToastContentConfig>) {
        self.presenter
            .flash(delay, &self.default_config, content.into());
    }

    pub fn flash_with(
        &mut self,
        delay: Duration,
        content: impl Into<ToastContentConfig>,
        ui: &ToastUIConfig,
    ) {
        self.presenter.flash(delay, ui, content.into());
    }

    pub fn hide(&mut self) {
        self.presenter.hide();
    }

    pub fn handle_message(&mut self, message: &Message) {
        self.presenter.handle_message(message);
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.presenter.view()
    }

    #[must_use]
    pub fn default_config(&self) -> &ToastUIConfig {
        &self.default_config
    }

    #[must_use]
    pub fn flash_delay(&self) -> Duration {
        self.flash_delay
    }

    #[must_use]
    pub fn presenter(&self) -> &ToastPresenter<P, C> {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut ToastPresenter<P, C> {
        &mut self.presenter
    }
}
