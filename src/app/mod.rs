// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single toast presenter.
//!
//! The `App` struct loads the toast settings, owns the `Toasty` session for the
//! window, and forwards button presses, window resizes, and ticks to it.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::toast::{ToastContentConfig, ToastPresenter, Toasty, WindowSurface};
use iced::{window, Element, Size, Subscription, Task};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// How long the settings warning stays up.
const WARNING_DELAY: Duration = Duration::from_secs(4);

const LONG_TEXT: &str = "This toast carries enough text that it would become a tall, \
narrow column at its configured width, so the layout widens it instead. The text \
keeps wrapping and is never truncated, however much of it there is. It hides itself \
after three seconds unless you tap it first, which dismisses it right away.";

/// Root Iced application state.
pub struct App {
    toasty: Toasty<WindowSurface>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("showing", &self.toasty.presenter().is_showing())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and builds the toast session for the main window.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));

        let surface =
            WindowSurface::with_size(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));
        let presenter = ToastPresenter::new(surface).with_fade_duration(config.fade_duration());
        let mut toasty = Toasty::from_presenter(presenter)
            .with_default_config(config.ui_config())
            .with_flash_delay(config.flash_delay());

        if let Some(warning) = warning {
            toasty.flash_for(
                WARNING_DELAY,
                ToastContentConfig::new(warning).with_title("Settings"),
            );
        }

        (Self { toasty }, Task::none())
    }

    fn title(&self) -> String {
        String::from("Toasty")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(message) => self.toasty.handle_message(&message),
            Message::ShowPressed => self.toasty.show(
                ToastContentConfig::new("Tap the toast or press Hide to dismiss it.")
                    .with_title("Hello"),
            ),
            Message::FlashPressed => self.toasty.flash("Saved"),
            Message::LongTextPressed => self.toasty.flash_for(
                Duration::from_secs(3),
                ToastContentConfig::new(LONG_TEXT).with_title("Alert"),
            ),
            Message::HidePressed => self.toasty.hide(),
            Message::WindowResized(size) => {
                self.toasty.presenter_mut().surface_mut().resize(size);
            }
            Message::Tick(_) => self.toasty.handle_message(&crate::toast::Message::Tick),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.toasty)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_resize_subscription(),
            subscription::create_tick_subscription(self.toasty.presenter().needs_tick()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
        };
        App::new(flags).0
    }

    #[test]
    fn new_app_starts_without_toast() {
        let app = app();
        assert!(!app.toasty.presenter().is_showing());
    }

    #[test]
    fn buttons_drive_the_presenter() {
        let mut app = app();
        let _ = app.update(Message::ShowPressed);
        assert!(app.toasty.presenter().is_showing());

        let _ = app.update(Message::HidePressed);
        assert!(!app.toasty.presenter().is_showing());
    }

    #[test]
    fn long_text_toast_wraps_below_its_title() {
        let mut app = app();
        let _ = app.update(Message::LongTextPressed);

        let current = app.toasty.presenter().current().expect("showing");
        let layout = current.layout();
        assert_eq!(current.content().title(), Some("Alert"));
        assert!(layout.body.y >= layout.title.y + layout.title.height);
        assert!(layout.body.height > 0.0);
        assert!(app.toasty.presenter().has_pending_auto_hide());
    }

    #[test]
    fn resize_updates_surface() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(1024.0, 768.0)));
        let _ = app.update(Message::FlashPressed);

        let current = app.toasty.presenter().current().expect("showing");
        assert_eq!(current.layout().width(), 256.0);
    }
}
