// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Tick interval while a toast is animating or a timer is pending (~60 fps).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Feeds window size changes to the toast surface.
pub fn create_resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}

/// Creates a periodic tick subscription while toasts need one.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
