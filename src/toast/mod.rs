// SPDX-License-Identifier: MPL-2.0
//! Transient toast notifications.
//!
//! A toast is a small overlay with an optional title and a body, shown over
//! the application, faded in, and dismissed either after a delay, by a tap, or
//! explicitly.
//!
//! # Components
//!
//! - [`config`] - `ToastUIConfig` (appearance) and `ToastContentConfig` (text)
//! - [`metrics`] - Text measurement used by layout
//! - [`layout`] - Pure sizing and placement of a toast
//! - [`surface`] - The surface a toast is placed on
//! - [`scheduler`] - Clock and cancelable timers
//! - [`view`] - The toast overlay and its fade animation
//! - [`presenter`] - Single-slot lifecycle (show, flash, hide)
//! - [`facade`] - `Toasty` convenience entry points
//!
//! # Usage
//!
//! ```ignore
//! use toasty::toast::{Toasty, WindowSurface};
//!
//! let mut toasty = Toasty::new(WindowSurface::with_size(iced::Size::new(800.0, 600.0)));
//! toasty.flash("Saved");
//!
//! // In the update loop
//! toasty.handle_message(&toasty::toast::Message::Tick);
//!
//! // In the view, layered over the application content
//! let overlay = toasty.view().map(Message::Toast);
//! ```
//!
//! # Behaviour
//!
//! - At most one toast is showing; `show` while showing is ignored
//! - `hide` flips to idle immediately, the view fades out afterwards
//! - Fade in/out: 0.3s; default flash delay: 1s

pub mod config;
pub mod facade;
pub mod layout;
pub mod metrics;
pub mod presenter;
pub mod scheduler;
pub mod surface;
pub mod view;

pub use config::{ToastContentConfig, ToastFont, ToastUIConfig};
pub use facade::{Toasty, DEFAULT_FLASH_DELAY};
pub use layout::{layout, ToastLayout};
pub use metrics::{HeuristicMeasurer, IcedMeasurer, TextMeasure};
pub use presenter::{Message, PresenterState, ToastPresenter};
pub use scheduler::{Clock, ManualClock, SystemClock, TimerId, Timeline};
pub use surface::{FixedSurface, SurfaceMetrics, SurfaceProvider, WindowSurface};
pub use view::{ToastId, ToastView};
