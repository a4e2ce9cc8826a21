// SPDX-License-Identifier: MPL-2.0
//! `toasty` shows transient toast notifications in Iced applications.
//!
//! A toast is a small overlay with an optional title and body, faded in above
//! the bottom of the window and dismissed after a delay, on tap, or on demand.
//! See [`toast`] for the widget and [`config`] for persisted defaults.

#![doc(html_root_url = "https://docs.rs/toasty/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod toast;

#[cfg(test)]
mod test_utils;
