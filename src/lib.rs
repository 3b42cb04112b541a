// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` provides stacked toast notifications for Iced applications.
//!
//! The [`toast`] module holds the framework-agnostic core: a `Manager` that
//! shows, stacks, auto-dismisses and reflows toasts through a widget factory
//! and a timer scheduler. The [`ui`] and [`app`] modules render it with Iced
//! in a small demo that also hosts an email verification resend flow.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod toast;
pub mod ui;
pub mod verification;

#[cfg(test)]
pub(crate) mod test_utils;
