// SPDX-License-Identifier: MPL-2.0
//! Iced user interface.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`toast_card`] - Toast cards, their factory and the stacked overlay
//! - [`verification_panel`] - Email field and resend control with countdown
//! - [`password_reset_panel`] - Forgot-password and expired-link requests
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod password_reset_panel;
pub mod toast_card;
pub mod verification_panel;
