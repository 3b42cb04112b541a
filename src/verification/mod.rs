// SPDX-License-Identifier: MPL-2.0
//! Account email requests: verification resend and password reset links.
//!
//! - [`cooldown`] - `ResendCooldown` countdown gating the resend control
//! - [`client`] - email validation, request/response shapes and `ResendClient`

pub mod client;
pub mod cooldown;

pub use client::{validate_email, EmailIssue, ResendClient, ResendOutcome, ResendResponse};
pub use cooldown::ResendCooldown;

pub const MSG_EMAIL_MISSING: &str = "Please enter your email address.";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MSG_RESENT: &str = "Verification email resent. Please check your inbox.";
pub const MSG_RESEND_REJECTED: &str = "Failed to resend verification email. Please try again.";
pub const MSG_REQUEST_FAILED: &str = "An error occurred. Please try again later.";
pub const MSG_NO_SERVER: &str = "No verification server configured.";

pub const MSG_TERMS_REQUIRED: &str = "Please accept the Terms and Conditions.";
pub const MSG_RESET_SENT: &str = "A password reset email has been sent.";
pub const MSG_RESET_REJECTED: &str = "An error occurred. Please try again.";
pub const MSG_RESET_LINK_SENT: &str = "A new password reset link has been sent to your email.";
pub const MSG_RESET_LINK_REJECTED: &str = "Failed to send reset link. Please try again.";
