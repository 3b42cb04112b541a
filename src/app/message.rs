// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::toast::{self, Timer};
use crate::ui::{password_reset_panel, verification_panel};
use crate::verification::ResendOutcome;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(toast::Message),
    ShowDemo(DemoToast),
    Verification(verification_panel::Message),
    ResendCompleted(Result<ResendOutcome, Error>),
    PasswordReset(password_reset_panel::Message),
    ResetCompleted(Result<ResendOutcome, Error>),
    /// Redraw tick while a toast is fading.
    Frame(Instant),
}

/// Routes a fired toast timer back into the toast manager.
pub(crate) fn timer_fired(timer: Timer) -> Message {
    Message::Toast(toast::Message::Timer(timer))
}

/// Toasts offered by the demo buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoToast {
    Success,
    Danger,
    Warning,
    Info,
    /// A kind with no template, to exercise the error path.
    Unknown,
}

impl DemoToast {
    pub const ALL: [DemoToast; 5] = [
        DemoToast::Success,
        DemoToast::Danger,
        DemoToast::Warning,
        DemoToast::Info,
        DemoToast::Unknown,
    ];

    #[must_use]
    pub fn kind_name(self) -> &'static str {
        match self {
            DemoToast::Success => "success",
            DemoToast::Danger => "danger",
            DemoToast::Warning => "warning",
            DemoToast::Info => "info",
            DemoToast::Unknown => "notice",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            DemoToast::Success => "Item moved successfully.",
            DemoToast::Danger => "Item has been deleted.",
            DemoToast::Warning => "Storage is almost full. Older items may be removed soon.",
            DemoToast::Info => "A new version is available.",
            DemoToast::Unknown => "This toast has no template.",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DemoToast::Success => "Success",
            DemoToast::Danger => "Danger",
            DemoToast::Warning => "Warning",
            DemoToast::Info => "Info",
            DemoToast::Unknown => "Unknown kind",
        }
    }
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Verification server base URL; overrides `[verification] server_url`.
    pub server_url: Option<String>,
    /// CSRF token sent along with resend requests.
    pub csrf_token: Option<String>,
    /// Start with the short cooldown shown after a failed verification.
    pub failed_verification: bool,
    /// Show the expired reset link screen instead of "forgot password".
    pub expired_reset_link: bool,
}
