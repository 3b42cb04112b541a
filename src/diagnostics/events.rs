// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events record what the notification layer and the verification panel
//! did, so that silent failures (a missing toast template, a rejected
//! resend) can still be inspected after the fact.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Categories of warnings that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The settings file could not be read and defaults were used.
    ConfigurationIssue,
    /// The server declined a request.
    RequestRejected,
    /// User input failed client-side validation.
    InvalidInput,
}

/// Categories of errors that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A toast was requested for a kind without a template.
    TemplateNotFound,
    IoError,
    ConfigError,
    NetworkError,
}

/// User-initiated or notification lifecycle actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A toast became visible.
    ShowToast {
        kind: String,
    },
    /// A toast finished its exit transition and was removed.
    DismissToast {
        kind: String,
        /// Whether the dismiss control was pressed (vs. timer expiry).
        manual: bool,
    },
    /// A verification email resend was requested.
    ResendVerification,
    /// A password reset link was requested.
    RequestPasswordReset,
}

/// Details of a warning event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// Details of an error event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        #[serde(flatten)]
        action: UserAction,
    },
    Warning {
        event: WarningEvent,
    },
    Error {
        event: ErrorEvent,
    },
}

impl DiagnosticEventKind {
    /// Returns true for warning and error events.
    #[must_use]
    pub fn is_problem(&self) -> bool {
        matches!(self, Self::Warning { .. } | Self::Error { .. })
    }
}
