// SPDX-License-Identifier: MPL-2.0
//! Request shapes, email validation and the HTTP client.

use super::{MSG_EMAIL_INVALID, MSG_EMAIL_MISSING, MSG_RESEND_REJECTED};
use crate::error::{Error, Result};
use regex::Regex;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Path of the resend endpoint, relative to the server root.
pub const RESEND_PATH: &str = "/resend-verification-email";
/// Path of the password reset endpoint, relative to the server root.
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile"));

/// Why an email field was rejected before sending anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailIssue {
    Missing,
    Invalid,
}

impl EmailIssue {
    /// Text shown to the user in a danger toast.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            EmailIssue::Missing => MSG_EMAIL_MISSING,
            EmailIssue::Invalid => MSG_EMAIL_INVALID,
        }
    }
}

/// Trims `input` and checks it looks like an email address.
///
/// # Errors
///
/// Returns the [`EmailIssue`] to report when the field is empty or malformed.
pub fn validate_email(input: &str) -> std::result::Result<&str, EmailIssue> {
    let email = input.trim();
    if email.is_empty() {
        Err(EmailIssue::Missing)
    } else if !EMAIL_PATTERN.is_match(email) {
        Err(EmailIssue::Invalid)
    } else {
        Ok(email)
    }
}

/// JSON body of a resend or password reset request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResendRequest<'a> {
    pub email: &'a str,
    #[serde(rename = "_csrf_token")]
    pub csrf_token: &'a str,
}

/// JSON body of the server's answer to either request.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ResendResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// What the server made of a resend request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendOutcome {
    Sent,
    /// Declined, with the text to show.
    Rejected(String),
}

impl ResendResponse {
    /// Converts the response, using `fallback` when a rejection carries no text.
    #[must_use]
    pub fn outcome_or(self, fallback: &str) -> ResendOutcome {
        if self.success {
            return ResendOutcome::Sent;
        }
        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        ResendOutcome::Rejected(message)
    }
}

impl From<ResendResponse> for ResendOutcome {
    fn from(response: ResendResponse) -> Self {
        response.outcome_or(MSG_RESEND_REJECTED)
    }
}

/// Sends account email requests to the verification server.
#[derive(Debug, Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    endpoint: Url,
    reset_endpoint: Url,
}

impl ResendClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let invalid = |e: &dyn std::fmt::Display| {
            Error::Config(format!("invalid server url {base_url:?}: {e}"))
        };
        let base = Url::parse(base_url).map_err(|e| invalid(&e))?;
        let endpoint = base.join(RESEND_PATH).map_err(|e| invalid(&e))?;
        let reset_endpoint = base.join(FORGOT_PASSWORD_PATH).map_err(|e| invalid(&e))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            reset_endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn reset_endpoint(&self) -> &Url {
        &self.reset_endpoint
    }

    /// Asks the server to send the verification email again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] when the request fails or the response
    /// is not the expected JSON.
    pub async fn resend(&self, email: &str, csrf_token: &str) -> Result<ResendOutcome> {
        let response = self.post(&self.endpoint, email, csrf_token).await?;
        Ok(response.into())
    }

    /// Asks the server to mail a password reset link.
    ///
    /// The raw response is returned since each screen words its own
    /// rejection fallback (see [`ResendResponse::outcome_or`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] when the request fails or the response
    /// is not the expected JSON.
    pub async fn request_password_reset(
        &self,
        email: &str,
        csrf_token: &str,
    ) -> Result<ResendResponse> {
        self.post(&self.reset_endpoint, email, csrf_token).await
    }

    async fn post(&self, url: &Url, email: &str, csrf_token: &str) -> Result<ResendResponse> {
        let request = ResendRequest { email, csrf_token };
        let response = self
            .http
            .post(url.clone())
            .json(&request)
            .send()
            .await?
            .json()
            .await?;
        Ok(response)
    }
}
