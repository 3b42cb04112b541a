// SPDX-License-Identifier: MPL-2.0
//! Password reset request panel.
//!
//! Two screens share this flow: "forgot password" asks for the address and
//! the terms checkbox, while the expired-link screen only asks for the
//! address. After a failed request the button stays locked for
//! [`RETRY_DELAY`]; after a successful one it stays locked for good.

use crate::error::Error;
use crate::toast::Kind;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::verification::{
    validate_email, EmailIssue, ResendOutcome, MSG_REQUEST_FAILED, MSG_RESET_LINK_REJECTED,
    MSG_RESET_LINK_SENT, MSG_RESET_REJECTED, MSG_RESET_SENT, MSG_TERMS_REQUIRED,
};
use iced::widget::{button, checkbox, text, text_input, Column};
use iced::{Element, Length};
use std::time::Duration;

/// How long the submit control stays locked after a failed request.
pub const RETRY_DELAY: Duration = Duration::from_secs(3);

const LONG_TOAST: Duration = Duration::from_secs(5);

/// Which screen the panel stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    ForgotPassword,
    ExpiredLink,
}

impl Mode {
    #[must_use]
    pub fn requires_terms(self) -> bool {
        matches!(self, Mode::ForgotPassword)
    }

    /// Text shown when the server rejects without saying why.
    #[must_use]
    pub fn rejection_fallback(self) -> &'static str {
        match self {
            Mode::ForgotPassword => MSG_RESET_REJECTED,
            Mode::ExpiredLink => MSG_RESET_LINK_REJECTED,
        }
    }

    fn sent(self) -> (&'static str, Option<Duration>) {
        match self {
            Mode::ForgotPassword => (MSG_RESET_SENT, Some(LONG_TOAST)),
            Mode::ExpiredLink => (MSG_RESET_LINK_SENT, None),
        }
    }

    fn rejection_duration(self) -> Option<Duration> {
        match self {
            Mode::ForgotPassword => None,
            Mode::ExpiredLink => Some(LONG_TOAST),
        }
    }

    fn title(self) -> &'static str {
        match self {
            Mode::ForgotPassword => "Forgot your password?",
            Mode::ExpiredLink => "This reset link has expired",
        }
    }

    fn button_label(self) -> &'static str {
        match self {
            Mode::ForgotPassword => "Reset password",
            Mode::ExpiredLink => "Send a new link",
        }
    }
}

/// Why the form was not submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Email(EmailIssue),
    TermsNotAccepted,
}

impl FieldIssue {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            FieldIssue::Email(issue) => issue.message(),
            FieldIssue::TermsNotAccepted => MSG_TERMS_REQUIRED,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    TermsToggled(bool),
    SubmitPressed,
    /// The lock after a failed request ran out.
    RetryReady,
}

/// Effects the parent has to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Toast {
        kind: Kind,
        message: String,
        duration: Option<Duration>,
    },
    InvalidInput(FieldIssue),
    /// Send a reset request for this (validated) address.
    Submit { email: String },
    /// Show a danger toast and send [`Message::RetryReady`] after `retry_after`.
    Failed {
        message: String,
        duration: Option<Duration>,
        retry_after: Duration,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Ready,
    Sending,
    Sent,
    Locked,
}

#[derive(Debug, Clone)]
pub struct State {
    mode: Mode,
    email: String,
    terms_accepted: bool,
    status: Status,
}

impl State {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            email: String::new(),
            terms_accepted: false,
            status: Status::Ready,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == Status::Sending
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.status == Status::Ready
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::EmailChanged(email) => {
                self.email = email;
                Effect::None
            }
            Message::TermsToggled(accepted) => {
                self.terms_accepted = accepted;
                Effect::None
            }
            Message::SubmitPressed => {
                if !self.can_submit() {
                    return Effect::None;
                }
                match self.validate() {
                    Ok(email) => {
                        self.status = Status::Sending;
                        Effect::Submit { email }
                    }
                    Err(issue) => Effect::InvalidInput(issue),
                }
            }
            Message::RetryReady => {
                if self.status == Status::Locked {
                    self.status = Status::Ready;
                }
                Effect::None
            }
        }
    }

    fn validate(&self) -> Result<String, FieldIssue> {
        let email = validate_email(&self.email).map_err(FieldIssue::Email)?;
        if self.mode.requires_terms() && !self.terms_accepted {
            return Err(FieldIssue::TermsNotAccepted);
        }
        Ok(email.to_string())
    }

    /// Re-enables the control when a request could not be started.
    pub fn cancel_request(&mut self) {
        self.status = Status::Ready;
    }

    /// Applies the result of a reset request.
    pub fn finish(&mut self, result: &Result<ResendOutcome, Error>) -> Effect {
        let (message, duration) = match result {
            Ok(ResendOutcome::Sent) => {
                self.status = Status::Sent;
                let (message, duration) = self.mode.sent();
                return Effect::Toast {
                    kind: Kind::Success,
                    message: message.to_string(),
                    duration,
                };
            }
            Ok(ResendOutcome::Rejected(message)) => {
                (message.clone(), self.mode.rejection_duration())
            }
            Err(_) => (MSG_REQUEST_FAILED.to_string(), None),
        };
        self.status = Status::Locked;
        Effect::Failed {
            message,
            duration,
            retry_after: RETRY_DELAY,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let email_input = text_input("you@example.com", &self.email)
            .on_input(Message::EmailChanged)
            .on_submit(Message::SubmitPressed)
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fixed(sizing::INPUT_WIDTH));

        let label = if self.is_sending() {
            "Sending..."
        } else {
            self.mode.button_label()
        };
        let submit = button(text(label).size(typography::BODY))
            .on_press_maybe(self.can_submit().then_some(Message::SubmitPressed))
            .padding([spacing::XS, spacing::SM]);

        let mut column = Column::new()
            .spacing(spacing::SM)
            .push(text(self.mode.title()).size(typography::TITLE_SM))
            .push(email_input);

        if self.mode.requires_terms() {
            column = column.push(
                checkbox(self.terms_accepted)
                    .label("I accept the Terms and Conditions")
                    .text_size(typography::BODY)
                    .on_toggle(Message::TermsToggled),
            );
        }

        column.push(submit).into()
    }
}
