// SPDX-License-Identifier: MPL-2.0
//! "Verify your email" panel with a resend control gated by a countdown.

use crate::error::Error;
use crate::toast::Kind;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::verification::{
    validate_email, EmailIssue, ResendCooldown, ResendOutcome, MSG_RESENT, MSG_REQUEST_FAILED,
};
use iced::widget::{button, progress_bar, text, text_input, Column, Container, Row};
use iced::{alignment, Element, Length};
use std::time::Duration;

/// Transport failures stay on screen longer than other outcomes.
pub const NETWORK_ERROR_TOAST: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    ResendPressed,
    /// One second of the cooldown elapsed.
    Tick,
}

/// Effects the parent has to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Show a toast.
    Toast {
        kind: Kind,
        message: String,
        duration: Option<Duration>,
    },
    /// The email field failed validation; report it as a danger toast.
    InvalidEmail(EmailIssue),
    /// Send a resend request for this (validated) address.
    Resend { email: String },
}

#[derive(Debug, Clone)]
pub struct State {
    email: String,
    cooldown: ResendCooldown,
    sending: bool,
}

impl State {
    /// Panel with a cooldown of `total_secs`, starting at `initial_secs`.
    #[must_use]
    pub fn new(total_secs: u32, initial_secs: u32) -> Self {
        Self {
            email: String::new(),
            cooldown: ResendCooldown::with_initial(total_secs, initial_secs),
            sending: false,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn cooldown(&self) -> &ResendCooldown {
        &self.cooldown
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Whether the resend control accepts presses.
    #[must_use]
    pub fn can_resend(&self) -> bool {
        self.cooldown.is_ready() && !self.sending
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::EmailChanged(email) => {
                self.email = email;
                Effect::None
            }
            Message::ResendPressed => {
                if !self.can_resend() {
                    return Effect::None;
                }
                match validate_email(&self.email) {
                    Ok(email) => {
                        let email = email.to_string();
                        self.sending = true;
                        Effect::Resend { email }
                    }
                    Err(issue) => Effect::InvalidEmail(issue),
                }
            }
            Message::Tick => {
                self.cooldown.tick();
                Effect::None
            }
        }
    }

    /// Re-enables the control when a request could not be started.
    pub fn cancel_request(&mut self) {
        self.sending = false;
    }

    /// Applies the result of a resend request and returns the toast to show.
    pub fn finish(&mut self, result: &Result<ResendOutcome, Error>) -> Effect {
        self.sending = false;
        let (kind, message, duration) = match result {
            Ok(ResendOutcome::Sent) => {
                self.cooldown.restart();
                (Kind::Success, MSG_RESENT.to_string(), None)
            }
            Ok(ResendOutcome::Rejected(message)) => (Kind::Danger, message.clone(), None),
            Err(_) => (
                Kind::Danger,
                MSG_REQUEST_FAILED.to_string(),
                Some(NETWORK_ERROR_TOAST),
            ),
        };
        Effect::Toast {
            kind,
            message,
            duration,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = text("Verify your email").size(typography::TITLE_SM);
        let hint = text("Didn't get the email? Enter your address to receive a new link.")
            .size(typography::BODY);

        let email_input = text_input("you@example.com", &self.email)
            .on_input(Message::EmailChanged)
            .on_submit(Message::ResendPressed)
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fixed(sizing::INPUT_WIDTH));

        let label = if self.sending {
            "Sending..."
        } else {
            "Resend verification email"
        };
        let resend = button(text(label).size(typography::BODY))
            .on_press_maybe(self.can_resend().then_some(Message::ResendPressed))
            .padding([spacing::XS, spacing::SM]);

        let countdown = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(progress_bar(0.0..=1.0, self.cooldown.progress()))
                    .width(Length::Fixed(sizing::INPUT_WIDTH / 2.0))
                    .height(Length::Fixed(spacing::XS)),
            )
            .push(text(self.cooldown.label()).size(typography::CAPTION));

        Column::new()
            .spacing(spacing::SM)
            .push(title)
            .push(hint)
            .push(email_input)
            .push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(alignment::Vertical::Center)
                    .push(resend)
                    .push(countdown),
            )
            .into()
    }
}
