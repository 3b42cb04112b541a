// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the toast manager, the verification and password
//! reset panels and diagnostics together and routes top-level messages to them. Toast timers
//! run as iced tasks queued by [`TaskScheduler`]; every `update` hands the
//! queued tasks to the runtime.

mod message;
pub mod paths;
pub mod scheduler;

pub use message::{DemoToast, Flags, Message};
pub use scheduler::TaskScheduler;

use crate::config::{self, Config, CONFIG_LOAD_WARNING};
use crate::diagnostics::{
    BufferCapacity, DiagnosticsCollector, DiagnosticsHandle, ErrorEvent, UserAction, WarningEvent,
    WarningType,
};
use crate::error::Error;
use crate::toast::{self, Kind, Manager, ToastSettings};
use crate::ui::design_tokens::{motion, sizing, spacing, typography};
use crate::ui::password_reset_panel::{self, Mode as ResetMode};
use crate::ui::toast_card::{self, CardFactory};
use crate::ui::verification_panel::{self, Effect};
use crate::verification::{ResendClient, ResendOutcome, MSG_NO_SERVER};
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{time, window, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

/// The toast manager as the application drives it.
pub type Toasts = Manager<CardFactory, TaskScheduler<Message>>;

const CONFIG_WARNING_TEXT: &str = "Settings could not be read. Default settings are in use.";

/// Root application state.
pub struct App {
    toasts: Toasts,
    verification: verification_panel::State,
    reset: password_reset_panel::State,
    diagnostics: DiagnosticsCollector,
    client: Option<ResendClient>,
    csrf_token: String,
    now: Instant,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts)
            .field("verification", &self.verification)
            .field("reset", &self.reset)
            .field("diagnostics", &self.diagnostics)
            .field("has_client", &self.client.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::MIN_WINDOW_WIDTH,
            sizing::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot function; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        Self::with_config(&config, config_warning, flags)
    }

    fn with_config(
        config: &Config,
        config_warning: Option<String>,
        flags: Flags,
    ) -> (Self, Task<Message>) {
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = diagnostics.handle();

        let settings = ToastSettings::from(&config.notifications);
        let factory = CardFactory::with_default_templates(settings.exit_transition);
        let mut toasts =
            Manager::with_settings(factory, TaskScheduler::new(message::timer_fired), settings);
        toasts.set_diagnostics(handle.clone());

        let total = config.verification.resend_cooldown_secs();
        let initial = if flags.failed_verification {
            config.verification.failed_verification_cooldown_secs()
        } else {
            total
        };

        let reset_mode = if flags.expired_reset_link {
            ResetMode::ExpiredLink
        } else {
            ResetMode::ForgotPassword
        };

        let server_url = flags
            .server_url
            .or_else(|| config.verification.server_url.clone());
        let client = server_url.and_then(|url| match ResendClient::new(&url) {
            Ok(client) => Some(client),
            Err(err) => {
                handle.log_error(ErrorEvent::new(err.error_type(), err.to_string()));
                None
            }
        });

        let mut app = App {
            toasts,
            verification: verification_panel::State::new(total, initial),
            reset: password_reset_panel::State::new(reset_mode),
            diagnostics,
            client,
            csrf_token: flags.csrf_token.unwrap_or_default(),
            now: Instant::now(),
        };

        if let Some(key) = config_warning {
            app.handle()
                .log_warning(WarningEvent::new(WarningType::ConfigurationIssue, key.as_str()));
            if key == CONFIG_LOAD_WARNING {
                app.toasts
                    .show(Kind::Warning.as_str(), CONFIG_WARNING_TEXT, None);
            }
        }

        app.diagnostics.process_pending();
        let task = app.toasts.scheduler_mut().take_tasks();
        (app, task)
    }

    fn title(&self) -> String {
        "Iced Toasts".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn handle(&self) -> DiagnosticsHandle {
        self.diagnostics.handle()
    }

    fn subscription(&self) -> Subscription<Message> {
        let frames = if toast_card::is_animating(&self.toasts, self.now) {
            time::every(motion::FRAME).map(Message::Frame)
        } else {
            Subscription::none()
        };

        let cooldown = if self.verification.cooldown().is_ready() {
            Subscription::none()
        } else {
            time::every(Duration::from_secs(1))
                .map(|_| Message::Verification(verification_panel::Message::Tick))
        };

        Subscription::batch([frames, cooldown])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();

        let task = match message {
            Message::Toast(toast_message) => {
                self.toasts.handle_message(toast_message);
                Task::none()
            }
            Message::ShowDemo(demo) => {
                self.toasts.show(demo.kind_name(), demo.message(), None);
                Task::none()
            }
            Message::Verification(panel_message) => {
                let effect = self.verification.handle(panel_message);
                self.apply(effect)
            }
            Message::ResendCompleted(result) => {
                self.log_outcome(&result);
                let effect = self.verification.finish(&result);
                self.apply(effect)
            }
            Message::PasswordReset(panel_message) => {
                let effect = self.reset.handle(panel_message);
                self.apply_reset(effect)
            }
            Message::ResetCompleted(result) => {
                self.log_outcome(&result);
                let effect = self.reset.finish(&result);
                self.apply_reset(effect)
            }
            Message::Frame(now) => {
                self.now = now;
                for id in toast_card::finished_exits(&self.toasts, now) {
                    self.toasts
                        .handle_message(toast::Message::TransitionEnded(id));
                }
                Task::none()
            }
        };

        self.diagnostics.process_pending();
        Task::batch([task, self.toasts.scheduler_mut().take_tasks()])
    }

    fn apply(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Toast {
                kind,
                message,
                duration,
            } => {
                self.toasts.show(kind.as_str(), &message, duration);
                Task::none()
            }
            Effect::InvalidEmail(issue) => {
                self.report_invalid_input(issue.message());
                Task::none()
            }
            Effect::Resend { email } => {
                let Some(client) = self.client.clone() else {
                    self.verification.cancel_request();
                    self.report_no_server();
                    return Task::none();
                };
                self.handle().log_action(UserAction::ResendVerification);
                let csrf_token = self.csrf_token.clone();
                Task::perform(
                    async move { client.resend(&email, &csrf_token).await },
                    Message::ResendCompleted,
                )
            }
        }
    }

    fn apply_reset(&mut self, effect: password_reset_panel::Effect) -> Task<Message> {
        use password_reset_panel::Effect as Reset;

        match effect {
            Reset::None => Task::none(),
            Reset::Toast {
                kind,
                message,
                duration,
            } => {
                self.toasts.show(kind.as_str(), &message, duration);
                Task::none()
            }
            Reset::InvalidInput(issue) => {
                self.report_invalid_input(issue.message());
                Task::none()
            }
            Reset::Submit { email } => {
                let Some(client) = self.client.clone() else {
                    self.reset.cancel_request();
                    self.report_no_server();
                    return Task::none();
                };
                self.handle().log_action(UserAction::RequestPasswordReset);
                let csrf_token = self.csrf_token.clone();
                let fallback = self.reset.mode().rejection_fallback();
                Task::perform(
                    async move {
                        client
                            .request_password_reset(&email, &csrf_token)
                            .await
                            .map(|response| response.outcome_or(fallback))
                    },
                    Message::ResetCompleted,
                )
            }
            Reset::Failed {
                message,
                duration,
                retry_after,
            } => {
                self.toasts.show(Kind::Danger.as_str(), &message, duration);
                Task::perform(
                    async move { tokio::time::sleep(retry_after).await },
                    |()| Message::PasswordReset(password_reset_panel::Message::RetryReady),
                )
            }
        }
    }

    fn log_outcome(&self, result: &Result<ResendOutcome, Error>) {
        match result {
            Ok(ResendOutcome::Sent) => {}
            Ok(ResendOutcome::Rejected(reason)) => self.handle().log_warning(WarningEvent::new(
                WarningType::RequestRejected,
                reason.as_str(),
            )),
            Err(err) => self
                .handle()
                .log_error(ErrorEvent::new(err.error_type(), err.to_string())),
        }
    }

    fn report_invalid_input(&mut self, message: &str) {
        self.handle()
            .log_warning(WarningEvent::new(WarningType::InvalidInput, message));
        self.toasts.show(Kind::Danger.as_str(), message, None);
    }

    fn report_no_server(&mut self) {
        self.handle()
            .log_warning(WarningEvent::new(WarningType::ConfigurationIssue, MSG_NO_SERVER));
        self.toasts.show(Kind::Warning.as_str(), MSG_NO_SERVER, None);
    }

    fn view(&self) -> Element<'_, Message> {
        let demo_buttons = DemoToast::ALL
            .into_iter()
            .fold(Row::new().spacing(spacing::XS), |row, demo| {
                row.push(
                    button(text(demo.label()).size(typography::BODY))
                        .on_press(Message::ShowDemo(demo))
                        .padding([spacing::XS, spacing::SM]),
                )
            });

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .push(text("Toast notifications").size(typography::TITLE_MD))
            .push(demo_buttons)
            .push(
                Row::new()
                    .spacing(spacing::XL)
                    .push(self.verification.view().map(Message::Verification))
                    .push(self.reset.view().map(Message::PasswordReset)),
            );

        let overlay = toast_card::view_overlay(&self.toasts, self.now).map(Message::Toast);

        Stack::new()
            .push(
                Container::new(content)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
