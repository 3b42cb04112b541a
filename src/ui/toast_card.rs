// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of toasts.
//!
//! [`ToastCard`] is the [`ToastWidget`] the application stacks: a small card
//! with a severity-colored accent, a glyph, the message and a dismiss button.
//! [`CardFactory`] renders cards from per-kind [`ToastTemplate`]s, and
//! [`view_overlay`] draws every attached card at its offset.

use crate::toast::{Kind, Manager, Message, Phase, Scheduler, ToastId, ToastWidget, WidgetFactory};
use crate::ui::design_tokens::{
    border, motion, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Per-kind look of a toast card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastTemplate {
    pub accent: Color,
    pub glyph: &'static str,
}

impl ToastTemplate {
    /// Built-in template for `kind`.
    #[must_use]
    pub fn for_kind(kind: Kind) -> Self {
        match kind {
            Kind::Success => Self {
                accent: palette::SUCCESS_500,
                glyph: "✓",
            },
            Kind::Danger => Self {
                accent: palette::DANGER_500,
                glyph: "✕",
            },
            Kind::Warning => Self {
                accent: palette::WARNING_500,
                glyph: "!",
            },
            Kind::Info => Self {
                accent: palette::INFO_500,
                glyph: "i",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Fade {
    Hidden,
    In { since: Instant },
    Out { since: Instant, from: f32 },
}

/// One rendered toast.
#[derive(Debug, Clone)]
pub struct ToastCard {
    id: ToastId,
    template: ToastTemplate,
    message: String,
    height: f32,
    offset: f32,
    attached: bool,
    fade: Fade,
    fade_out: Duration,
}

impl ToastCard {
    #[must_use]
    pub fn new(id: ToastId, template: ToastTemplate, fade_out: Duration) -> Self {
        Self {
            id,
            template,
            message: String::new(),
            height: estimate_height(""),
            offset: 0.0,
            attached: false,
            fade: Fade::Hidden,
            fade_out,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Distance from the top of the window.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Card opacity at `now`.
    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        match self.fade {
            Fade::Hidden => opacity::TRANSPARENT,
            Fade::In { since } => fraction(now.saturating_duration_since(since), motion::FADE_IN),
            Fade::Out { since, from } => {
                from * (1.0 - fraction(now.saturating_duration_since(since), self.fade_out))
            }
        }
    }

    /// Whether the card still needs redraws at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.fade {
            Fade::Hidden => false,
            Fade::In { since } => now.saturating_duration_since(since) < motion::FADE_IN,
            Fade::Out { .. } => true,
        }
    }

    /// Whether the fade-out has run its full course at `now`.
    #[must_use]
    pub fn fade_out_finished(&self, now: Instant) -> bool {
        matches!(self.fade, Fade::Out { since, .. } if now.saturating_duration_since(since) >= self.fade_out)
    }

    /// Renders the card at its opacity for `now`.
    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let alpha = self.opacity_at(now);
        let accent = Color {
            a: alpha,
            ..self.template.accent
        };

        let glyph = Text::new(self.template.glyph)
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let message = Text::new(self.message.as_str())
            .size(typography::BODY)
            .line_height(typography::LINE_HEIGHT)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        let dismiss = button(Text::new("×").size(sizing::ICON_SM))
            .on_press(Message::DismissPressed(self.id))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(Container::new(message).width(Length::Fill))
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }
}

impl ToastWidget for ToastCard {
    fn set_text(&mut self, message: &str) {
        message.clone_into(&mut self.message);
        self.height = estimate_height(message);
    }

    fn attach(&mut self) {
        self.attached = true;
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_offset(&mut self, top: f32) {
        self.offset = top;
    }

    fn animate_in(&mut self) {
        self.fade = Fade::In {
            since: Instant::now(),
        };
    }

    fn animate_out(&mut self) {
        let now = Instant::now();
        self.fade = Fade::Out {
            since: now,
            from: self.opacity_at(now),
        };
    }

    fn detach(&mut self) {
        self.attached = false;
        self.fade = Fade::Hidden;
    }
}

/// Renders cards from the templates registered per kind.
#[derive(Debug, Clone)]
pub struct CardFactory {
    templates: HashMap<Kind, ToastTemplate>,
    fade_out: Duration,
}

impl CardFactory {
    /// A factory with no templates; every kind must be registered.
    #[must_use]
    pub fn new(fade_out: Duration) -> Self {
        Self {
            templates: HashMap::new(),
            fade_out,
        }
    }

    /// A factory with the built-in template of every kind.
    #[must_use]
    pub fn with_default_templates(fade_out: Duration) -> Self {
        let mut factory = Self::new(fade_out);
        for kind in Kind::ALL {
            factory.register(kind, ToastTemplate::for_kind(kind));
        }
        factory
    }

    pub fn register(&mut self, kind: Kind, template: ToastTemplate) {
        self.templates.insert(kind, template);
    }

    pub fn unregister(&mut self, kind: Kind) -> Option<ToastTemplate> {
        self.templates.remove(&kind)
    }

    #[must_use]
    pub fn template(&self, kind: Kind) -> Option<&ToastTemplate> {
        self.templates.get(&kind)
    }
}

impl WidgetFactory for CardFactory {
    type Widget = ToastCard;

    fn render(&mut self, kind: Kind, id: ToastId) -> Option<ToastCard> {
        let template = *self.templates.get(&kind)?;
        Some(ToastCard::new(id, template, self.fade_out))
    }
}

/// Height of a card showing `message`.
///
/// Wraps at [`sizing::TOAST_CHARS_PER_LINE`] and honors explicit line breaks.
#[must_use]
pub fn estimate_height(message: &str) -> f32 {
    let lines: usize = message
        .split('\n')
        .map(|line| line.chars().count().div_ceil(sizing::TOAST_CHARS_PER_LINE).max(1))
        .sum();
    let text_height = lines as f32 * typography::BODY * typography::LINE_HEIGHT;
    let row_height = text_height.max(sizing::ICON_SM + 2.0 * spacing::XXS);
    row_height + 2.0 * spacing::SM
}

/// Draws every attached card at its offset, right-aligned.
pub fn view_overlay<S: Scheduler>(
    toasts: &Manager<CardFactory, S>,
    now: Instant,
) -> Element<'_, Message> {
    let layers: Vec<Element<'_, Message>> = toasts
        .iter()
        .filter(|(_, card)| card.is_attached())
        .map(|(_, card)| {
            Container::new(card.view(now))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .padding(Padding {
                    top: card.offset(),
                    right: toasts.settings().margin,
                    bottom: 0.0,
                    left: 0.0,
                })
                .into()
        })
        .collect();

    if layers.is_empty() {
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Whether any toast is fading at `now`.
pub fn is_animating<S: Scheduler>(toasts: &Manager<CardFactory, S>, now: Instant) -> bool {
    toasts.iter().any(|(_, card)| card.is_animating(now))
}

/// Leaving toasts whose fade-out has finished at `now`.
pub fn finished_exits<S: Scheduler>(toasts: &Manager<CardFactory, S>, now: Instant) -> Vec<ToastId> {
    toasts
        .iter()
        .filter(|(id, card)| {
            toasts.phase(*id) == Some(Phase::Leaving) && card.fade_out_finished(now)
        })
        .map(|(id, _)| id)
        .collect()
}

fn fraction(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let background = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..background
        })),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: Color {
                a: alpha * opacity::OVERLAY_MEDIUM,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = Color {
        a: alpha,
        ..theme.extended_palette().background.base.text
    };
    let hover = |a: f32| {
        Some(iced::Background::Color(Color {
            a: a * alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
