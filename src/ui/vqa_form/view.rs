// SPDX-License-Identifier: MPL-2.0
//! Form rendering.
//!
//! What to show is decided by the pure functions [`banner`],
//! [`submit_control`] and [`toggle_icon`]; [`view`] only lays them out.

use super::{Message, State};
use crate::domain::vqa::{AppearanceMode, FailureReason, PredictionResult, SubmissionState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::theming::scheme_for_theme;
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{icons, image_picker, styles};
use iced::font::{Font, Weight};
use iced::widget::{
    button, column, container, row, scrollable, text, text_input, tooltip, Space, Text,
};
use iced::{alignment, Element, Length, Theme};

/// The single message area below the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner<'a> {
    Error(&'a FailureReason),
    Result(&'a PredictionResult),
}

/// Banner for `submission`; `None` while idle or submitting.
#[must_use]
pub fn banner(submission: &SubmissionState) -> Option<Banner<'_>> {
    match submission {
        SubmissionState::Idle | SubmissionState::Submitting => None,
        SubmissionState::Succeeded(result) => Some(Banner::Result(result)),
        SubmissionState::Failed(reason) => Some(Banner::Error(reason)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    /// Whether pressing the button submits.
    pub enabled: bool,
    /// Spinner and busy label instead of the idle label.
    pub busy: bool,
}

#[must_use]
pub fn submit_control(submission: &SubmissionState) -> SubmitControl {
    let busy = submission.is_submitting();
    SubmitControl {
        enabled: !busy,
        busy,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

/// The toggle shows where a press leads: the sun in dark mode, the moon in
/// light mode.
#[must_use]
pub fn toggle_icon(mode: AppearanceMode) -> ToggleIcon {
    match mode {
        AppearanceMode::Dark => ToggleIcon::Sun,
        AppearanceMode::Light => ToggleIcon::Moon,
    }
}

fn failure_text(reason: &FailureReason, i18n: &I18n) -> String {
    match reason {
        FailureReason::Validation => i18n.tr("error-validation"),
        FailureReason::Transport => i18n.tr("error-transport"),
        FailureReason::Server(message) => message.clone(),
    }
}

fn bold<'a>(content: String) -> Text<'a> {
    text(content).font(Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    })
}

/// Renders the whole card. `notice` is an optional muted line shown under
/// the banner, used for startup warnings.
pub fn view<'a>(state: &'a State, i18n: &I18n, notice: Option<String>) -> Element<'a, Message> {
    let submission = state.submission();

    let title = row![
        icons::sized(icons::brand(), sizing::ICON_LG),
        bold(i18n.tr("app-title"))
            .size(typography::TITLE_LG)
            .style(|theme: &Theme| text::Style {
                color: Some(scheme_for_theme(theme).title),
            }),
        Space::new().width(Length::Fill),
        appearance_toggle(state.appearance(), i18n),
    ]
    .spacing(spacing::SM)
    .align_y(alignment::Vertical::Center);

    let image_field = column![
        bold(i18n.tr("image-label")).size(typography::BODY),
        image_picker::view(state.picker(), state.selection(), i18n).map(Message::Picker),
    ]
    .spacing(spacing::XS);

    let help = tooltip(
        icons::sized(icons::help_circle(), sizing::ICON_SM).style(icons::muted),
        container(text(i18n.tr("question-help")).size(typography::CAPTION))
            .padding(spacing::XS)
            .max_width(sizing::CARD_MAX_WIDTH / 2.0)
            .style(styles::container::tooltip),
        tooltip::Position::Top,
    )
    .gap(spacing::XXS);

    let question_field = column![
        row![bold(i18n.tr("question-label")).size(typography::BODY), help]
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center),
        text_input(&i18n.tr("question-placeholder"), state.question().as_str())
            .on_input(Message::QuestionChanged)
            .on_submit(Message::SubmitPressed)
            .padding(spacing::SM)
            .size(typography::BODY_LG)
            .style(styles::text_input::question),
    ]
    .spacing(spacing::XS);

    let mut card = column![
        title,
        image_field,
        question_field,
        submit_button(state, i18n)
    ]
    .spacing(spacing::LG);

    if let Some(banner) = banner(submission) {
        card = card.push(banner_view(banner, i18n));
    }

    if let Some(notice) = notice {
        card = card.push(
            text(notice)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(scheme_for_theme(theme).text_muted),
                }),
        );
    }

    let card = container(card)
        .padding(spacing::XL)
        .max_width(sizing::CARD_MAX_WIDTH)
        .style(styles::container::card);

    container(scrollable(
        container(card).padding(spacing::LG).center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .center_y(Length::Fill)
    .style(styles::container::backdrop)
    .into()
}

fn appearance_toggle<'a>(mode: AppearanceMode, i18n: &I18n) -> Element<'a, Message> {
    let (icon, hint) = match toggle_icon(mode) {
        ToggleIcon::Sun => (icons::sun(), i18n.tr("appearance-toggle-light")),
        ToggleIcon::Moon => (icons::moon(), i18n.tr("appearance-toggle-dark")),
    };

    let toggle = button(icons::sized(icon, sizing::ICON_SM).style(icons::tinted))
        .padding(spacing::XS)
        .style(styles::button::toggle)
        .on_press(Message::ToggleAppearance);

    tooltip(
        toggle,
        container(text(hint).size(typography::CAPTION))
            .padding(spacing::XS)
            .style(styles::container::tooltip),
        tooltip::Position::Left,
    )
    .gap(spacing::XXS)
    .into()
}

fn submit_button<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let control = submit_control(state.submission());

    let label: Element<'a, Message> = if control.busy {
        row![
            AnimatedSpinner::new(palette::WHITE, state.spinner_rotation())
                .with_size(sizing::ICON_SM)
                .into_element(),
            text(i18n.tr("submit-busy")).size(typography::BODY_LG),
        ]
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .into()
    } else {
        text(i18n.tr("submit-idle")).size(typography::BODY_LG).into()
    };

    let submit = button(
        container(label)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::submit);

    if control.enabled {
        submit.on_press(Message::SubmitPressed).into()
    } else {
        submit.into()
    }
}

fn banner_view<'a>(banner: Banner<'_>, i18n: &I18n) -> Element<'a, Message> {
    match banner {
        Banner::Error(reason) => container(text(failure_text(reason, i18n)).size(typography::BODY))
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::error_banner)
            .into(),
        Banner::Result(result) => {
            let line = |label: String, value: String| {
                row![bold(label).size(typography::BODY), text(value).size(typography::BODY)]
                    .spacing(spacing::XS)
            };

            container(
                column![
                    bold(i18n.tr("result-title"))
                        .size(typography::TITLE_SM)
                        .style(|theme: &Theme| text::Style {
                            color: Some(scheme_for_theme(theme).success_title),
                        }),
                    line(i18n.tr("result-question"), result.question.clone()),
                    line(i18n.tr("result-answer"), result.predicted_answer.clone()),
                ]
                .spacing(spacing::XS),
            )
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::success_panel)
            .into()
        }
    }
}
