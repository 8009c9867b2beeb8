// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::scheme_for_theme;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Full-width submit button.
///
/// A button without `on_press` reports [`button::Status::Disabled`], which is
/// how the busy state is rendered.
pub fn submit(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Active => (palette::PRIMARY_600, palette::PRIMARY_700, shadow::SM),
        button::Status::Hovered => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM),
        button::Status::Pressed => (palette::PRIMARY_700, palette::PRIMARY_700, shadow::NONE),
        button::Status::Disabled => (palette::PRIMARY_300, palette::PRIMARY_300, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Round light/dark toggle in the card corner.
pub fn toggle(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = scheme_for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => scheme.toggle_hover,
        button::Status::Active | button::Status::Disabled => scheme.toggle_background,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: scheme.text_primary,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
