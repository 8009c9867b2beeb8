// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette, radius};
use crate::ui::theming::scheme_for_theme;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Question field.
pub fn question(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let scheme = scheme_for_theme(theme);
    let border_color = match status {
        text_input::Status::Focused { .. } => scheme.border_active,
        text_input::Status::Hovered => scheme.text_muted,
        text_input::Status::Active | text_input::Status::Disabled => scheme.border,
    };

    text_input::Style {
        background: Background::Color(scheme.input_background),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        icon: scheme.text_muted,
        placeholder: scheme.text_muted,
        value: scheme.text_primary,
        selection: Color {
            a: 0.4,
            ..palette::PRIMARY_400
        },
    }
}
