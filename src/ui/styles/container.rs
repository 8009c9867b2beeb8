// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::scheme_for_theme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Full-window background behind the card.
pub fn backdrop(theme: &Theme) -> container::Style {
    let scheme = scheme_for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.backdrop)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// The centered form card.
pub fn card(theme: &Theme) -> container::Style {
    let scheme = scheme_for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.card)),
        text_color: Some(scheme.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Dashed-look drop region; the border lights up while a file hovers.
pub fn drop_region(hovering: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = scheme_for_theme(theme);
        let border_color = if hovering {
            scheme.border_active
        } else {
            scheme.border
        };

        container::Style {
            background: Some(Background::Color(scheme.input_background)),
            text_color: Some(scheme.text_muted),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

pub fn error_banner(theme: &Theme) -> container::Style {
    let scheme = scheme_for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.error_background)),
        text_color: Some(scheme.error_text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn success_panel(theme: &Theme) -> container::Style {
    let scheme = scheme_for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.success_background)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.success_border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Tooltip bubble, inverted against the card so it stands out.
pub fn tooltip(theme: &Theme) -> container::Style {
    let scheme = scheme_for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.text_primary)),
        text_color: Some(scheme.card),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}
