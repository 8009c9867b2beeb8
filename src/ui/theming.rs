// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.
//!
//! [`AppearanceMode`] is the single dark-mode marker for the window: the Iced
//! [`Theme`] and every color in [`ColorScheme`] are derived from it.

use crate::domain::vqa::AppearanceMode;
use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for one appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub backdrop: Color,
    pub card: Color,
    pub input_background: Color,

    // Text
    pub text_primary: Color,
    pub text_muted: Color,
    pub title: Color,

    // Borders
    pub border: Color,
    pub border_active: Color,

    // Toggle
    pub toggle_background: Color,
    pub toggle_hover: Color,

    // Banners
    pub error_background: Color,
    pub error_text: Color,
    pub success_background: Color,
    pub success_border: Color,
    pub success_title: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            backdrop: palette::ACCENT_100,
            card: palette::WHITE,
            input_background: palette::WHITE,

            text_primary: palette::GRAY_800,
            text_muted: palette::GRAY_400,
            title: palette::PRIMARY_700,

            border: palette::GRAY_300,
            border_active: palette::PRIMARY_500,

            toggle_background: palette::GRAY_100,
            toggle_hover: palette::GRAY_200,

            error_background: palette::ERROR_100,
            error_text: palette::ERROR_700,
            success_background: palette::SUCCESS_50,
            success_border: palette::SUCCESS_200,
            success_title: palette::SUCCESS_700,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            backdrop: palette::GRAY_950,
            card: palette::GRAY_900,
            input_background: palette::GRAY_800,

            text_primary: palette::GRAY_100,
            text_muted: palette::GRAY_600,
            title: palette::PRIMARY_300,

            border: palette::GRAY_700,
            border_active: palette::PRIMARY_400,

            toggle_background: palette::GRAY_700,
            toggle_hover: palette::GRAY_600,

            error_background: palette::ERROR_900,
            error_text: palette::ERROR_300,
            success_background: palette::SUCCESS_900,
            success_border: palette::SUCCESS_700,
            success_title: palette::SUCCESS_300,
        }
    }

    /// Scheme matching `mode`.
    #[must_use]
    pub fn for_mode(mode: AppearanceMode) -> Self {
        match mode {
            AppearanceMode::Light => Self::light(),
            AppearanceMode::Dark => Self::dark(),
        }
    }
}

/// Iced theme used for built-in widget styling under `mode`.
#[must_use]
pub fn iced_theme(mode: AppearanceMode) -> Theme {
    match mode {
        AppearanceMode::Light => Theme::Light,
        AppearanceMode::Dark => Theme::Dark,
    }
}

/// Scheme for the theme currently applied to the window.
///
/// Style closures receive only the Iced theme, so this is how they reach the
/// palette for the active appearance.
#[must_use]
pub fn scheme_for_theme(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Dark) {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}

/// Appearance requested in `settings.toml` for startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearancePreference {
    #[default]
    Light,
    Dark,
    /// Follow the desktop setting detected at startup.
    System,
}

impl AppearancePreference {
    /// Resolves the preference to a concrete mode.
    /// System detection failures fall back to light.
    #[must_use]
    pub fn resolve(self) -> AppearanceMode {
        match self {
            AppearancePreference::Light => AppearanceMode::Light,
            AppearancePreference::Dark => AppearanceMode::Dark,
            AppearancePreference::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => AppearanceMode::Dark,
                _ => AppearanceMode::Light,
            },
        }
    }
}
