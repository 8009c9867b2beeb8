// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are drawn with `currentColor` strokes, so one asset serves both
//! appearances: callers tint them with [`tinted`]. Handles are created once
//! and cached in a `OnceLock`.

use crate::ui::theming::scheme_for_theme;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(sun, "sun.svg", "Sun: shown while the dark appearance is active.");
define_icon!(moon, "moon.svg", "Crescent moon: shown in the light appearance.");
define_icon!(image, "image.svg", "Framed picture for the empty drop region.");
define_icon!(help_circle, "help_circle.svg", "Question mark in a circle.");

/// Full-color brand mark for the title row. Not meant to be tinted.
pub fn brand<'a>() -> Svg<'a> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    static DATA: &[u8] =
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/branding/iced_vqa.svg"));
    Svg::new(HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone())
}

/// Square icon of `size` logical pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Strokes the icon in the primary text color of the current theme.
pub fn tinted(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(scheme_for_theme(theme).text_primary),
    }
}

/// Strokes the icon in the muted text color of the current theme.
pub fn muted(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(scheme_for_theme(theme).text_muted),
    }
}
