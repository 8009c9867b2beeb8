// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`vqa_form`] - The question form and its submission state machine
//! - [`image_picker`] - File dialog and drag-and-drop intake
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Button, container and input styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/dark color schemes
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod image_picker;
pub mod styles;
pub mod theming;
pub mod vqa_form;
pub mod widgets;
