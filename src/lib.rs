// SPDX-License-Identifier: MPL-2.0
//! `iced_vqa` is a desktop client for a visual question answering service,
//! built with the Iced GUI framework.
//!
//! Pick an image, type a question, and the answer predicted by the remote
//! model is shown below the form. Localization uses Fluent; appearance follows
//! a light/dark toggle.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod prediction;
pub mod ui;
