// SPDX-License-Identifier: MPL-2.0
//! Localized UI strings.
//!
//! Translations are Fluent (`.ftl`) files embedded from `assets/i18n/`. The
//! active locale is chosen once at startup: `--lang`, then the config file,
//! then the OS locale, then `en-US`.

pub mod fluent;

pub use fluent::I18n;
