// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Prediction Defaults
// ==========================================================================

/// Prediction endpoint used when neither the CLI nor `settings.toml` sets one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// User agent sent with prediction requests.
pub const USER_AGENT: &str = concat!("IcedVqa/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when no other source resolves to an available bundle.
pub const DEFAULT_LOCALE: &str = "en-US";
