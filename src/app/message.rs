// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::ui::vqa_form;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Form(vqa_form::Message),
    /// The user asked to close the window; teardown runs before exit.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional prediction endpoint; wins over `settings.toml`.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_VQA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
