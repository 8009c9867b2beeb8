// SPDX-License-Identifier: MPL-2.0
//! Application root: wires configuration, localization, the prediction
//! client and the form into one Iced application.
//!
//! The shell owns the only side effect the form cannot perform itself, the
//! HTTP request, and the window lifecycle.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_ENDPOINT};
use crate::i18n::fluent::I18n;
use crate::prediction::PredictionClient;
use crate::ui::theming;
use crate::ui::vqa_form;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    form: vqa_form::State,
    /// `None` only when no endpoint at all could be used; submissions then
    /// fail with the transport message.
    client: Option<PredictionClient>,
    /// i18n key of a startup warning shown under the form.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("endpoint", &self.client.as_ref().map(PredictionClient::endpoint))
            .field("submission", self.form.submission())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 520.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Builds the window settings.
///
/// Close requests are delivered as events so the form can be torn down
/// before the process exits.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a reusable boot function.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// First endpoint that yields a client: the CLI flag, then the config file,
/// then the built-in default.
fn build_client(cli_endpoint: Option<&str>, config: &Config) -> Option<PredictionClient> {
    let candidates = cli_endpoint
        .into_iter()
        .chain([config.endpoint(), DEFAULT_ENDPOINT]);

    for endpoint in candidates {
        match PredictionClient::new(endpoint) {
            Ok(client) => {
                log::info!("prediction endpoint: {}", client.endpoint());
                return Some(client);
            }
            Err(err) => log::warn!("skipping endpoint: {err}"),
        }
    }

    log::error!("no usable prediction endpoint");
    None
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::from_parts(&flags, &config, config_warning), Task::none())
    }

    /// Builds the application from already-loaded configuration.
    fn from_parts(flags: &Flags, config: &Config, notice: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);
        let client = build_client(flags.endpoint.as_deref(), config);
        let form = vqa_form::State::new(config.general.appearance.resolve());

        Self {
            i18n,
            form,
            client,
            notice,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.form.appearance())
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_spinner_subscription(self.form.submission().is_submitting()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            form: &mut self.form,
            client: self.client.as_ref(),
        };

        match message {
            Message::Form(message) => update::handle_form_message(&mut ctx, message),
            Message::WindowCloseRequested(id) => update::handle_close_request(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            notice: self.notice.as_deref(),
        })
    }
}
