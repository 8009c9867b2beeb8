// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.

use super::Message;
use crate::domain::vqa::PredictionResult;
use crate::i18n::fluent::I18n;
use crate::prediction::{PredictionClient, PredictionError, PredictionRequest};
use crate::ui::vqa_form::{self, Ticket};
use iced::{window, Task};

/// Borrowed view of the application state for one update.
pub(super) struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a mut vqa_form::State,
    pub client: Option<&'a PredictionClient>,
}

pub(super) fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    message: vqa_form::Message,
) -> Task<Message> {
    let (effect, task) = ctx.form.handle(message, ctx.i18n);
    let task = task.map(Message::Form);

    match effect {
        vqa_form::Effect::None => task,
        vqa_form::Effect::Dispatch { ticket, request } => {
            Task::batch([task, dispatch(ctx.client, ticket, request)])
        }
    }
}

/// Runs one prediction off the UI thread and reports back with `ticket`.
fn dispatch(
    client: Option<&PredictionClient>,
    ticket: Ticket,
    request: PredictionRequest,
) -> Task<Message> {
    let finished = move |result: Result<PredictionResult, PredictionError>| {
        Message::Form(vqa_form::Message::PredictionFinished { ticket, result })
    };

    match client {
        Some(client) => {
            let client = client.clone();
            log::debug!("dispatching prediction #{ticket} to {}", client.endpoint());
            Task::perform(async move { client.predict(request).await }, finished)
        }
        None => Task::done(finished(Err(PredictionError::Transport(
            "no usable prediction endpoint".into(),
        )))),
    }
}

pub(super) fn handle_close_request(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    log::debug!("close requested for window {id:?}");
    ctx.form.teardown();
    iced::exit()
}
