// SPDX-License-Identifier: MPL-2.0
//! Form state machine.
//!
//! ```text
//! Idle ──submit(valid)──▶ Submitting ──ok──▶ Succeeded
//!  │                          │
//!  └──submit(invalid)──▶ Failed ◀──error──┘
//! ```
//!
//! Terminal states accept a new submit exactly like `Idle`. Each dispatched
//! request carries a [`Ticket`]; only the in-flight ticket may complete it.

use super::{Effect, Message};
use crate::domain::vqa::{
    AppearanceMode, FailureReason, PredictionResult, Question, SubmissionState,
};
use crate::i18n::fluent::I18n;
use crate::prediction::{PredictionError, PredictionRequest};
use crate::ui::image_picker::{self, ImageSelection, PickedImage, PreviewLedger};
use crate::ui::widgets::animated_spinner;
use iced::Task;

/// Identifies one dispatched submission.
pub type Ticket = u64;

/// Result of [`State::submit`].
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Image or question missing; the state is now `Failed(Validation)`.
    Rejected,
    /// A request is already in flight; nothing changed.
    AlreadySubmitting,
    /// The state is now `Submitting`; the caller must send `request`.
    Dispatched {
        ticket: Ticket,
        request: PredictionRequest,
    },
}

#[derive(Debug)]
pub struct State {
    picker: image_picker::State,
    question: Question,
    selection: Option<ImageSelection>,
    submission: SubmissionState,
    appearance: AppearanceMode,
    ledger: PreviewLedger,
    next_ticket: Ticket,
    in_flight: Option<Ticket>,
    spinner_rotation: f32,
    closed: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(AppearanceMode::default())
    }
}

impl State {
    #[must_use]
    pub fn new(appearance: AppearanceMode) -> Self {
        Self {
            picker: image_picker::State::default(),
            question: Question::default(),
            selection: None,
            submission: SubmissionState::Idle,
            appearance,
            ledger: PreviewLedger::new(),
            next_ticket: 1,
            in_flight: None,
            spinner_rotation: 0.0,
            closed: false,
        }
    }

    pub fn handle(&mut self, message: Message, i18n: &I18n) -> (Effect, Task<Message>) {
        match message {
            Message::QuestionChanged(text) => self.set_question(text),
            Message::SubmitPressed => {
                if let SubmitOutcome::Dispatched { ticket, request } = self.submit() {
                    return (Effect::Dispatch { ticket, request }, Task::none());
                }
            }
            Message::ToggleAppearance => self.toggle_appearance(),
            Message::Picker(message) => {
                let (effect, task) = self.picker.handle(message, i18n);
                if let image_picker::Effect::Selected(picked) = effect {
                    self.set_image(picked);
                }
                return (Effect::None, task.map(Message::Picker));
            }
            Message::PredictionFinished { ticket, result } => {
                self.complete(ticket, result);
            }
            Message::SpinnerTick => {
                if self.submission.is_submitting() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
            }
        }
        (Effect::None, Task::none())
    }

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = Question::new(text);
    }

    /// Replaces the selected image. The previous preview is released before
    /// the new one is leased.
    pub fn set_image(&mut self, picked: PickedImage) {
        if self.closed {
            return;
        }
        self.selection = None;
        log::debug!("selected {} ({})", picked.file_name, picked.mime);
        self.selection = Some(ImageSelection::new(picked, &self.ledger));
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submission.is_submitting() {
            log::debug!("submit ignored: a prediction is already running");
            return SubmitOutcome::AlreadySubmitting;
        }
        if self.closed {
            return SubmitOutcome::Rejected;
        }

        let picked = match &self.selection {
            Some(selection) if !self.question.is_blank() => selection.picked(),
            _ => {
                self.submission = SubmissionState::Failed(FailureReason::Validation);
                return SubmitOutcome::Rejected;
            }
        };

        let request = PredictionRequest {
            file_name: picked.file_name.clone(),
            mime: picked.mime.clone(),
            image: picked.bytes.clone(),
            question: self.question.as_str().to_owned(),
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.spinner_rotation = 0.0;
        self.submission = SubmissionState::Submitting;

        SubmitOutcome::Dispatched { ticket, request }
    }

    /// Applies the outcome of the in-flight request.
    ///
    /// Returns `false`, leaving the state untouched, when `ticket` is not the
    /// one in flight or the form has been torn down.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<PredictionResult, PredictionError>,
    ) -> bool {
        if self.closed || self.in_flight != Some(ticket) {
            log::debug!("discarding stale prediction #{ticket}");
            return false;
        }

        self.in_flight = None;
        self.submission = match result {
            Ok(result) => SubmissionState::Succeeded(result),
            Err(err) => SubmissionState::Failed(err.into()),
        };
        true
    }

    pub fn toggle_appearance(&mut self) {
        self.appearance = self.appearance.toggled();
    }

    /// Ends the session: releases the preview and forgets the in-flight
    /// request so a late response cannot land.
    pub fn teardown(&mut self) {
        self.closed = true;
        self.in_flight = None;
        self.selection = None;
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn selection(&self) -> Option<&ImageSelection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    #[must_use]
    pub fn appearance(&self) -> AppearanceMode {
        self.appearance
    }

    #[must_use]
    pub fn picker(&self) -> &image_picker::State {
        &self.picker
    }

    #[must_use]
    pub fn preview_ledger(&self) -> &PreviewLedger {
        &self.ledger
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
