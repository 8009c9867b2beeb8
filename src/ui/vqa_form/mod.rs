// SPDX-License-Identifier: MPL-2.0
//! The question form: image, question, submission and appearance.
//!
//! This component follows the "state down, messages up" pattern. It never
//! talks to the network itself: a valid submit yields
//! [`Effect::Dispatch`] and the application shell runs the request, feeding
//! the outcome back as [`Message::PredictionFinished`].

mod state;
mod view;

pub use state::{State, SubmitOutcome, Ticket};
pub use view::{banner, submit_control, toggle_icon, view, Banner, SubmitControl, ToggleIcon};

use crate::domain::vqa::PredictionResult;
use crate::prediction::{PredictionError, PredictionRequest};
use crate::ui::image_picker;

#[derive(Debug, Clone)]
pub enum Message {
    QuestionChanged(String),
    SubmitPressed,
    ToggleAppearance,
    Picker(image_picker::Message),
    /// A dispatched request finished.
    PredictionFinished {
        ticket: Ticket,
        result: Result<PredictionResult, PredictionError>,
    },
    /// Advances the busy spinner.
    SpinnerTick,
}

#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Send `request`; report back with the same `ticket`.
    Dispatch {
        ticket: Ticket,
        request: PredictionRequest,
    },
}
