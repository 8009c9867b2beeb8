// SPDX-License-Identifier: MPL-2.0
//! Visual question answering domain types.

pub mod types;

pub use types::{
    AppearanceMode, FailureReason, PredictionResult, Question, SubmissionState,
    TRANSPORT_MESSAGE, VALIDATION_MESSAGE,
};
