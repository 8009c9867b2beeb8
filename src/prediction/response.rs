// SPDX-License-Identifier: MPL-2.0
//! Interpretation of prediction service responses.

use super::PredictionError;
use crate::domain::vqa::PredictionResult;
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PredictBody {
    question: String,
    predicted_answer: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Maps a status code and raw body to a result.
///
/// - 2xx with `{question, predicted_answer}` is a success.
/// - Non-2xx with a non-empty `{"error": "..."}` is a server error.
/// - Anything else is a transport error.
pub fn interpret_response(
    status: StatusCode,
    body: &[u8],
) -> Result<PredictionResult, PredictionError> {
    if status.is_success() {
        return serde_json::from_slice::<PredictBody>(body)
            .map(|body| PredictionResult {
                question: body.question,
                predicted_answer: body.predicted_answer,
            })
            .map_err(|err| PredictionError::Transport(format!("malformed response body: {err}")));
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody { error }) if !error.is_empty() => Err(PredictionError::Server(error)),
        _ => Err(PredictionError::Transport(format!("HTTP status: {status}"))),
    }
}
