// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the prediction service.
//!
//! One submission is one `multipart/form-data` POST with exactly two parts:
//! `image` (the file bytes, original name and MIME type) and `question`.
//! There is no retry and no timeout beyond the transport default.

mod response;

pub use response::interpret_response;

use crate::config::USER_AGENT;
use crate::domain::vqa::{FailureReason, PredictionResult};
use crate::error::{Error, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use std::sync::Arc;
use thiserror::Error as ThisError;

/// Multipart part carrying the image bytes.
pub const IMAGE_PART: &str = "image";

/// Multipart part carrying the question text.
pub const QUESTION_PART: &str = "question";

/// Why a prediction request did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PredictionError {
    /// The service returned a structured `{"error": ...}` body.
    #[error("{0}")]
    Server(String),

    /// No usable response. The detail is for logs only.
    #[error("prediction transport failed: {0}")]
    Transport(String),
}

impl From<PredictionError> for FailureReason {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::Server(message) => FailureReason::Server(message),
            PredictionError::Transport(_) => FailureReason::Transport,
        }
    }
}

/// Everything needed to send one submission.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    /// File name sent with the `image` part.
    pub file_name: String,
    /// MIME type of the image, e.g. `image/png`.
    pub mime: String,
    pub image: Arc<[u8]>,
    /// Question exactly as typed.
    pub question: String,
}

/// Client bound to one prediction endpoint.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl PredictionClient {
    /// Creates a client for `endpoint`, which must be an absolute
    /// `http`/`https` URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint)
            .map_err(|err| Error::Config(format!("invalid endpoint {endpoint:?}: {err}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported endpoint scheme {:?}",
                url.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| Error::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            endpoint: url,
        })
    }

    /// Endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Sends one prediction request and interprets the response.
    pub async fn predict(
        &self,
        request: PredictionRequest,
    ) -> std::result::Result<PredictionResult, PredictionError> {
        let form = build_form(request)?;

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|err| transport_failure(&err))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| transport_failure(&err))?;

        let outcome = interpret_response(status, &body);
        match &outcome {
            Ok(_) => log::debug!("prediction succeeded ({status})"),
            Err(PredictionError::Server(message)) => {
                log::info!("prediction rejected by server ({status}): {message}");
            }
            Err(PredictionError::Transport(detail)) => {
                log::warn!("prediction failed: {detail}");
            }
        }
        outcome
    }
}

fn build_form(request: PredictionRequest) -> std::result::Result<Form, PredictionError> {
    let image = Part::bytes(request.image.to_vec())
        .file_name(request.file_name)
        .mime_str(&request.mime)
        .map_err(|err| PredictionError::Transport(format!("invalid image MIME type: {err}")))?;

    Ok(Form::new()
        .part(IMAGE_PART, image)
        .text(QUESTION_PART, request.question))
}

fn transport_failure(err: &reqwest::Error) -> PredictionError {
    log::warn!("prediction request failed: {err}");
    PredictionError::Transport(err.to_string())
}
