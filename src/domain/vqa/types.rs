// SPDX-License-Identifier: MPL-2.0
//! Question answering value objects and the submission lifecycle.

use std::fmt;

/// Message shown when a submission lacks an image or a question.
pub const VALIDATION_MESSAGE: &str = "Both image and question are required.";

/// Message shown when the prediction could not be obtained.
pub const TRANSPORT_MESSAGE: &str = "An error occurred while making the prediction.";

// =============================================================================
// Question
// =============================================================================

/// Free-form question text, stored exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the question is empty once surrounding whitespace is
    /// ignored. The stored text itself is never trimmed.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PredictionResult
// =============================================================================

/// Answer returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionResult {
    /// Question as echoed by the server.
    pub question: String,
    pub predicted_answer: String,
}

// =============================================================================
// FailureReason
// =============================================================================

/// Why a submission ended in [`SubmissionState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Image or question missing; no request was sent.
    Validation,
    /// The service answered with a structured error.
    Server(String),
    /// No usable response (unreachable, bad status without body, bad JSON).
    Transport,
}

impl FailureReason {
    /// Canonical user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            FailureReason::Validation => VALIDATION_MESSAGE,
            FailureReason::Server(message) => message,
            FailureReason::Transport => TRANSPORT_MESSAGE,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// SubmissionState
// =============================================================================

/// Lifecycle of the current submission. Exactly one variant holds at a time,
/// so "loading and failed" or "result and error" cannot coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(PredictionResult),
    Failed(FailureReason),
}

impl SubmissionState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Returns true for `Succeeded` and `Failed`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded(_) | SubmissionState::Failed(_)
        )
    }

    #[must_use]
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            SubmissionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

// =============================================================================
// AppearanceMode
// =============================================================================

/// Light or dark appearance of the whole window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppearanceMode {
    #[default]
    Light,
    Dark,
}

impl AppearanceMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AppearanceMode::Light => AppearanceMode::Dark,
            AppearanceMode::Dark => AppearanceMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, AppearanceMode::Dark)
    }
}
