//! Request state machine data: the enumerated UI mode and its payloads.
//!
//! `RequestState` carries the payload of the visible panel, so "exactly one
//! of loading/result/error is visible" holds by construction.

use crate::extract::SubmitError;
use crate::filename;
use crate::input::ValidationError;

/// Display title used when the response carries none.
pub const PLACEHOLDER_TITLE: &str = "TikTok video";

/// User-facing message for an empty submission.
pub const MSG_MISSING_URL: &str = "Please enter a TikTok URL";
/// User-facing message for a malformed submission.
pub const MSG_INVALID_URL: &str = "Please enter a valid TikTok URL";
/// User-facing message for any transport-level failure.
pub const MSG_CONNECTION_ERROR: &str = "Connection error. Please try again.";
/// User-facing message when the service fails without saying why.
pub const MSG_REMOTE_DEFAULT: &str = "Could not process the video.";

/// The single UI mode in effect at any instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing visible; input may be edited.
    #[default]
    Idle,
    /// A request is outstanding; submission is disabled.
    Loading,
    /// The service resolved a download target.
    Result(ResultPayload),
    /// The cycle failed; a one-line message is shown.
    Error(ErrorPayload),
}

/// Resolved video: optional display title plus the direct media location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPayload {
    pub title: Option<String>,
    pub video_url: String,
}

impl ResultPayload {
    /// Title to display, falling back to the fixed placeholder.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(PLACEHOLDER_TITLE)
    }

    /// Suggested save-as filename (`<title>.mp4`, or the fixed fallback).
    pub fn suggested_filename(&self) -> String {
        filename::suggested_filename(self.title.as_deref())
    }
}

/// One-line message for the error panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPayload {
    pub message: String,
}

impl From<&SubmitError> for ErrorPayload {
    fn from(err: &SubmitError) -> Self {
        let message = match err {
            SubmitError::Validation(ValidationError::Empty) => MSG_MISSING_URL.to_string(),
            SubmitError::Validation(ValidationError::WrongShape) => MSG_INVALID_URL.to_string(),
            SubmitError::Transport { .. } => MSG_CONNECTION_ERROR.to_string(),
            SubmitError::Remote { message } => message
                .clone()
                .unwrap_or_else(|| MSG_REMOTE_DEFAULT.to_string()),
        };
        Self { message }
    }
}
