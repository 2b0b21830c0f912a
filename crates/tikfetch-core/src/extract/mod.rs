//! Extractor client: the seam between the controller and the remote
//! video-extraction service.
//!
//! The controller only depends on the [`Extractor`] trait; the HTTP
//! implementation lives in [`http`].

mod http;
mod wire;

pub use http::HttpExtractor;
pub use wire::{ExtractRequest, ExtractResponse};

use crate::input::ValidationError;
use crate::state::ResultPayload;
use thiserror::Error;

/// Failure of one submit cycle, classified for testing and logging.
/// All classes render as a one-line message (see `state::ErrorPayload`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Rejected before any network activity.
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    /// The HTTP exchange failed: connection error, non-2xx status, or a body
    /// that could not be decoded.
    #[error("transport: {reason}")]
    Transport { reason: String },
    /// The service was reached but reported logical failure.
    #[error("remote: {}", message.as_deref().unwrap_or("unspecified"))]
    Remote { message: Option<String> },
}

/// Resolves a validated TikTok URL into a direct media location.
pub trait Extractor {
    fn extract(&self, url: &str) -> Result<ResultPayload, SubmitError>;
}

/// Interprets a decoded service response as success or logical failure.
///
/// A `success: true` response without a `video_url` is treated as a logical
/// failure; the service only claims success when it has a resolved location.
pub fn interpret(response: ExtractResponse) -> Result<ResultPayload, SubmitError> {
    if !response.success {
        return Err(SubmitError::Remote {
            message: response.message,
        });
    }
    match response.video_url {
        Some(video_url) => Ok(ResultPayload {
            title: response.title,
            video_url,
        }),
        None => Err(SubmitError::Remote { message: None }),
    }
}
