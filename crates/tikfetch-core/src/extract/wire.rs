//! Wire types for the extraction endpoint (JSON over POST).

use serde::{Deserialize, Serialize};

/// Request body: the trimmed candidate URL.
#[derive(Debug, Serialize)]
pub struct ExtractRequest<'a> {
    pub url: &'a str,
}

/// Response body. Success case carries `title`/`video_url`; failure case
/// carries `message`. Every field defaults so partial bodies still decode.
#[derive(Debug, Deserialize)]
pub struct ExtractResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
