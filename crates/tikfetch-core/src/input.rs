//! Input validation and paste sanitization for candidate TikTok URLs.
//!
//! Validation is a shallow, case-insensitive prefix check (scheme, optional
//! `www.`, recognized host). It deliberately does not parse the full URL;
//! anything past the host is the extraction service's problem.

use thiserror::Error;

/// Substring that marks pasted text as a TikTok link worth cleaning.
const DOMAIN_MARKER: &str = "tiktok.com";

/// Pre-flight rejection of user input. Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input was empty (or whitespace-only) after trimming.
    #[error("missing url")]
    Empty,
    /// Input does not look like a TikTok URL (scheme or host mismatch).
    #[error("invalid url")]
    WrongShape,
}

/// Validates a trimmed candidate URL.
///
/// Accepts `http://` or `https://`, an optional `www.`, then `tiktok.com`
/// or the short-link host `vm.tiktok.com`, case-insensitive. Prefix match
/// only: trailing path, query, and fragment are not inspected.
pub fn validate(trimmed: &str) -> Result<(), ValidationError> {
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !has_tiktok_prefix(trimmed) {
        return Err(ValidationError::WrongShape);
    }
    Ok(())
}

fn has_tiktok_prefix(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    let rest = match lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return false,
    };
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.starts_with(DOMAIN_MARKER) || rest.starts_with("vm.tiktok.com")
}

/// Cleans pasted text: when it contains the TikTok domain marker, everything
/// from the first query-string delimiter onward is stripped, keeping only the
/// path-qualified URL.
///
/// Returns `None` when the text should be kept as pasted (no marker, or no
/// query to strip). Applies only to paste events; typed edits go through
/// unchanged.
pub fn sanitize_pasted(text: &str) -> Option<String> {
    if !text.contains(DOMAIN_MARKER) {
        return None;
    }
    text.split_once('?').map(|(path, _)| path.to_string())
}
