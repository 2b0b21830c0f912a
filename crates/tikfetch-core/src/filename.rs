//! Suggested download filename derived from the video title.
//!
//! The title comes from the remote service and may contain anything; the
//! suggested name must be safe on Linux filesystems.

/// Filename used when the response carries no usable title.
pub const FALLBACK_FILENAME: &str = "tiktok_video.mp4";

const EXTENSION: &str = ".mp4";

/// Maximum filename length in bytes (Linux NAME_MAX).
const NAME_MAX: usize = 255;

/// Derives the suggested save-as filename for a resolved video.
///
/// A present title is sanitized and given an `.mp4` suffix; an absent title
/// (or one that sanitizes to nothing) yields [`FALLBACK_FILENAME`].
pub fn suggested_filename(title: Option<&str>) -> String {
    let stem = match title.map(sanitize_title) {
        Some(s) if !s.is_empty() => s,
        _ => return FALLBACK_FILENAME.to_string(),
    };
    format!("{stem}{EXTENSION}")
}

/// Sanitizes a title for use as a filename stem.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing spaces and dots
/// - Caps the stem so stem + `.mp4` fits in NAME_MAX bytes
fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut prev_underscore = false;

    for c in title.chars() {
        let replacement = if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            '_'
        } else {
            c
        };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.' || c == '_');

    let budget = NAME_MAX - EXTENSION.len();
    if trimmed.len() > budget {
        let mut take = budget;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
