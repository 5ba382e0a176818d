// src/collector/preview.rs
// =============================================================================
// This module turns a raw README API response into preview text.
//
// The API hands us the file as base64 (with newlines sprinkled into the
// payload, which the decoder refuses - they have to go first). After
// decoding we still need valid UTF-8 before we can call it text.
//
// Instead of mapping every failure to an empty string, we keep three
// distinct outcomes so a consumer can tell them apart:
// - Present(text): decoded fine, non-empty (possibly truncated)
// - Empty: the repo has a README file but it contains nothing
// - Unavailable: no README, or one we couldn't decode into text
// =============================================================================

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::github::ReadmeResponse;

// Appended to previews that were cut at the length limit
const ELLIPSIS: &str = "...";

// The decoded README of one repository
//
// Serializes adjacently tagged, so JSON consumers see for example:
//   { "readme_status": "present", "readme": "# Hello\n..." }
//   { "readme_status": "unavailable" }
// The variant tag is what lets a downstream page distinguish "this repo
// genuinely has an empty README" from "we couldn't get one".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "readme_status", content = "readme", rename_all = "snake_case")]
pub enum ReadmeContent {
    /// Decoded UTF-8 text, truncated to the preview limit if one is set
    Present(String),
    /// The README exists but decodes to an empty string
    Empty,
    /// Missing, inaccessible, or not decodable as UTF-8 text
    Unavailable,
}

impl ReadmeContent {
    /// Helper method to check whether we got usable content
    ///
    /// Returns true for Present and Empty (the repo has a README file)
    pub fn is_available(&self) -> bool {
        !matches!(self, ReadmeContent::Unavailable)
    }

    // Builds the preview from a raw API response
    //
    // Any decoding problem lands on Unavailable - the collection keeps
    // going, this one record just carries no text.
    pub fn from_response(raw: &ReadmeResponse, limit: Option<usize>) -> Self {
        // The only encoding the README endpoint documents is base64;
        // anything else we can't interpret
        if raw.encoding != "base64" {
            return ReadmeContent::Unavailable;
        }

        // Strip the newlines GitHub embeds in the payload before decoding
        let cleaned: String = raw.content.chars().filter(|c| !c.is_whitespace()).collect();

        let bytes = match STANDARD.decode(cleaned.as_bytes()) {
            Ok(bytes) => bytes,
            Err(_) => return ReadmeContent::Unavailable,
        };

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => return ReadmeContent::Unavailable,
        };

        if text.is_empty() {
            return ReadmeContent::Empty;
        }

        ReadmeContent::Present(truncate_preview(&text, limit))
    }
}

// Applies the preview length limit to decoded README text
//
// Rules:
//   - No limit configured: content passes through unchanged
//   - Content at or under the limit: unchanged
//   - Content over the limit: first `limit` characters + "..."
//
// We count characters, not bytes, so a multi-byte README never gets
// cut in the middle of a code point.
fn truncate_preview(text: &str, limit: Option<usize>) -> String {
    match limit {
        Some(max) if text.chars().count() > max => {
            let cut: String = text.chars().take(max).collect();
            format!("{cut}{ELLIPSIS}")
        }
        _ => text.to_string(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why strip whitespace before decoding?
//    - The API wraps the base64 payload across lines with embedded \n
//    - The strict decoder treats those as invalid characters
//    - Filtering whitespace out first makes the payload decodable
//
// 2. Why String::from_utf8 instead of from_utf8_lossy?
//    - lossy would silently replace bad bytes with U+FFFD
//    - We'd rather report "not text" than show mangled content
//
// 3. What is chars().count() vs len()?
//    - len() counts bytes; chars() counts Unicode scalar values
//    - "é" is 1 character but 2 bytes
//    - The preview limit is defined in characters, so we count chars
//
// 4. What does #[serde(tag, content)] do?
//    - Controls how the enum appears in JSON (adjacently tagged)
//    - The variant name lands in "readme_status", the payload in "readme"
// -----------------------------------------------------------------------------
