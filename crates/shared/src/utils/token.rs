//! Display-only decoding of compact `<header>.<payload>.<signature>` tokens.
//!
//! The signature is never checked. The result personalizes the UI and picks
//! which navigation to show; it must not gate anything the server decides.

use base64ct::{Base64Unpadded, Encoding};
use tracing::warn;

use crate::model::Identity;

/// Reads the payload segment of `token` as an [`Identity`].
///
/// Any malformed input (wrong segment count, bad base64, non-UTF-8,
/// non-JSON or non-object payload) yields `None` instead of an error.
pub fn decode_identity(token: &str) -> Option<Identity> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        warn!("Token has {} segments, expected 3", segments.len());
        return None;
    }

    let payload = normalize_segment(segments[1]);

    let bytes = match Base64Unpadded::decode_vec(&payload) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to decode token payload: {e}");
            return None;
        }
    };

    let json = match String::from_utf8(bytes) {
        Ok(json) => json,
        Err(e) => {
            warn!("Token payload is not UTF-8: {e}");
            return None;
        }
    };

    match serde_json::from_str::<Identity>(&json) {
        Ok(identity) => Some(identity),
        Err(e) => {
            warn!("Token payload is not a JSON object: {e}");
            None
        }
    }
}

/// URL-safe alphabet to standard, trailing padding dropped.
fn normalize_segment(segment: &str) -> String {
    segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect()
}
