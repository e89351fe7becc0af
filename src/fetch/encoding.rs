//! Payload transcoding.
//!
//! The geo service answers in windows-1251. The whole payload is converted
//! to UTF-8 here, before any structured parsing, and the embedded charset
//! marker is rewritten so the XML declaration never disagrees with the bytes
//! handed to the parser.

use encoding_rs::WINDOWS_1251;
use log::warn;

use crate::config::{SOURCE_CHARSET, TARGET_CHARSET};

/// Transcodes a raw service payload from windows-1251 to UTF-8 and rewrites
/// every embedded `windows-1251` marker to `utf-8`.
pub(crate) fn transcode_payload(raw: &[u8]) -> String {
    let (text, _, had_errors) = WINDOWS_1251.decode(raw);
    if had_errors {
        warn!("Geo service payload contained bytes outside windows-1251");
    }
    text.replace(SOURCE_CHARSET, TARGET_CHARSET)
}
