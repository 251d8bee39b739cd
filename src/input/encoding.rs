// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Program list decoding (UTF-8/UTF-16/Windows-1252 → UTF-8).
//!
//! ```text
//! bytes --(BOM sniff | configured encoding)--> UTF-8 text
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::{Encoding, UTF_8, UTF_16LE, WINDOWS_1252};
use std::borrow::Cow;

use crate::config::types::InputEncoding;

/// Converts raw file bytes to UTF-8 text.
///
/// With [`InputEncoding::Auto`] a UTF-8 or UTF-16 byte order mark selects the
/// decoder; without one the bytes are read as UTF-8. Explicit encodings still
/// strip a matching BOM.
///
/// # Example
/// ```
/// use interview_scheduler::config::types::InputEncoding;
/// use interview_scheduler::input::encoding::decode;
///
/// let text = decode(InputEncoding::Windows1252, b"Caf\xe9|2024-08-01");
/// assert_eq!(text, "Café|2024-08-01");
/// ```
#[must_use]
pub fn decode(encoding: InputEncoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        InputEncoding::Auto => match Encoding::for_bom(bytes) {
            Some((detected, bom_len)) => {
                tracing::debug!(encoding = detected.name(), "byte order mark detected");
                let (text, _had_errors) = detected.decode_without_bom_handling(&bytes[bom_len..]);
                text
            }
            None => String::from_utf8_lossy(bytes),
        },
        InputEncoding::Utf8 => {
            let (text, _had_errors) = UTF_8.decode_with_bom_removal(bytes);
            text
        }
        InputEncoding::Utf16Le => {
            let (text, _had_errors) = UTF_16LE.decode_with_bom_removal(bytes);
            text
        }
        InputEncoding::Windows1252 => {
            let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text
        }
    }
}
