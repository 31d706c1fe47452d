//! Plain-text resumes.

use std::fs;
use std::path::Path;

use encoding_rs::{Decoder, DecoderResult, Encoding, UTF_8};
use tracing::debug;

use crate::error::Result;

/// Reads a text file and decodes it with [`decode_text`].
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) when the file cannot be read.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_text(&bytes))
}

/// Decodes resume bytes to a string.
///
/// A UTF-8 or UTF-16 byte order mark selects the encoding; otherwise the
/// bytes are read as UTF-8. Malformed sequences are dropped rather than
/// replaced; a U+FFFD already present in the input is kept.
///
/// # Examples
///
/// ```
/// use rs_resume_parser::source::plain::decode_text;
///
/// assert_eq!(decode_text(b"Jane \xFFDoe"), "Jane Doe");
/// assert_eq!(decode_text(b"\xEF\xBB\xBFSkills"), "Skills");
/// ```
#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut src = &bytes[bom_len..];
    let mut text = String::with_capacity(output_capacity(&decoder, src.len()));
    let mut dropped = 0usize;

    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(src, &mut text, true);
        src = &src[read..];
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::Malformed(_, _) => dropped += 1,
            DecoderResult::OutputFull => {
                let additional = output_capacity(&decoder, src.len());
                text.reserve(additional);
            }
        }
    }

    if dropped > 0 {
        debug!(encoding = encoding.name(), dropped, "dropped malformed byte sequences");
    }
    text
}

fn output_capacity(decoder: &Decoder, input_len: usize) -> usize {
    decoder
        .max_utf8_buffer_length_without_replacement(input_len)
        .unwrap_or(input_len)
        .max(4)
}
