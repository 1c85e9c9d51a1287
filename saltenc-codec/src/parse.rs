use crate::consts::{HEADER_SIZE, MAGIC_SIZE, SALTED_MAGIC};
use crate::error::{ParseError, ParseErrorKind};
use crate::types::SaltedEnvelope;
use crate::validate::{bytes_eq_at, matching_len};

/// Check whether a byte stream starts with the `Salted__` marker.
///
/// Inputs shorter than the marker return `false`.
#[must_use]
pub fn is_salted(data: &[u8]) -> bool {
    bytes_eq_at(data, 0, &SALTED_MAGIC, 0, MAGIC_SIZE)
}

/// Parse a salted envelope into its marker, salt, and body fields.
///
/// The input must be at least [`HEADER_SIZE`] bytes long and start with
/// the `Salted__` marker. The length check runs first, so a short input
/// reports `TooShort` even when its marker bytes are also wrong.
pub fn parse_envelope(data: &[u8]) -> Result<SaltedEnvelope<'_>, ParseError> {
    if data.len() < HEADER_SIZE {
        return Err(ParseError::new(ParseErrorKind::TooShort, data.len()));
    }
    let matched = matching_len(data, 0, &SALTED_MAGIC, 0, MAGIC_SIZE);
    if matched != MAGIC_SIZE {
        return Err(ParseError::new(ParseErrorKind::MagicMismatch, matched));
    }
    // Length is checked above, so both chunk splits succeed.
    let (magic, rest) = data
        .split_first_chunk::<MAGIC_SIZE>()
        .expect("length checked");
    let (salt, body) = rest.split_first_chunk().expect("length checked");
    Ok(SaltedEnvelope { magic, salt, body })
}
