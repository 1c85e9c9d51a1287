use crate::consts::{HEADER_SIZE, MAGIC_SIZE, SALT_SIZE, SALTED_MAGIC};
use crate::error::BuildError;

/// Serialized envelope size for a body of the given length.
#[must_use]
pub const fn envelope_len(body_len: usize) -> usize {
    HEADER_SIZE + body_len
}

/// Assemble a salted envelope (`Salted__` + salt + body) into `out`.
/// Returns the number of bytes written.
pub fn build_envelope(
    salt: &[u8; SALT_SIZE],
    body: &[u8],
    out: &mut [u8],
) -> Result<usize, BuildError> {
    let total = envelope_len(body.len());
    if out.len() < total {
        return Err(BuildError::buffer_too_small());
    }
    out[..MAGIC_SIZE].copy_from_slice(&SALTED_MAGIC);
    out[MAGIC_SIZE..HEADER_SIZE].copy_from_slice(salt);
    out[HEADER_SIZE..total].copy_from_slice(body);
    Ok(total)
}
