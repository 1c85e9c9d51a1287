use crate::consts::{MAGIC_SIZE, SALT_SIZE};

/// Borrowed view of a salted envelope, split into its three fields.
///
/// Produced by [`crate::parse::parse_envelope`]; every field aliases the
/// input buffer passed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaltedEnvelope<'a> {
    /// The `Salted__` marker bytes.
    pub magic: &'a [u8; MAGIC_SIZE],
    /// Salt the encryptor chose for this stream.
    pub salt: &'a [u8; SALT_SIZE],
    /// Ciphertext body. May be empty; block alignment is not checked here.
    pub body: &'a [u8],
}
