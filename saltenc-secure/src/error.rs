use core::fmt;

/// Specific kind of crypto error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoErrorKind {
    /// Input is too short or does not start with the `Salted__` marker.
    MalformedEnvelope,
    /// Digest output cannot cover both the key and the IV.
    KeyMaterialTooShort,
    /// The cipher rejected the input (bad padding or bad length).
    ///
    /// A wrong passphrase surfaces as this kind; the two cases are not
    /// distinguishable.
    CipherFailure,
    /// The required cipher suite feature is not enabled at compile time.
    CipherNotEnabled,
    /// Key length does not match the cipher suite requirement.
    InvalidKeySize,
    /// IV length does not match the cipher suite requirement.
    InvalidIvSize,
    /// Cipher suite name is not recognized.
    UnknownSuite,
    /// Input is not valid standard base64.
    InvalidBase64,
    /// Decrypted plaintext is not valid UTF-8.
    InvalidUtf8,
    /// Output buffer is too small.
    BufferTooSmall,
}

/// Error returned by envelope operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoError {
    pub kind: CryptoErrorKind,
}

impl CryptoError {
    #[must_use]
    pub fn new(kind: CryptoErrorKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub fn malformed_envelope() -> Self {
        Self::new(CryptoErrorKind::MalformedEnvelope)
    }

    #[must_use]
    pub fn key_material_too_short() -> Self {
        Self::new(CryptoErrorKind::KeyMaterialTooShort)
    }

    #[must_use]
    pub fn cipher_failure() -> Self {
        Self::new(CryptoErrorKind::CipherFailure)
    }

    #[must_use]
    pub fn cipher_not_enabled() -> Self {
        Self::new(CryptoErrorKind::CipherNotEnabled)
    }

    #[must_use]
    pub fn invalid_key_size() -> Self {
        Self::new(CryptoErrorKind::InvalidKeySize)
    }

    #[must_use]
    pub fn invalid_iv_size() -> Self {
        Self::new(CryptoErrorKind::InvalidIvSize)
    }

    #[must_use]
    pub fn unknown_suite() -> Self {
        Self::new(CryptoErrorKind::UnknownSuite)
    }

    #[must_use]
    pub fn invalid_base64() -> Self {
        Self::new(CryptoErrorKind::InvalidBase64)
    }

    #[must_use]
    pub fn invalid_utf8() -> Self {
        Self::new(CryptoErrorKind::InvalidUtf8)
    }

    #[must_use]
    pub fn buffer_too_small() -> Self {
        Self::new(CryptoErrorKind::BufferTooSmall)
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self.kind {
            CryptoErrorKind::MalformedEnvelope => "malformed envelope (missing Salted__ header)",
            CryptoErrorKind::KeyMaterialTooShort => "digest output too short for key material",
            CryptoErrorKind::CipherFailure => {
                "cipher rejected the input (wrong passphrase or corrupted data)"
            }
            CryptoErrorKind::CipherNotEnabled => "cipher suite not enabled (missing feature flag)",
            CryptoErrorKind::InvalidKeySize => "invalid encryption key size",
            CryptoErrorKind::InvalidIvSize => "invalid IV size",
            CryptoErrorKind::UnknownSuite => "unknown cipher suite name",
            CryptoErrorKind::InvalidBase64 => "invalid base64 text",
            CryptoErrorKind::InvalidUtf8 => "plaintext is not valid UTF-8",
            CryptoErrorKind::BufferTooSmall => "output buffer too small",
        };
        f.write_str(desc)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CryptoError {}
