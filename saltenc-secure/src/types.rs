use alloc::vec::Vec;
use core::fmt;

use zeroize::Zeroizing;

use crate::consts::{
    AES_128_KEY_SIZE, AES_BLOCK_SIZE, DES_BLOCK_SIZE, DES_KEY_SIZE, MD5_OUTPUT_SIZE,
    SHA256_OUTPUT_SIZE,
};
use crate::error::CryptoError;

/// Legacy cipher suite: a CBC block cipher paired with the digest used to
/// derive its key and IV from a passphrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherSuite {
    /// AES-128-CBC with SHA-256 derivation (16B key, 16B IV).
    Aes128Sha256,
    /// DES-CBC with MD5 derivation (8B key, 8B IV).
    DesMd5,
    /// DES-CBC with SHA-256 derivation (8B key, 8B IV).
    DesSha256,
}

impl CipherSuite {
    /// Look up a suite by its registry name. Returns error for unknown names.
    ///
    /// Names are case-sensitive: `aes-128-sha256`, `des-md5`, `des-sha256`.
    pub fn from_name(name: &str) -> Result<Self, CryptoError> {
        match name {
            "aes-128-sha256" => Ok(Self::Aes128Sha256),
            "des-md5" => Ok(Self::DesMd5),
            "des-sha256" => Ok(Self::DesSha256),
            _ => Err(CryptoError::unknown_suite()),
        }
    }

    /// Registry name of this suite.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Aes128Sha256 => "aes-128-sha256",
            Self::DesMd5 => "des-md5",
            Self::DesSha256 => "des-sha256",
        }
    }

    /// Required encryption key size in bytes.
    #[must_use]
    pub fn key_size(self) -> usize {
        match self {
            Self::Aes128Sha256 => AES_128_KEY_SIZE,
            Self::DesMd5 | Self::DesSha256 => DES_KEY_SIZE,
        }
    }

    /// IV size in bytes (one cipher block).
    #[must_use]
    pub fn iv_size(self) -> usize {
        match self {
            Self::Aes128Sha256 => AES_BLOCK_SIZE,
            Self::DesMd5 | Self::DesSha256 => DES_BLOCK_SIZE,
        }
    }

    /// Digest used to derive key material for this suite.
    #[must_use]
    pub fn digest(self) -> DigestAlgorithm {
        match self {
            Self::DesMd5 => DigestAlgorithm::Md5,
            Self::Aes128Sha256 | Self::DesSha256 => DigestAlgorithm::Sha256,
        }
    }

    /// Check if the feature flag for this cipher suite is enabled.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        match self {
            Self::Aes128Sha256 => cfg!(feature = "aes-128-sha256"),
            Self::DesMd5 => cfg!(feature = "des-md5"),
            Self::DesSha256 => cfg!(feature = "des-sha256"),
        }
    }
}

/// Digest used by the key derivation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// MD5 (16-byte output).
    Md5,
    /// SHA-256 (32-byte output).
    Sha256,
}

impl DigestAlgorithm {
    /// Digest output size in bytes.
    #[must_use]
    pub fn output_size(self) -> usize {
        match self {
            Self::Md5 => MD5_OUTPUT_SIZE,
            Self::Sha256 => SHA256_OUTPUT_SIZE,
        }
    }
}

/// Key and IV bytes derived from a passphrase, wiped on drop.
///
/// The buffer holds the full digest output; `key` and `iv` are adjacent
/// segments of it.
pub struct KeyMaterial {
    bytes: Zeroizing<Vec<u8>>,
    key_size: usize,
}

impl KeyMaterial {
    pub(crate) fn new(bytes: Zeroizing<Vec<u8>>, key_size: usize) -> Self {
        Self { bytes, key_size }
    }

    /// Cipher key segment.
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.bytes[..self.key_size]
    }

    /// Initialization vector segment, directly after the key.
    #[must_use]
    pub fn iv(&self) -> &[u8] {
        &self.bytes[self.key_size..self.key_size * 2]
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}
