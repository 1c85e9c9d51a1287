use md5::Md5;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use saltenc_codec::consts::SALT_SIZE;

use crate::error::CryptoError;
use crate::types::{DigestAlgorithm, KeyMaterial};

/// Derive key and IV material from a passphrase and salt.
///
/// Runs a single digest pass over `passphrase || salt` and splits the
/// output into a key of `key_size` bytes followed by an IV of the same
/// size. Fails with `KeyMaterialTooShort` when the digest output cannot
/// cover both segments; no further digest rounds are attempted.
pub fn derive_key_iv(
    digest: DigestAlgorithm,
    passphrase: &[u8],
    salt: &[u8; SALT_SIZE],
    key_size: usize,
) -> Result<KeyMaterial, CryptoError> {
    // Compared by halves so a huge key_size cannot overflow the doubling.
    if key_size > digest.output_size() / 2 {
        return Err(CryptoError::key_material_too_short());
    }
    let bytes = match digest {
        DigestAlgorithm::Md5 => {
            let mut hasher = Md5::new();
            hasher.update(passphrase);
            hasher.update(salt);
            Zeroizing::new(hasher.finalize().to_vec())
        }
        DigestAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(passphrase);
            hasher.update(salt);
            Zeroizing::new(hasher.finalize().to_vec())
        }
    };
    Ok(KeyMaterial::new(bytes, key_size))
}
