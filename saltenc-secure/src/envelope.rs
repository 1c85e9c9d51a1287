use alloc::string::String;
use alloc::vec::Vec;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use saltenc_codec::build::{build_envelope, envelope_len};
use saltenc_codec::consts::SALT_SIZE;
use saltenc_codec::parse::parse_envelope;

use crate::cipher::{cbc_decrypt, cbc_encrypt};
use crate::error::CryptoError;
use crate::kdf::derive_key_iv;
use crate::types::CipherSuite;

/// Decrypt a salted envelope with a passphrase.
///
/// Parses the `Salted__` header, derives key and IV from the passphrase
/// and the embedded salt, and decrypts the body in CBC mode. A malformed
/// header is rejected before any key derivation or cipher work; a wrong
/// passphrase surfaces as `CipherFailure` when the padding check rejects
/// the result.
pub fn decrypt(
    suite: CipherSuite,
    ciphertext: &[u8],
    passphrase: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let envelope = parse_envelope(ciphertext).map_err(|_| CryptoError::malformed_envelope())?;
    let material = derive_key_iv(suite.digest(), passphrase, envelope.salt, suite.key_size())?;
    cbc_decrypt(suite, material.key(), material.iv(), envelope.body)
}

/// Encrypt plaintext into a salted envelope.
///
/// The caller supplies the salt; use fresh random bytes for new streams.
/// Identical inputs produce an identical envelope, which is what lets a
/// decrypted stream be re-encrypted byte for byte.
pub fn encrypt(
    suite: CipherSuite,
    plaintext: &[u8],
    passphrase: &[u8],
    salt: &[u8; SALT_SIZE],
) -> Result<Vec<u8>, CryptoError> {
    let material = derive_key_iv(suite.digest(), passphrase, salt, suite.key_size())?;
    let body = cbc_encrypt(suite, material.key(), material.iv(), plaintext)?;

    let mut envelope = alloc::vec![0u8; envelope_len(body.len())];
    build_envelope(salt, &body, &mut envelope).map_err(|_| CryptoError::buffer_too_small())?;
    Ok(envelope)
}

/// Decode standard base64 text and decrypt the resulting envelope.
///
/// ASCII whitespace anywhere in the text is ignored, so 64-column wrapped
/// command-line output decodes unchanged.
pub fn decrypt_base64(
    suite: CipherSuite,
    text: &str,
    passphrase: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let raw = decode_base64(text)?;
    decrypt(suite, &raw, passphrase)
}

/// Decrypt base64 text and interpret the plaintext as UTF-8.
pub fn decrypt_base64_to_string(
    suite: CipherSuite,
    text: &str,
    passphrase: &[u8],
) -> Result<String, CryptoError> {
    let plaintext = decrypt_base64(suite, text, passphrase)?;
    String::from_utf8(plaintext).map_err(|_| CryptoError::invalid_utf8())
}

/// Encrypt plaintext and encode the envelope as standard base64.
pub fn encrypt_base64(
    suite: CipherSuite,
    plaintext: &[u8],
    passphrase: &[u8],
    salt: &[u8; SALT_SIZE],
) -> Result<String, CryptoError> {
    Ok(STANDARD.encode(encrypt(suite, plaintext, passphrase, salt)?))
}

fn decode_base64(text: &str) -> Result<Vec<u8>, CryptoError> {
    if text.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: Vec<u8> = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        STANDARD
            .decode(compact)
            .map_err(|_| CryptoError::invalid_base64())
    } else {
        STANDARD
            .decode(text)
            .map_err(|_| CryptoError::invalid_base64())
    }
}
