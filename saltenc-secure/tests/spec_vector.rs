//! Byte-for-byte validation against captured `openssl enc` output.
//!
//! Every capture below was produced with the legacy pipeline
//! `echo -n <plaintext> | openssl enc -<cipher> -md <digest> -pass pass:MyKey -base64`
//! and must decrypt, and re-encrypt, exactly.

use saltenc_secure::{CipherSuite, DigestAlgorithm, derive_key_iv};

#[cfg(any(feature = "aes-128-sha256", feature = "des-md5", feature = "des-sha256"))]
use saltenc_secure::{decrypt_base64, decrypt_base64_to_string, encrypt_base64};

const PASSPHRASE: &[u8] = b"MyKey";

/// AES-128-CBC, SHA-256 derivation, plaintext `hello,world`.
#[cfg(feature = "aes-128-sha256")]
const AES_SHA256_TEXT: &str = "U2FsdGVkX1/rDTaN7Cv5vEBKP3OfNQHg1uH6EbdnmTs=";
const AES_SHA256_SALT: [u8; 8] = [0xeb, 0x0d, 0x36, 0x8d, 0xec, 0x2b, 0xf9, 0xbc];

/// DES-CBC, SHA-256 derivation, plaintext `hello,world`.
#[cfg(feature = "des-sha256")]
const DES_SHA256_TEXT: &str = "U2FsdGVkX1/e1a/t6RyYzJtTZljWi9K9eSC0271OihI=";
#[cfg(feature = "des-sha256")]
const DES_SHA256_SALT: [u8; 8] = [0xde, 0xd5, 0xaf, 0xed, 0xe9, 0x1c, 0x98, 0xcc];

/// DES-CBC, MD5 derivation, plaintext `hello,world`.
#[cfg(feature = "des-md5")]
const DES_MD5_TEXT: &str = "U2FsdGVkX18GLG/GM75IqXZLRA+a02/9qorSdr6qLl0=";
#[cfg(feature = "des-md5")]
const DES_MD5_SALT: [u8; 8] = [0x06, 0x2c, 0x6f, 0xc6, 0x33, 0xbe, 0x48, 0xa9];

/// DES-CBC, SHA-256 derivation, plaintext `Hello,world` (capital H).
#[cfg(feature = "des-sha256")]
const DES_SHA256_TEXT_CAPITAL: &str = "U2FsdGVkX19Bsru7xG/2xhseKk0TR1bBX0YnIqfv3Tg=";
#[cfg(feature = "des-sha256")]
const DES_SHA256_SALT_CAPITAL: [u8; 8] = [0x41, 0xb2, 0xbb, 0xbb, 0xc4, 0x6f, 0xf6, 0xc6];

// ---------------------------------------------------------------------------
// Decryption of captured output
// ---------------------------------------------------------------------------

#[cfg(feature = "aes-128-sha256")]
#[test]
fn test_aes128_sha256_capture() {
  let plaintext =
    decrypt_base64(CipherSuite::Aes128Sha256, AES_SHA256_TEXT, PASSPHRASE).unwrap();
  assert_eq!(plaintext, b"hello,world");
}

#[cfg(feature = "des-sha256")]
#[test]
fn test_des_sha256_capture() {
  let plaintext = decrypt_base64(CipherSuite::DesSha256, DES_SHA256_TEXT, PASSPHRASE).unwrap();
  assert_eq!(plaintext, b"hello,world");
}

#[cfg(feature = "des-md5")]
#[test]
fn test_des_md5_capture() {
  let plaintext = decrypt_base64(CipherSuite::DesMd5, DES_MD5_TEXT, PASSPHRASE).unwrap();
  assert_eq!(plaintext, b"hello,world");
}

#[cfg(feature = "des-sha256")]
#[test]
fn test_des_sha256_capital_capture() {
  let plaintext =
    decrypt_base64(CipherSuite::DesSha256, DES_SHA256_TEXT_CAPITAL, PASSPHRASE).unwrap();
  assert_eq!(plaintext, b"Hello,world");
}

#[cfg(feature = "aes-128-sha256")]
#[test]
fn test_decrypt_to_string() {
  let plaintext =
    decrypt_base64_to_string(CipherSuite::Aes128Sha256, AES_SHA256_TEXT, PASSPHRASE).unwrap();
  assert_eq!(plaintext, "hello,world");
}

// ---------------------------------------------------------------------------
// Re-encryption reproduces the capture byte for byte
// ---------------------------------------------------------------------------

#[cfg(feature = "aes-128-sha256")]
#[test]
fn test_reencrypt_reproduces_aes_capture() {
  let text = encrypt_base64(
    CipherSuite::Aes128Sha256,
    b"hello,world",
    PASSPHRASE,
    &AES_SHA256_SALT,
  )
  .unwrap();
  assert_eq!(text, AES_SHA256_TEXT);
}

#[cfg(feature = "des-md5")]
#[test]
fn test_reencrypt_reproduces_des_md5_capture() {
  let text = encrypt_base64(CipherSuite::DesMd5, b"hello,world", PASSPHRASE, &DES_MD5_SALT)
    .unwrap();
  assert_eq!(text, DES_MD5_TEXT);
}

#[cfg(feature = "des-sha256")]
#[test]
fn test_reencrypt_reproduces_des_sha256_captures() {
  let text = encrypt_base64(
    CipherSuite::DesSha256,
    b"hello,world",
    PASSPHRASE,
    &DES_SHA256_SALT,
  )
  .unwrap();
  assert_eq!(text, DES_SHA256_TEXT);

  let text = encrypt_base64(
    CipherSuite::DesSha256,
    b"Hello,world",
    PASSPHRASE,
    &DES_SHA256_SALT_CAPITAL,
  )
  .unwrap();
  assert_eq!(text, DES_SHA256_TEXT_CAPITAL);
}

// ---------------------------------------------------------------------------
// Key derivation against the captured salts
// ---------------------------------------------------------------------------

#[test]
fn test_kdf_sha256_known_answer() {
  let material =
    derive_key_iv(DigestAlgorithm::Sha256, PASSPHRASE, &AES_SHA256_SALT, 16).unwrap();
  assert_eq!(
    material.key(),
    &[
      0xf5, 0xa2, 0x9f, 0x9d, 0xfc, 0xe1, 0x97, 0x8a, 0x47, 0xe6, 0xb7, 0xd9, 0x50, 0xae,
      0x93, 0x6a,
    ]
  );
  assert_eq!(
    material.iv(),
    &[
      0xe0, 0x2e, 0x8a, 0x42, 0x9f, 0x9e, 0x38, 0x4b, 0xfd, 0xf9, 0x74, 0x10, 0xfb, 0x87,
      0x5f, 0xb8,
    ]
  );
}

#[cfg(feature = "des-md5")]
#[test]
fn test_kdf_md5_known_answer() {
  let material = derive_key_iv(DigestAlgorithm::Md5, PASSPHRASE, &DES_MD5_SALT, 8).unwrap();
  assert_eq!(material.key(), &[0x58, 0xff, 0xba, 0xaf, 0x0c, 0xbc, 0x36, 0x46]);
  assert_eq!(material.iv(), &[0x1d, 0xb6, 0xcf, 0xd3, 0xab, 0xe3, 0xc8, 0x46]);
}

// ---------------------------------------------------------------------------
// Wrong passphrase against real captures
// ---------------------------------------------------------------------------

#[cfg(feature = "aes-128-sha256")]
#[test]
fn test_aes_capture_wrong_passphrase() {
  let result = decrypt_base64(CipherSuite::Aes128Sha256, AES_SHA256_TEXT, b"WrongKey");
  assert_eq!(
    result.unwrap_err().kind,
    saltenc_secure::CryptoErrorKind::CipherFailure
  );
}

#[cfg(feature = "des-sha256")]
#[test]
fn test_des_capture_wrong_passphrase() {
  let result = decrypt_base64(CipherSuite::DesSha256, DES_SHA256_TEXT, b"WrongKey");
  assert_eq!(
    result.unwrap_err().kind,
    saltenc_secure::CryptoErrorKind::CipherFailure
  );
}

#[cfg(feature = "des-md5")]
#[test]
fn test_des_md5_capture_wrong_passphrase() {
  let result = decrypt_base64(CipherSuite::DesMd5, DES_MD5_TEXT, b"WrongKey");
  assert_eq!(
    result.unwrap_err().kind,
    saltenc_secure::CryptoErrorKind::CipherFailure
  );
}
