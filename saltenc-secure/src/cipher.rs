use alloc::vec::Vec;

use crate::error::CryptoError;
use crate::types::CipherSuite;

/// Encrypt plaintext in CBC mode with PKCS#7 padding.
///
/// Returns the padded ciphertext, a whole number of blocks.
pub fn cbc_encrypt(
  suite: CipherSuite,
  key: &[u8],
  iv: &[u8],
  plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
  if key.len() != suite.key_size() {
    return Err(CryptoError::invalid_key_size());
  }
  if iv.len() != suite.iv_size() {
    return Err(CryptoError::invalid_iv_size());
  }
  if !suite.is_enabled() {
    return Err(CryptoError::cipher_not_enabled());
  }
  match suite {
    CipherSuite::Aes128Sha256 => encrypt_aes128_cbc(key, iv, plaintext),
    CipherSuite::DesMd5 | CipherSuite::DesSha256 => encrypt_des_cbc(key, iv, plaintext),
  }
}

/// Decrypt CBC ciphertext and strip PKCS#7 padding.
///
/// Any padding or length problem maps to `CipherFailure`; a wrong
/// passphrase produces the same error and is never distinguishable from
/// corrupted data.
pub fn cbc_decrypt(
  suite: CipherSuite,
  key: &[u8],
  iv: &[u8],
  ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
  if key.len() != suite.key_size() {
    return Err(CryptoError::invalid_key_size());
  }
  if iv.len() != suite.iv_size() {
    return Err(CryptoError::invalid_iv_size());
  }
  if !suite.is_enabled() {
    return Err(CryptoError::cipher_not_enabled());
  }
  match suite {
    CipherSuite::Aes128Sha256 => decrypt_aes128_cbc(key, iv, ciphertext),
    CipherSuite::DesMd5 | CipherSuite::DesSha256 => decrypt_des_cbc(key, iv, ciphertext),
  }
}

// ---------------------------------------------------------------------------
// AES-128-CBC
// ---------------------------------------------------------------------------

#[cfg(feature = "aes-128-sha256")]
fn encrypt_aes128_cbc(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  use aes::Aes128;
  use cbc::cipher::block_padding::Pkcs7;
  use cbc::cipher::{BlockEncryptMut, KeyIvInit};

  let enc = cbc::Encryptor::<Aes128>::new_from_slices(key, iv)
    .map_err(|_| CryptoError::invalid_key_size())?;
  Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

#[cfg(not(feature = "aes-128-sha256"))]
fn encrypt_aes128_cbc(_key: &[u8], _iv: &[u8], _plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  Err(CryptoError::cipher_not_enabled())
}

#[cfg(feature = "aes-128-sha256")]
fn decrypt_aes128_cbc(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  use aes::Aes128;
  use cbc::cipher::block_padding::Pkcs7;
  use cbc::cipher::{BlockDecryptMut, KeyIvInit};

  let dec = cbc::Decryptor::<Aes128>::new_from_slices(key, iv)
    .map_err(|_| CryptoError::invalid_key_size())?;
  dec
    .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
    .map_err(|_| CryptoError::cipher_failure())
}

#[cfg(not(feature = "aes-128-sha256"))]
fn decrypt_aes128_cbc(_key: &[u8], _iv: &[u8], _ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  Err(CryptoError::cipher_not_enabled())
}

// ---------------------------------------------------------------------------
// DES-CBC (shared by the des-md5 and des-sha256 suites)
// ---------------------------------------------------------------------------

#[cfg(any(feature = "des-md5", feature = "des-sha256"))]
fn encrypt_des_cbc(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  use cbc::cipher::block_padding::Pkcs7;
  use cbc::cipher::{BlockEncryptMut, KeyIvInit};
  use des::Des;

  let enc = cbc::Encryptor::<Des>::new_from_slices(key, iv)
    .map_err(|_| CryptoError::invalid_key_size())?;
  Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

#[cfg(not(any(feature = "des-md5", feature = "des-sha256")))]
fn encrypt_des_cbc(_key: &[u8], _iv: &[u8], _plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  Err(CryptoError::cipher_not_enabled())
}

#[cfg(any(feature = "des-md5", feature = "des-sha256"))]
fn decrypt_des_cbc(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  use cbc::cipher::block_padding::Pkcs7;
  use cbc::cipher::{BlockDecryptMut, KeyIvInit};
  use des::Des;

  let dec = cbc::Decryptor::<Des>::new_from_slices(key, iv)
    .map_err(|_| CryptoError::invalid_key_size())?;
  dec
    .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
    .map_err(|_| CryptoError::cipher_failure())
}

#[cfg(not(any(feature = "des-md5", feature = "des-sha256")))]
fn decrypt_des_cbc(_key: &[u8], _iv: &[u8], _ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
  Err(CryptoError::cipher_not_enabled())
}
