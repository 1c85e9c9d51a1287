#![no_std]
#![forbid(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod cipher;
pub mod consts;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod types;

pub use error::{CryptoError, CryptoErrorKind};
pub use types::{CipherSuite, DigestAlgorithm, KeyMaterial};

pub use envelope::{decrypt, decrypt_base64, decrypt_base64_to_string, encrypt, encrypt_base64};
pub use kdf::derive_key_iv;
