#![no_std]
#![forbid(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "std")]
extern crate std;

pub mod consts;
pub mod error;
pub mod types;
pub mod validate;

pub mod build;
pub mod parse;

pub use error::{BuildError, BuildErrorKind, ParseError, ParseErrorKind};
pub use types::SaltedEnvelope;

pub use build::{build_envelope, envelope_len};
pub use parse::{is_salted, parse_envelope};
pub use validate::{bytes_eq_at, matching_len};
