/// ASCII marker that opens every salted envelope.
pub const SALTED_MAGIC: [u8; MAGIC_SIZE] = *b"Salted__";

/// Size of the `Salted__` marker in bytes.
pub const MAGIC_SIZE: usize = 8;

/// Size of the salt in bytes.
pub const SALT_SIZE: usize = 8;

/// Size of the fixed envelope prefix (marker + salt).
pub const HEADER_SIZE: usize = MAGIC_SIZE + SALT_SIZE;
