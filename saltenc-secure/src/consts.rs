/// AES-128 key size.
pub const AES_128_KEY_SIZE: usize = 16;

/// DES key size.
pub const DES_KEY_SIZE: usize = 8;

/// AES block size; CBC uses one block as the IV.
pub const AES_BLOCK_SIZE: usize = 16;

/// DES block size; CBC uses one block as the IV.
pub const DES_BLOCK_SIZE: usize = 8;

/// MD5 digest output size.
pub const MD5_OUTPUT_SIZE: usize = 16;

/// SHA-256 digest output size.
pub const SHA256_OUTPUT_SIZE: usize = 32;
