/// 32-byte BLAKE3 hash.
pub type Hash = [u8; 32];

/// 20-byte account address.
pub type Address = [u8; 20];

/// Token identifier — 32-byte hash of the token definition.
pub type TokenId = [u8; 32];

/// Locker identifier — 32-byte hash of the locker's creation parameters.
pub type LockerId = [u8; 32];

/// Amount of tokens in base units.
pub type Amount = u128;

/// Unix timestamp in seconds.
pub type Timestamp = u64;
