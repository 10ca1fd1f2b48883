// ─── Time Parameters ─────────────────────────────────────────────────────────

/// Seconds in a day — lock durations are supplied as day counts and stored
/// as seconds.
pub const SECONDS_PER_DAY: u64 = 86_400;

// ─── Rate Parameters ─────────────────────────────────────────────────────────

/// Upper bound (inclusive) for reward and penalty rates, in whole percent.
pub const MAX_RATE_PCT: u8 = 100;

// ─── Locker Parameters ───────────────────────────────────────────────────────

/// Maximum length of a locker name in bytes.
pub const MAX_LOCKER_NAME_LEN: usize = 64;
