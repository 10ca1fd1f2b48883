use crate::constants::{MAX_LOCKER_NAME_LEN, MAX_RATE_PCT, SECONDS_PER_DAY};
use crate::error::StakeError;
use crate::primitives::{LockerId, Timestamp};

/// Validate a locker name: non-empty printable ASCII, 1-64 chars.
pub fn validate_locker_name(name: &str) -> Result<(), StakeError> {
    if name.is_empty() {
        return Err(StakeError::EmptyLockerName);
    }
    for c in name.chars() {
        if !c.is_ascii() || c.is_ascii_control() {
            return Err(StakeError::InvalidLockerName {
                reason: format!("name must be printable ASCII, found '{c}'"),
            });
        }
    }
    // Past the ASCII check, byte length equals character count.
    if name.len() > MAX_LOCKER_NAME_LEN {
        return Err(StakeError::InvalidLockerName {
            reason: format!(
                "name must be at most {MAX_LOCKER_NAME_LEN} characters, got {}",
                name.len()
            ),
        });
    }
    Ok(())
}

/// Validate reward and penalty rates: reward in `1..=100`, penalty in `0..=100`.
pub fn validate_rates(reward_rate: u8, penalty_rate: u8) -> Result<(), StakeError> {
    if reward_rate == 0 {
        return Err(StakeError::ZeroRewardRate);
    }
    if reward_rate > MAX_RATE_PCT {
        return Err(StakeError::RateOutOfRange {
            what: "reward",
            rate: reward_rate,
        });
    }
    if penalty_rate > MAX_RATE_PCT {
        return Err(StakeError::RateOutOfRange {
            what: "penalty",
            rate: penalty_rate,
        });
    }
    Ok(())
}

/// Convert an administrator-supplied day count to a duration in seconds.
pub fn lock_duration_secs(days: u64) -> u64 {
    days.saturating_mul(SECONDS_PER_DAY)
}

/// Compute the deterministic locker ID from a locker's creation parameters.
pub fn compute_locker_id(
    name: &str,
    lock_duration_secs: u64,
    reward_rate: u8,
    penalty_rate: u8,
    created_at: Timestamp,
) -> LockerId {
    use blake3::Hasher;
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    hasher.update(&lock_duration_secs.to_le_bytes());
    hasher.update(&[reward_rate, penalty_rate]);
    hasher.update(&created_at.to_le_bytes());
    *hasher.finalize().as_bytes()
}
