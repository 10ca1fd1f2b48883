use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::primitives::*;

/// Lifecycle stage of the staking ledger.
///
/// Transitions are monotonic: `Initialized → Active` on the first successful
/// funding deposit; `Active` persists across subsequent top-ups. `Ended` is
/// reserved for a future administrative shutdown and has no transition
/// operation yet — staking is simply rejected in any non-`Active` phase.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub enum Phase {
    Initialized,
    Active,
    Ended,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Initialized
    }
}

/// Per-user stake record within a single locker.
///
/// A zeroed record and an absent record are equivalent: records are created
/// on first stake and zeroed (never deleted) on full withdrawal.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct StakeRecord {
    /// Amount currently locked. Zero means no active stake.
    pub stake_balance: Amount,
    /// When the current stake began. Meaningful only while `stake_balance > 0`.
    pub stake_timestamp: Timestamp,
    /// Reserved for incremental-accrual designs; always zero today — reward
    /// is computed and paid atomically at unstake.
    pub unclaimed_reward: Amount,
}

/// Public description of a locker, as returned by detail views.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct LockerDetail {
    pub name: String,
    /// Deterministic identity derived from the creation parameters.
    pub id: LockerId,
    /// Lock duration in seconds.
    pub lock_duration_secs: u64,
    /// Reward rate in whole percent, `1..=100`.
    pub reward_rate_pct: u8,
    /// Penalty rate in whole percent, `0..=100`.
    pub penalty_rate_pct: u8,
}
