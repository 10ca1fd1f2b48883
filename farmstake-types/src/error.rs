use thiserror::Error;

use crate::primitives::{Amount, Timestamp};
use crate::staking::Phase;

/// All error codes for the staking ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StakeError {
    // ─── Locker Creation Errors ──────────────────────────────────────────────
    #[error("locker name cannot be empty")]
    EmptyLockerName,

    #[error("invalid locker name: {reason}")]
    InvalidLockerName { reason: String },

    #[error("reward rate percentage cannot be zero")]
    ZeroRewardRate,

    #[error("{what} rate {rate} exceeds 100 percent")]
    RateOutOfRange { what: &'static str, rate: u8 },

    #[error("locker with that name already exists: {0}")]
    DuplicateLockerName(String),

    // ─── Stake / Unstake Errors ──────────────────────────────────────────────
    #[error("no locker with that name: {0}")]
    LockerNotFound(String),

    #[error("staking phase not active: {phase:?}")]
    PhaseNotActive { phase: Phase },

    #[error("deposit value cannot be zero")]
    ZeroDeposit,

    #[error("already have a locked-up stake that has not matured (staked at {since})")]
    StakeAlreadyActive { since: Timestamp },

    #[error("nothing to unstake")]
    NothingToUnstake,

    // ─── Arithmetic Errors ───────────────────────────────────────────────────
    #[error("balance overflow")]
    BalanceOverflow,

    // ─── External Collaborator Errors ────────────────────────────────────────
    #[error("token ledger error: {0}")]
    Token(#[from] TokenError),
}

/// Errors surfaced by a token-ledger capability, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("insufficient balance: have {available}, need {required}")]
    InsufficientBalance { available: Amount, required: Amount },

    #[error("insufficient allowance: approved {approved}, need {required}")]
    InsufficientAllowance { approved: Amount, required: Amount },

    #[error("insufficient custody balance: have {available}, need {required}")]
    InsufficientCustodyBalance { available: Amount, required: Amount },

    #[error("balance overflow")]
    BalanceOverflow,
}
