//! Staking ledger engine for the Farmstake protocol.
//!
//! Users deposit a stake token into named lockers, each with its own lock
//! duration, reward rate, and early-withdrawal penalty rate. An administrator
//! funds a reward pool in a separate reward token; once a stake matures the
//! user withdraws principal plus reward, while an early withdrawal forfeits
//! the penalty fraction and earns nothing.
//!
//! Token movement is delegated to a [`token::TokenLedger`] capability. Every
//! operation follows the same ordering: validate in-memory state, perform the
//! external transfer, then commit bookkeeping. A failed transfer never
//! leaves partial state behind.

pub mod locker;
pub mod manager;
pub mod payout;
pub mod token;
