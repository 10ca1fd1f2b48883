//! A single staking pool: per-user records, lock maturity, and payout
//! computation.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use farmstake_types::error::StakeError;
use farmstake_types::locker::{compute_locker_id, lock_duration_secs, validate_locker_name, validate_rates};
use farmstake_types::primitives::{Address, Amount, LockerId, Timestamp};
use farmstake_types::staking::{LockerDetail, StakeRecord};

use crate::payout;

/// Amounts owed to a user on withdrawal, computed before any state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    /// Stake-token amount returned to the user (reduced by the penalty on an
    /// early withdrawal).
    pub returned_stake: Amount,
    /// Reward-token amount owed; zero on an early withdrawal.
    pub reward: Amount,
    /// The user's full stake balance prior to withdrawal, which is the
    /// amount removed from the staked totals.
    pub prior_balance: Amount,
}

/// A named staking pool with its own lock duration, reward rate, and
/// early-withdrawal penalty rate.
///
/// The locker only does record-keeping and arithmetic; token custody belongs
/// to the manager. Operations are split into a read-only check/prepare step
/// and an infallible commit step so the manager can order the external token
/// transfer between the two.
#[derive(Debug, Clone)]
pub struct Locker {
    name: String,
    id: LockerId,
    /// Lock duration in seconds.
    lock_duration: u64,
    reward_rate: u8,
    penalty_rate: u8,
    /// Every user who ever staked, in first-stake order. Never pruned;
    /// records are zeroed, not deleted, on full withdrawal.
    participants: Vec<Address>,
    records: BTreeMap<Address, StakeRecord>,
    total_staked: Amount,
    total_rewards_claimed: Amount,
}

impl Locker {
    /// Create a locker from administrator-supplied parameters.
    ///
    /// Validates the name and rates; the duration is supplied as a day count
    /// and stored as seconds.
    pub fn new(
        name: impl Into<String>,
        lock_duration_days: u64,
        reward_rate: u8,
        penalty_rate: u8,
        now: Timestamp,
    ) -> Result<Self, StakeError> {
        let name = name.into();
        validate_locker_name(&name)?;
        validate_rates(reward_rate, penalty_rate)?;

        let lock_duration = lock_duration_secs(lock_duration_days);
        let id = compute_locker_id(&name, lock_duration, reward_rate, penalty_rate, now);
        Ok(Self {
            name,
            id,
            lock_duration,
            reward_rate,
            penalty_rate,
            participants: Vec::new(),
            records: BTreeMap::new(),
            total_staked: 0,
            total_rewards_claimed: 0,
        })
    }

    /// Validate a stake without mutating anything.
    pub(crate) fn check_stake(&self, user: &Address, amount: Amount) -> Result<(), StakeError> {
        if amount == 0 {
            return Err(StakeError::ZeroDeposit);
        }
        if let Some(record) = self.records.get(user) {
            if record.stake_balance > 0 {
                return Err(StakeError::StakeAlreadyActive {
                    since: record.stake_timestamp,
                });
            }
        }
        Ok(())
    }

    /// Record a stake that has already been validated and funded.
    pub(crate) fn commit_stake(&mut self, user: Address, amount: Amount, now: Timestamp) {
        let record = match self.records.entry(user) {
            Entry::Vacant(vacant) => {
                self.participants.push(user);
                vacant.insert(StakeRecord::default())
            }
            Entry::Occupied(occupied) => occupied.into_mut(),
        };
        record.stake_balance = amount;
        record.stake_timestamp = now;
        self.total_staked = self.total_staked.saturating_add(amount);
    }

    /// Lock up a stake for a user.
    ///
    /// A user may hold only one live stake per locker: a second stake before
    /// full withdrawal fails with [`StakeError::StakeAlreadyActive`]
    /// regardless of amount or elapsed time.
    pub fn stake(&mut self, user: Address, amount: Amount, now: Timestamp) -> Result<(), StakeError> {
        self.check_stake(&user, amount)?;
        self.commit_stake(user, amount, now);
        Ok(())
    }

    /// Compute the payout for a full withdrawal without mutating anything.
    ///
    /// Matured stakes (`elapsed >= lock_duration`) return the full principal
    /// plus `principal * reward_rate / 100`. Early withdrawals return
    /// `principal * (100 - penalty_rate) / 100` and no reward.
    pub(crate) fn prepare_unstake(
        &self,
        user: &Address,
        now: Timestamp,
    ) -> Result<Payout, StakeError> {
        let record = self.records.get(user).copied().unwrap_or_default();
        if record.stake_balance == 0 {
            return Err(StakeError::NothingToUnstake);
        }

        let elapsed = now.saturating_sub(record.stake_timestamp);
        if elapsed >= self.lock_duration {
            let reward = payout::maturity_reward(record.stake_balance, self.reward_rate)?;
            Ok(Payout {
                returned_stake: record.stake_balance,
                reward,
                prior_balance: record.stake_balance,
            })
        } else {
            let returned = payout::early_return(record.stake_balance, self.penalty_rate)?;
            Ok(Payout {
                returned_stake: returned,
                reward: 0,
                prior_balance: record.stake_balance,
            })
        }
    }

    /// Apply a prepared withdrawal: zero the record and move the totals.
    /// The participant entry is retained.
    pub(crate) fn commit_unstake(&mut self, user: &Address, payout: &Payout) {
        if let Some(record) = self.records.get_mut(user) {
            record.stake_balance = 0;
            record.stake_timestamp = 0;
        }
        self.total_staked = self.total_staked.saturating_sub(payout.prior_balance);
        self.total_rewards_claimed = self.total_rewards_claimed.saturating_add(payout.reward);
    }

    /// Withdraw a user's entire stake.
    ///
    /// Returns `(returned_stake, reward)`; the caller performs the actual
    /// token movements.
    pub fn unstake_all(
        &mut self,
        user: &Address,
        now: Timestamp,
    ) -> Result<(Amount, Amount), StakeError> {
        let payout = self.prepare_unstake(user, now)?;
        self.commit_unstake(user, &payout);
        Ok((payout.returned_stake, payout.reward))
    }

    /// The stake record for a user. A user who never staked gets the zero
    /// record.
    pub fn record(&self, user: &Address) -> StakeRecord {
        self.records.get(user).copied().unwrap_or_default()
    }

    /// Every user who ever staked, in first-stake order.
    pub fn participants(&self) -> &[Address] {
        &self.participants
    }

    /// Public description of this locker.
    pub fn detail(&self) -> LockerDetail {
        LockerDetail {
            name: self.name.clone(),
            id: self.id,
            lock_duration_secs: self.lock_duration,
            reward_rate_pct: self.reward_rate,
            penalty_rate_pct: self.penalty_rate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> LockerId {
        self.id
    }

    /// Lock duration in seconds.
    pub fn lock_duration(&self) -> u64 {
        self.lock_duration
    }

    pub fn reward_rate(&self) -> u8 {
        self.reward_rate
    }

    pub fn penalty_rate(&self) -> u8 {
        self.penalty_rate
    }

    /// Sum of all live stake balances in this locker.
    pub fn total_staked(&self) -> Amount {
        self.total_staked
    }

    /// Cumulative reward paid out of this locker.
    pub fn total_rewards_claimed(&self) -> Amount {
        self.total_rewards_claimed
    }
}
