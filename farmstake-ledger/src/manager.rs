//! The manager that owns lockers, the funding phase, and the fund accounts.

use std::collections::BTreeMap;

use farmstake_types::error::StakeError;
use farmstake_types::primitives::{Address, Amount, TokenId, Timestamp};
use farmstake_types::staking::{LockerDetail, Phase, StakeRecord};

use crate::locker::Locker;
use crate::token::TokenLedger;

/// The staking ledger: a registry of lockers plus phase and fund accounting.
///
/// A single owned aggregate: all operations take `&mut self` and run to
/// completion synchronously, so the borrow checker serializes access. Token
/// movement goes through the [`TokenLedger`] passed to each operation, always
/// ordered validate → transfer → commit.
#[derive(Debug, Clone)]
pub struct StakeManager {
    /// Account the reward pool is funded from.
    admin: Address,
    reward_token: TokenId,
    stake_token: TokenId,
    /// Informational deploy parameter exposed by a view.
    rewards_duration_days: u64,
    phase: Phase,
    /// Cumulative reward-token funding; never decremented.
    funding_balance: Amount,
    total_staked: Amount,
    total_rewards_claimed: Amount,
    /// Registry keyed by unique name, with insertion order kept separately
    /// for enumeration.
    lockers: BTreeMap<String, Locker>,
    locker_order: Vec<String>,
}

impl StakeManager {
    /// Create a ledger in the `Initialized` phase with no lockers.
    pub fn new(
        admin: Address,
        reward_token: TokenId,
        stake_token: TokenId,
        rewards_duration_days: u64,
    ) -> Self {
        Self {
            admin,
            reward_token,
            stake_token,
            rewards_duration_days,
            phase: Phase::Initialized,
            funding_balance: 0,
            total_staked: 0,
            total_rewards_claimed: 0,
            lockers: BTreeMap::new(),
            locker_order: Vec::new(),
        }
    }

    /// Deposit reward tokens from the administrator into the reward pool.
    ///
    /// The first successful deposit activates staking; later calls are pure
    /// top-ups.
    pub fn fund_contract(
        &mut self,
        ledger: &mut dyn TokenLedger,
        amount: Amount,
    ) -> Result<(), StakeError> {
        if amount == 0 {
            return Err(StakeError::ZeroDeposit);
        }
        ledger.transfer_into(&self.reward_token, &self.admin, amount)?;

        self.funding_balance = self.funding_balance.saturating_add(amount);
        if self.phase == Phase::Initialized {
            self.phase = Phase::Active;
            tracing::info!("staking activated with funding of {}", amount);
        } else {
            tracing::debug!("reward pool topped up by {}", amount);
        }
        Ok(())
    }

    /// Register a new locker. Callable in any phase; no funds move.
    pub fn create_locker(
        &mut self,
        name: &str,
        lock_duration_days: u64,
        reward_rate: u8,
        penalty_rate: u8,
        now: Timestamp,
    ) -> Result<(), StakeError> {
        // Locker::new validates name and rates; the uniqueness check comes
        // after so those failures take precedence.
        let locker = Locker::new(name, lock_duration_days, reward_rate, penalty_rate, now)?;
        if self.lockers.contains_key(name) {
            return Err(StakeError::DuplicateLockerName(name.to_string()));
        }

        tracing::info!("locker created: {} ({})", name, hex::encode(locker.id()));
        self.locker_order.push(name.to_string());
        self.lockers.insert(name.to_string(), locker);
        Ok(())
    }

    /// Lock up `amount` of the stake token for `user` in the named locker.
    pub fn stake(
        &mut self,
        ledger: &mut dyn TokenLedger,
        name: &str,
        user: Address,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), StakeError> {
        if self.phase != Phase::Active {
            return Err(StakeError::PhaseNotActive { phase: self.phase });
        }
        let locker = self
            .lockers
            .get_mut(name)
            .ok_or_else(|| StakeError::LockerNotFound(name.to_string()))?;
        locker.check_stake(&user, amount)?;

        ledger.transfer_into(&self.stake_token, &user, amount)?;

        locker.commit_stake(user, amount, now);
        self.total_staked = self.total_staked.saturating_add(amount);
        tracing::debug!("stake of {} recorded in locker {}", amount, name);
        Ok(())
    }

    /// Withdraw a user's entire stake from the named locker.
    ///
    /// Pays the returned principal in the stake token and, on a matured
    /// stake, the reward in the reward token. Returns
    /// `(returned_stake, reward)`.
    pub fn unstake_all(
        &mut self,
        ledger: &mut dyn TokenLedger,
        name: &str,
        user: &Address,
        now: Timestamp,
    ) -> Result<(Amount, Amount), StakeError> {
        let locker = self
            .lockers
            .get_mut(name)
            .ok_or_else(|| StakeError::LockerNotFound(name.to_string()))?;
        let payout = locker.prepare_unstake(user, now)?;

        // The reward leg can fail on an underfunded pool, so it goes first.
        // Stake-token custody always covers the principal (every stake
        // deposits into custody and penalties stay behind), so once the
        // reward is paid the principal leg cannot fail.
        if payout.reward > 0 {
            ledger.transfer_out(&self.reward_token, user, payout.reward)?;
        }
        ledger.transfer_out(&self.stake_token, user, payout.returned_stake)?;

        locker.commit_unstake(user, &payout);
        self.total_staked = self.total_staked.saturating_sub(payout.prior_balance);
        self.total_rewards_claimed = self
            .total_rewards_claimed
            .saturating_add(payout.reward);
        tracing::debug!(
            "unstake from locker {}: returned {}, reward {}",
            name,
            payout.returned_stake,
            payout.reward
        );
        Ok((payout.returned_stake, payout.reward))
    }

    // ─── Views ───────────────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn reward_token(&self) -> TokenId {
        self.reward_token
    }

    pub fn stake_token(&self) -> TokenId {
        self.stake_token
    }

    pub fn rewards_duration_days(&self) -> u64 {
        self.rewards_duration_days
    }

    /// Cumulative reward-token amount deposited by the administrator.
    pub fn funding_balance(&self) -> Amount {
        self.funding_balance
    }

    /// Sum of all live stake balances across all lockers.
    pub fn total_staked(&self) -> Amount {
        self.total_staked
    }

    /// Cumulative reward-token amount paid out.
    pub fn total_rewards_claimed(&self) -> Amount {
        self.total_rewards_claimed
    }

    /// Registered locker names in creation order.
    pub fn locker_names(&self) -> &[String] {
        &self.locker_order
    }

    /// Public description of the named locker.
    pub fn locker_detail(&self, name: &str) -> Result<LockerDetail, StakeError> {
        self.locker(name).map(Locker::detail)
    }

    /// Every user who ever staked in the named locker, in first-stake order.
    pub fn locker_users(&self, name: &str) -> Result<&[Address], StakeError> {
        self.locker(name).map(Locker::participants)
    }

    /// The stake record for a user in the named locker; the zero record if
    /// the user never staked there.
    pub fn locker_user_record(
        &self,
        name: &str,
        user: &Address,
    ) -> Result<StakeRecord, StakeError> {
        self.locker(name).map(|locker| locker.record(user))
    }

    fn locker(&self, name: &str) -> Result<&Locker, StakeError> {
        self.lockers
            .get(name)
            .ok_or_else(|| StakeError::LockerNotFound(name.to_string()))
    }
}
