//! Token-transfer capability consumed by the staking engine.
//!
//! The engine never holds balances itself; it asks a [`TokenLedger`] to move
//! value between user accounts and the engine's custody pool. The trait is
//! deliberately minimal: balance queries exist for callers and tests, not
//! for the engine's own invariants.

use std::collections::BTreeMap;

use farmstake_types::error::TokenError;
use farmstake_types::primitives::{Address, Amount, TokenId};

/// Moves value between user accounts and the engine's custody pool.
pub trait TokenLedger {
    /// Pull `amount` of `token` from `from` into custody.
    ///
    /// Fails with [`TokenError::InsufficientBalance`] or
    /// [`TokenError::InsufficientAllowance`].
    fn transfer_into(
        &mut self,
        token: &TokenId,
        from: &Address,
        amount: Amount,
    ) -> Result<(), TokenError>;

    /// Pay `amount` of `token` out of custody to `to`.
    ///
    /// Fails with [`TokenError::InsufficientCustodyBalance`].
    fn transfer_out(
        &mut self,
        token: &TokenId,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TokenError>;

    /// Current balance of `account` for `token`.
    fn balance_of(&self, token: &TokenId, account: &Address) -> Amount;
}

/// In-memory [`TokenLedger`] with an ERC20-style allowance model.
///
/// Each account approves the custodian to pull up to an allowance per token;
/// `transfer_into` consumes both balance and allowance. Intended as a test
/// harness; a deployment backs the trait with its real token system.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenLedger {
    /// Per-token account balances.
    balances: BTreeMap<TokenId, BTreeMap<Address, Amount>>,
    /// Per-token amounts each account has approved the custodian to pull.
    allowances: BTreeMap<TokenId, BTreeMap<Address, Amount>>,
    /// Per-token custody pool.
    custody: BTreeMap<TokenId, Amount>,
}

impl MemoryTokenLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit freshly minted tokens to an account. Returns error on overflow.
    pub fn mint(
        &mut self,
        token: TokenId,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let entry = self
            .balances
            .entry(token)
            .or_default()
            .entry(to)
            .or_insert(0);
        *entry = entry
            .checked_add(amount)
            .ok_or(TokenError::BalanceOverflow)?;
        Ok(())
    }

    /// Approve the custodian to pull up to `amount` of `token` from `owner`.
    /// Overwrites any previous approval.
    pub fn approve(&mut self, token: TokenId, owner: Address, amount: Amount) {
        self.allowances.entry(token).or_default().insert(owner, amount);
    }

    /// Remaining approval for `owner` on `token`.
    pub fn allowance(&self, token: &TokenId, owner: &Address) -> Amount {
        self.allowances
            .get(token)
            .and_then(|m| m.get(owner))
            .copied()
            .unwrap_or(0)
    }

    /// Amount of `token` currently held in custody.
    pub fn custody_balance(&self, token: &TokenId) -> Amount {
        self.custody.get(token).copied().unwrap_or(0)
    }
}

impl TokenLedger for MemoryTokenLedger {
    fn transfer_into(
        &mut self,
        token: &TokenId,
        from: &Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let available = self.balance_of(token, from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                available,
                required: amount,
            });
        }
        let approved = self.allowance(token, from);
        if approved < amount {
            return Err(TokenError::InsufficientAllowance {
                approved,
                required: amount,
            });
        }

        let pool = self.custody.entry(*token).or_insert(0);
        *pool = pool
            .checked_add(amount)
            .ok_or(TokenError::BalanceOverflow)?;

        // Both debits are guaranteed to succeed by the checks above.
        if let Some(balance) = self.balances.get_mut(token).and_then(|m| m.get_mut(from)) {
            *balance -= amount;
        }
        if let Some(allowance) = self.allowances.get_mut(token).and_then(|m| m.get_mut(from)) {
            *allowance -= amount;
        }
        Ok(())
    }

    fn transfer_out(
        &mut self,
        token: &TokenId,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let available = self.custody_balance(token);
        if available < amount {
            return Err(TokenError::InsufficientCustodyBalance {
                available,
                required: amount,
            });
        }

        let entry = self
            .balances
            .entry(*token)
            .or_default()
            .entry(*to)
            .or_insert(0);
        *entry = entry
            .checked_add(amount)
            .ok_or(TokenError::BalanceOverflow)?;

        if let Some(pool) = self.custody.get_mut(token) {
            *pool -= amount;
        }
        Ok(())
    }

    fn balance_of(&self, token: &TokenId, account: &Address) -> Amount {
        self.balances
            .get(token)
            .and_then(|m| m.get(account))
            .copied()
            .unwrap_or(0)
    }
}
