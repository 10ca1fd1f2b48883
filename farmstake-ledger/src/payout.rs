//! Payout arithmetic for matured and early withdrawals.
//!
//! Rates are whole percentages applied with truncating integer
//! multiply-then-divide. No floating point, so payout amounts are exactly
//! reproducible.

use farmstake_types::error::StakeError;
use farmstake_types::primitives::Amount;

/// Compute the reward for a matured stake.
///
/// reward = stake * reward_rate / 100, truncating toward zero. Denominated
/// in the reward token regardless of the stake token's decimal scale.
pub fn maturity_reward(stake: Amount, reward_rate: u8) -> Result<Amount, StakeError> {
    let scaled = stake
        .checked_mul(reward_rate as Amount)
        .ok_or(StakeError::BalanceOverflow)?;
    Ok(scaled / 100)
}

/// Compute the principal returned on an early withdrawal.
///
/// returned = stake * (100 - penalty_rate) / 100, truncating toward zero.
/// The forfeited remainder stays in custody.
pub fn early_return(stake: Amount, penalty_rate: u8) -> Result<Amount, StakeError> {
    let keep_pct = (100u8.saturating_sub(penalty_rate)) as Amount;
    let scaled = stake
        .checked_mul(keep_pct)
        .ok_or(StakeError::BalanceOverflow)?;
    Ok(scaled / 100)
}
