//! End-to-end integration test exercising the full staking flow:
//! funding → locker creation → stake → time passing → unstake → balance verification.

use farmstake_ledger::manager::StakeManager;
use farmstake_ledger::token::{MemoryTokenLedger, TokenLedger};
use farmstake_types::constants::SECONDS_PER_DAY;
use farmstake_types::error::{StakeError, TokenError};
use farmstake_types::primitives::*;
use farmstake_types::staking::Phase;

const REWARD_TOKEN: TokenId = [0x10u8; 32];
const STAKE_TOKEN: TokenId = [0x20u8; 32];
const ADMIN: Address = [0xAAu8; 20];
const ALICE: Address = [0x01u8; 20];
const BOB: Address = [0x02u8; 20];
const START: Timestamp = 1_700_000_000;

/// Helper: a funded manager plus a ledger with user balances minted.
fn deploy(funding: Amount) -> (StakeManager, MemoryTokenLedger) {
    let mut manager = StakeManager::new(ADMIN, REWARD_TOKEN, STAKE_TOKEN, 5);
    let mut ledger = MemoryTokenLedger::new();
    ledger.mint(REWARD_TOKEN, ADMIN, 1_000_000).unwrap();
    ledger.mint(STAKE_TOKEN, ALICE, 10_000).unwrap();
    ledger.mint(STAKE_TOKEN, BOB, 10_000).unwrap();
    ledger.approve(REWARD_TOKEN, ADMIN, funding);
    manager.fund_contract(&mut ledger, funding).unwrap();
    (manager, ledger)
}

/// Helper: approve and stake in one step.
fn stake(
    manager: &mut StakeManager,
    ledger: &mut MemoryTokenLedger,
    name: &str,
    user: Address,
    amount: Amount,
    now: Timestamp,
) -> Result<(), StakeError> {
    ledger.approve(STAKE_TOKEN, user, amount);
    manager.stake(ledger, name, user, amount, now)
}

#[test]
fn full_lifecycle_matured_stake() {
    let (mut manager, mut ledger) = deploy(50_000);
    assert_eq!(manager.phase(), Phase::Active);

    manager.create_locker("ONE_WEEK", 7, 10, 10, START).unwrap();
    stake(&mut manager, &mut ledger, "ONE_WEEK", ALICE, 1_000, START).unwrap();
    assert_eq!(ledger.balance_of(&STAKE_TOKEN, &ALICE), 9_000);
    assert_eq!(ledger.custody_balance(&STAKE_TOKEN), 1_000);

    // Well past the 7-day lock.
    let later = START + 366 * SECONDS_PER_DAY;
    let (returned, reward) = manager
        .unstake_all(&mut ledger, "ONE_WEEK", &ALICE, later)
        .unwrap();
    assert_eq!((returned, reward), (1_000, 100));

    assert_eq!(ledger.balance_of(&STAKE_TOKEN, &ALICE), 10_000);
    assert_eq!(ledger.balance_of(&REWARD_TOKEN, &ALICE), 100);
    assert_eq!(ledger.custody_balance(&STAKE_TOKEN), 0);
    assert_eq!(ledger.custody_balance(&REWARD_TOKEN), 49_900);
    assert_eq!(manager.total_staked(), 0);
    assert_eq!(manager.total_rewards_claimed(), 100);

    // The record survives as a zeroed entry and allows a fresh stake.
    let record = manager.locker_user_record("ONE_WEEK", &ALICE).unwrap();
    assert_eq!(record.stake_balance, 0);
    stake(&mut manager, &mut ledger, "ONE_WEEK", ALICE, 500, later).unwrap();
    assert_eq!(manager.locker_users("ONE_WEEK").unwrap(), &[ALICE]);
    assert_eq!(
        manager
            .locker_user_record("ONE_WEEK", &ALICE)
            .unwrap()
            .stake_balance,
        500
    );
}

#[test]
fn full_lifecycle_early_unstake() {
    let (mut manager, mut ledger) = deploy(50_000);
    manager.create_locker("ONE_WEEK", 7, 10, 10, START).unwrap();
    stake(&mut manager, &mut ledger, "ONE_WEEK", ALICE, 1_000, START).unwrap();

    // Unstake immediately: 10% penalty, no reward.
    let (returned, reward) = manager
        .unstake_all(&mut ledger, "ONE_WEEK", &ALICE, START)
        .unwrap();
    assert_eq!((returned, reward), (900, 0));

    assert_eq!(ledger.balance_of(&STAKE_TOKEN, &ALICE), 9_900);
    assert_eq!(ledger.balance_of(&REWARD_TOKEN, &ALICE), 0);
    // The forfeited penalty stays behind in custody.
    assert_eq!(ledger.custody_balance(&STAKE_TOKEN), 100);
    assert_eq!(manager.total_rewards_claimed(), 0);
}

#[test]
fn multiple_lockers_multiple_users() {
    let (mut manager, mut ledger) = deploy(50_000);
    manager.create_locker("ONE_WEEK", 7, 10, 10, START).unwrap();
    manager
        .create_locker("ONE_YEAR", 365, 85, 15, START)
        .unwrap();

    stake(&mut manager, &mut ledger, "ONE_WEEK", ALICE, 2_000, START).unwrap();
    stake(&mut manager, &mut ledger, "ONE_YEAR", ALICE, 3_000, START).unwrap();
    stake(&mut manager, &mut ledger, "ONE_YEAR", BOB, 999, START).unwrap();
    assert_eq!(manager.total_staked(), 5_999);
    assert_eq!(manager.locker_users("ONE_YEAR").unwrap(), &[ALICE, BOB]);

    // Day 8: ONE_WEEK has matured, ONE_YEAR has not.
    let day8 = START + 8 * SECONDS_PER_DAY;
    let (returned, reward) = manager
        .unstake_all(&mut ledger, "ONE_WEEK", &ALICE, day8)
        .unwrap();
    assert_eq!((returned, reward), (2_000, 200));

    // Bob bails out of the year lock early: floor(999 * 85 / 100) = 849.
    let (returned, reward) = manager
        .unstake_all(&mut ledger, "ONE_YEAR", &BOB, day8)
        .unwrap();
    assert_eq!((returned, reward), (849, 0));

    // Day 366: Alice's year lock matures. floor(3000 * 85 / 100) = 2550.
    let day366 = START + 366 * SECONDS_PER_DAY;
    let (returned, reward) = manager
        .unstake_all(&mut ledger, "ONE_YEAR", &ALICE, day366)
        .unwrap();
    assert_eq!((returned, reward), (3_000, 2_550));

    assert_eq!(manager.total_staked(), 0);
    assert_eq!(manager.total_rewards_claimed(), 2_750);
    assert_eq!(ledger.balance_of(&REWARD_TOKEN, &ALICE), 2_750);
    assert_eq!(ledger.balance_of(&STAKE_TOKEN, &BOB), 10_000 - 150);
}

#[test]
fn staking_gated_until_funded() {
    let mut manager = StakeManager::new(ADMIN, REWARD_TOKEN, STAKE_TOKEN, 5);
    let mut ledger = MemoryTokenLedger::new();
    ledger.mint(REWARD_TOKEN, ADMIN, 1_000_000).unwrap();
    ledger.mint(STAKE_TOKEN, ALICE, 10_000).unwrap();

    manager.create_locker("ONE_WEEK", 7, 10, 10, START).unwrap();
    let err = stake(&mut manager, &mut ledger, "ONE_WEEK", ALICE, 1_000, START).unwrap_err();
    assert_eq!(
        err,
        StakeError::PhaseNotActive {
            phase: Phase::Initialized
        }
    );

    ledger.approve(REWARD_TOKEN, ADMIN, 50_000);
    manager.fund_contract(&mut ledger, 50_000).unwrap();
    assert_eq!(manager.phase(), Phase::Active);
    stake(&mut manager, &mut ledger, "ONE_WEEK", ALICE, 1_000, START).unwrap();
}

#[test]
fn failed_transfer_leaves_everything_untouched() {
    let (mut manager, mut ledger) = deploy(50_000);
    manager.create_locker("ONE_WEEK", 7, 10, 10, START).unwrap();

    // Alice approves but does not hold enough.
    ledger.approve(STAKE_TOKEN, ALICE, 50_000);
    let err = manager
        .stake(&mut ledger, "ONE_WEEK", ALICE, 50_000, START)
        .unwrap_err();
    assert!(matches!(
        err,
        StakeError::Token(TokenError::InsufficientBalance { .. })
    ));

    assert!(manager.locker_users("ONE_WEEK").unwrap().is_empty());
    assert_eq!(manager.total_staked(), 0);
    assert_eq!(ledger.balance_of(&STAKE_TOKEN, &ALICE), 10_000);
    assert_eq!(ledger.custody_balance(&STAKE_TOKEN), 0);
}

#[test]
fn error_precedence_on_create() {
    let (mut manager, _) = deploy(50_000);
    manager.create_locker("ONE_WEEK", 7, 10, 10, START).unwrap();

    // Name validation fires before the duplicate check.
    assert_eq!(
        manager.create_locker("", 7, 10, 10, START).unwrap_err(),
        StakeError::EmptyLockerName
    );
    assert_eq!(
        manager.create_locker("ONE_WEEK", 7, 0, 10, START).unwrap_err(),
        StakeError::ZeroRewardRate
    );
    assert_eq!(
        manager
            .create_locker("ONE_WEEK", 14, 10, 10, START)
            .unwrap_err(),
        StakeError::DuplicateLockerName("ONE_WEEK".to_string())
    );
    assert_eq!(manager.locker_names().len(), 1);
}

#[test]
fn maturity_boundary_is_inclusive() {
    let (mut manager, mut ledger) = deploy(50_000);
    manager.create_locker("ONE_WEEK", 7, 10, 10, START).unwrap();
    stake(&mut manager, &mut ledger, "ONE_WEEK", ALICE, 1_000, START).unwrap();

    // Exactly at the lock boundary the stake counts as matured.
    let boundary = START + 7 * SECONDS_PER_DAY;
    let (returned, reward) = manager
        .unstake_all(&mut ledger, "ONE_WEEK", &ALICE, boundary)
        .unwrap();
    assert_eq!((returned, reward), (1_000, 100));
}

#[test]
fn one_second_before_maturity_is_early() {
    let (mut manager, mut ledger) = deploy(50_000);
    manager.create_locker("ONE_WEEK", 7, 10, 10, START).unwrap();
    stake(&mut manager, &mut ledger, "ONE_WEEK", ALICE, 1_000, START).unwrap();

    let almost = START + 7 * SECONDS_PER_DAY - 1;
    let (returned, reward) = manager
        .unstake_all(&mut ledger, "ONE_WEEK", &ALICE, almost)
        .unwrap();
    assert_eq!((returned, reward), (900, 0));
}
