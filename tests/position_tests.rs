// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Referrer registration, withdrawals and summary reads

mod helpers;

use alloy_primitives::{Address, U256};
use alloy_sol_types::{SolCall, SolValue};
use helpers::{test_config, MockWallet, ACCOUNT, OTHER_ACCOUNT};
use stakeflow::config::constants::bsc;
use stakeflow::contracts::IKjcStaking;
use stakeflow::{
    ClaimDecision, ErrorKind, RemainingTime, Session, StakeError, TokenAmount, WithdrawOutcome,
};

const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

fn position_wallet(staked: u128, start: u64, duration: u64) -> MockWallet {
    MockWallet::staking()
        .with_staking_u256(IKjcStaking::stakedAmountCall::SELECTOR, U256::from(staked))
        .with_staking_u256(IKjcStaking::lastStakeTimeCall::SELECTOR, U256::from(start))
        .with_staking_u256(IKjcStaking::STAKE_DURATIONCall::SELECTOR, U256::from(duration))
}

#[tokio::test]
async fn test_register_referrer_rejects_self_and_zero() {
    let wallet = MockWallet::staking();
    let session = Session::connect(wallet.clone(), test_config()).await.unwrap();

    for referrer in [ACCOUNT, Address::ZERO] {
        let err = session.register_referrer(referrer).await.unwrap_err();
        assert!(matches!(err, StakeError::InvalidReferrer { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidReferrer);
    }
    assert!(wallet.sent().is_empty());
}

#[tokio::test]
async fn test_register_referrer_submits_set_referrer() {
    let wallet = MockWallet::staking();
    let session = Session::connect(wallet.clone(), test_config()).await.unwrap();

    let registered = session.register_referrer(OTHER_ACCOUNT).await.unwrap();

    assert_eq!(registered.referrer, OTHER_ACCOUNT);
    let sent = wallet.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, bsc::STAKING_CONTRACT);
    let call = IKjcStaking::setReferrerCall::abi_decode(&sent[0].input).unwrap();
    assert_eq!(call.referrer, OTHER_ACCOUNT);
}

#[tokio::test]
async fn test_withdraw_locked_stake() {
    let wallet = position_wallet(ONE_TOKEN, 1_000, 3_600).with_view(
        bsc::STAKING_CONTRACT,
        IKjcStaking::canWithdrawCall::SELECTOR,
        false.abi_encode(),
    );
    let session = Session::connect(wallet.clone(), test_config()).await.unwrap();

    let outcome = session.withdraw_stake_at(1_000).await.unwrap();

    assert_eq!(
        outcome,
        WithdrawOutcome::Locked {
            unlock_time: 4_600,
            remaining: RemainingTime {
                hours: 1,
                minutes: 0
            },
        }
    );
    assert!(wallet.sent().is_empty());
}

#[tokio::test]
async fn test_withdraw_matured_stake() {
    let wallet = position_wallet(ONE_TOKEN, 1_000, 3_600).with_view(
        bsc::STAKING_CONTRACT,
        IKjcStaking::canWithdrawCall::SELECTOR,
        true.abi_encode(),
    );
    let session = Session::connect(wallet.clone(), test_config()).await.unwrap();

    let outcome = session.withdraw_stake_at(5_000).await.unwrap();

    assert!(matches!(outcome, WithdrawOutcome::Withdrawn { .. }));
    assert!(wallet.sent()[0].is::<IKjcStaking::withdrawStakeCall>());
}

#[tokio::test]
async fn test_withdraw_without_stake() {
    let wallet = position_wallet(0, 0, 3_600);
    let session = Session::connect(wallet.clone(), test_config()).await.unwrap();

    assert_eq!(
        session.withdraw_stake_at(10).await.unwrap(),
        WithdrawOutcome::NothingStaked
    );
    assert!(wallet.sent().is_empty());
}

#[tokio::test]
async fn test_staking_summary_display() {
    let wallet = position_wallet(ONE_TOKEN * 3 / 2, 1_000, 3_600)
        .with_staking_u256(
            IKjcStaking::getClaimableCall::SELECTOR,
            U256::from(ONE_TOKEN / 4),
        )
        .with_staking_u256(IKjcStaking::lastClaimCall::SELECTOR, U256::from(1_000u64))
        .with_staking_u256(IKjcStaking::CLAIM_INTERVALCall::SELECTOR, U256::from(86_400u64));
    let session = Session::connect(wallet, test_config()).await.unwrap();

    let summary = session.staking_summary_at(2_000).await.unwrap();

    assert_eq!(summary.staked_display, "1.5");
    assert_eq!(summary.pending_display, "0.25");
    assert_eq!(summary.position.end_time(), 4_600);
    assert!(!summary.matured);
    assert_eq!(
        summary.claim,
        ClaimDecision::Denied {
            remaining_seconds: 85_400
        }
    );
}

#[tokio::test]
async fn test_referral_summary_without_referrer() {
    let wallet = MockWallet::staking()
        .with_view(
            bsc::STAKING_CONTRACT,
            IKjcStaking::referrerOfCall::SELECTOR,
            Address::ZERO.abi_encode(),
        )
        .with_staking_u256(
            IKjcStaking::referralRewardCall::SELECTOR,
            U256::from(ONE_TOKEN * 2),
        )
        .with_staking_u256(IKjcStaking::MIN_REF_CLAIMCall::SELECTOR, U256::from(ONE_TOKEN))
        .with_staking_u256(IKjcStaking::lastClaimReferralCall::SELECTOR, U256::ZERO)
        .with_staking_u256(IKjcStaking::COOLDOWNCall::SELECTOR, U256::from(86_400u64));
    let session = Session::connect(wallet, test_config()).await.unwrap();

    let summary = session.referral_summary_at(100_000).await.unwrap();

    assert_eq!(summary.referrer, None);
    assert_eq!(summary.reward_display, "2");
    assert_eq!(summary.minimum_claim, TokenAmount::from(ONE_TOKEN as u64));
    assert_eq!(summary.claim, ClaimDecision::Permitted);
}

#[tokio::test]
async fn test_allowance_read_is_fresh() {
    let wallet = MockWallet::staking().with_allowance(U256::from(7u64));
    let session = Session::connect(wallet.clone(), test_config()).await.unwrap();
    assert_eq!(
        session.allowance().await.unwrap().current_allowance,
        TokenAmount::from(7u64)
    );

    let wallet = wallet.with_allowance(U256::from(9u64));
    assert_eq!(
        session.allowance().await.unwrap().current_allowance,
        TokenAmount::from(9u64)
    );
    assert_eq!(wallet.sent().len(), 0);
}
