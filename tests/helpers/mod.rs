// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for stakeflow integration tests
//!
//! Provides a scripted [`WalletProvider`] so the flows can be exercised
//! without a browser wallet or a node.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy_primitives::{address, Address, Bytes, TxHash, B256, U256};
use alloy_sol_types::{SolCall, SolValue};
use async_trait::async_trait;
use stakeflow::config::constants::{bsc, rpc_codes};
use stakeflow::contracts::{IPancakeRouter, IERC20};
use stakeflow::{
    ChainDescriptor, ProviderError, StakingConfig, StakingConfigBuilder, StatusEvent, TxReceipt,
    WalletProvider,
};
use tokio::sync::mpsc;

pub const ACCOUNT: Address = address!("a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1");
pub const OTHER_ACCOUNT: Address = address!("b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2");

/// How the wallet answers `wallet_switchEthereumChain`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchBehavior {
    /// Switches to the requested chain
    Switches,
    /// Does not know the chain (code 4902); `wallet_addEthereumChain` switches
    Unrecognized,
    /// User declines the switch
    Declines,
}

/// A transaction the flow asked the wallet to send
#[derive(Debug, Clone)]
pub struct SentTx {
    pub from: Address,
    pub to: Address,
    pub input: Bytes,
}

impl SentTx {
    pub fn selector(&self) -> [u8; 4] {
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&self.input[..4]);
        selector
    }

    pub fn is<C: SolCall>(&self) -> bool {
        self.selector() == C::SELECTOR
    }
}

#[derive(Debug)]
struct MockState {
    accounts: Vec<Address>,
    accounts_after_switch: Option<Vec<Address>>,
    accounts_error: Option<ProviderError>,
    chain_id: u64,
    switch: SwitchBehavior,
    add_fails: bool,
    views: HashMap<(Address, [u8; 4]), Result<Bytes, ProviderError>>,
    send_error: Option<ProviderError>,
    receipt_status: bool,
    pending_polls: usize,
    sent: Vec<SentTx>,
    methods: Vec<&'static str>,
}

/// Scripted wallet
///
/// View results are keyed by contract address and selector. Approvals update
/// the scripted allowance, like the token contract would.
///
/// # Example
///
/// ```rust,ignore
/// let wallet = MockWallet::staking()
///     .with_u256(bsc::USDT_TOKEN, IERC20::allowanceCall::SELECTOR, U256::from(100));
/// let session = Session::connect(wallet.clone(), test_config()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct MockWallet {
    state: Arc<Mutex<MockState>>,
}

impl MockWallet {
    /// Wallet on `chain_id` with `ACCOUNT` and no scripted views
    pub fn new(chain_id: u64) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                accounts: vec![ACCOUNT],
                accounts_after_switch: None,
                accounts_error: None,
                chain_id,
                switch: SwitchBehavior::Switches,
                add_fails: false,
                views: HashMap::new(),
                send_error: None,
                receipt_status: true,
                pending_polls: 0,
                sent: Vec::new(),
                methods: Vec::new(),
            })),
        }
    }

    /// Wallet on BSC where both tokens report 18 decimals
    pub fn staking() -> Self {
        Self::new(bsc::CHAIN_ID)
            .with_view(bsc::USDT_TOKEN, IERC20::decimalsCall::SELECTOR, U256::from(18u8).abi_encode())
            .with_view(bsc::KJC_TOKEN, IERC20::decimalsCall::SELECTOR, U256::from(18u8).abi_encode())
    }

    fn update(self, f: impl FnOnce(&mut MockState)) -> Self {
        f(&mut self.state.lock().unwrap());
        self
    }

    /// Chain the wallet starts on
    pub fn with_chain_id(self, chain_id: u64) -> Self {
        self.update(|s| s.chain_id = chain_id)
    }

    pub fn with_accounts(self, accounts: Vec<Address>) -> Self {
        self.update(|s| s.accounts = accounts)
    }

    pub fn with_accounts_after_switch(self, accounts: Vec<Address>) -> Self {
        self.update(|s| s.accounts_after_switch = Some(accounts))
    }

    pub fn with_accounts_error(self, err: ProviderError) -> Self {
        self.update(|s| s.accounts_error = Some(err))
    }

    pub fn with_switch(self, switch: SwitchBehavior) -> Self {
        self.update(|s| s.switch = switch)
    }

    pub fn with_add_failure(self) -> Self {
        self.update(|s| s.add_fails = true)
    }

    pub fn with_view(self, to: Address, selector: [u8; 4], output: Vec<u8>) -> Self {
        self.update(|s| {
            s.views.insert((to, selector), Ok(output.into()));
        })
    }

    pub fn with_u256(self, to: Address, selector: [u8; 4], value: U256) -> Self {
        self.with_view(to, selector, value.abi_encode())
    }

    pub fn with_view_error(self, to: Address, selector: [u8; 4], err: ProviderError) -> Self {
        self.update(|s| {
            s.views.insert((to, selector), Err(err));
        })
    }

    /// Router quote returned by `getAmountsOut`
    pub fn with_quote(self, amounts: Vec<U256>) -> Self {
        self.with_view(
            bsc::PANCAKE_ROUTER_V2,
            IPancakeRouter::getAmountsOutCall::SELECTOR,
            amounts.abi_encode(),
        )
    }

    /// Allowance of the staking contract on the stable token
    pub fn with_allowance(self, allowance: U256) -> Self {
        self.with_u256(bsc::USDT_TOKEN, IERC20::allowanceCall::SELECTOR, allowance)
    }

    /// Decimals reported by the stable token
    pub fn with_stable_decimals(self, decimals: u8) -> Self {
        self.with_view(
            bsc::USDT_TOKEN,
            IERC20::decimalsCall::SELECTOR,
            U256::from(decimals).abi_encode(),
        )
    }

    pub fn with_staking_u256(self, selector: [u8; 4], value: U256) -> Self {
        self.with_u256(bsc::STAKING_CONTRACT, selector, value)
    }

    pub fn with_send_error(self, err: ProviderError) -> Self {
        self.update(|s| s.send_error = Some(err))
    }

    pub fn with_failed_receipts(self) -> Self {
        self.update(|s| s.receipt_status = false)
    }

    /// Number of `None` receipts before each receipt appears
    pub fn with_pending_polls(self, polls: usize) -> Self {
        self.update(|s| s.pending_polls = polls)
    }

    pub fn sent(&self) -> Vec<SentTx> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn methods(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().methods.clone()
    }

    pub fn chain(&self) -> u64 {
        self.state.lock().unwrap().chain_id
    }
}

fn tx_hash(index: usize) -> TxHash {
    B256::from(U256::from(index + 1))
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.methods.push("eth_requestAccounts");
        if let Some(err) = state.accounts_error.clone() {
            return Err(err);
        }
        Ok(state.accounts.clone())
    }

    async fn chain_id(&self) -> Result<u64, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.methods.push("eth_chainId");
        Ok(state.chain_id)
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.methods.push("wallet_switchEthereumChain");
        match state.switch {
            SwitchBehavior::Switches => {
                state.chain_id = chain_id;
                if let Some(accounts) = state.accounts_after_switch.take() {
                    state.accounts = accounts;
                }
                Ok(())
            }
            SwitchBehavior::Unrecognized => Err(ProviderError::rpc(
                rpc_codes::UNRECOGNIZED_CHAIN,
                "Unrecognized chain ID \"0x38\". Try adding the chain using wallet_addEthereumChain first.",
            )),
            SwitchBehavior::Declines => Err(ProviderError::rpc(
                rpc_codes::USER_REJECTED,
                "User rejected the request.",
            )),
        }
    }

    async fn add_chain(&self, chain: &ChainDescriptor) -> Result<(), ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.methods.push("wallet_addEthereumChain");
        if state.add_fails {
            return Err(ProviderError::rpc(rpc_codes::USER_REJECTED, "User rejected the request."));
        }
        state.chain_id = chain.chain_id;
        Ok(())
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.methods.push("eth_call");
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&input[..4]);
        state
            .views
            .get(&(to, selector))
            .cloned()
            .unwrap_or_else(|| {
                Err(ProviderError::rpc(
                    -32000,
                    format!("execution reverted: no scripted result for {to} {selector:02x?}"),
                ))
            })
    }

    async fn send_transaction(
        &self,
        from: Address,
        to: Address,
        input: Bytes,
    ) -> Result<TxHash, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.methods.push("eth_sendTransaction");
        if let Some(err) = state.send_error.clone() {
            return Err(err);
        }

        if input.starts_with(&IERC20::approveCall::SELECTOR) {
            let approve = IERC20::approveCall::abi_decode(&input).unwrap();
            state.views.insert(
                (to, IERC20::allowanceCall::SELECTOR),
                Ok(approve.amount.abi_encode().into()),
            );
        }

        state.sent.push(SentTx { from, to, input });
        Ok(tx_hash(state.sent.len() - 1))
    }

    async fn transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<TxReceipt>, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.methods.push("eth_getTransactionReceipt");
        if state.pending_polls > 0 {
            state.pending_polls -= 1;
            return Ok(None);
        }
        Ok(Some(TxReceipt {
            tx_hash,
            status: state.receipt_status,
            block_number: Some(1),
            gas_used: 21_000,
        }))
    }
}

/// BSC mainnet config with fast receipt polling
pub fn test_config() -> StakingConfig {
    StakingConfigBuilder::with_defaults()
        .receipt_poll_interval(Duration::from_millis(1))
        .build()
}

/// Channel status sink and its receiver
pub fn status_channel() -> (
    Arc<mpsc::UnboundedSender<StatusEvent>>,
    mpsc::UnboundedReceiver<StatusEvent>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Arc::new(tx), rx)
}

/// Drain every event currently queued
pub fn drain(rx: &mut mpsc::UnboundedReceiver<StatusEvent>) -> Vec<StatusEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
