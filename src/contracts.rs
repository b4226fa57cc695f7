// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Contract ABI definitions
//!
//! The `sol!` macro generates one `<name>Call` struct per function, carrying
//! the selector, argument encoding and return decoding. Flows build these
//! structs and hand the encoded calldata to the
//! [`WalletProvider`](crate::WalletProvider).
//!
//! ```rust
//! use alloy_primitives::Address;
//! use alloy_sol_types::SolCall;
//! use stakeflow::contracts::IERC20;
//!
//! let call = IERC20::allowanceCall {
//!     owner: Address::ZERO,
//!     spender: Address::ZERO,
//! };
//! assert_eq!(IERC20::allowanceCall::SIGNATURE, "allowance(address,address)");
//! assert_eq!(call.abi_encode().len(), 4 + 32 * 2);
//! ```

use alloy_sol_types::sol;

sol! {
    /// Minimal ERC-20 surface used by the flows
    interface IERC20 {
        function decimals() external view returns (uint8);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

sol! {
    /// PancakeSwap V2 style router, used only for quotes
    interface IPancakeRouter {
        function getAmountsOut(uint256 amountIn, address[] calldata path)
            external
            view
            returns (uint256[] memory amounts);
    }
}

sol! {
    /// KJC referral staking contract
    ///
    /// `buyAndStake` pulls `usdtAmount` of the stable token (so it needs an
    /// allowance), swaps it through the router with `amountOutMin` as the
    /// slippage floor, and stakes the output.
    interface IKjcStaking {
        function CLAIM_INTERVAL() external view returns (uint256);
        function COOLDOWN() external view returns (uint256);
        function MIN_REF_CLAIM() external view returns (uint256);
        function STAKE_DURATION() external view returns (uint256);

        function stakedAmount(address user) external view returns (uint256);
        function lastStakeTime(address user) external view returns (uint256);
        function lastClaim(address user) external view returns (uint256);
        function lastClaimReferral(address user) external view returns (uint256);
        function referralReward(address user) external view returns (uint256);
        function referrerOf(address user) external view returns (address);
        function getClaimable(address user) external view returns (uint256);
        function canWithdraw(address user) external view returns (bool);

        function setReferrer(address referrer) external;
        function buyAndStake(uint256 usdtAmount, uint256 amountOutMin) external;
        function claimStakingReward() external;
        function claimReferralReward() external;
        function withdrawStake() external;
    }
}
