//! On-chain program interaction module for Friendzy.
//!
//! This module provides the codecs, PDA derivations, instruction builders,
//! and bonding-curve pricing for the Friendzy smart contract on Solana.

pub mod accounts;
#[cfg(feature = "client")]
pub mod client;
pub mod codec;
pub mod constants;
pub mod curve;
pub mod error;
pub mod instructions;
pub mod pda;

// Re-export commonly used items
pub use accounts::{Config, Profile};
#[cfg(feature = "client")]
pub use client::FriendzyClient;
pub use constants::*;
pub use curve::{
    fractional_key_price, key_price, key_price_ui, keys_cost, keys_cost_ui, KEY,
};
pub use error::{SdkError, SdkResult};
pub use instructions::{
    build_swap_instruction, build_verify_instruction, build_withdraw_instruction,
    parse_instruction, FriendzyInstruction, Side, SwapArgs, SwapParams, VerifyArgs,
    WithdrawArgs,
};
pub use pda::*;
