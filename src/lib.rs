//! # Friendzy Rust SDK
//!
//! A Rust SDK for the Friendzy social-token program on Solana.
//!
//! ## Modules
//!
//! - [`program`]: On-chain interaction — account snapshots, instruction
//!   payloads and builders, PDA derivation, and the bonding-curve pricing
//!   engine. Everything here is pure and offline except the optional RPC
//!   client behind the `client` feature.
//! - [`shared`]: Lamport display conversions.
//!
//! ## Quick Start - Pricing
//!
//! ```rust,ignore
//! use friendzy_sdk::program::curve;
//!
//! // Cost of the very first key of a subject: 0.01 SOL
//! let cost = curve::keys_cost(0, 1).unwrap();
//! assert_eq!(cost, 10_000_000);
//! ```
//!
//! ## Quick Start - On-Chain State
//!
//! ```rust,ignore
//! use friendzy_sdk::program::FriendzyClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = FriendzyClient::new("https://api.mainnet-beta.solana.com");
//!
//!     let config = client.get_config(1_162_302_698_118_684_672).await.unwrap();
//!     println!("supply: {} royalties: {}", config.supply, config.royalties_ui());
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// On-chain program interaction module.
/// Contains the codecs, builders, and pricing for the Friendzy smart contract.
pub mod program;

/// Shared utilities and constants.
/// Used across all SDK modules.
pub mod shared;

// ============================================================================
// PRELUDE
// ============================================================================

pub mod prelude {
    pub use crate::program::accounts::{Config, Profile};
    #[cfg(feature = "client")]
    pub use crate::program::client::FriendzyClient;
    pub use crate::program::constants::{PROGRAM_ID, VAULT};
    pub use crate::program::curve::{
        fractional_key_price, key_price, key_price_ui, keys_cost, keys_cost_ui, KEY,
    };
    pub use crate::program::error::{SdkError, SdkResult};
    pub use crate::program::instructions::{
        build_swap_instruction, build_verify_instruction, build_withdraw_instruction,
        parse_instruction, FriendzyInstruction, Side, SwapArgs, SwapParams, VerifyArgs,
        WithdrawArgs,
    };
    pub use crate::program::pda::{
        get_bank_pda, get_config_pda, get_metadata_pda, get_mint_pda, get_profile_pda,
    };
    pub use crate::shared::lamports::{lamports_to_ui, LAMPORTS_PER_SOL};
}
