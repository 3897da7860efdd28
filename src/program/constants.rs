//! Constants for the Friendzy program.
//!
//! This module contains program IDs, PDA seeds, instruction kind bytes, and
//! size constants matching the on-chain program exactly.

use solana_pubkey::Pubkey;
use std::str::FromStr;

// ============================================================================
// Program IDs
// ============================================================================

lazy_static::lazy_static! {
    /// Friendzy Program ID
    pub static ref PROGRAM_ID: Pubkey = Pubkey::from_str("FrenAezyygcqNKaCkYNzBAxTCo717wh1bgnKLqnxP8Cq").unwrap();

    /// Team vault that receives the protocol cut on every swap
    pub static ref VAULT: Pubkey = Pubkey::from_str("Fr3nGzsEefxDV5auZeiQVFeHj2NhSgvqztdLBYpsob5e").unwrap();

    /// Metaplex Token Metadata Program ID
    pub static ref MPL_TOKEN_METADATA_PROGRAM_ID: Pubkey = Pubkey::from_str("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s").unwrap();
}

/// SPL Token Program ID
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;

/// Associated Token Account Program ID
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;

/// System Program ID
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk_ids::system_program::ID;

/// Rent Sysvar ID
pub const RENT_SYSVAR_ID: Pubkey = solana_sdk_ids::sysvar::rent::ID;

// ============================================================================
// Instruction Kinds
// ============================================================================

/// Instruction kind bytes (at byte 9 of every payload, after version + id)
pub mod instruction {
    pub const VERIFY: u8 = 0;
    pub const BUY: u8 = 1;
    pub const SELL: u8 = 2;
    pub const WITHDRAW: u8 = 3;
}

/// Payload format version, always 0 at byte 0 of every instruction
pub const INSTRUCTION_VERSION: u8 = 0;

/// Byte offset of the instruction kind within every payload
pub const INSTRUCTION_KIND_OFFSET: usize = 9;

// ============================================================================
// PDA Seeds
// ============================================================================

/// Bank PDA seed
pub const BANK_SEED: &[u8] = b"bank";
/// Token mint PDA seed
pub const MINT_SEED: &[u8] = b"mint";
/// Config PDA seed (also the first seed of profile PDAs)
pub const CONFIG_SEED: &[u8] = b"config";
/// Metaplex metadata PDA seed
pub const METADATA_SEED: &[u8] = b"metadata";

// ============================================================================
// Account Sizes
// ============================================================================

/// Config account size in bytes
pub const CONFIG_SIZE: usize = 72;
/// Profile account size in bytes
pub const PROFILE_SIZE: usize = 80;

// ============================================================================
// Instruction Data Sizes
// ============================================================================

/// Verify payload size in bytes
pub const VERIFY_DATA_SIZE: usize = 42;
/// Swap (buy/sell) payload size in bytes
pub const SWAP_DATA_SIZE: usize = 26;
/// Withdraw payload size in bytes
pub const WITHDRAW_DATA_SIZE: usize = 10;
