//! PDA (Program Derived Address) derivation functions.
//!
//! This module provides all PDA derivation functions matching the on-chain
//! program. Address derivation must match the live program bit-for-bit, seed
//! tags included.

use solana_pubkey::Pubkey;

use crate::program::constants::{
    BANK_SEED, CONFIG_SEED, METADATA_SEED, MINT_SEED, MPL_TOKEN_METADATA_PROGRAM_ID,
};

/// Get the Bank PDA.
///
/// Seeds: ["bank"]
pub fn get_bank_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BANK_SEED], program_id)
}

/// Get the token Mint PDA for a subject.
///
/// Seeds: ["mint", id (8 bytes LE)]
pub fn get_mint_pda(id: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_SEED, &id.to_le_bytes()], program_id)
}

/// Get the Config PDA for a subject.
///
/// Seeds: ["config", id (8 bytes LE)]
pub fn get_config_pda(id: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED, &id.to_le_bytes()], program_id)
}

/// Get the Profile PDA for a subject and user.
///
/// Seeds: ["config", id (8 bytes LE), user]
///
/// The on-chain program reuses the "config" tag here instead of a distinct
/// "profile" tag; keep it as-is.
pub fn get_profile_pda(id: u64, user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CONFIG_SEED, &id.to_le_bytes(), user.as_ref()],
        program_id,
    )
}

/// Get the Metaplex Metadata PDA for a mint.
///
/// Seeds: ["metadata", metadata_program, mint], derived under the metadata
/// program itself.
pub fn get_metadata_pda(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            MPL_TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
        ],
        &MPL_TOKEN_METADATA_PROGRAM_ID,
    )
}
