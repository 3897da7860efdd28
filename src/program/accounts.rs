//! Account structures and deserialization for Friendzy.
//!
//! This module contains the two on-chain account snapshots with their exact
//! byte layouts matching the program. Accounts are created and mutated only
//! by the on-chain program; the SDK decodes fetched snapshots and never
//! persists state itself.

use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

use crate::program::codec::{
    read_pubkey, read_u64_le, write_pubkey, write_u64_le,
};
use crate::program::constants::{CONFIG_SIZE, PROFILE_SIZE};
use crate::program::error::{SdkError, SdkResult};
use crate::shared::lamports::lamports_to_ui;

// ============================================================================
// Config Account (72 bytes)
// ============================================================================

/// Config account - per-subject global state, one per tradable id
///
/// Layout:
/// - [0..8]   id (8 bytes)
/// - [8..16]  supply (8 bytes)
/// - [16..48] owner (32 bytes)
/// - [48..56] royalties (8 bytes)
/// - [56..64] unclaimed (8 bytes)
/// - [64..72] debt (8 bytes)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Subject id, externally assigned and immutable after creation
    pub id: u64,
    /// Total token lamports currently minted for this subject
    pub supply: u64,
    /// Royalty beneficiary
    pub owner: Pubkey,
    /// Cumulative royalties ever accrued, in lamports
    pub royalties: u64,
    /// Royalties accrued but not yet withdrawn, in lamports
    pub unclaimed: u64,
    /// Outstanding obligation, opaque to the SDK
    pub debt: u64,
}

impl Config {
    /// Account size in bytes
    pub const LEN: usize = CONFIG_SIZE;

    /// Deserialize from account data
    pub fn deserialize(data: &[u8]) -> SdkResult<Self> {
        if data.len() < Self::LEN {
            return Err(SdkError::InvalidDataLength {
                expected: Self::LEN,
                actual: data.len(),
            });
        }

        Ok(Self {
            id: read_u64_le(data, 0)?,
            supply: read_u64_le(data, 8)?,
            owner: read_pubkey(data, 16)?,
            royalties: read_u64_le(data, 48)?,
            unclaimed: read_u64_le(data, 56)?,
            debt: read_u64_le(data, 64)?,
        })
    }

    /// Write the account layout into `data` at offset 0.
    pub fn write_into(&self, data: &mut [u8]) -> SdkResult<()> {
        write_u64_le(data, 0, self.id)?;
        write_u64_le(data, 8, self.supply)?;
        write_pubkey(data, 16, &self.owner)?;
        write_u64_le(data, 48, self.royalties)?;
        write_u64_le(data, 56, self.unclaimed)?;
        write_u64_le(data, 64, self.debt)?;
        Ok(())
    }

    /// Total royalties ever accrued, in SOL.
    pub fn royalties_ui(&self) -> f64 {
        lamports_to_ui(self.royalties)
    }

    /// Royalties accrued but not yet withdrawn, in SOL.
    pub fn unclaimed_ui(&self) -> f64 {
        lamports_to_ui(self.unclaimed)
    }

    /// Royalties already claimed, in SOL.
    ///
    /// The program maintains `unclaimed <= royalties`.
    pub fn claimed_royalties_ui(&self) -> f64 {
        lamports_to_ui(self.royalties.saturating_sub(self.unclaimed))
    }
}

// ============================================================================
// Profile Account (80 bytes)
// ============================================================================

/// Profile account - per-user position for one subject
///
/// Layout:
/// - [0..8]   id (8 bytes)
/// - [8..40]  owner (32 bytes)
/// - [40..48] buy_amount (8 bytes)
/// - [48..56] sell_amount (8 bytes)
/// - [56..64] buy_volume (8 bytes)
/// - [64..72] sell_volume (8 bytes)
/// - [72..80] reserved (8 bytes)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Subject id this position belongs to
    pub id: u64,
    /// Position holder
    pub owner: Pubkey,
    /// Cumulative token lamports bought
    pub buy_amount: u64,
    /// Cumulative token lamports sold
    pub sell_amount: u64,
    /// Cumulative lamports paid on buys
    pub buy_volume: u64,
    /// Cumulative lamports received on sells
    pub sell_volume: u64,
    /// Unused, round-trips unchanged
    pub reserved: u64,
}

impl Profile {
    /// Account size in bytes
    pub const LEN: usize = PROFILE_SIZE;

    /// Deserialize from account data
    pub fn deserialize(data: &[u8]) -> SdkResult<Self> {
        if data.len() < Self::LEN {
            return Err(SdkError::InvalidDataLength {
                expected: Self::LEN,
                actual: data.len(),
            });
        }

        Ok(Self {
            id: read_u64_le(data, 0)?,
            owner: read_pubkey(data, 8)?,
            buy_amount: read_u64_le(data, 40)?,
            sell_amount: read_u64_le(data, 48)?,
            buy_volume: read_u64_le(data, 56)?,
            sell_volume: read_u64_le(data, 64)?,
            reserved: read_u64_le(data, 72)?,
        })
    }

    /// Write the account layout into `data` at offset 0.
    pub fn write_into(&self, data: &mut [u8]) -> SdkResult<()> {
        write_u64_le(data, 0, self.id)?;
        write_pubkey(data, 8, &self.owner)?;
        write_u64_le(data, 40, self.buy_amount)?;
        write_u64_le(data, 48, self.sell_amount)?;
        write_u64_le(data, 56, self.buy_volume)?;
        write_u64_le(data, 64, self.sell_volume)?;
        write_u64_le(data, 72, self.reserved)?;
        Ok(())
    }

    /// Cumulative keys bought, in whole keys.
    pub fn buy_amount_ui(&self) -> f64 {
        lamports_to_ui(self.buy_amount)
    }

    /// Cumulative keys sold, in whole keys.
    pub fn sell_amount_ui(&self) -> f64 {
        lamports_to_ui(self.sell_amount)
    }

    /// Cumulative SOL paid on buys.
    pub fn buy_volume_ui(&self) -> f64 {
        lamports_to_ui(self.buy_volume)
    }

    /// Cumulative SOL received on sells.
    pub fn sell_volume_ui(&self) -> f64 {
        lamports_to_ui(self.sell_volume)
    }
}
