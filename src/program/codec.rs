//! Fixed-width field codec.
//!
//! Every on-chain Friendzy record is a flat little-endian byte layout of
//! unsigned integers and 32-byte pubkeys at fixed offsets. These helpers read
//! and write single fields with explicit bounds checks; higher layers
//! (accounts, instructions) compose them at their layout offsets.

use solana_pubkey::Pubkey;

use crate::program::error::{SdkError, SdkResult};

#[inline]
fn check_bounds(data: &[u8], offset: usize, width: usize) -> SdkResult<()> {
    if offset + width > data.len() {
        return Err(SdkError::BufferTooShort {
            needed: width,
            offset,
            len: data.len(),
        });
    }
    Ok(())
}

/// Read a u8 at `offset`.
#[inline]
pub fn read_u8(data: &[u8], offset: usize) -> SdkResult<u8> {
    check_bounds(data, offset, 1)?;
    Ok(data[offset])
}

/// Read a little-endian u64 at `offset`.
#[inline]
pub fn read_u64_le(data: &[u8], offset: usize) -> SdkResult<u64> {
    check_bounds(data, offset, 8)?;
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    Ok(u64::from_le_bytes(bytes))
}

/// Read a 32-byte pubkey at `offset`.
#[inline]
pub fn read_pubkey(data: &[u8], offset: usize) -> SdkResult<Pubkey> {
    check_bounds(data, offset, 32)?;
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&data[offset..offset + 32]);
    Ok(Pubkey::new_from_array(bytes))
}

/// Write a u8 at `offset`.
#[inline]
pub fn write_u8(data: &mut [u8], offset: usize, value: u8) -> SdkResult<()> {
    check_bounds(data, offset, 1)?;
    data[offset] = value;
    Ok(())
}

/// Write a u64 at `offset`, little-endian.
#[inline]
pub fn write_u64_le(data: &mut [u8], offset: usize, value: u64) -> SdkResult<()> {
    check_bounds(data, offset, 8)?;
    data[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
    Ok(())
}

/// Write a 32-byte pubkey at `offset`.
#[inline]
pub fn write_pubkey(data: &mut [u8], offset: usize, value: &Pubkey) -> SdkResult<()> {
    check_bounds(data, offset, 32)?;
    data[offset..offset + 32].copy_from_slice(value.as_ref());
    Ok(())
}
