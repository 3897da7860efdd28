//! Error types for the Friendzy on-chain program module.

use thiserror::Error;

/// SDK-specific errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// RPC client error
    #[cfg(feature = "client")]
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    /// Account not found
    #[cfg(feature = "client")]
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Buffer too short for a fixed-width read or write
    #[error("Buffer too short: need {needed} bytes at offset {offset}, buffer is {len}")]
    BufferTooShort {
        needed: usize,
        offset: usize,
        len: usize,
    },

    /// Invalid data length
    #[error("Invalid data length: expected {expected}, got {actual}")]
    InvalidDataLength { expected: usize, actual: usize },

    /// Unknown instruction kind byte
    #[error("Unknown instruction kind: {0}")]
    UnknownInstructionKind(u8),

    /// Invalid side value
    #[error("Invalid side value: {0} (must be 1 or 2)")]
    InvalidSide(u8),

    /// Curve evaluation result does not fit in a u64
    #[error("Price overflow: curve result exceeds u64 range")]
    PriceOverflow,
}

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;
