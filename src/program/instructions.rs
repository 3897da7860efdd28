//! Instruction payloads and builders for the Friendzy program.
//!
//! Every payload is a flat little-endian layout: format version (always 0) at
//! byte 0, subject id at bytes 1..9, the instruction kind byte at byte 9, and
//! variant fields after that. Buy and sell share the swap layout and differ
//! only in the kind byte.

use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::program::codec::{read_pubkey, read_u64_le, read_u8};
use crate::program::constants::{
    instruction, ASSOCIATED_TOKEN_PROGRAM_ID, INSTRUCTION_KIND_OFFSET, INSTRUCTION_VERSION,
    MPL_TOKEN_METADATA_PROGRAM_ID, PROGRAM_ID, RENT_SYSVAR_ID, SWAP_DATA_SIZE,
    SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID, VAULT, VERIFY_DATA_SIZE, WITHDRAW_DATA_SIZE,
};
use crate::program::error::{SdkError, SdkResult};
use crate::program::pda::{
    get_bank_pda, get_config_pda, get_metadata_pda, get_mint_pda, get_profile_pda,
};

// ============================================================================
// Side
// ============================================================================

/// Swap side. The discriminant doubles as the instruction kind byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum Side {
    /// Buy keys; the swap price is the maximum the user will pay
    Buy = 1,
    /// Sell keys; the swap price is the minimum the user will accept
    Sell = 2,
}

impl TryFrom<u8> for Side {
    type Error = SdkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Side::Buy),
            2 => Ok(Side::Sell),
            _ => Err(SdkError::InvalidSide(value)),
        }
    }
}

// ============================================================================
// Verify (42 bytes)
// ============================================================================

/// Verify payload - links a subject id to its owner wallet.
///
/// Layout (42 bytes):
/// - [0]     version (always 0)
/// - [1..9]  id (8 bytes LE)
/// - [9]     kind = 0
/// - [10..42] owner (32 bytes)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyArgs {
    /// Subject id
    pub id: u64,
    /// Wallet to verify as the subject's owner
    pub owner: Pubkey,
}

impl VerifyArgs {
    /// Payload size in bytes
    pub const LEN: usize = VERIFY_DATA_SIZE;

    /// Serialize to instruction data.
    pub fn serialize(&self) -> Vec<u8> {
        let mut data = vec![0u8; Self::LEN];
        data[0] = INSTRUCTION_VERSION;
        data[1..9].copy_from_slice(&self.id.to_le_bytes());
        data[9] = instruction::VERIFY;
        data[10..42].copy_from_slice(self.owner.as_ref());
        data
    }

    /// Deserialize from instruction data.
    pub fn try_from_slice(data: &[u8]) -> SdkResult<Self> {
        if data.len() != Self::LEN {
            return Err(SdkError::InvalidDataLength {
                expected: Self::LEN,
                actual: data.len(),
            });
        }

        Ok(Self {
            id: read_u64_le(data, 1)?,
            owner: read_pubkey(data, 10)?,
        })
    }
}

// ============================================================================
// Swap (26 bytes)
// ============================================================================

/// Swap payload - buy or sell keys. The side is carried by the kind byte,
/// not stored here.
///
/// Layout (26 bytes):
/// - [0]      version (always 0)
/// - [1..9]   id (8 bytes LE)
/// - [9]      kind = 1 (buy) | 2 (sell)
/// - [10..18] amount (8 bytes LE, token lamports)
/// - [18..26] price (8 bytes LE, lamports; max for buys, min for sells)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapArgs {
    /// Subject id
    pub id: u64,
    /// Amount of keys to trade, in token lamports
    pub amount: u64,
    /// Price bound in lamports: max cost for buys, min proceeds for sells
    pub price: u64,
}

impl SwapArgs {
    /// Payload size in bytes
    pub const LEN: usize = SWAP_DATA_SIZE;

    /// Serialize to instruction data for the given side.
    pub fn serialize(&self, side: Side) -> Vec<u8> {
        let mut data = vec![0u8; Self::LEN];
        data[0] = INSTRUCTION_VERSION;
        data[1..9].copy_from_slice(&self.id.to_le_bytes());
        data[9] = side as u8;
        data[10..18].copy_from_slice(&self.amount.to_le_bytes());
        data[18..26].copy_from_slice(&self.price.to_le_bytes());
        data
    }

    /// Deserialize from instruction data. The kind byte is validated but the
    /// side lives on the [`FriendzyInstruction`] variant.
    pub fn try_from_slice(data: &[u8]) -> SdkResult<Self> {
        if data.len() != Self::LEN {
            return Err(SdkError::InvalidDataLength {
                expected: Self::LEN,
                actual: data.len(),
            });
        }
        Side::try_from(read_u8(data, INSTRUCTION_KIND_OFFSET)?)?;

        Ok(Self {
            id: read_u64_le(data, 1)?,
            amount: read_u64_le(data, 10)?,
            price: read_u64_le(data, 18)?,
        })
    }
}

// ============================================================================
// Withdraw (10 bytes)
// ============================================================================

/// Withdraw payload - claim accrued royalties. No trailing fields.
///
/// Layout (10 bytes):
/// - [0]    version (always 0)
/// - [1..9] id (8 bytes LE)
/// - [9]    kind = 3
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WithdrawArgs {
    /// Subject id
    pub id: u64,
}

impl WithdrawArgs {
    /// Payload size in bytes
    pub const LEN: usize = WITHDRAW_DATA_SIZE;

    /// Serialize to instruction data.
    pub fn serialize(&self) -> Vec<u8> {
        let mut data = vec![0u8; Self::LEN];
        data[0] = INSTRUCTION_VERSION;
        data[1..9].copy_from_slice(&self.id.to_le_bytes());
        data[9] = instruction::WITHDRAW;
        data
    }

    /// Deserialize from instruction data.
    pub fn try_from_slice(data: &[u8]) -> SdkResult<Self> {
        if data.len() != Self::LEN {
            return Err(SdkError::InvalidDataLength {
                expected: Self::LEN,
                actual: data.len(),
            });
        }

        Ok(Self {
            id: read_u64_le(data, 1)?,
        })
    }
}

// ============================================================================
// Tagged instruction
// ============================================================================

/// A decoded Friendzy instruction payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendzyInstruction {
    /// Kind 0
    Verify(VerifyArgs),
    /// Kind 1
    Buy(SwapArgs),
    /// Kind 2
    Sell(SwapArgs),
    /// Kind 3
    Withdraw(WithdrawArgs),
}

impl FriendzyInstruction {
    /// The kind byte this variant encodes to.
    pub fn kind(&self) -> u8 {
        match self {
            FriendzyInstruction::Verify(_) => instruction::VERIFY,
            FriendzyInstruction::Buy(_) => instruction::BUY,
            FriendzyInstruction::Sell(_) => instruction::SELL,
            FriendzyInstruction::Withdraw(_) => instruction::WITHDRAW,
        }
    }

    /// Subject id, common to every variant.
    pub fn id(&self) -> u64 {
        match self {
            FriendzyInstruction::Verify(args) => args.id,
            FriendzyInstruction::Buy(args) | FriendzyInstruction::Sell(args) => args.id,
            FriendzyInstruction::Withdraw(args) => args.id,
        }
    }

    /// Swap side, for the two swap variants.
    pub fn side(&self) -> Option<Side> {
        match self {
            FriendzyInstruction::Buy(_) => Some(Side::Buy),
            FriendzyInstruction::Sell(_) => Some(Side::Sell),
            _ => None,
        }
    }

    /// Serialize to instruction data.
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            FriendzyInstruction::Verify(args) => args.serialize(),
            FriendzyInstruction::Buy(args) => args.serialize(Side::Buy),
            FriendzyInstruction::Sell(args) => args.serialize(Side::Sell),
            FriendzyInstruction::Withdraw(args) => args.serialize(),
        }
    }
}

/// Parse raw instruction data into a tagged instruction.
///
/// Dispatches on the kind byte at offset 9; each variant then re-validates
/// the exact payload length for its own layout.
pub fn parse_instruction(data: &[u8]) -> SdkResult<FriendzyInstruction> {
    match read_u8(data, INSTRUCTION_KIND_OFFSET)? {
        instruction::VERIFY => Ok(FriendzyInstruction::Verify(VerifyArgs::try_from_slice(
            data,
        )?)),
        instruction::BUY => Ok(FriendzyInstruction::Buy(SwapArgs::try_from_slice(data)?)),
        instruction::SELL => Ok(FriendzyInstruction::Sell(SwapArgs::try_from_slice(data)?)),
        instruction::WITHDRAW => Ok(FriendzyInstruction::Withdraw(
            WithdrawArgs::try_from_slice(data)?,
        )),
        other => Err(SdkError::UnknownInstructionKind(other)),
    }
}

// ============================================================================
// Instruction builders
// ============================================================================

/// Create an account meta for a signer+writable account.
fn signer_mut(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new(pubkey, true)
}

/// Create an account meta for a writable account.
fn writable(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new(pubkey, false)
}

/// Create an account meta for a readonly account.
fn readonly(pubkey: Pubkey) -> AccountMeta {
    AccountMeta::new_readonly(pubkey, false)
}

/// Parameters for building a swap instruction
#[derive(Debug, Clone)]
pub struct SwapParams {
    /// The trading wallet (signer, pays for buys / receives on sells)
    pub user: Pubkey,
    /// Subject id
    pub id: u64,
    /// Buy or sell
    pub side: Side,
    /// Amount of keys to trade, in token lamports
    pub amount: u64,
    /// Price bound in lamports: max cost for buys, min proceeds for sells
    pub price: u64,
    /// True for the subject's very first purchase; appends the metadata
    /// accounts so the program can create the token metadata
    pub first_purchase: bool,
}

/// The first eight account metas shared by swap and withdraw.
fn common_metas(user: &Pubkey, id: u64, program_id: &Pubkey) -> Vec<AccountMeta> {
    let (bank, _) = get_bank_pda(program_id);
    let (mint, _) = get_mint_pda(id, program_id);
    let (config, _) = get_config_pda(id, program_id);
    let (profile, _) = get_profile_pda(id, user, program_id);

    vec![
        signer_mut(*user),
        writable(bank),
        writable(profile),
        writable(mint),
        writable(config),
        readonly(TOKEN_PROGRAM_ID),
        readonly(RENT_SYSVAR_ID),
        readonly(SYSTEM_PROGRAM_ID),
    ]
}

/// Build a swap (buy/sell) instruction with all PDAs derived internally.
pub fn build_swap_instruction(params: &SwapParams) -> Instruction {
    let program_id = *PROGRAM_ID;
    let (mint, _) = get_mint_pda(params.id, &program_id);

    let mut accounts = common_metas(&params.user, params.id, &program_id);

    if params.first_purchase {
        let (metadata, _) = get_metadata_pda(&mint);
        let token_account =
            spl_associated_token_account::get_associated_token_address(&params.user, &mint);
        accounts.extend([
            writable(metadata),
            readonly(*MPL_TOKEN_METADATA_PROGRAM_ID),
            writable(token_account),
        ]);
    } else {
        // Slots 8..11 are ignored by the program outside first purchases but
        // must still be present.
        accounts.extend([
            readonly(SYSTEM_PROGRAM_ID),
            readonly(SYSTEM_PROGRAM_ID),
            readonly(SYSTEM_PROGRAM_ID),
        ]);
    }

    accounts.extend([writable(*VAULT), readonly(ASSOCIATED_TOKEN_PROGRAM_ID)]);

    let args = SwapArgs {
        id: params.id,
        amount: params.amount,
        price: params.price,
    };

    Instruction {
        program_id,
        accounts,
        data: args.serialize(params.side),
    }
}

/// Build a withdraw instruction claiming the subject's unclaimed royalties.
pub fn build_withdraw_instruction(user: &Pubkey, id: u64) -> Instruction {
    let program_id = *PROGRAM_ID;

    let mut accounts = common_metas(user, id, &program_id);
    accounts.extend([
        readonly(SYSTEM_PROGRAM_ID),
        readonly(SYSTEM_PROGRAM_ID),
        readonly(SYSTEM_PROGRAM_ID),
    ]);

    Instruction {
        program_id,
        accounts,
        data: WithdrawArgs { id }.serialize(),
    }
}

/// Build a verify instruction. Data only; the program takes no accounts.
pub fn build_verify_instruction(id: u64, owner: &Pubkey) -> Instruction {
    Instruction {
        program_id: *PROGRAM_ID,
        accounts: vec![],
        data: VerifyArgs { id, owner: *owner }.serialize(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine};
    use std::str::FromStr;

    const ID: u64 = 1_162_302_698_118_684_672;

    fn decode_base64(data: &str) -> Vec<u8> {
        general_purpose::STANDARD.decode(data).unwrap()
    }

    #[test]
    fn test_buy_vector() {
        // Captured mainnet buy: 10 keys, max price 478333334
        let data = decode_base64("AACg11IlVCEQAQDkC1QCAAAAlsmCHAAAAAA=");

        let parsed = parse_instruction(&data).unwrap();
        let args = match &parsed {
            FriendzyInstruction::Buy(args) => args,
            other => panic!("expected buy, got {:?}", other),
        };
        assert_eq!(args.id, ID);
        assert_eq!(args.amount, 10_000_000_000);
        assert_eq!(args.price, 478_333_334);
        assert_eq!(parsed.side(), Some(Side::Buy));

        assert_eq!(parsed.serialize(), data);
    }

    #[test]
    fn test_sell_vector() {
        // Captured mainnet sell: 50 keys, min price 239583333
        let data = decode_base64("AACg11IlVCEQAgB0O6QLAAAAZcBHDgAAAAA=");

        let parsed = parse_instruction(&data).unwrap();
        let args = match &parsed {
            FriendzyInstruction::Sell(args) => args,
            other => panic!("expected sell, got {:?}", other),
        };
        assert_eq!(args.id, ID);
        assert_eq!(args.amount, 50_000_000_000);
        assert_eq!(args.price, 239_583_333);
        assert_eq!(parsed.side(), Some(Side::Sell));

        assert_eq!(parsed.serialize(), data);
    }

    #[test]
    fn test_withdraw_vector() {
        let data = decode_base64("AACg11IlVCEQAw==");

        let parsed = parse_instruction(&data).unwrap();
        assert_eq!(parsed, FriendzyInstruction::Withdraw(WithdrawArgs { id: ID }));
        assert_eq!(parsed.id(), ID);
        assert_eq!(parsed.side(), None);

        assert_eq!(parsed.serialize(), data);
    }

    #[test]
    fn test_verify_vector() {
        let data =
            decode_base64("AACg11IlVCEQAApz5x/t0hNl7QruhPzk4rIGR/001ey9oRXwI9JjP4d4");
        let owner = Pubkey::from_str("hoakwpFB8UoLnPpLC56gsjpY7XbVwaCuRQRMQzN5TVh").unwrap();

        let parsed = parse_instruction(&data).unwrap();
        assert_eq!(parsed, FriendzyInstruction::Verify(VerifyArgs { id: ID, owner }));

        assert_eq!(parsed.serialize(), data);
    }

    #[test]
    fn test_verify_vector_second_subject() {
        let data =
            decode_base64("AAEwV+3E1rcUABc2N6w6zn3XiRhCfgjWLoFVBsLHDeU6zOoel4mAxqIw");
        let owner = Pubkey::from_str("2ZcKytTHy1vRQoB1L8eCG7zxwEF4HVURnzqby3uQpW2T").unwrap();

        let parsed = parse_instruction(&data).unwrap();
        assert_eq!(
            parsed,
            FriendzyInstruction::Verify(VerifyArgs {
                id: 1_492_897_942_780_456_961,
                owner,
            })
        );
        assert_eq!(parsed.serialize(), data);
    }

    #[test]
    fn test_roundtrip_all_variants() {
        let owner = Pubkey::new_unique();
        let swap = SwapArgs {
            id: u64::MAX,
            amount: 1,
            price: u64::MAX - 1,
        };
        let cases = [
            FriendzyInstruction::Verify(VerifyArgs { id: 0, owner }),
            FriendzyInstruction::Buy(swap.clone()),
            FriendzyInstruction::Sell(swap),
            FriendzyInstruction::Withdraw(WithdrawArgs { id: 7 }),
        ];
        for case in cases {
            let data = case.serialize();
            assert_eq!(parse_instruction(&data).unwrap(), case);
        }
    }

    #[test]
    fn test_kind_byte_position() {
        let data = FriendzyInstruction::Withdraw(WithdrawArgs { id: 1 }).serialize();
        assert_eq!(data.len(), WithdrawArgs::LEN);
        assert_eq!(data[0], INSTRUCTION_VERSION);
        assert_eq!(data[9], instruction::WITHDRAW);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let mut data = WithdrawArgs { id: 1 }.serialize();
        data[9] = 4;
        assert!(matches!(
            parse_instruction(&data),
            Err(SdkError::UnknownInstructionKind(4))
        ));
    }

    #[test]
    fn test_truncated_payload_rejected() {
        assert!(matches!(
            parse_instruction(&[0u8; 9]),
            Err(SdkError::BufferTooShort { .. })
        ));
        // Right kind byte, wrong length for the variant.
        let mut data = vec![0u8; 11];
        data[9] = instruction::WITHDRAW;
        assert!(matches!(
            parse_instruction(&data),
            Err(SdkError::InvalidDataLength {
                expected: 10,
                actual: 11
            })
        ));
    }

    #[test]
    fn test_swap_instruction_accounts() {
        let user = Pubkey::new_unique();
        let ix = build_swap_instruction(&SwapParams {
            user,
            id: ID,
            side: Side::Buy,
            amount: 1_000_000_000,
            price: 100_000_000,
            first_purchase: false,
        });

        assert_eq!(ix.program_id, *PROGRAM_ID);
        assert_eq!(ix.accounts.len(), 13);
        assert_eq!(ix.accounts[0].pubkey, user);
        assert!(ix.accounts[0].is_signer);
        assert_eq!(
            ix.accounts[1].pubkey,
            Pubkey::from_str("DPVMvgcbmHz1FFFSYtoLSzQgPD59UbMguozL8RVfq5ud").unwrap()
        );
        // Placeholder slots when not a first purchase.
        for meta in &ix.accounts[8..11] {
            assert_eq!(meta.pubkey, SYSTEM_PROGRAM_ID);
        }
        assert_eq!(ix.accounts[11].pubkey, *VAULT);
        assert!(ix.accounts[11].is_writable);
        assert_eq!(ix.accounts[12].pubkey, ASSOCIATED_TOKEN_PROGRAM_ID);
        assert_eq!(ix.data, SwapArgs {
            id: ID,
            amount: 1_000_000_000,
            price: 100_000_000,
        }
        .serialize(Side::Buy));
    }

    #[test]
    fn test_first_purchase_extension() {
        let user = Pubkey::new_unique();
        let ix = build_swap_instruction(&SwapParams {
            user,
            id: ID,
            side: Side::Buy,
            amount: 1_000_000_000,
            price: 100_000_000,
            first_purchase: true,
        });

        let (mint, _) = get_mint_pda(ID, &PROGRAM_ID);
        let (metadata, _) = get_metadata_pda(&mint);
        assert_eq!(ix.accounts[8].pubkey, metadata);
        assert_eq!(ix.accounts[9].pubkey, *MPL_TOKEN_METADATA_PROGRAM_ID);
        assert_eq!(
            ix.accounts[10].pubkey,
            spl_associated_token_account::get_associated_token_address(&user, &mint)
        );
    }

    #[test]
    fn test_withdraw_instruction_accounts() {
        let user = Pubkey::new_unique();
        let ix = build_withdraw_instruction(&user, ID);

        assert_eq!(ix.accounts.len(), 11);
        assert_eq!(ix.accounts[0].pubkey, user);
        assert_eq!(ix.data, WithdrawArgs { id: ID }.serialize());
    }

    #[test]
    fn test_verify_instruction_has_no_accounts() {
        let owner = Pubkey::new_unique();
        let ix = build_verify_instruction(ID, &owner);
        assert!(ix.accounts.is_empty());
        assert_eq!(ix.data.len(), VerifyArgs::LEN);
    }
}
