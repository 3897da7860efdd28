//! Async client for fetching and decoding Friendzy on-chain state.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_pubkey::Pubkey;
use tracing::debug;

use crate::program::accounts::{Config, Profile};
use crate::program::constants::PROGRAM_ID;
use crate::program::curve;
use crate::program::error::{SdkError, SdkResult};
use crate::program::pda::{get_config_pda, get_profile_pda};

/// Client for reading Friendzy program state over RPC.
pub struct FriendzyClient {
    /// RPC client for Solana
    pub rpc_client: RpcClient,
    /// Program ID
    pub program_id: Pubkey,
}

impl FriendzyClient {
    /// Create a new client with the default program ID.
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc_client: RpcClient::new_with_commitment(
                rpc_url.to_string(),
                CommitmentConfig::confirmed(),
            ),
            program_id: *PROGRAM_ID,
        }
    }

    /// Create a new client with a custom program ID.
    pub fn with_program_id(rpc_url: &str, program_id: Pubkey) -> Self {
        Self {
            rpc_client: RpcClient::new_with_commitment(
                rpc_url.to_string(),
                CommitmentConfig::confirmed(),
            ),
            program_id,
        }
    }

    /// Create a new client from an existing RpcClient.
    pub fn from_rpc_client(rpc_client: RpcClient) -> Self {
        Self {
            rpc_client,
            program_id: *PROGRAM_ID,
        }
    }

    /// Fetch and decode the Config account for a subject.
    pub async fn get_config(&self, id: u64) -> SdkResult<Config> {
        let (pda, _) = get_config_pda(id, &self.program_id);
        debug!(id, config = %pda, "fetching config account");
        let account = self
            .rpc_client
            .get_account(&pda)
            .await
            .map_err(|e| SdkError::AccountNotFound(format!("Config {}: {}", pda, e)))?;
        Config::deserialize(&account.data)
    }

    /// Fetch and decode a user's Profile account for a subject.
    pub async fn get_profile(&self, id: u64, user: &Pubkey) -> SdkResult<Profile> {
        let (pda, _) = get_profile_pda(id, user, &self.program_id);
        debug!(id, %user, profile = %pda, "fetching profile account");
        let account = self
            .rpc_client
            .get_account(&pda)
            .await
            .map_err(|e| SdkError::AccountNotFound(format!("Profile {}: {}", pda, e)))?;
        Profile::deserialize(&account.data)
    }

    /// Quote the current cost of buying `keys` whole keys of a subject.
    pub async fn quote_keys_cost(&self, id: u64, keys: u64) -> SdkResult<u64> {
        let config = self.get_config(id).await?;
        let cost = curve::keys_cost(config.supply, keys)?;
        debug!(id, supply = config.supply, keys, cost, "quoted keys cost");
        Ok(cost)
    }
}
