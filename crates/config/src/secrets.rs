use serde::{Deserialize, Serialize};

use crate::{
    consts::{AUX_SECRETS_FILE, SECRETS_FILE},
    traits::{FileConfigTrait, FileConfigWithDefaultName},
};

/// Primary secrets file: the Avalanche RPC endpoint and its deployer key,
/// flat at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimarySecrets {
    pub url: String,
    pub key: String,
}

/// Secondary secrets file, keyed by network. `deny_unknown_fields` keeps
/// the network list closed: a stray entry fails the startup load instead
/// of being silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuxSecrets {
    #[serde(rename = "bscTestnet")]
    pub bsc_testnet: BscTestnetSecret,
    pub eth: EthSecret,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BscTestnetSecret {
    pub url: String,
    pub key: String,
    /// Testnet explorer key. Optional: verification defaults to the
    /// mainnet credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bscscan: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EthSecret {
    pub url: String,
    pub key: String,
    /// Etherscan mainnet API key used for contract verification.
    pub mainnet: String,
}

impl FileConfigTrait for PrimarySecrets {}

impl FileConfigWithDefaultName for PrimarySecrets {
    const FILE_NAME: &'static str = SECRETS_FILE;
}

impl FileConfigTrait for AuxSecrets {}

impl FileConfigWithDefaultName for AuxSecrets {
    const FILE_NAME: &'static str = AUX_SECRETS_FILE;
}
