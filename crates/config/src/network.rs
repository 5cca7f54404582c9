use anyhow::Context;
use evmstack_cli_common::wallets::Wallet;
use serde::{Deserialize, Serialize};
use url::Url;

/// Connection parameters for one named network: the RPC endpoint and the
/// signing accounts transactions are submitted from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub url: Url,
    pub accounts: Vec<Wallet>,
}

impl NetworkConfig {
    /// Builds the entry from a secret-file record. The key string becomes
    /// the single deployer account, address derived eagerly so a bad key
    /// fails the startup load.
    pub fn from_secret(url: &str, key: &str) -> anyhow::Result<Self> {
        let url = Url::parse(url).with_context(|| format!("Invalid RPC URL {url:?}"))?;
        let account = Wallet::from_hex_key(key)?;

        Ok(Self {
            url,
            accounts: vec![account],
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.accounts.is_empty() {
            anyhow::bail!("No signing accounts configured");
        }
        for wallet in &self.accounts {
            if wallet.private_key.is_none() {
                anyhow::bail!("Account {:?} has no signing key", wallet.address);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_entry_from_secret_record() {
        let config = NetworkConfig::from_secret("https://api.avax.network/ext/bc/C/rpc", KEY)
            .unwrap();
        assert_eq!(config.accounts.len(), 1);
        assert_eq!(
            format!("{:?}", config.accounts[0].address),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_url_is_rejected() {
        assert!(NetworkConfig::from_secret("", KEY).is_err());
    }

    #[test]
    fn test_malformed_key_is_rejected() {
        assert!(NetworkConfig::from_secret("https://rpc.example.com", "not-a-key").is_err());
    }

    #[test]
    fn test_entry_without_accounts_fails_validation() {
        let mut config =
            NetworkConfig::from_secret("https://rpc.example.com", KEY).unwrap();
        config.accounts.clear();
        assert!(config.validate().is_err());
    }
}
