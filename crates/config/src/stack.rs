use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use evmstack_cli_common::files::find_file;
use evmstack_cli_types::EvmNetwork;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;
use xshell::Shell;

use crate::{
    consts::{AUX_SECRETS_FILE, CONFIG_FILE, SECRETS_FILE},
    explorer::ExplorerConfig,
    network::NetworkConfig,
    secrets::{AuxSecrets, PrimarySecrets},
    solc::SolcConfig,
    traits::{FileConfigTrait, FileConfigWithDefaultName, ReadConfig, ReadConfigWithBasePath},
};

/// Resolved toolchain configuration: every declared network with its
/// signing accounts, the compiler descriptor and the explorer credential.
/// Built once at startup and handed to commands read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackConfig {
    pub networks: BTreeMap<EvmNetwork, NetworkConfig>,
    pub solidity: SolcConfig,
    pub etherscan: ExplorerConfig,
}

impl FileConfigTrait for StackConfig {}

impl FileConfigWithDefaultName for StackConfig {
    const FILE_NAME: &'static str = CONFIG_FILE;
}

#[derive(Error, Debug)]
pub enum StackConfigFromFileError {
    #[error("Stack configuration not found (searched from {path:?})")]
    NotExists { path: PathBuf },
    #[error("Invalid stack configuration")]
    InvalidConfig(#[from] anyhow::Error),
}

impl StackConfig {
    /// Assembles the configuration from the two secret files in
    /// `base_path`. A missing file, a missing field or an unparsable value
    /// fails the whole load; there is no partially-valid result.
    pub fn from_secret_files(shell: &Shell, base_path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let primary = PrimarySecrets::read_with_base_path(shell, &base_path)?;
        let aux = AuxSecrets::read_with_base_path(shell, &base_path)?;

        let mut networks = BTreeMap::new();
        networks.insert(
            EvmNetwork::Avalanche,
            NetworkConfig::from_secret(&primary.url, &primary.key)
                .context("Invalid Avalanche credentials")?,
        );
        networks.insert(
            EvmNetwork::BscTestnet,
            NetworkConfig::from_secret(&aux.bsc_testnet.url, &aux.bsc_testnet.key)
                .context("Invalid BSC testnet credentials")?,
        );
        networks.insert(
            EvmNetwork::Eth,
            NetworkConfig::from_secret(&aux.eth.url, &aux.eth.key)
                .context("Invalid Ethereum credentials")?,
        );

        let config = Self {
            networks,
            solidity: SolcConfig::default(),
            etherscan: ExplorerConfig::new(&aux.eth.mainnet)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Locates the stack for the current directory: a materialized config
    /// file in the cwd or any of its ancestors wins, otherwise the secret
    /// files next to the caller are assembled on the fly.
    pub fn load(shell: &Shell) -> Result<Self, StackConfigFromFileError> {
        if let Ok(dir) = find_file(shell, &shell.current_dir(), CONFIG_FILE) {
            let config = Self::read(shell, dir.join(CONFIG_FILE))?;
            config.validate()?;
            return Ok(config);
        }

        let cwd = shell.current_dir();
        if !shell.path_exists(cwd.join(SECRETS_FILE)) && !shell.path_exists(cwd.join(AUX_SECRETS_FILE))
        {
            return Err(StackConfigFromFileError::NotExists { path: cwd });
        }
        Ok(Self::from_secret_files(shell, &cwd)?)
    }

    pub fn network(&self, network: EvmNetwork) -> anyhow::Result<&NetworkConfig> {
        self.networks
            .get(&network)
            .with_context(|| format!("Network {network} is not configured"))
    }

    /// Shape invariants: all declared networks present, nothing else, and
    /// a usable compiler and explorer entry.
    pub fn validate(&self) -> anyhow::Result<()> {
        for network in EvmNetwork::iter() {
            self.network(network)?
                .validate()
                .with_context(|| format!("Network {network} is invalid"))?;
        }
        if self.networks.len() != EvmNetwork::iter().count() {
            anyhow::bail!("Configuration contains undeclared networks");
        }
        self.solidity.validate()?;
        self.etherscan.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use evmstack_cli_common::files::save_json_file;
    use serde_json::json;

    use super::*;
    use crate::traits::SaveConfigWithBasePath;

    fn primary_fixture() -> serde_json::Value {
        json!({
            "url": "https://api.avax.network/ext/bc/C/rpc",
            "key": "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        })
    }

    fn aux_fixture() -> serde_json::Value {
        json!({
            "bscTestnet": {
                "url": "https://data-seed-prebsc-1-s1.binance.org:8545",
                "key": "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
                "bscscan": "BSC_EXPLORER_KEY",
            },
            "eth": {
                "url": "https://mainnet.infura.io/v3/deadbeef",
                "key": "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
                "mainnet": "ETHERSCAN_KEY",
            },
        })
    }

    fn write_secrets(
        shell: &Shell,
        dir: &Path,
        primary: &serde_json::Value,
        aux: &serde_json::Value,
    ) {
        save_json_file(shell, dir.join(SECRETS_FILE), primary).unwrap();
        save_json_file(shell, dir.join(AUX_SECRETS_FILE), aux).unwrap();
    }

    #[test]
    fn test_well_formed_secrets_produce_exactly_the_declared_networks() {
        let shell = Shell::new().unwrap();
        let tmp = shell.create_temp_dir().unwrap();
        write_secrets(&shell, tmp.path(), &primary_fixture(), &aux_fixture());

        let config = StackConfig::from_secret_files(&shell, tmp.path()).unwrap();

        assert_eq!(config.networks.len(), 3);
        assert_eq!(config.solidity.version, "0.8.7");
        assert!(config.solidity.settings.optimizer.enabled);
        assert_eq!(config.solidity.settings.optimizer.runs, 2000);
        assert_eq!(config.etherscan.api_key, "ETHERSCAN_KEY");

        let avalanche = config.network(EvmNetwork::Avalanche).unwrap();
        assert_eq!(
            format!("{:?}", avalanche.accounts[0].address),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_missing_explorer_key_fails_the_load() {
        let shell = Shell::new().unwrap();
        let tmp = shell.create_temp_dir().unwrap();
        let mut aux = aux_fixture();
        aux["eth"].as_object_mut().unwrap().remove("mainnet");
        write_secrets(&shell, tmp.path(), &primary_fixture(), &aux);

        assert!(StackConfig::from_secret_files(&shell, tmp.path()).is_err());
    }

    #[test]
    fn test_missing_secret_file_fails_the_load() {
        let shell = Shell::new().unwrap();
        let tmp = shell.create_temp_dir().unwrap();
        save_json_file(&shell, tmp.path().join(SECRETS_FILE), primary_fixture()).unwrap();

        assert!(StackConfig::from_secret_files(&shell, tmp.path()).is_err());
    }

    #[test]
    fn test_undeclared_network_is_rejected() {
        let shell = Shell::new().unwrap();
        let tmp = shell.create_temp_dir().unwrap();
        let mut aux = aux_fixture();
        aux.as_object_mut().unwrap().insert(
            "polygon".to_string(),
            json!({ "url": "https://polygon-rpc.com", "key": "0x01" }),
        );
        write_secrets(&shell, tmp.path(), &primary_fixture(), &aux);

        assert!(StackConfig::from_secret_files(&shell, tmp.path()).is_err());
    }

    #[test]
    fn test_empty_url_fails_the_load() {
        let shell = Shell::new().unwrap();
        let tmp = shell.create_temp_dir().unwrap();
        let mut primary = primary_fixture();
        primary["url"] = json!("");
        write_secrets(&shell, tmp.path(), &primary, &aux_fixture());

        assert!(StackConfig::from_secret_files(&shell, tmp.path()).is_err());
    }

    #[test]
    fn test_materialized_config_is_found_from_a_subdirectory() {
        let shell = Shell::new().unwrap();
        let tmp = shell.create_temp_dir().unwrap();
        write_secrets(&shell, tmp.path(), &primary_fixture(), &aux_fixture());
        let config = StackConfig::from_secret_files(&shell, tmp.path()).unwrap();
        config.save_with_base_path(&shell, tmp.path()).unwrap();

        let nested = tmp.path().join("contracts/scripts");
        shell.create_dir(&nested).unwrap();
        shell.change_dir(&nested);

        let loaded = StackConfig::load(&shell).unwrap();
        assert_eq!(loaded.networks.len(), 3);
        assert_eq!(
            loaded.network(EvmNetwork::Eth).unwrap().accounts[0].address,
            config.network(EvmNetwork::Eth).unwrap().accounts[0].address,
        );
    }

    #[test]
    fn test_load_without_any_configuration_reports_not_exists() {
        let shell = Shell::new().unwrap();
        let tmp = shell.create_temp_dir().unwrap();
        shell.change_dir(tmp.path());

        assert!(matches!(
            StackConfig::load(&shell),
            Err(StackConfigFromFileError::NotExists { .. })
        ));
    }
}
