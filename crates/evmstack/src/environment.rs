use anyhow::Context;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::LocalWallet,
    types::Address,
};
use evmstack_cli_common::ethereum::create_ethers_client;
use evmstack_cli_config::NetworkConfig;
use evmstack_cli_types::EvmNetwork;

/// Runtime handle handed to commands: the selected network together with a
/// client wired to its RPC endpoint, signing as the first configured
/// account. Mirrors what the deployment toolchain attaches to its own
/// runtime before task execution.
pub struct NetworkEnvironment {
    pub network: EvmNetwork,
    config: NetworkConfig,
    client: SignerMiddleware<Provider<Http>, LocalWallet>,
}

impl NetworkEnvironment {
    pub fn attach(network: EvmNetwork, config: &NetworkConfig) -> anyhow::Result<Self> {
        let signer = config
            .accounts
            .first()
            .with_context(|| format!("Network {network} has no signing accounts"))?;
        let private_key = signer
            .private_key
            .with_context(|| format!("Account {:?} has no signing key", signer.address))?;
        let client = create_ethers_client(private_key, config.url.clone(), Some(network.chain_id()))?;

        Ok(Self {
            network,
            config: config.clone(),
            client,
        })
    }

    /// Addresses of the signing accounts the network was declared with, in
    /// declaration order.
    pub fn signer_addresses(&self) -> Vec<Address> {
        self.config
            .accounts
            .iter()
            .map(|wallet| wallet.address)
            .collect()
    }

    /// Chain id reported by the endpoint. A single awaited call; failures
    /// propagate unmodified from the client.
    pub async fn remote_chain_id(&self) -> anyhow::Result<u64> {
        Ok(self.client.get_chainid().await?.as_u64())
    }
}
