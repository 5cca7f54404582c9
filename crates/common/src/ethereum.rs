use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{LocalWallet, Signer},
    types::H256,
};
use url::Url;

/// Builds a client for `rpc_url` signing with `private_key`. Construction
/// performs no network calls; a bad endpoint only surfaces on first use.
pub fn create_ethers_client(
    private_key: H256,
    rpc_url: Url,
    chain_id: Option<u64>,
) -> anyhow::Result<SignerMiddleware<Provider<Http>, LocalWallet>> {
    let mut wallet = LocalWallet::from_bytes(private_key.as_bytes())?;
    if let Some(chain_id) = chain_id {
        wallet = wallet.with_chain_id(chain_id);
    }
    let provider = Provider::<Http>::try_from(rpc_url.as_str())?;
    Ok(SignerMiddleware::new(provider, wallet))
}
