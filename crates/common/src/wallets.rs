use anyhow::Context;
use ethers::{
    core::rand::{CryptoRng, Rng},
    signers::{LocalWallet, Signer},
    types::{Address, H256},
};
use serde::{Deserialize, Serialize};

/// A signing account: the address together with the key it was derived
/// from. The key is kept so a client can be wired up for the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub address: Address,
    pub private_key: Option<H256>,
}

impl Wallet {
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        let local_wallet = LocalWallet::new(rng);

        Self {
            address: local_wallet.address(),
            private_key: Some(H256::from_slice(local_wallet.signer().to_bytes().as_slice())),
        }
    }

    pub fn new(private_key: H256) -> anyhow::Result<Self> {
        let local_wallet = LocalWallet::from_bytes(private_key.as_bytes())?;

        Ok(Self {
            address: local_wallet.address(),
            private_key: Some(private_key),
        })
    }

    /// Parses a secret-file key entry, with or without the `0x` prefix.
    pub fn from_hex_key(key: &str) -> anyhow::Result<Self> {
        let local_wallet: LocalWallet = key
            .trim()
            .parse()
            .context("Signing key is not a valid hex-encoded private key")?;

        Ok(Self {
            address: local_wallet.address(),
            private_key: Some(H256::from_slice(local_wallet.signer().to_bytes().as_slice())),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_address_derivation_from_key() {
        let wallet = Wallet::from_hex_key(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        )
        .unwrap();
        assert_eq!(
            wallet.address,
            Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").expect("Invalid address")
        );
    }

    #[test]
    fn test_key_prefix_is_optional() {
        let with_prefix = Wallet::from_hex_key(
            "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
        )
        .unwrap();
        let without_prefix = Wallet::from_hex_key(
            "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
        )
        .unwrap();
        assert_eq!(with_prefix, without_prefix);
    }

    #[test]
    fn test_random_wallet_re_derives_to_the_same_address() {
        let mut rng = ethers::core::rand::thread_rng();
        let wallet = Wallet::random(&mut rng);
        let re_derived = Wallet::new(wallet.private_key.unwrap()).unwrap();
        assert_eq!(wallet.address, re_derived.address);
    }
}
