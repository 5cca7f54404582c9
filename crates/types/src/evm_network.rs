use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Networks the deployment stack is declared for. The serde names are the
/// keys used on the configuration surface and in the secret files.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ValueEnum,
    EnumIter,
    Display,
)]
pub enum EvmNetwork {
    #[default]
    #[serde(rename = "avalanche")]
    #[strum(to_string = "avalanche")]
    Avalanche,
    #[serde(rename = "bscTestnet")]
    #[strum(to_string = "bscTestnet")]
    BscTestnet,
    #[serde(rename = "eth")]
    #[strum(to_string = "eth")]
    Eth,
}

impl EvmNetwork {
    #[must_use]
    pub fn chain_id(&self) -> u64 {
        match self {
            EvmNetwork::Avalanche => 43_114,
            EvmNetwork::BscTestnet => 97,
            EvmNetwork::Eth => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_names_match_the_config_surface() {
        assert_eq!(EvmNetwork::Avalanche.to_string(), "avalanche");
        assert_eq!(EvmNetwork::BscTestnet.to_string(), "bscTestnet");
        assert_eq!(EvmNetwork::Eth.to_string(), "eth");
    }

    #[test]
    fn test_chain_ids() {
        assert_eq!(EvmNetwork::Eth.chain_id(), 1);
        assert_eq!(EvmNetwork::BscTestnet.chain_id(), 97);
        assert_eq!(EvmNetwork::Avalanche.chain_id(), 43_114);
    }
}
