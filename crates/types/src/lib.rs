mod evm_network;

pub use evm_network::*;
