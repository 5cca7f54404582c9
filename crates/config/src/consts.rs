/// Name of the materialized stack configuration file
pub const CONFIG_FILE: &str = "EvmStack.yaml";
/// Name of the primary secrets file, carrying the Avalanche credentials
pub const SECRETS_FILE: &str = "secret.json";
/// Name of the secondary secrets file, carrying the BSC testnet and
/// Ethereum credentials plus the explorer keys
pub const AUX_SECRETS_FILE: &str = "secret1.json";

/// Compiler release the contracts are pinned to
pub const SOLC_VERSION: &str = "0.8.7";
/// Optimizer pass count used for production bytecode
pub const SOLC_OPTIMIZER_RUNS: u32 = 2000;
