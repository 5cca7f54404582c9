/// Common messages
pub(super) const MSG_NETWORK_HELP: &str = "Network to use";
pub(super) const MSG_NETWORK_PROMPT: &str = "Select the network";

/// Accounts related messages
pub(super) const MSG_ACCOUNTS_ALL_HELP: &str = "Report accounts for every configured network";
pub(super) const MSG_PROBING_ENDPOINT_SPINNER: &str = "Probing the RPC endpoint...";
pub(super) const MSG_OUTRO_ACCOUNTS: &str = "Accounts resolved";

pub(super) fn msg_accounts_header(network: &str, chain_id: u64) -> String {
    format!("Accounts configured for {network} (chain id {chain_id}):")
}

/// Config related messages
pub(super) const MSG_EXPORT_CONFIG_HELP: &str =
    "Materialize the resolved configuration next to the secret files";
pub(super) const MSG_OUTRO_CONFIG: &str = "Configuration resolved";

pub(super) fn msg_config_exported(filename: &str) -> String {
    format!("Resolved configuration written to {filename}")
}

/// Autocomplete messages
pub(super) const MSG_OUTRO_AUTOCOMPLETE_GENERATION: &str =
    "Autocompletion file correctly generated";

pub(super) fn msg_generate_autocomplete_file(filename: &str) -> String {
    format!("Generating completion file: {filename}")
}
