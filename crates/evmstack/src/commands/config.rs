use clap::Parser;
use evmstack_cli_common::logger;
use evmstack_cli_config::{traits::SaveConfigWithBasePath, StackConfig, CONFIG_FILE};
use xshell::Shell;

use crate::messages::{msg_config_exported, MSG_EXPORT_CONFIG_HELP, MSG_OUTRO_CONFIG};

#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[clap(long, help = MSG_EXPORT_CONFIG_HELP)]
    pub export: bool,
}

pub(crate) fn run(shell: &Shell, args: ConfigArgs) -> anyhow::Result<()> {
    let stack = StackConfig::load(shell)?;

    logger::info(logger::object_to_string(redacted(&stack)?));

    if args.export {
        stack.save_with_base_path(shell, shell.current_dir())?;
        logger::success(msg_config_exported(CONFIG_FILE));
    }

    logger::outro(MSG_OUTRO_CONFIG);
    Ok(())
}

/// Resolved configuration with the key material stripped: accounts are
/// reported as addresses only, never as private keys.
fn redacted(stack: &StackConfig) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(stack)?;

    if let Some(networks) = value
        .get_mut("networks")
        .and_then(serde_json::Value::as_object_mut)
    {
        for network in networks.values_mut() {
            let Some(accounts) = network
                .get_mut("accounts")
                .and_then(serde_json::Value::as_array_mut)
            else {
                continue;
            };
            for account in accounts.iter_mut() {
                let address = account
                    .get("address")
                    .cloned()
                    .unwrap_or(serde_json::Value::Null);
                *account = address;
            }
        }
    }

    Ok(value)
}
