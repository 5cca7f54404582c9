use clap::Parser;
use evmstack_cli_common::{logger, spinner::Spinner, PromptSelect};
use evmstack_cli_config::StackConfig;
use evmstack_cli_types::EvmNetwork;
use strum::IntoEnumIterator;
use xshell::Shell;

use crate::{
    environment::NetworkEnvironment,
    messages::{
        msg_accounts_header, MSG_ACCOUNTS_ALL_HELP, MSG_NETWORK_HELP, MSG_NETWORK_PROMPT,
        MSG_OUTRO_ACCOUNTS, MSG_PROBING_ENDPOINT_SPINNER,
    },
};

#[derive(Debug, Parser)]
pub struct AccountsArgs {
    #[clap(long, help = MSG_NETWORK_HELP, value_enum)]
    pub network: Option<EvmNetwork>,
    #[clap(long, help = MSG_ACCOUNTS_ALL_HELP, conflicts_with = "network")]
    pub all: bool,
}

impl AccountsArgs {
    fn fill_values_with_prompt(self) -> Vec<EvmNetwork> {
        if self.all {
            return EvmNetwork::iter().collect();
        }
        let network = self
            .network
            .unwrap_or_else(|| PromptSelect::new(MSG_NETWORK_PROMPT, EvmNetwork::iter()).ask());
        vec![network]
    }
}

pub(crate) async fn run(shell: &Shell, args: AccountsArgs) -> anyhow::Result<()> {
    let stack = StackConfig::load(shell)?;
    let networks = args.fill_values_with_prompt();

    for network in networks {
        let config = stack.network(network)?;
        let environment = NetworkEnvironment::attach(network, config)?;

        let spinner = Spinner::new(MSG_PROBING_ENDPOINT_SPINNER);
        let chain_id = match environment.remote_chain_id().await {
            Ok(chain_id) => {
                spinner.finish();
                chain_id
            }
            Err(err) => {
                spinner.fail();
                return Err(err);
            }
        };

        logger::info(msg_accounts_header(&network.to_string(), chain_id));
        for address in environment.signer_addresses() {
            logger::info(format!("{address:?}"));
        }
        logger::new_line();
    }

    logger::outro(MSG_OUTRO_ACCOUNTS);
    Ok(())
}
