use clap::{Parser, Subcommand};
use evmstack_cli_common::{
    config::{init_global_config, GlobalConfig},
    error::log_error,
    init_prompt_theme, logger,
};
use xshell::Shell;

use crate::commands::{
    accounts::AccountsArgs, autocomplete::AutocompleteArgs, config::ConfigArgs,
};

mod commands;
mod environment;
mod messages;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct EvmStack {
    #[command(subcommand)]
    command: EvmStackSubcommands,
    #[clap(flatten)]
    global: EvmStackGlobalArgs,
}

#[derive(Subcommand, Debug)]
pub enum EvmStackSubcommands {
    /// Print the account addresses configured for a network
    Accounts(AccountsArgs),
    /// Print the resolved stack configuration
    Config(ConfigArgs),
    /// Create shell autocompletion files
    Autocomplete(AutocompleteArgs),
}

#[derive(Parser, Debug)]
#[clap(next_help_heading = "Global options")]
struct EvmStackGlobalArgs {
    /// Verbose mode
    #[clap(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();

    init_prompt_theme();

    logger::new_empty_line();
    logger::intro();

    let shell = Shell::new().unwrap();
    let args = EvmStack::parse();

    init_global_config(GlobalConfig {
        verbose: args.global.verbose,
    });

    match run_subcommand(args, &shell).await {
        Ok(_) => {}
        Err(error) => {
            log_error(error);
            std::process::exit(1);
        }
    }
    Ok(())
}

async fn run_subcommand(args: EvmStack, shell: &Shell) -> anyhow::Result<()> {
    match args.command {
        EvmStackSubcommands::Accounts(args) => commands::accounts::run(shell, args).await?,
        EvmStackSubcommands::Config(args) => commands::config::run(shell, args)?,
        EvmStackSubcommands::Autocomplete(args) => commands::autocomplete::run(args)?,
    }
    Ok(())
}
