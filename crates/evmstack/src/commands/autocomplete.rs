use std::{fs::File, path::PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Generator};
use evmstack_cli_common::logger;

use crate::{
    messages::{msg_generate_autocomplete_file, MSG_OUTRO_AUTOCOMPLETE_GENERATION},
    EvmStack,
};

#[derive(Debug, Parser)]
pub struct AutocompleteArgs {
    /// The shell to generate the autocomplete script for
    #[arg(long = "generate", value_enum)]
    pub generator: clap_complete::Shell,
    /// The out directory to write the autocomplete script to
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,
}

pub fn run(args: AutocompleteArgs) -> anyhow::Result<()> {
    let filename = autocomplete_file_name(&args.generator)?;
    let path = args.out.join(filename);

    logger::info(msg_generate_autocomplete_file(
        path.to_str().context("Path is not a valid string")?,
    ));

    let mut file = File::create(&path).context("Failed to create file")?;
    generate_completions(args.generator, &mut file);

    logger::outro(MSG_OUTRO_AUTOCOMPLETE_GENERATION);
    Ok(())
}

pub fn generate_completions<G: Generator>(generator: G, buf: &mut dyn std::io::Write) {
    let mut command = EvmStack::command();
    generate(generator, &mut command, "evmstack", buf);
}

fn autocomplete_file_name(shell: &clap_complete::Shell) -> anyhow::Result<&'static str> {
    match shell {
        clap_complete::Shell::Bash => Ok("evmstack.sh"),
        clap_complete::Shell::Fish => Ok("evmstack.fish"),
        clap_complete::Shell::Zsh => Ok("_evmstack.zsh"),
        other => anyhow::bail!("Autocompletion is not supported for {other}"),
    }
}
