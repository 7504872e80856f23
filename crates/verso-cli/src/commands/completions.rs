//! Completions command - print a shell completion script

use anyhow::Result;
use clap::Args;
use clap_complete::Shell;
use std::io;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn execute(args: CompletionsArgs, command: &mut clap::Command) -> Result<i32> {
    let name = command.get_name().to_string();
    clap_complete::generate(args.shell, command, name, &mut io::stdout());
    Ok(0)
}
