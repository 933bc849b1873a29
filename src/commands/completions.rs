//! Shell completion output

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use ansihtml::cli::Cli;

#[cfg(not(tarpaulin_include))]
pub fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}
