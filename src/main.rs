mod commands;

use anyhow::Result;
use clap::Parser;

use ansihtml::cli::{Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();
    ansihtml::logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => commands::render::handle_render(&args),
        Commands::Config { command } => match command {
            ConfigCommands::Show { config } => commands::config::handle_show(config.as_deref()),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { config, force } => {
                commands::config::handle_init(config.as_deref(), force)
            }
        },
        Commands::Completions { shell } => {
            commands::completions::handle_completions(shell);
            Ok(())
        }
    }
}
