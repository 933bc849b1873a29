//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::RenderConfig;

/// Render ANSI-colored log output as HTML.
#[derive(Debug, Parser)]
#[command(name = "ansihtml", version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert log lines with ANSI colors to HTML
    Render(RenderArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Input file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not escape &, < and > in the log text
    #[arg(long)]
    pub no_escape: bool,

    /// Do not turn URLs into links
    #[arg(long)]
    pub no_linkify: bool,

    /// Keep colors that are not reset at the end of a line
    #[arg(long)]
    pub carry_style: bool,

    /// Emit a complete HTML page instead of a fragment
    #[arg(long)]
    pub standalone: bool,

    /// Page title for --standalone output
    #[arg(long)]
    pub title: Option<String>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl RenderArgs {
    /// Apply command-line overrides on top of configured render options.
    ///
    /// Flags only ever switch features off (or carry-over on); an absent flag
    /// keeps the configured value.
    pub fn render_config(&self, base: RenderConfig) -> RenderConfig {
        RenderConfig {
            escape_html: base.escape_html && !self.no_escape,
            linkify: base.linkify && !self.no_linkify,
            carry_style: base.carry_style || self.carry_style,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show {
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Print the default config file location
    Path,

    /// Write a config file with default settings
    Init {
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
