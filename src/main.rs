//! Binary entry point: parse the command line and dispatch.

use clap::{CommandFactory, Parser};

use display_colors::cli::{Cli, Command, ThemeArgs};
use display_colors::commands;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        // No subcommand renders the theme grid with its defaults.
        None => commands::theme::run(&ThemeArgs::default()),
        Some(Command::Theme(args)) => commands::theme::run(&args),
        Some(Command::EightBit(args)) => commands::eight_bit::run(&args),
        Some(Command::Config { action }) => commands::config::run(&action),
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "display-colors", &mut std::io::stdout());
            Ok(())
        }
    }
}
