use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod api;
mod commands;
mod detail;
mod error;
mod listing;
mod types;

#[derive(Parser)]
#[command(name = "reposcope")]
#[command(about = "Browse a GitHub user's repositories from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a user's public repositories and browse them interactively
    #[command(short_flag = 's')]
    Search {
        /// GitHub username (e.g., octocat)
        username: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
        Some(Commands::Search { username }) => commands::search(&username),
        Some(Commands::Completions { shell }) => {
            commands::generate_completions(shell);
            Ok(())
        }
    }
}
