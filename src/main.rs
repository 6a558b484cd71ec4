use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use moneymate::cli::run_menu;
use moneymate::config::paths::MoneyMatePaths;
use moneymate::storage::Storage;

#[derive(Parser)]
#[command(
    name = "moneymate",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "MoneyMate is a terminal-based personal expense tracker. \
                  Register an account, log in, and accumulate running expense \
                  totals per category that persist between sessions."
)]
struct Cli {
    /// Directory for users.txt and per-user expense files
    /// (defaults to MONEYMATE_DATA_DIR or the current directory)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths
    let paths = match cli.data_dir {
        Some(dir) => MoneyMatePaths::with_base_dir(dir),
        None => MoneyMatePaths::new()?,
    };

    // Initialize storage and load the credential store
    let storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Config) => {
            println!("MoneyMate Configuration");
            println!("=======================");
            println!("Data directory:   {}", storage.paths().base_dir().display());
            println!(
                "Credentials file: {}",
                storage.paths().credentials_file().display()
            );
            println!("Registered users: {}", storage.credentials.len()?);
        }
        None => {
            run_menu(&storage)?;
            // Normal exit path: write the credential store back once
            storage.persist_credentials()?;
        }
    }

    Ok(())
}
