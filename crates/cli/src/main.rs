//! Paraíso Matero CLI - Catalog seeding and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Push the built-in fallback catalog to the hosted backend
//! pm-cli seed
//!
//! # List the live catalog
//! pm-cli catalog list
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed the hosted catalog with the fallback products
//! - `catalog list` - Print the live catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pm-cli")]
#[command(author, version, about = "Paraíso Matero CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the hosted catalog with the built-in fallback products
    Seed,
    /// Inspect the hosted catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the live catalog
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run().await?,
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list().await?,
        },
    }
    Ok(())
}
