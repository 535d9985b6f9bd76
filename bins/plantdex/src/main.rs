//! Plantdex CLI - plant scanning and collection management
//!
//! Photograph a plant, let the identification service name it, and keep
//! a searchable collection on disk.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod output;

/// Plant scanner and collection manager
#[derive(Parser)]
#[command(name = "plantdex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Path to the collection file (defaults to the platform data directory)
    #[arg(long, global = true, env = "PLANTDEX_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a photo and add the identified plant to the collection
    Scan {
        /// Path to the photo (JPEG, PNG, GIF, or WebP)
        image: PathBuf,

        /// Maximum width of the stored thumbnail in pixels
        #[arg(long, default_value = "400")]
        thumbnail_width: u32,
    },

    /// List every saved plant, newest first
    List,

    /// Fuzzy-search the collection by name and description
    Search {
        /// Search query
        query: String,
    },

    /// Show full details for one record
    Show {
        /// Record index as printed by `list`
        index: usize,
    },

    /// Delete one record
    Delete {
        /// Record index as printed by `list`
        index: usize,
    },

    /// Delete the whole collection
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("plantdex=debug,plantdex_api_client=debug,plantdex_core=debug")
            .init();
    }

    let store = match commands::open_store(cli.store) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Scan {
            image,
            thumbnail_width,
        } => commands::scan::run(&store, &image, thumbnail_width, &cli.format).await,

        Commands::List => commands::list::run(&store, &cli.format),

        Commands::Search { query } => commands::search::run(&store, &query, &cli.format),

        Commands::Show { index } => commands::show::run(&store, index, &cli.format),

        Commands::Delete { index } => commands::delete::run(&store, index, &cli.format),

        Commands::Clear { yes } => commands::clear::run(&store, yes),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
