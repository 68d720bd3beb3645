//! Bazaar CLI - Offline product card previews.
//!
//! # Usage
//!
//! ```bash
//! # Render the listing card for one product
//! bazaar render --file product.json
//!
//! # Render shop cards with the buy button for a catalog export
//! bazaar render --file products.json --card shop --button
//!
//! # Use a different currency symbol
//! bazaar render --file product.json --symbol '$'
//! ```
//!
//! # Commands
//!
//! - `render` - Render product cards from a JSON file to stdout

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::render::{CardKind, RenderOptions};

#[derive(Parser)]
#[command(name = "bazaar")]
#[command(author, version, about = "Bazaar CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render product cards from a product JSON file
    Render {
        /// Product JSON file (a single product or an array)
        #[arg(short, long)]
        file: PathBuf,

        /// Which card to render
        #[arg(short, long, value_enum, default_value_t = CardKind::Listing)]
        card: CardKind,

        /// Currency symbol for prices
        #[arg(short, long, default_value = bazaar_core::DEFAULT_CURRENCY_SYMBOL)]
        symbol: String,

        /// Show the buy button on shop cards
        #[arg(short, long)]
        button: bool,

        /// Grid column classes for shop cards
        #[arg(short, long)]
        layout: Option<String>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::render::RenderError> {
    match cli.command {
        Commands::Render {
            file,
            card,
            symbol,
            button,
            layout,
        } => {
            let options = RenderOptions {
                card,
                symbol,
                button,
                layout,
            };
            commands::render::run(&file, &options, &mut std::io::stdout().lock())?;
        }
    }
    Ok(())
}
