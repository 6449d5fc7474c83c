//! WDB storefront CLI - catalog browsing and cart management.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! wdb products list --category men-shoes --sort price-low
//! wdb products show classic-tee-black
//! wdb categories
//! wdb collections
//!
//! # Manage the cart
//! wdb cart show
//! wdb cart add classic-tee-black --color Black --size M --quantity 2
//! wdb cart set-quantity classic-tee-black-Black-M 3
//! wdb cart edit classic-tee-black-Black-M --color White
//! wdb cart remove classic-tee-black-White-M
//! wdb cart checkout
//! ```
//!
//! # Commands
//!
//! - `products` - List or inspect products
//! - `categories` - Print the category tree
//! - `collections` - Print curated collections
//! - `cart` - Show and mutate the persistent cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::num::NonZeroU32;

use clap::{Parser, Subcommand};
use wdb_storefront::catalog::ProductSortKey;
use wdb_storefront::config::StorefrontConfig;
use wdb_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "wdb")]
#[command(author, version, about = "WDB storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse products
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Print the category tree
    Categories,
    /// Print curated collections
    Collections,
    /// Show and mutate the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products
    List {
        /// Category permalink to filter by
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order: `price-low`, `price-high`, or `best-seller`
        #[arg(short, long)]
        sort: Option<ProductSortKey>,
    },
    /// Show one product with its variants
    Show {
        /// Product permalink
        permalink: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the cart contents
    Show,
    /// Add a product to the cart
    Add {
        /// Product permalink
        permalink: String,

        /// Color to buy
        #[arg(short, long)]
        color: String,

        /// Size to buy; omit for one-size products
        #[arg(short, long, default_value = "")]
        size: String,

        /// Number of units
        #[arg(short, long, default_value = "1")]
        quantity: NonZeroU32,
    },
    /// Remove a line from the cart
    Remove {
        /// Line id as printed by `cart show`
        line_id: String,
    },
    /// Replace a line's quantity (0 removes the line)
    SetQuantity {
        /// Line id as printed by `cart show`
        line_id: String,

        /// New quantity
        quantity: u32,
    },
    /// Change a line's color/size selection
    Edit {
        /// Line id as printed by `cart show`
        line_id: String,

        /// New color
        #[arg(short, long)]
        color: String,

        /// New size; when omitted the size is re-resolved for the new
        /// color the way the product page does it
        #[arg(short, long)]
        size: Option<String>,
    },
    /// Proceed to checkout
    Checkout,
}

#[tokio::main]
async fn main() {
    // Initialize tracing, defaulting to info for our crates if RUST_LOG
    // is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wdb_storefront=info,wdb_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut state = AppState::new(config);

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List { category, sort } => {
                commands::products::list(&state, category.as_deref(), sort).await?;
            }
            ProductsAction::Show { permalink } => {
                commands::products::show(&state, &permalink).await?;
            }
        },
        Commands::Categories => commands::catalog::categories(&state).await?,
        Commands::Collections => commands::catalog::collections(&state).await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state),
            CartAction::Add {
                permalink,
                color,
                size,
                quantity,
            } => commands::cart::add(&mut state, &permalink, &color, &size, quantity).await?,
            CartAction::Remove { line_id } => commands::cart::remove(&mut state, &line_id),
            CartAction::SetQuantity { line_id, quantity } => {
                commands::cart::set_quantity(&mut state, &line_id, quantity);
            }
            CartAction::Edit {
                line_id,
                color,
                size,
            } => commands::cart::edit(&mut state, &line_id, &color, size.as_deref()),
            CartAction::Checkout => commands::cart::checkout(&state),
        },
    }
    Ok(())
}
