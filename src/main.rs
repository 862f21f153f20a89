mod app;
mod cart;
mod catalog;
mod checkout;
mod config;
mod models;
mod prices;
mod rates;
mod render;
mod storage;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::env;

#[derive(Parser)]
#[command(
    name = "tiendita",
    about = "Tienda en terminal: catálogo, carrito y pago por WhatsApp"
)]
struct Cli {
    /// Page being browsed, e.g. "index.html" or "ropa.html". The last
    /// path segment picks the catalog category.
    #[arg(long, global = true, default_value = "index.html")]
    page: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run one startup cycle: rate, catalog, products and the saved cart
    Browse,
    /// Browse, then keep refreshing on a fixed 5 minute interval
    Watch,
    /// Add one unit of a product to the cart
    Add { id: u32 },
    /// Show the saved cart
    Cart,
    /// Remove everything from the cart
    Empty,
    /// Print the WhatsApp checkout message and link
    Checkout,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let mut config = config::load_config()?;
    if let Ok(url) = env::var("DATABASE_URL") {
        config.database_url = url;
    }

    let mut store = app::Storefront::new(config, cli.page).await?;

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => store.refresh_cycle().await?,
        Command::Watch => store.watch().await?,
        Command::Add { id } => {
            store.prepare().await?;
            store.add_to_cart(id).await?;
        }
        Command::Cart => {
            store.prepare().await?;
            store.show_cart()?;
        }
        Command::Empty => {
            store.prepare().await?;
            store.empty_cart().await?;
        }
        Command::Checkout => {
            store.prepare().await?;
            store.handoff_checkout()?;
        }
    }

    Ok(())
}
