//! # inventory-cli
//!
//! Terminal client for the inventory server. After every change it refetches both lists and
//! prints them again.
//!
//! ```bash
//! inventory-cli products
//! inventory-cli add-product --name Widget --price 9.99 --stock 10
//! inventory-cli sell 4f0c2a1e9b7d4c3f8e6a5b4c3d2e1f00 3
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use inventory::api::render::{render_products, render_sales};
use inventory::api::{ApiClientError, InventoryApi};
use inventory::model::ProductCreate;

#[derive(Debug, Parser)]
#[command(name = "inventory-cli", about = "Manage products and record sales", version)]
struct Cli {
    /// Base URL of the inventory server
    #[arg(long, env = "INVENTORY_SERVER", default_value = "http://localhost:9000")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List products
    Products,
    /// Show the sales history
    Sales,
    /// Add a product
    AddProduct {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        stock: i64,
    },
    /// Record a sale of `quantity` units
    Sell { product_id: String, quantity: i64 },
    DeleteProduct { id: String },
    DeleteSale { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    actor_framework::tracing::setup_tracing();
    let cli = Cli::parse();
    let api = InventoryApi::new(&cli.server).context("failed to build HTTP client")?;

    match cli.command {
        Command::Products => {
            println!("{}", render_products(&api.list_products().await?));
            return Ok(());
        }
        Command::Sales => {
            println!("{}", render_sales(&api.list_sales().await?));
            return Ok(());
        }
        Command::AddProduct { name, price, stock } => {
            if name.trim().is_empty() {
                anyhow::bail!("product name must not be empty");
            }
            let product = api
                .create_product(&ProductCreate { name, price, stock })
                .await?;
            println!("Added {} ({})", product.name, product.id);
        }
        Command::Sell {
            product_id,
            quantity,
        } => match api.record_sale(&product_id, quantity).await {
            Ok(receipt) => println!("{}", receipt.message),
            Err(e) => report(e)?,
        },
        Command::DeleteProduct { id } => {
            println!("{}", api.delete_product(&id).await?.message);
        }
        Command::DeleteSale { id } => {
            println!("{}", api.delete_sale(&id).await?.message);
        }
    }

    let snapshot = api.snapshot().await?;
    println!("\n{}", render_products(&snapshot.products));
    println!("\n{}", render_sales(&snapshot.sales));
    Ok(())
}

/// Shows 4xx messages like "Not enough stock" and carries on; anything else is fatal.
fn report(e: ApiClientError) -> anyhow::Result<()> {
    match e.client_message() {
        Some(message) => {
            eprintln!("{message}");
            Ok(())
        }
        None => Err(e.into()),
    }
}
