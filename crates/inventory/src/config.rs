use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

const DEFAULT_STORE_URI: &str = "memory://";
const DEFAULT_ACTOR_BUFFER: usize = 32;

/// How a sale takes stock from its product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleMode {
    /// Check and decrement run as one action inside the product actor.
    #[default]
    Serialized,
    /// Read, check, then decrement unconditionally. Concurrent sales of one product can
    /// oversell and leave the stock negative.
    Unserialized,
}

impl std::fmt::Display for SaleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaleMode::Serialized => write!(f, "serialized"),
            SaleMode::Unserialized => write!(f, "unserialized"),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "inventory-server",
    about = "HTTP/JSON inventory service for products and sales",
    version
)]
pub struct ServerArgs {
    /// Document store to use: `memory://` or `file://<directory>`
    #[arg(long, env = "INVENTORY_STORE_URI", default_value = DEFAULT_STORE_URI)]
    pub store_uri: String,

    /// Address to listen on
    #[arg(long, env = "INVENTORY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 9000)]
    pub port: u16,

    /// Whether concurrent sales of one product are serialized
    #[arg(long, env = "INVENTORY_SALE_MODE", value_enum, default_value_t = SaleMode::Serialized)]
    pub sale_mode: SaleMode,

    /// Request queue capacity of each actor
    #[arg(long, env = "INVENTORY_ACTOR_BUFFER", default_value_t = DEFAULT_ACTOR_BUFFER)]
    pub actor_buffer: usize,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub store_uri: String,
    pub bind_address: SocketAddr,
    pub sale_mode: SaleMode,
    pub actor_buffer: usize,
}

impl ServerConfig {
    pub fn from_args(args: ServerArgs) -> Result<Self> {
        let ServerArgs {
            store_uri,
            host,
            port,
            sale_mode,
            actor_buffer,
        } = args;

        let store_uri = store_uri.trim().to_string();
        anyhow::ensure!(!store_uri.is_empty(), "store uri must not be empty");
        anyhow::ensure!(actor_buffer > 0, "actor buffer must be positive");

        let ip: IpAddr = host
            .trim()
            .parse()
            .with_context(|| format!("invalid listen host {host:?}"))?;

        Ok(Self {
            store_uri,
            bind_address: SocketAddr::new(ip, port),
            sale_mode,
            actor_buffer,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            store_uri: DEFAULT_STORE_URI.to_string(),
            bind_address: SocketAddr::from(([0, 0, 0, 0], 9000)),
            sale_mode: SaleMode::default(),
            actor_buffer: DEFAULT_ACTOR_BUFFER,
        }
    }
}
