//! HTTP server command
//!
//! Opens the store, serves the shop API, and closes the store on shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use shop_server::db::{self, pool::DEFAULT_DATABASE_URL};
use shop_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "SHOP_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// SQLite database URL; the file is created if missing
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting shop server on {}", args.bind);

    let pool = db::open(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database at {}", args.database_url))?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown; the pool is closed before returning
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
