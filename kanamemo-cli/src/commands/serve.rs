//! HTTP server command

use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::net::SocketAddr;

use kanamemo_server::{create_pool_with_options, ensure_tables, run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: KANAMEMO_BIND or 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Database connection arguments shared by serve and migrate
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (default: DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections (default: KANAMEMO_MAX_CONNECTIONS or 5)
    #[arg(long)]
    pub max_connections: Option<u32>,
}

impl DatabaseArgs {
    /// Layer command line values over the environment config.
    ///
    /// The environment itself is read by `ServerConfig::from_env`, which
    /// falls back to defaults on unparsable values.
    pub fn apply(self, config: &mut ServerConfig) {
        if let Some(url) = self.database_url {
            config.database_url = url;
        }
        if let Some(max) = self.max_connections {
            config.max_connections = max;
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::from_env();
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    config.cors_permissive |= args.cors_permissive;
    args.db.apply(&mut config);

    tracing::info!("Starting kanamemo server on {}", config.bind_addr);

    let pool = create_pool_with_options(&config.database_url, config.max_connections)
        .await
        .context("Failed to create database pool")?;

    ensure_tables(&pool)
        .await
        .context("Failed to create tables")?;

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
