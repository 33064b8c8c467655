//! Create tables without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use kanamemo_server::{create_pool_with_options, ensure_tables, ServerConfig};

use super::serve::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let mut config = ServerConfig::from_env();
    args.db.apply(&mut config);

    let pool = create_pool_with_options(&config.database_url, config.max_connections)
        .await
        .context("Failed to create database pool")?;

    ensure_tables(&pool)
        .await
        .context("Failed to create tables")?;

    println!("tables ready");
    Ok(())
}
