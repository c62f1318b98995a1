//! rq-migrate - idempotent universal assignment migration for the
//! purchase requisition database

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::Cli;
use commands::migrate;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    migrate::execute(&cli).await
}
