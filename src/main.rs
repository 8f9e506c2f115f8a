use crate::workflow::launch;
use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod error;
mod export;
mod gateway;
mod llm;
mod share;
mod types;
mod workflow;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.into_config()?;

    launch(&config).await
}
