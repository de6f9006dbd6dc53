//! # Blog CLI
//!
//! Terminal front-end for the posts API, driven by the post browser state machine.

mod cli;
mod commands;
mod render;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::run(Cli::parse()).await {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
