mod cli;
mod commands;
mod mcp;
mod page_range;
mod pdf;
mod select;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
            commands::Outcome::Success
        }
        Commands::Filter { input, output } => commands::filter::run(&input, output.as_deref())?,
        Commands::Excerpt {
            input,
            pages,
            output,
        } => commands::excerpt::run(&input, &pages, output.as_deref())?,
        Commands::Dimensions { input } => {
            commands::dimensions::run(&input)?;
            commands::Outcome::Success
        }
    };

    Ok(outcome.into())
}
