//! Pathway CLI Application
//!
//! Command-line interface and MCP server for walking through recovery plans.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{PathwayMcpServer, run_stdio_server};
use pathway_core::PlannerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        generator_url,
        generator_timeout,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_generator_url(generator_url)
        .with_generator_timeout(Duration::from_secs(generator_timeout))
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!(
        "Pathway started with database {}",
        planner.database_path().display()
    );

    match command {
        Some(Plan { command }) => {
            Cli::new(planner, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Task { command }) => {
            Cli::new(planner, renderer)
                .handle_task_command(command)
                .await
        }
        Some(Story(args)) => Cli::new(planner, renderer).show_story(args).await,
        Some(Serve) => {
            info!("Starting Pathway MCP server");
            run_stdio_server(PathwayMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer).list_plans().await,
    }
}
