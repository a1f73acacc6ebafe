use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, ShowStoryArgs, TaskCommands};

/// Walk through a personalized recovery plan one task at a time
///
/// Pathway stores plans made of steps and tasks, remembers where you left off,
/// shows your progress, and generates an encouraging story, background
/// information, and a daily affirmation through a text generation endpoint.
/// It can also run as an MCP (Model Context Protocol) server so assistants can
/// guide you through the same plans.
#[derive(Parser)]
#[command(version, about, name = "pw")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pathway/pathway.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Text generation endpoint accepting {"prompt"} and returning {"output"}
    #[arg(long, global = true, env = "PATHWAY_GENERATOR_URL")]
    pub generator_url: Option<String>,

    /// Timeout in seconds for each text generation request (at least 1)
    #[arg(
        long,
        global = true,
        env = "PATHWAY_GENERATOR_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub generator_timeout: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Pathway CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Move through a plan's tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show the affirmation, story, and background info for a plan
    Story(ShowStoryArgs),
    /// Start the MCP server
    Serve,
}
