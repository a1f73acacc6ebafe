//! High-level planner API.
//!
//! [`Planner`] is the single entry point used by the CLI and the MCP server.
//! It opens the SQLite store on a blocking task for every call, drives the
//! [`crate::navigator::PlanNavigator`] for next/previous moves, persists the
//! resulting position, and asks the configured [`Storyteller`] for narrative
//! text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (plan_handlers, │───▶│ (plan_ops,      │───▶│   (via db/)     │
//! │  navigation,    │    │  navigator,     │    │                 │
//! │  story)         │    │  storyteller)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures the database path and text generator
//! - [`plan_ops`]: create/import/get/list/delete against the store
//! - [`plan_handlers`]: list summaries and confirmed deletion
//! - [`navigation`]: current/next/previous task views
//! - [`story`]: affirmation, story, and info with caching

use std::path::PathBuf;

use tokio::task;

use crate::{
    content::Storyteller,
    db::Database,
    error::{PathwayError, Result},
};

pub mod builder;
pub mod navigation;
pub mod plan_handlers;
pub mod plan_ops;
pub mod story;


pub use builder::PlannerBuilder;

/// Main planner interface for managing plans and walking through their tasks.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) storyteller: Option<Storyteller>,
}

impl Planner {
    pub(crate) fn new(db_path: PathBuf, storyteller: Option<Storyteller>) -> Self {
        Self {
            db_path,
            storyteller,
        }
    }

    /// Path of the SQLite database backing this planner.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `operation` against a fresh connection on a blocking task.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(PathwayError::join)?
    }
}
