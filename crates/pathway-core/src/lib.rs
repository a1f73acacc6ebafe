//! Core library for Pathway, a step-by-step recovery plan tracker.
//!
//! A saved plan is an ordered list of steps, each holding an ordered list of
//! tasks. The [`navigator::PlanNavigator`] walks those tasks one at a time and
//! derives progress from its position; the [`planner::Planner`] stores plans
//! and positions in SQLite and fills in each plan's story, background info,
//! and daily affirmation through a text-generation endpoint.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pathway_core::{PlannerBuilder, models::Step, params::{CreatePlan, Id}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("pathway.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         title: None,
//!         steps: vec![Step::new("Prepare", ["Pick a quit date", "Tell a friend"])],
//!         form: Default::default(),
//!     })
//!     .await?;
//!
//! let moved = planner.advance_task(&Id { id: plan.id }).await?;
//! println!("{moved}");
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod navigator;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use content::{HttpGenerator, Narrative, Storyteller, TextGenerator};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, NavigationResult, PlanSummaries, StoryView, TaskView,
};
pub use error::{PathwayError, Result};
pub use models::{FormData, Plan, PlanDocument, PlanSummary, Position, Progress, Step, TaskMarker};
pub use navigator::{Direction, PlanNavigator};
pub use params::{CreatePlan, DeletePlan, Id};
pub use planner::{Planner, PlannerBuilder};
