//! Markdown formatting for plans, task views, and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while the wrapper types here format the same data for a particular
//! context: the one-task view, the story page, plan lists, and the outcome of
//! create/delete/navigate operations. The CLI renders the markdown through
//! its terminal renderer and the MCP server returns it verbatim.
//!
//! ```rust
//! use pathway_core::display::PlanSummaries;
//!
//! assert_eq!(PlanSummaries(vec![]).to_string(), "No plans found.\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod views;

pub use collections::PlanSummaries;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, NavigationResult};
pub use views::{StoryView, TaskView};
