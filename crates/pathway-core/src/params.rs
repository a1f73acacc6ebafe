//! Parameter structures for Pathway operations.
//!
//! These structures are shared by every interface (CLI, MCP). They carry no
//! framework derives beyond serde; the MCP layer adds JSON schema support
//! through the `schema` feature, and the CLI converts its clap arguments into
//! them with `From` implementations.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{FormData, Step};

/// Generic parameters for operations requiring just a plan ID.
///
/// Used for show_plan, current_task, next_task, previous_task, and
/// show_story.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: u64,
}

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    /// Title of the plan; defaults to "Your Personalized Plan"
    #[serde(default)]
    pub title: Option<String>,
    /// Ordered steps, each with a title and its tasks
    pub steps: Vec<Step>,
    /// Form answers used to personalize generated content
    #[serde(default)]
    pub form: FormData,
}

/// Parameters for permanently deleting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeletePlan {
    /// The ID of the plan to delete
    pub id: u64,
    /// Must be true to confirm permanent deletion
    #[serde(default)]
    pub confirmed: bool,
}
