//! Stored plan document and its import format.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Position, Step};

/// Title given to plans created without one.
pub const DEFAULT_PLAN_TITLE: &str = "Your Personalized Plan";

/// Answers collected when the plan was made; they seed the generation prompts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FormData {
    /// What the user is working to overcome
    #[serde(default)]
    pub addictions: String,

    /// Related struggles to weave into the story
    #[serde(default)]
    pub struggles: String,
}

/// A saved plan with its narrative cache and navigation position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Title of the plan
    pub title: String,

    /// Ordered steps of the plan
    pub steps: Vec<Step>,

    /// Form answers used for generation prompts
    pub form: FormData,

    /// Cached generated story
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,

    /// Cached generated background information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    /// Last saved navigator position
    #[serde(default)]
    pub position: Position,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Plan {
    /// Total number of tasks across all steps.
    pub fn total_tasks(&self) -> usize {
        self.steps.iter().map(|step| step.tasks.len()).sum()
    }

    /// Cached story and info when both are present and non-empty.
    pub fn cached_narrative(&self) -> Option<(&str, &str)> {
        match (self.story.as_deref(), self.info.as_deref()) {
            (Some(story), Some(info)) if !story.is_empty() && !info.is_empty() => {
                Some((story, info))
            }
            _ => None,
        }
    }
}

/// JSON document accepted by plan import.
///
/// Field names follow the hosted document layout: `plan`, `formData`,
/// `story`, and `info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    pub plan: Vec<Step>,
    #[serde(default)]
    pub form_data: FormData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}
