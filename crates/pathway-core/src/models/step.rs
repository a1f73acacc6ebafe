//! Step and position definitions.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A titled phase of a plan holding an ordered list of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Step {
    /// Title of the step
    pub title: String,

    /// Ordered task texts; a step with no tasks is skipped during navigation
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl Step {
    /// Creates a step from a title and task texts.
    pub fn new<T, I, S>(title: T, tasks: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            tasks: tasks.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the step has at least one task to visit.
    pub fn is_visitable(&self) -> bool {
        !self.tasks.is_empty()
    }
}

/// Pointer to the task currently presented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Position {
    /// Index into the plan's steps (0-indexed)
    pub step_index: usize,

    /// Index into the current step's tasks (0-indexed)
    pub task_index: usize,
}

impl Position {
    /// Creates a position from step and task indices.
    pub const fn new(step_index: usize, task_index: usize) -> Self {
        Self {
            step_index,
            task_index,
        }
    }
}
