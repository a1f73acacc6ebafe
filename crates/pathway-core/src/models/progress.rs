//! Derived progress values.

use serde::{Deserialize, Serialize};

/// Completed versus total task counts for a plan at a given position.
///
/// Tasks before the current one count as completed; the current task does
/// not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completion percentage in `0.0..=100.0`; zero for a plan with no tasks.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Per-task indicator for the tasks of the current step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskMarker {
    /// Task comes before the current one
    Done,

    /// Task is the one being presented
    Current,

    /// Task comes after the current one
    Pending,
}

impl TaskMarker {
    /// Single-character icon used in marker rows.
    ///
    /// ```rust
    /// use pathway_core::models::TaskMarker;
    ///
    /// assert_eq!(TaskMarker::Done.icon(), "✓");
    /// assert_eq!(TaskMarker::Current.icon(), "➤");
    /// assert_eq!(TaskMarker::Pending.icon(), "○");
    /// ```
    pub fn icon(&self) -> &'static str {
        match self {
            TaskMarker::Done => "✓",
            TaskMarker::Current => "➤",
            TaskMarker::Pending => "○",
        }
    }
}
