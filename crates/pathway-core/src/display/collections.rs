//! Collection wrapper for plan lists.

use std::fmt;

use crate::models::PlanSummary;

/// Newtype wrapper for displaying a list of plan summaries.
///
/// ```rust
/// use pathway_core::{display::PlanSummaries, models::PlanSummary};
/// use jiff::Timestamp;
///
/// let summaries = PlanSummaries(vec![PlanSummary {
///     id: 1,
///     title: "Quit smoking".to_string(),
///     addictions: "smoking".to_string(),
///     total_tasks: 6,
///     completed_tasks: 2,
///     created_at: Timestamp::now(),
/// }]);
/// assert!(summaries.to_string().contains("Quit smoking (ID: 1) (2/6)"));
/// assert_eq!(PlanSummaries(vec![]).to_string(), "No plans found.\n");
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in &self.0 {
            write!(f, "{plan}")?;
        }
        Ok(())
    }
}
