//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use serde::Serialize;

use super::TaskView;
use crate::{models::Plan, navigator::Direction};

/// Wrapper type for displaying a newly created plan.
///
/// ```rust
/// use pathway_core::{display::CreateResult, models::{FormData, Plan, Position, Step}};
/// use jiff::Timestamp;
///
/// let plan = Plan {
///     id: 1,
///     title: "Your Personalized Plan".to_string(),
///     steps: vec![Step::new("Prepare", ["Pick a date"])],
///     form: FormData::default(),
///     story: None,
///     info: None,
///     position: Position::default(),
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
/// assert!(CreateResult::new(plan).to_string().starts_with("Created plan with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a deletion confirmation.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

/// Outcome of a next/previous move.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavigationResult {
    pub direction: Direction,
    /// False when the move hit the start or end of the plan
    pub moved: bool,
    pub view: TaskView,
}

impl fmt::Display for NavigationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.moved {
            let boundary = match self.direction {
                Direction::Forward => "Already at the last task.",
                Direction::Backward => "Already at the first task.",
            };
            writeln!(f, "{boundary}")?;
            writeln!(f)?;
        }
        write!(f, "{}", self.view)
    }
}
