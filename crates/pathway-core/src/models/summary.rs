//! Plan summary model for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plan;
use crate::navigator::PlanNavigator;

/// Compact plan information for lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    pub id: u64,
    pub title: String,
    pub addictions: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub created_at: Timestamp,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let progress = PlanNavigator::with_position(&plan.steps, plan.position).progress();
        Self {
            id: plan.id,
            title: plan.title.clone(),
            addictions: plan.form.addictions.clone(),
            total_tasks: plan.total_tasks(),
            completed_tasks: progress.completed,
            created_at: plan.created_at,
        }
    }
}
