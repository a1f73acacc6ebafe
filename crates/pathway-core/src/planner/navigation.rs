//! Current/next/previous task operations.

use log::debug;

use super::Planner;
use crate::{
    display::{NavigationResult, TaskView},
    error::{PathwayError, Result},
    navigator::{Direction, PlanNavigator},
    params::Id,
};

impl Planner {
    /// Shows the task at the plan's saved position.
    pub async fn current_task(&self, params: &Id) -> Result<TaskView> {
        let plan = self.require_plan(params).await?;
        let navigator = PlanNavigator::with_position(&plan.steps, plan.position);
        Ok(TaskView::new(&plan, &navigator))
    }

    /// Moves to the next task and saves the new position.
    pub async fn advance_task(&self, params: &Id) -> Result<NavigationResult> {
        self.navigate(params.id, Direction::Forward).await
    }

    /// Moves to the previous task and saves the new position.
    pub async fn retreat_task(&self, params: &Id) -> Result<NavigationResult> {
        self.navigate(params.id, Direction::Backward).await
    }

    async fn navigate(&self, id: u64, direction: Direction) -> Result<NavigationResult> {
        self.with_database(move |db| {
            let plan = db.get_plan(id)?.ok_or(PathwayError::PlanNotFound { id })?;
            let mut navigator = PlanNavigator::with_position(&plan.steps, plan.position);

            let moved = navigator.step(direction);
            if moved {
                let position = navigator.position();
                debug!(
                    "Plan {id}: moved {direction:?} to {}:{}",
                    position.step_index, position.task_index
                );
                db.update_position(id, position)?;
            }

            Ok(NavigationResult {
                direction,
                moved,
                view: TaskView::new(&plan, &navigator),
            })
        })
        .await
    }
}
