//! Plan handler operations that return display wrapper types.

use super::Planner;
use crate::{
    display::PlanSummaries,
    error::{PathwayError, Result},
    models::{Plan, PlanSummary},
    params::{DeletePlan, Id},
};

impl Planner {
    /// Lists all plans as summaries with task progress.
    pub async fn list_plans_summary(&self) -> Result<PlanSummaries> {
        let plans = self.list_plans().await?;
        Ok(PlanSummaries(plans.iter().map(PlanSummary::from).collect()))
    }

    /// Permanently deletes a plan after explicit confirmation.
    ///
    /// Returns the deleted plan, or `None` when it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::InvalidInput` if `confirmed` is false.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<Option<Plan>> {
        if !params.confirmed {
            return Err(PathwayError::invalid_input("confirmed").with_reason(
                "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let id = Id { id: params.id };
        let plan = self.get_plan(&id).await?;
        if plan.is_some() {
            self.delete_plan_by_id(&id).await?;
        }
        Ok(plan)
    }
}
