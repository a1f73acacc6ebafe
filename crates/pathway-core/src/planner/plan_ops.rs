//! Plan storage operations for the Planner.

use log::debug;

use super::Planner;
use crate::{
    error::{PathwayError, Result},
    models::{DEFAULT_PLAN_TITLE, Plan, PlanDocument, Step},
    params::{CreatePlan, Id},
};

/// Resolves an optional title, falling back to the default for blank input.
fn resolve_title(title: Option<&str>) -> String {
    match title.map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => DEFAULT_PLAN_TITLE.to_string(),
    }
}

/// Checks that a plan has at least one step and every step has a title.
fn validate_steps(steps: &[Step]) -> Result<()> {
    if steps.is_empty() {
        return Err(PathwayError::invalid_input("steps")
            .with_reason("A plan needs at least one step"));
    }
    if let Some(step) = steps.iter().find(|step| step.title.trim().is_empty()) {
        return Err(PathwayError::invalid_input("steps").with_reason(format!(
            "Every step needs a title (step with tasks {:?} has none)",
            step.tasks
        )));
    }
    Ok(())
}

impl Planner {
    /// Creates a new plan positioned at its first task.
    ///
    /// A plan needs at least one step. Steps without tasks are accepted and
    /// skipped during navigation.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        validate_steps(&params.steps)?;

        let title = resolve_title(params.title.as_deref());
        let steps = params.steps.clone();
        let form = params.form.clone();
        debug!("Creating plan '{title}' with {} steps", steps.len());

        self.with_database(move |db| db.create_plan(&title, &steps, &form, None, None))
            .await
    }

    /// Imports a saved plan document, keeping any story and info it carries.
    ///
    /// The narrative is stored with the plan in a single insert, and only
    /// when the document holds both texts.
    pub async fn import_plan(&self, document: PlanDocument, title: Option<&str>) -> Result<Plan> {
        validate_steps(&document.plan)?;

        let title = resolve_title(title);
        let PlanDocument {
            plan: steps,
            form_data: form,
            story,
            info,
        } = document;
        let narrative = story.zip(info);
        debug!(
            "Importing plan '{title}' with {} steps (narrative: {})",
            steps.len(),
            narrative.is_some()
        );

        self.with_database(move |db| {
            let (story, info) = match &narrative {
                Some((story, info)) => (Some(story.as_str()), Some(info.as_str())),
                None => (None, None),
            };
            db.create_plan(&title, &steps, &form, story, info)
        })
        .await
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let id = params.id;
        self.with_database(move |db| db.get_plan(id)).await
    }

    /// Retrieves a plan by its ID, failing when it does not exist.
    pub async fn require_plan(&self, params: &Id) -> Result<Plan> {
        self.get_plan(params)
            .await?
            .ok_or(PathwayError::PlanNotFound { id: params.id })
    }

    /// Lists all plans, newest first.
    pub async fn list_plans(&self) -> Result<Vec<Plan>> {
        self.with_database(|db| db.list_plans()).await
    }

    /// Permanently deletes a plan.
    pub async fn delete_plan_by_id(&self, params: &Id) -> Result<()> {
        let id = params.id;
        self.with_database(move |db| db.delete_plan(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_title() {
        assert_eq!(resolve_title(None), DEFAULT_PLAN_TITLE);
        assert_eq!(resolve_title(Some("   ")), DEFAULT_PLAN_TITLE);
        assert_eq!(resolve_title(Some(" Quit Vaping ")), "Quit Vaping");
    }

    #[test]
    fn test_validate_steps() {
        assert!(validate_steps(&[]).is_err());
        assert!(validate_steps(&[Step::new(" ", ["a"])]).is_err());
        assert!(validate_steps(&[Step::new("Prepare", Vec::<String>::new())]).is_ok());
    }
}
