//! Story page operation: affirmation, story, and info.

use log::{debug, error, warn};

use super::Planner;
use crate::{
    content::{FALLBACK_AFFIRMATION, Narrative, Storyteller},
    display::StoryView,
    error::{PathwayError, Result},
    params::Id,
};

impl Planner {
    /// Loads the story page for a plan.
    ///
    /// Story and info are generated only when the plan has no cached copy;
    /// a complete result is written back to the store. A failed generation
    /// is logged and shown as empty text without being cached, so the next
    /// call tries again. The affirmation is generated fresh on every call.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::PlanNotFound` for an unknown plan and
    /// `PathwayError::Configuration` when a narrative is needed but no text
    /// generator is configured.
    pub async fn load_story(&self, params: &Id) -> Result<StoryView> {
        let plan = self.require_plan(params).await?;

        let narrative = match plan.cached_narrative() {
            Some((story, info)) => {
                debug!("Plan {}: using cached narrative", plan.id);
                Narrative {
                    story: story.to_string(),
                    info: info.to_string(),
                }
            }
            None => {
                let storyteller = self.require_storyteller()?;
                match storyteller.narrative(&plan.form).await {
                    Ok(narrative) if narrative.is_complete() => {
                        let id = plan.id;
                        let cached = narrative.clone();
                        self.with_database(move |db| {
                            db.update_narrative(id, &cached.story, &cached.info)
                        })
                        .await?;
                        narrative
                    }
                    Ok(narrative) => {
                        warn!("Plan {}: generated narrative is incomplete, not caching", plan.id);
                        narrative
                    }
                    Err(e) => {
                        error!("Plan {}: error generating content: {e}", plan.id);
                        Narrative::default()
                    }
                }
            }
        };

        let affirmation = match &self.storyteller {
            Some(storyteller) => storyteller.affirmation(&plan.form.addictions).await,
            None => FALLBACK_AFFIRMATION.to_string(),
        };

        Ok(StoryView {
            plan_id: plan.id,
            affirmation,
            narrative,
        })
    }

    fn require_storyteller(&self) -> Result<&Storyteller> {
        self.storyteller
            .as_ref()
            .ok_or_else(|| PathwayError::Configuration {
                message: "No text generation endpoint configured; set --generator-url or PATHWAY_GENERATOR_URL".to_string(),
            })
    }
}
