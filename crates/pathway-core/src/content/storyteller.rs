//! Story, info, and affirmation generation.

use std::sync::Arc;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use super::{TextGenerator, clean_text, prompts};
use crate::{error::Result, models::FormData};

/// Affirmation shown when generation fails.
pub const FALLBACK_AFFIRMATION: &str = "You are strong and capable of overcoming any challenge.";

/// Generated story and background information for a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Narrative {
    pub story: String,
    pub info: String,
}

impl Narrative {
    /// Whether both texts are present.
    pub fn is_complete(&self) -> bool {
        !self.story.is_empty() && !self.info.is_empty()
    }
}

/// Runs generation prompts against a [`TextGenerator`].
#[derive(Clone)]
pub struct Storyteller {
    generator: Arc<dyn TextGenerator>,
}

impl Storyteller {
    /// Creates a storyteller over the given generator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generates the story and info texts concurrently.
    ///
    /// Fails if either request fails.
    pub async fn narrative(&self, form: &FormData) -> Result<Narrative> {
        let story_prompt = prompts::story(form);
        let info_prompt = prompts::info(form);
        debug!("Generating narrative for '{}'", form.addictions);

        let (story, info) = tokio::try_join!(
            self.generator.generate(&story_prompt),
            self.generator.generate(&info_prompt)
        )?;

        Ok(Narrative {
            story: clean_text(&story),
            info: clean_text(&info),
        })
    }

    /// Generates an affirmation, falling back to [`FALLBACK_AFFIRMATION`] when
    /// the request fails or yields nothing printable.
    pub async fn affirmation(&self, addictions: &str) -> String {
        match self
            .generator
            .generate(&prompts::affirmation(addictions))
            .await
        {
            Ok(text) => {
                let text = clean_text(&text);
                if text.is_empty() {
                    FALLBACK_AFFIRMATION.to_string()
                } else {
                    text
                }
            }
            Err(e) => {
                error!("Error generating affirmation: {e}");
                FALLBACK_AFFIRMATION.to_string()
            }
        }
    }
}

impl std::fmt::Debug for Storyteller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storyteller").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::PathwayError;

    /// Answers by prompt prefix and records every prompt it sees.
    #[derive(Default)]
    struct ScriptedGenerator {
        prompts: Mutex<Vec<String>>,
        fail_info: bool,
        fail_all: bool,
        symbols_only: bool,
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail_all || (self.fail_info && prompt.starts_with("Provide information")) {
                return Err(PathwayError::generation("unavailable"));
            }
            Ok(if prompt.starts_with("Create a compelling") {
                "**Once** upon a time...".to_string()
            } else if prompt.starts_with("Provide information") {
                "Habits form *slowly*.".to_string()
            } else if self.symbols_only {
                "✨🌟".to_string()
            } else {
                "You've got this! 💪".to_string()
            })
        }
    }

    fn form() -> FormData {
        FormData {
            addictions: "sugar".to_string(),
            struggles: "late nights".to_string(),
        }
    }

    #[tokio::test]
    async fn test_narrative_cleans_both_outputs() {
        let generator = Arc::new(ScriptedGenerator::default());
        let storyteller = Storyteller::new(generator.clone());

        let narrative = storyteller.narrative(&form()).await.unwrap();

        assert_eq!(narrative.story, "Once upon a time...");
        assert_eq!(narrative.info, "Habits form slowly.");
        assert!(narrative.is_complete());
        assert_eq!(generator.prompts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_narrative_fails_when_one_request_fails() {
        let generator = Arc::new(ScriptedGenerator {
            fail_info: true,
            ..Default::default()
        });
        let storyteller = Storyteller::new(generator);

        assert!(storyteller.narrative(&form()).await.is_err());
    }

    #[tokio::test]
    async fn test_affirmation_is_cleaned() {
        let storyteller = Storyteller::new(Arc::new(ScriptedGenerator::default()));
        assert_eq!(storyteller.affirmation("sugar").await, "Youve got this!");
    }

    #[tokio::test]
    async fn test_affirmation_falls_back_on_error() {
        let storyteller = Storyteller::new(Arc::new(ScriptedGenerator {
            fail_all: true,
            ..Default::default()
        }));
        assert_eq!(storyteller.affirmation("sugar").await, FALLBACK_AFFIRMATION);
    }

    #[tokio::test]
    async fn test_affirmation_falls_back_when_nothing_survives_cleaning() {
        let storyteller = Storyteller::new(Arc::new(ScriptedGenerator {
            symbols_only: true,
            ..Default::default()
        }));
        assert_eq!(storyteller.affirmation("sugar").await, FALLBACK_AFFIRMATION);
    }
}
