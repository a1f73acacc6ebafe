//! Narrative generation for saved plans.
//!
//! A plan's story, background information, and daily affirmation come from a
//! text-generation endpoint. [`prompts`] interpolates the plan's form answers
//! into fixed templates, [`TextGenerator`] is the seam to the endpoint (with
//! [`HttpGenerator`] as the networked implementation), and [`Storyteller`]
//! runs the requests and cleans the results.

pub mod generator;
pub mod prompts;
pub mod storyteller;

pub use generator::{DEFAULT_TIMEOUT, HttpGenerator, TextGenerator};
pub use prompts::clean_text;
pub use storyteller::{FALLBACK_AFFIRMATION, Narrative, Storyteller};
