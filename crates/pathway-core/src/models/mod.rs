//! Data models for plans, steps, and navigation state.
//!
//! The stored [`Plan`] document carries the ordered [`Step`] list together with
//! the form answers that seed narrative generation, the cached narrative text,
//! and the saved [`Position`]. [`Progress`] and [`TaskMarker`] are derived
//! values produced by [`crate::navigator::PlanNavigator`] and are never stored.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].

pub mod plan;
pub mod progress;
pub mod step;
pub mod summary;

pub use plan::{DEFAULT_PLAN_TITLE, FormData, Plan, PlanDocument};
pub use progress::{Progress, TaskMarker};
pub use step::{Position, Step};
pub use summary::PlanSummary;
