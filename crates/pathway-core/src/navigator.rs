//! Step/task navigation over a plan.
//!
//! [`PlanNavigator`] borrows a plan's steps and owns the current
//! [`Position`]. Moving forward walks the tasks of the current step and then
//! crosses into the next step; moving backward does the reverse, landing on
//! the previous step's last task. Both directions stop silently at the ends
//! of the plan, so callers may invoke them unconditionally.
//!
//! Steps without tasks are never visited. Crossing a step boundary skips
//! over any run of empty steps, and the start position is the first task of
//! the first step that has one. A plan with no tasks at all has no current
//! task, reports progress `0 of 0`, and ignores navigation.
//!
//! Progress, markers, and the first/last flags are recomputed on every call.
//!
//! ```rust
//! use pathway_core::{models::{Position, Step}, navigator::PlanNavigator};
//!
//! let steps = vec![
//!     Step::new("A", ["a1", "a2"]),
//!     Step::new("B", ["b1"]),
//! ];
//! let mut navigator = PlanNavigator::new(&steps);
//! assert!(navigator.is_first_task());
//!
//! navigator.advance_task();
//! navigator.advance_task();
//! assert_eq!(navigator.position(), Position::new(1, 0));
//! assert!(navigator.is_last_task());
//! assert_eq!(navigator.progress().completed, 2);
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::{Position, Progress, Step, TaskMarker};

/// Direction of a single navigation move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

/// Navigation state for one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanNavigator<'a> {
    steps: &'a [Step],
    position: Position,
}

impl<'a> PlanNavigator<'a> {
    /// Creates a navigator at the start of the plan.
    pub fn new(steps: &'a [Step]) -> Self {
        let position = steps
            .iter()
            .position(Step::is_visitable)
            .map(|step_index| Position::new(step_index, 0))
            .unwrap_or_default();
        Self { steps, position }
    }

    /// Creates a navigator at a previously saved position.
    ///
    /// A position that does not point at an existing task falls back to the
    /// start of the plan.
    pub fn with_position(steps: &'a [Step], position: Position) -> Self {
        let navigator = Self::new(steps);
        if navigator.points_at_task(position) {
            Self { steps, position }
        } else {
            if position != navigator.position && position != Position::default() {
                warn!(
                    "Saved position {}:{} is outside the plan, starting over",
                    position.step_index, position.task_index
                );
            }
            navigator
        }
    }

    /// The current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The step holding the current task.
    pub fn current_step(&self) -> Option<&'a Step> {
        self.steps
            .get(self.position.step_index)
            .filter(|step| step.is_visitable())
    }

    /// Text of the current task.
    pub fn current_task(&self) -> Option<&'a str> {
        self.current_step()?
            .tasks
            .get(self.position.task_index)
            .map(String::as_str)
    }

    /// Moves to the next task, crossing into the next non-empty step when the
    /// current step is exhausted. Returns whether the position changed.
    pub fn advance_task(&mut self) -> bool {
        self.move_to(self.next_position())
    }

    /// Moves to the previous task, crossing back to the last task of the
    /// nearest preceding non-empty step. Returns whether the position changed.
    pub fn retreat_task(&mut self) -> bool {
        self.move_to(self.previous_position())
    }

    /// Moves one task in `direction`. Returns whether the position changed.
    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.advance_task(),
            Direction::Backward => self.retreat_task(),
        }
    }

    /// True when no task precedes the current one.
    pub fn is_first_task(&self) -> bool {
        self.previous_position().is_none()
    }

    /// True when no task follows the current one.
    pub fn is_last_task(&self) -> bool {
        self.next_position().is_none()
    }

    /// Completed and total task counts at the current position.
    pub fn progress(&self) -> Progress {
        let total = self.steps.iter().map(|step| step.tasks.len()).sum();
        let completed = match self.current_step() {
            Some(_) => {
                self.steps[..self.position.step_index]
                    .iter()
                    .map(|step| step.tasks.len())
                    .sum::<usize>()
                    + self.position.task_index
            }
            None => 0,
        };
        Progress { completed, total }
    }

    /// Marker for every task of the current step.
    pub fn task_markers(&self) -> Vec<TaskMarker> {
        let Some(step) = self.current_step() else {
            return Vec::new();
        };
        let current = self.position.task_index;
        (0..step.tasks.len())
            .map(|index| match index.cmp(&current) {
                std::cmp::Ordering::Less => TaskMarker::Done,
                std::cmp::Ordering::Equal => TaskMarker::Current,
                std::cmp::Ordering::Greater => TaskMarker::Pending,
            })
            .collect()
    }

    fn points_at_task(&self, position: Position) -> bool {
        self.steps
            .get(position.step_index)
            .is_some_and(|step| position.task_index < step.tasks.len())
    }

    fn next_position(&self) -> Option<Position> {
        let step = self.current_step()?;
        let Position {
            step_index,
            task_index,
        } = self.position;

        if task_index + 1 < step.tasks.len() {
            return Some(Position::new(step_index, task_index + 1));
        }

        self.steps
            .iter()
            .enumerate()
            .skip(step_index + 1)
            .find(|(_, step)| step.is_visitable())
            .map(|(index, _)| Position::new(index, 0))
    }

    fn previous_position(&self) -> Option<Position> {
        self.current_step()?;
        let Position {
            step_index,
            task_index,
        } = self.position;

        if task_index > 0 {
            return Some(Position::new(step_index, task_index - 1));
        }

        self.steps[..step_index]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, step)| step.is_visitable())
            .map(|(index, step)| Position::new(index, step.tasks.len() - 1))
    }

    fn move_to(&mut self, position: Option<Position>) -> bool {
        match position {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}
