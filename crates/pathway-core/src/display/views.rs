//! Page-style views: the current task and the plan's story.

use std::fmt;

use serde::Serialize;

use crate::{
    content::Narrative,
    models::{Plan, Position, Progress, TaskMarker},
    navigator::PlanNavigator,
};

/// Snapshot of the task currently presented for a plan.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskView {
    pub plan_id: u64,
    pub plan_title: String,
    pub position: Position,
    /// Title of the current step, absent when the plan has no tasks
    pub step_title: Option<String>,
    /// Text of the current task, absent when the plan has no tasks
    pub task: Option<String>,
    /// Number of tasks in the current step
    pub task_count: usize,
    pub markers: Vec<TaskMarker>,
    pub progress: Progress,
    pub is_first: bool,
    pub is_last: bool,
}

impl TaskView {
    /// Captures the navigator state for `plan`.
    pub fn new(plan: &Plan, navigator: &PlanNavigator<'_>) -> Self {
        let step = navigator.current_step();
        Self {
            plan_id: plan.id,
            plan_title: plan.title.clone(),
            position: navigator.position(),
            step_title: step.map(|step| step.title.clone()),
            task: navigator.current_task().map(String::from),
            task_count: step.map_or(0, |step| step.tasks.len()),
            markers: navigator.task_markers(),
            progress: navigator.progress(),
            is_first: navigator.is_first_task(),
            is_last: navigator.is_last_task(),
        }
    }

    /// Label for the forward control.
    pub fn next_label(&self) -> &'static str {
        if self.is_last { "Completed!" } else { "Next Task" }
    }
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (ID: {})", self.plan_title, self.plan_id)?;
        writeln!(f)?;
        write!(f, "{}", self.progress)?;
        writeln!(f)?;

        let (Some(step_title), Some(task)) = (&self.step_title, &self.task) else {
            return writeln!(f, "This plan has no tasks.");
        };

        writeln!(f, "## Step {}: {}", self.position.step_index + 1, step_title)?;
        writeln!(f)?;
        writeln!(
            f,
            "### Task {} of {}",
            self.position.task_index + 1,
            self.task_count
        )?;
        writeln!(f)?;
        writeln!(f, "> {task}")?;
        writeln!(f)?;

        let markers: Vec<&str> = self.markers.iter().map(TaskMarker::icon).collect();
        writeln!(f, "{}", markers.join(" "))?;
        writeln!(f)?;

        if !self.is_first {
            write!(f, "← Previous Task | ")?;
        }
        if self.is_last {
            writeln!(f, "**{}**", self.next_label())
        } else {
            writeln!(f, "{} →", self.next_label())
        }
    }
}

/// Affirmation, story, and background information for a plan.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoryView {
    pub plan_id: u64,
    pub affirmation: String,
    pub narrative: Narrative,
}

impl fmt::Display for StoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Daily Affirmation")?;
        writeln!(f)?;
        writeln!(f, "\"{}\"", self.affirmation)?;
        writeln!(f)?;

        writeln!(f, "## Your Inspiring Story")?;
        writeln!(f)?;
        write_section(f, &self.narrative.story, "Story unavailable.")?;

        writeln!(f, "## Understanding Your Challenge")?;
        writeln!(f)?;
        write_section(f, &self.narrative.info, "Information unavailable.")
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, text: &str, fallback: &str) -> fmt::Result {
    if text.is_empty() {
        writeln!(f, "_{fallback}_")?;
    } else {
        writeln!(f, "{text}")?;
    }
    writeln!(f)
}
