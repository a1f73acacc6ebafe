//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Plan, PlanSummary, Progress, TaskMarker},
    navigator::PlanNavigator,
};

/// Number of cells in the progress bar.
const BAR_WIDTH: usize = 20;

impl Progress {
    /// Text bar such as `[██████░░░░░░░░░░░░░░] 33%`.
    pub fn bar(&self) -> String {
        let filled = if self.total == 0 {
            0
        } else {
            (self.completed * BAR_WIDTH / self.total).min(BAR_WIDTH)
        };
        format!(
            "[{}{}] {:.0}%",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            self.percent()
        )
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.bar())?;
        writeln!(
            f,
            "Progress: {} of {} tasks completed",
            self.completed, self.total
        )
    }
}

impl fmt::Display for TaskMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.icon())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        if !self.form.addictions.is_empty() {
            writeln!(f, "- Addictions: {}", self.form.addictions)?;
        }
        if !self.form.struggles.is_empty() {
            writeln!(f, "- Struggles: {}", self.form.struggles)?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        let navigator = PlanNavigator::with_position(&self.steps, self.position);
        let progress = navigator.progress();
        writeln!(f)?;
        write!(f, "{progress}")?;

        if self.steps.is_empty() {
            return writeln!(f, "\nNo steps in this plan.");
        }

        writeln!(f, "\n## Steps")?;

        // Tasks before the current one are done; the rest are pending.
        let current = navigator.current_task().map(|_| progress.completed);
        let mut index = 0;
        for (number, step) in self.steps.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "### Step {}: {}", number + 1, step.title)?;
            writeln!(f)?;

            if step.tasks.is_empty() {
                writeln!(f, "_No tasks in this step._")?;
                continue;
            }

            for task in &step.tasks {
                let marker = match current {
                    Some(current) if index < current => TaskMarker::Done,
                    Some(current) if index == current => TaskMarker::Current,
                    _ => TaskMarker::Pending,
                };
                writeln!(f, "- {marker} {task}")?;
                index += 1;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.title, self.id, self.completed_tasks, self.total_tasks
        )?;
        writeln!(f)?;

        if !self.addictions.is_empty() {
            writeln!(f, "- **Addictions**: {}", self.addictions)?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}
