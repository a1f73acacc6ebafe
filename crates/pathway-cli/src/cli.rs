//! Command-line subcommands and their handlers.
//!
//! Each clap argument struct converts into the matching core parameter type
//! with a `From` implementation, so the core stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use log::debug;
use pathway_core::{
    CreateResult, DeleteResult, Planner,
    models::{FormData, PlanDocument, Step},
    params::{CreatePlan, DeletePlan, Id},
};

use crate::renderer::TerminalRenderer;

/// Parses `--step "Title:first task;second task"` into a [`Step`].
///
/// A value without a colon is a step with no tasks. Blank tasks are dropped.
fn parse_step(value: &str) -> Result<Step, String> {
    let (title, tasks) = value.split_once(':').unwrap_or((value, ""));
    let title = title.trim();
    if title.is_empty() {
        return Err("step title must not be empty".to_string());
    }
    let tasks = tasks
        .split(';')
        .map(str::trim)
        .filter(|task| !task.is_empty());
    Ok(Step::new(title, tasks))
}

/// Create a new plan from steps given on the command line
#[derive(Args)]
pub struct CreatePlanArgs {
    /// A step as "Title:task one;task two" (repeat for each step, in order)
    #[arg(
        long = "step",
        value_name = "TITLE:TASKS",
        required = true,
        value_parser = parse_step
    )]
    pub steps: Vec<Step>,
    /// Title of the plan (defaults to "Your Personalized Plan")
    #[arg(short, long)]
    pub title: Option<String>,
    /// What you are working to overcome
    #[arg(long, default_value = "")]
    pub addictions: String,
    /// Related struggles to weave into the generated story
    #[arg(long, default_value = "")]
    pub struggles: String,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            title: val.title,
            steps: val.steps,
            form: FormData {
                addictions: val.addictions,
                struggles: val.struggles,
            },
        }
    }
}

/// Import a plan from a JSON document
///
/// The document holds `plan` (steps with `title` and `tasks`), `formData`
/// (`addictions`, `struggles`), and optionally a saved `story` and `info`.
#[derive(Args)]
pub struct ImportPlanArgs {
    /// Path to the JSON plan document
    pub file: PathBuf,
    /// Title for the imported plan
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Arguments for commands that act on a single plan
#[derive(Args)]
pub struct PlanIdArgs {
    /// ID of the plan
    pub id: u64,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Show the affirmation, story, and background info for a plan
#[derive(Args)]
pub struct ShowStoryArgs {
    /// ID of the plan
    pub id: u64,
}

impl From<ShowStoryArgs> for Id {
    fn from(val: ShowStoryArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Import a plan from a JSON document
    #[command(alias = "i")]
    Import(ImportPlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show every step and task of a plan
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Show the current task
    #[command(alias = "c")]
    Current(PlanIdArgs),
    /// Move to the next task
    #[command(alias = "n")]
    Next(PlanIdArgs),
    /// Move to the previous task
    #[command(aliases = ["p", "previous"])]
    Prev(PlanIdArgs),
}

/// Runs CLI commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.create_plan(&args.into()).await,
            PlanCommands::Import(args) => self.import_plan(args).await,
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Delete(args) => self.delete_plan(&args.into()).await,
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        let view = match command {
            TaskCommands::Current(args) => {
                self.planner.current_task(&args.into()).await?.to_string()
            }
            TaskCommands::Next(args) => self.planner.advance_task(&args.into()).await?.to_string(),
            TaskCommands::Prev(args) => self.planner.retreat_task(&args.into()).await?.to_string(),
        };
        self.renderer.render(&view);
        Ok(())
    }

    pub async fn show_story(&self, args: ShowStoryArgs) -> Result<()> {
        let story = self
            .planner
            .load_story(&args.into())
            .await
            .context("Failed to load story")?;
        self.renderer.render(&story.to_string());
        Ok(())
    }

    pub async fn list_plans(&self) -> Result<()> {
        let summaries = self
            .planner
            .list_plans_summary()
            .await
            .context("Failed to list plans")?;
        let heading = if summaries.is_empty() {
            "# Plans\n\n".to_string()
        } else {
            format!("# Plans ({})\n\n", summaries.len())
        };
        self.renderer.render(&format!("{heading}{summaries}"));
        Ok(())
    }

    async fn create_plan(&self, params: &CreatePlan) -> Result<()> {
        let plan = self
            .planner
            .create_plan(params)
            .await
            .context("Failed to create plan")?;
        self.renderer.render(&CreateResult::new(plan).to_string());
        Ok(())
    }

    async fn import_plan(&self, args: ImportPlanArgs) -> Result<()> {
        let contents = std::fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let document: PlanDocument = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid plan document {}", args.file.display()))?;
        debug!(
            "Importing {} steps from {}",
            document.plan.len(),
            args.file.display()
        );

        let plan = self
            .planner
            .import_plan(document, args.title.as_deref())
            .await
            .context("Failed to import plan")?;
        self.renderer.render(&CreateResult::new(plan).to_string());
        Ok(())
    }

    async fn show_plan(&self, params: &Id) -> Result<()> {
        match self.planner.get_plan(params).await? {
            Some(plan) => {
                self.renderer.render(&plan.to_string());
                Ok(())
            }
            None => bail!("Plan with ID {} not found", params.id),
        }
    }

    async fn delete_plan(&self, params: &DeletePlan) -> Result<()> {
        if !params.confirmed {
            bail!("Refusing to delete plan {} without --confirm", params.id);
        }

        match self.planner.delete_plan(params).await? {
            Some(plan) => {
                self.renderer.render(&DeleteResult::new(plan).to_string());
                Ok(())
            }
            None => bail!("Plan with ID {} not found", params.id),
        }
    }
}
