//! MCP server for Pathway
//!
//! Exposes plan management, task navigation, and story generation as Model
//! Context Protocol tools over stdio.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use pathway_core::Planner;
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::{
    signal::unix::{SignalKind, signal},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{CreatePlan, DeletePlan, Id, McpHandlers, McpResult};

const INSTRUCTIONS: &str = r#"Pathway guides a person through a personalized recovery plan one task at a time.

## Core Concepts
- **Plans**: An ordered list of steps, plus the person's form answers (addictions, struggles)
- **Steps**: A titled group of tasks; steps without tasks are skipped while navigating
- **Position**: Each plan remembers its current task between sessions

## Workflow
1. Create a plan with `create_plan`, or pick one from `list_plans`
2. Use `current_task` to see where the person left off and how far along they are
3. Move with `next_task` and `previous_task`; the last task is labeled "Completed!"
4. Use `show_story` for a daily affirmation, an inspiring story, and background information

## Tool Categories
- **Plan Management**: create_plan, list_plans, show_plan, delete_plan
- **Navigation**: current_task, next_task, previous_task
- **Content**: show_story"#;

/// MCP server for Pathway
#[derive(Clone)]
pub struct PathwayMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PathwayMcpServer {
    /// Create a new Pathway MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "create_plan",
        description = "Create a new plan from ordered steps, each with a title and a list of tasks. Optionally provide a title (defaults to 'Your Personalized Plan') and form answers (addictions, struggles) used to personalize the story. At least one step is required. Returns the new plan ID."
    )]
    async fn create_plan(&self, params: Parameters<CreatePlan>) -> McpResult {
        self.handlers().create_plan(params).await
    }

    #[tool(
        name = "list_plans",
        description = "List all plans, newest first, with their IDs, titles, and how many tasks have been completed."
    )]
    async fn list_plans(&self) -> McpResult {
        self.handlers().list_plans().await
    }

    #[tool(
        name = "show_plan",
        description = "Display every step and task of a plan, marking finished tasks, the current task, and pending tasks, along with overall progress."
    )]
    async fn show_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "delete_plan",
        description = "Permanently delete a plan. Requires confirmed=true. This operation cannot be undone."
    )]
    async fn delete_plan(&self, params: Parameters<DeletePlan>) -> McpResult {
        self.handlers().delete_plan(params).await
    }

    #[tool(
        name = "current_task",
        description = "Show the task the person is currently on: its step, its number within the step, overall progress, and whether it is the first or last task."
    )]
    async fn current_task(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().current_task(params).await
    }

    #[tool(
        name = "next_task",
        description = "Advance to the next task, moving into the next step with tasks when the current step is finished. Does nothing at the last task and says so."
    )]
    async fn next_task(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().next_task(params).await
    }

    #[tool(
        name = "previous_task",
        description = "Go back to the previous task, moving to the last task of the previous step with tasks when needed. Does nothing at the first task and says so."
    )]
    async fn previous_task(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().previous_task(params).await
    }

    #[tool(
        name = "show_story",
        description = "Show a daily affirmation, an inspiring story, and background information about the person's challenge. The story and information are generated once and then reused; the affirmation is fresh each time."
    )]
    async fn show_story(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_story(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PathwayMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "pathway".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: PathwayMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Pathway MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pathway_core::PlannerBuilder;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_server_registers_every_tool() {
        let temp_dir = TempDir::new().unwrap();
        let planner = PlannerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .unwrap();
        let server = PathwayMcpServer::new(planner);

        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "create_plan",
                "current_task",
                "delete_plan",
                "list_plans",
                "next_task",
                "previous_task",
                "show_plan",
                "show_story",
            ]
        );
        assert!(server.get_info().instructions.is_some());
    }
}
