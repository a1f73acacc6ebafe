//! MCP tool handler implementations

use std::sync::Arc;

use log::debug;
use pathway_core::{CreateResult, DeleteResult, Planner, params as core};
use rmcp::{
    ErrorData,
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::to_mcp_error;

/// Transparent MCP wrapper around a core parameter type.
///
/// Deserialization and the JSON schema pass straight through to `T`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreatePlan = McpParams<core::CreatePlan>;
pub type DeletePlan = McpParams<core::DeletePlan>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn create_plan(&self, Parameters(params): Parameters<CreatePlan>) -> McpResult {
        debug!("create_plan: {params:?}");

        let plan = self
            .planner
            .lock()
            .await
            .create_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create plan", &e))?;

        text_result(CreateResult::new(plan).to_string())
    }

    pub async fn list_plans(&self) -> McpResult {
        debug!("list_plans");

        let summaries = self
            .planner
            .lock()
            .await
            .list_plans_summary()
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        let title = if summaries.is_empty() {
            "No plans found"
        } else {
            "Plans"
        };
        text_result(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_plan: {params:?}");

        let plan = self
            .planner
            .lock()
            .await
            .require_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get plan", &e))?;

        text_result(plan.to_string())
    }

    pub async fn delete_plan(&self, Parameters(params): Parameters<DeletePlan>) -> McpResult {
        debug!("delete_plan: {params:?}");

        let inner = params.as_ref();
        let plan = self
            .planner
            .lock()
            .await
            .delete_plan(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to delete plan", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(format!("Plan with ID {} not found", inner.id), None)
            })?;

        text_result(DeleteResult::new(plan).to_string())
    }

    pub async fn current_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("current_task: {params:?}");

        let view = self
            .planner
            .lock()
            .await
            .current_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load current task", &e))?;

        text_result(view.to_string())
    }

    pub async fn next_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("next_task: {params:?}");

        let result = self
            .planner
            .lock()
            .await
            .advance_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to move to the next task", &e))?;

        text_result(result.to_string())
    }

    pub async fn previous_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("previous_task: {params:?}");

        let result = self
            .planner
            .lock()
            .await
            .retreat_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to move to the previous task", &e))?;

        text_result(result.to_string())
    }

    pub async fn show_story(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_story: {params:?}");

        let story = self
            .planner
            .lock()
            .await
            .load_story(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load story", &e))?;

        text_result(story.to_string())
    }
}
