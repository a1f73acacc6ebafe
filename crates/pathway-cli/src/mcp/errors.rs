//! Error handling utilities for MCP server

use pathway_core::PathwayError;
use rmcp::ErrorData;

/// Converts a planner error into an MCP error.
///
/// Errors caused by the caller's arguments become `invalid_params`; anything
/// else is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &PathwayError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PathwayError::PlanNotFound { .. } | PathwayError::InvalidInput { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_missing_plan_is_invalid_params() {
        let error = to_mcp_error("Failed", &PathwayError::PlanNotFound { id: 4 });
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("Failed"));
    }

    #[test]
    fn test_configuration_is_internal() {
        let error = to_mcp_error(
            "Failed",
            &PathwayError::Configuration {
                message: "no generator".to_string(),
            },
        );
        assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
    }
}
