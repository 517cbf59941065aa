//! Error conversion for MCP tool results

use milesync_core::TrackerError;
use rmcp::ErrorData;

/// Map a tracker error onto an MCP error. Bad input and missing records are
/// the caller's fault; anything else is reported as internal.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        TrackerError::InvalidInput { .. }
        | TrackerError::GoalNotFound { .. }
        | TrackerError::PlanNotFound { .. }
        | TrackerError::TaskNotFound { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
