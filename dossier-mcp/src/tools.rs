//! Tool descriptors and the tool-execution collaborator seam

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::config::TrustLevel;
use crate::error::{McpError, McpResult};

use dossier_core::DossierError;

/// Maximum length of a tool name
pub const MAX_TOOL_NAME_LEN: usize = 100;

/// Maximum length of a tool description
pub const MAX_TOOL_DESCRIPTION_LEN: usize = 500;

/// Describes one tool an MCP server makes available to an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (1-100 characters)
    pub name: String,

    /// What the tool does (up to 500 characters)
    pub description: String,

    /// Parameter descriptors (free-form key/value records)
    #[serde(default)]
    pub parameters: Vec<Value>,

    /// Name of the server providing this tool
    pub server_name: String,

    /// Whether invocation needs explicit confirmation
    #[serde(default)]
    pub requires_confirmation: bool,

    /// Trust classification inherited from the server
    pub trust_level: TrustLevel,
}

impl ToolDefinition {
    /// Create a tool definition
    ///
    /// Fails if the name or description bounds are violated.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        server_name: impl Into<String>,
        trust_level: TrustLevel,
    ) -> McpResult<Self> {
        let tool = Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            server_name: server_name.into(),
            requires_confirmation: false,
            trust_level,
        };
        tool.validate()?;
        Ok(tool)
    }

    /// Attach parameter descriptors
    pub fn with_parameters(mut self, parameters: Vec<Value>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Require confirmation before invocation
    pub fn requires_confirmation(mut self) -> Self {
        self.requires_confirmation = true;
        self
    }

    /// Validate field constraints
    pub fn validate(&self) -> McpResult<()> {
        if self.name.is_empty() {
            return Err(McpError::InvalidTool {
                reason: "name cannot be empty".to_string(),
            });
        }
        if self.name.chars().count() > MAX_TOOL_NAME_LEN {
            return Err(McpError::InvalidTool {
                reason: format!("name exceeds {} characters", MAX_TOOL_NAME_LEN),
            });
        }
        if self.description.chars().count() > MAX_TOOL_DESCRIPTION_LEN {
            return Err(McpError::InvalidTool {
                reason: format!(
                    "description exceeds {} characters",
                    MAX_TOOL_DESCRIPTION_LEN
                ),
            });
        }
        Ok(())
    }
}

/// Request to invoke a tool on a server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolExecutionRequest {
    /// Name of the tool to invoke
    pub tool_name: String,

    /// Invocation parameters
    #[serde(default)]
    pub parameters: HashMap<String, Value>,

    /// Session on whose behalf the tool runs
    pub session_id: Uuid,

    /// Preview the invocation without side effects
    #[serde(default)]
    pub dry_run: bool,
}

impl ToolExecutionRequest {
    /// Create a request with no parameters
    pub fn new(tool_name: impl Into<String>, session_id: Uuid) -> Self {
        Self {
            tool_name: tool_name.into(),
            parameters: HashMap::new(),
            session_id,
            dry_run: false,
        }
    }

    /// Set the invocation parameters
    pub fn with_parameters(mut self, parameters: HashMap<String, Value>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Mark the request as a dry run
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

/// Outcome of a tool invocation
///
/// A response with `success == false` should carry a non-empty `error`;
/// the [`failure`](ToolExecutionResponse::failure) constructor guarantees
/// it, deserialization does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolExecutionResponse {
    /// Whether the invocation succeeded
    pub success: bool,

    /// Result payload on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<HashMap<String, Value>>,

    /// Error description on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Wall-clock execution time in seconds
    #[serde(default)]
    pub execution_time: f64,

    /// When the invocation finished
    pub timestamp: DateTime<Utc>,
}

impl ToolExecutionResponse {
    /// Create a successful response
    ///
    /// Fails if `execution_time` is negative or not finite.
    pub fn success(result: HashMap<String, Value>, execution_time: f64) -> McpResult<Self> {
        validate_execution_time(execution_time)?;
        Ok(Self {
            success: true,
            result: Some(result),
            error: None,
            execution_time,
            timestamp: Utc::now(),
        })
    }

    /// Create a failed response with an error message
    pub fn failure(error: impl Into<String>, execution_time: f64) -> McpResult<Self> {
        validate_execution_time(execution_time)?;
        Ok(Self {
            success: false,
            result: None,
            error: Some(error.into()),
            execution_time,
            timestamp: Utc::now(),
        })
    }
}

fn validate_execution_time(seconds: f64) -> McpResult<()> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(DossierError::InvalidDuration { seconds }.into());
    }
    Ok(())
}

/// Tool-execution collaborator
///
/// The model defines no execution engine; callers inject an implementation
/// that carries requests to a real server and reports the outcome. All
/// operations are synchronous.
pub trait ToolExecutor {
    /// Tools this executor can invoke
    fn tools(&self) -> Vec<ToolDefinition>;

    /// Invoke a tool
    fn execute(&self, request: &ToolExecutionRequest) -> ToolExecutionResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_definition_bounds() {
        assert!(ToolDefinition::new("", "reads files", "filesystem", TrustLevel::High).is_err());
        assert!(ToolDefinition::new(
            "t".repeat(101),
            "reads files",
            "filesystem",
            TrustLevel::High
        )
        .is_err());
        assert!(ToolDefinition::new(
            "read_file",
            "d".repeat(501),
            "filesystem",
            TrustLevel::High
        )
        .is_err());
        assert!(
            ToolDefinition::new("read_file", "reads files", "filesystem", TrustLevel::High)
                .is_ok()
        );
    }

    #[test]
    fn test_tool_definition_chainers() {
        let tool = ToolDefinition::new("delete_file", "deletes a file", "filesystem", TrustLevel::Low)
            .unwrap()
            .with_parameters(vec![json!({"name": "path", "type": "string"})])
            .requires_confirmation();

        assert!(tool.requires_confirmation);
        assert_eq!(tool.parameters.len(), 1);
    }

    #[test]
    fn test_request_defaults() {
        let request = ToolExecutionRequest::new("read_file", Uuid::new_v4());
        assert!(!request.dry_run);
        assert!(request.parameters.is_empty());

        let dry = ToolExecutionRequest::new("delete_file", Uuid::new_v4()).dry_run();
        assert!(dry.dry_run);
    }

    #[test]
    fn test_response_constructors() {
        let mut payload = HashMap::new();
        payload.insert("content".to_string(), json!("fn main() {}"));
        let ok = ToolExecutionResponse::success(payload, 0.02).unwrap();
        assert!(ok.success);
        assert!(ok.error.is_none());

        let failed = ToolExecutionResponse::failure("file not found", 0.01).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("file not found"));
        assert!(failed.result.is_none());
    }

    #[test]
    fn test_negative_execution_time_rejected() {
        assert!(ToolExecutionResponse::failure("timeout", -1.0).is_err());
        assert!(ToolExecutionResponse::success(HashMap::new(), f64::INFINITY).is_err());
    }

    #[test]
    fn test_executor_seam() {
        struct EchoExecutor;

        impl ToolExecutor for EchoExecutor {
            fn tools(&self) -> Vec<ToolDefinition> {
                vec![ToolDefinition::new("echo", "echoes parameters", "echo", TrustLevel::Maximum)
                    .unwrap()]
            }

            fn execute(&self, request: &ToolExecutionRequest) -> ToolExecutionResponse {
                let mut result = HashMap::new();
                result.insert("echoed".to_string(), json!(request.tool_name));
                ToolExecutionResponse::success(result, 0.0).unwrap()
            }
        }

        let executor = EchoExecutor;
        assert_eq!(executor.tools().len(), 1);

        let response = executor.execute(&ToolExecutionRequest::new("echo", Uuid::new_v4()));
        assert!(response.success);
        assert_eq!(
            response.result.unwrap().get("echoed").unwrap(),
            &json!("echo")
        );
    }

    #[test]
    fn test_request_round_trip() {
        let mut params = HashMap::new();
        params.insert("path".to_string(), json!("src/lib.rs"));
        let request =
            ToolExecutionRequest::new("read_file", Uuid::new_v4()).with_parameters(params);

        let json = serde_json::to_string(&request).unwrap();
        let parsed: ToolExecutionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.tool_name, "read_file");
        assert_eq!(parsed.session_id, request.session_id);
        assert_eq!(parsed.parameters.len(), 1);
    }
}
