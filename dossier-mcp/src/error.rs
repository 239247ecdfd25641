//! Error types for MCP server configuration and tools

use thiserror::Error;

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;

/// Errors that can occur when describing MCP servers and tools
#[derive(Error, Debug)]
pub enum McpError {
    /// Server configuration field constraints violated
    #[error("Invalid server config: {reason}")]
    InvalidServer { reason: String },

    /// Remote server declared without an endpoint
    #[error("Remote MCP server '{name}' must have an endpoint")]
    MissingEndpoint { name: String },

    /// Endpoint is not a well-formed URL
    #[error("Invalid endpoint for server '{name}': {reason}")]
    InvalidEndpoint { name: String, reason: String },

    /// Tool definition field constraints violated
    #[error("Invalid tool definition: {reason}")]
    InvalidTool { reason: String },

    /// Dossier core error
    #[error("Core error: {0}")]
    Core(#[from] dossier_core::DossierError),
}

impl McpError {
    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            McpError::InvalidServer { .. } => "INVALID_SERVER",
            McpError::MissingEndpoint { .. } => "MISSING_ENDPOINT",
            McpError::InvalidEndpoint { .. } => "INVALID_ENDPOINT",
            McpError::InvalidTool { .. } => "INVALID_TOOL",
            McpError::Core(_) => "CORE_ERROR",
        }
    }
}
