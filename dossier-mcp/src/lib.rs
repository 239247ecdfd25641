//! # Dossier MCP - Tool Providers and Agent Sessions
//!
//! This crate describes the MCP side of a Dossier briefing: connection
//! descriptors for tool-providing servers (with trust classification), the
//! tools those servers expose, and the [`AgentSession`] aggregate tying a
//! briefing context to the servers an agent may reach.
//!
//! Nothing here launches a process or speaks a wire protocol. Tool
//! execution is an injected capability behind the [`ToolExecutor`] trait;
//! this crate only defines the request/response contract.
//!
//! ## Example
//!
//! ```rust
//! use dossier_core::{AgentPhase, ProjectContext};
//! use dossier_mcp::{AgentSession, McpServerConfig, McpServerType, TrustLevel};
//!
//! let context = ProjectContext::new("billing-service", "/repos/billing-service");
//! let mut session = AgentSession::new(context);
//!
//! let filesystem = McpServerConfig::builder(
//!     "filesystem",
//!     McpServerType::Local,
//!     TrustLevel::High,
//!     "npx",
//! )
//! .args(vec!["-y".to_string(), "@mcp/server-filesystem".to_string()])
//! .build()
//! .unwrap();
//!
//! session.add_mcp_server(filesystem);
//! session.update_phase(AgentPhase::Plan);
//!
//! assert_eq!(session.enabled_servers().count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod tools;

pub use config::{McpServerConfig, McpServerConfigBuilder, McpServerType, Transport, TrustLevel};
pub use error::{McpError, McpResult};
pub use session::AgentSession;
pub use tools::{ToolDefinition, ToolExecutionRequest, ToolExecutionResponse, ToolExecutor};
