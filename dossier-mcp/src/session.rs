//! Agent session aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dossier_core::{AgentPhase, AgentTask, ExecutionResult, ProjectContext};

use crate::config::McpServerConfig;

/// One agent run: the briefing context, the MCP servers the agent may
/// reach, and the workflow state accumulated over time.
///
/// The session exclusively owns its context and server list. Every mutating
/// operation refreshes `last_activity`. The model provides no locking;
/// callers that share a session across threads must serialize access
/// themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSession {
    /// Session ID
    pub id: Uuid,

    /// The project context briefing this session
    pub context: ProjectContext,

    /// MCP servers available to the agent
    #[serde(default)]
    pub mcp_servers: Vec<McpServerConfig>,

    /// Task currently being worked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_task: Option<AgentTask>,

    /// Current workflow phase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_phase: Option<AgentPhase>,

    /// Results of completed Proceed phases, in completion order
    #[serde(default)]
    pub execution_history: Vec<ExecutionResult>,

    /// When the session started
    pub started_at: DateTime<Utc>,

    /// When the session last changed
    pub last_activity: DateTime<Utc>,

    /// Number of tool invocations made in this session
    #[serde(default)]
    pub tools_executed_count: u64,
}

impl AgentSession {
    /// Start a session over a briefing context
    pub fn new(context: ProjectContext) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            context,
            mcp_servers: Vec::new(),
            current_task: None,
            current_phase: None,
            execution_history: Vec::new(),
            started_at: now,
            last_activity: now,
            tools_executed_count: 0,
        }
    }

    /// Register an MCP server with the session
    ///
    /// Names are not checked for duplicates; the first registration wins
    /// lookups via [`get_server`](AgentSession::get_server).
    pub fn add_mcp_server(&mut self, config: McpServerConfig) {
        tracing::debug!(server = %config.name, session = %self.id, "registering MCP server");
        self.mcp_servers.push(config);
        self.touch();
    }

    /// Move the workflow to a new phase
    ///
    /// Any phase may follow any phase; sequencing is the orchestrator's
    /// responsibility.
    pub fn update_phase(&mut self, phase: AgentPhase) {
        tracing::debug!(phase = %phase, session = %self.id, "updating workflow phase");
        self.current_phase = Some(phase);
        self.touch();
    }

    /// Assign the task the agent is working on
    pub fn assign_task(&mut self, task: AgentTask) {
        self.current_task = Some(task);
        self.touch();
    }

    /// Append an execution result to the session history
    pub fn record_result(&mut self, result: ExecutionResult) {
        self.execution_history.push(result);
        self.touch();
    }

    /// Count one tool invocation
    pub fn record_tool_execution(&mut self) {
        self.tools_executed_count += 1;
        self.touch();
    }

    /// Look up a server by name (first match)
    pub fn get_server(&self, name: &str) -> Option<&McpServerConfig> {
        self.mcp_servers.iter().find(|server| server.name == name)
    }

    /// Servers the agent may actually use
    pub fn enabled_servers(&self) -> impl Iterator<Item = &McpServerConfig> {
        self.mcp_servers.iter().filter(|server| server.enabled)
    }

    /// Session duration in milliseconds
    pub fn duration_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }

    fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{McpServerType, TrustLevel};
    use dossier_core::{ExecutionStatus, ProjectContext};

    fn server(name: &str) -> McpServerConfig {
        McpServerConfig::builder(name, McpServerType::Local, TrustLevel::High, "cmd")
            .build()
            .unwrap()
    }

    fn session() -> AgentSession {
        AgentSession::new(ProjectContext::new("demo", "/tmp/demo"))
    }

    #[test]
    fn test_add_mcp_server_refreshes_activity() {
        let mut session = session();
        let before = session.last_activity;

        session.add_mcp_server(server("filesystem"));
        assert_eq!(session.mcp_servers.len(), 1);
        assert!(session.last_activity >= before);
    }

    #[test]
    fn test_update_phase_refreshes_activity() {
        let mut session = session();
        let before = session.last_activity;

        session.update_phase(AgentPhase::Plan);
        assert_eq!(session.current_phase, Some(AgentPhase::Plan));
        assert!(session.last_activity >= before);

        // Any transition is permitted
        session.update_phase(AgentPhase::Failed);
        session.update_phase(AgentPhase::Plan);
        assert_eq!(session.current_phase, Some(AgentPhase::Plan));
    }

    #[test]
    fn test_duplicate_server_names_allowed() {
        let mut session = session();
        session.add_mcp_server(server("filesystem"));
        session.add_mcp_server(server("filesystem"));
        assert_eq!(session.mcp_servers.len(), 2);
    }

    #[test]
    fn test_get_server_and_enabled_filter() {
        let mut session = session();
        session.add_mcp_server(server("filesystem"));
        session.add_mcp_server(
            McpServerConfig::builder("legacy", McpServerType::Local, TrustLevel::Low, "cmd")
                .disabled()
                .build()
                .unwrap(),
        );

        assert!(session.get_server("filesystem").is_some());
        assert!(session.get_server("missing").is_none());
        assert_eq!(session.enabled_servers().count(), 1);
    }

    #[test]
    fn test_history_and_tool_counter() {
        let mut session = session();
        let result =
            ExecutionResult::new(Uuid::new_v4(), ExecutionStatus::Success, vec![], 1.0).unwrap();
        session.record_result(result);
        session.record_tool_execution();
        session.record_tool_execution();

        assert_eq!(session.execution_history.len(), 1);
        assert_eq!(session.tools_executed_count, 2);
    }

    #[test]
    fn test_session_round_trip() {
        let mut session = session();
        session.add_mcp_server(server("filesystem"));
        session.update_phase(AgentPhase::Propose);

        let json = serde_json::to_string(&session).unwrap();
        let parsed: AgentSession = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, session.id);
        assert_eq!(parsed.mcp_servers.len(), 1);
        assert_eq!(parsed.current_phase, Some(AgentPhase::Propose));
    }

    #[test]
    fn test_duration_is_non_negative() {
        assert!(session().duration_ms() >= 0);
    }
}
