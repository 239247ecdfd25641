//! Plan-Propose-Proceed workflow artifacts
//!
//! The workflow is a linear chain of records linked by identifier:
//! [`AgentTask`] -> [`ExecutionPlan`] -> [`ChangeProposal`] ->
//! [`ExecutionResult`]. The chain carries the state needed for approval
//! gating (`approved`, `approval_token`, `requires_approval`) but does not
//! enforce sequencing or approval-before-execution; that hard guarantee
//! belongs to the orchestrator driving the workflow, not to the data model.

pub mod plan;
pub mod proposal;
pub mod result;
pub mod task;

use serde::{Deserialize, Serialize};

pub use plan::{ExecutionPlan, RiskLevel};
pub use proposal::ChangeProposal;
pub use result::{ExecutionResult, ExecutionStatus};
pub use task::{AgentTask, TaskStatus};

/// Phases in the Plan-Propose-Proceed workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentPhase {
    /// Drafting an execution plan
    Plan,
    /// Proposing concrete changes for approval
    Propose,
    /// Executing the approved changes
    Proceed,
    /// Workflow finished successfully
    Completed,
    /// Workflow aborted
    Failed,
}

impl AgentPhase {
    /// Whether this phase ends the workflow
    pub fn is_terminal(&self) -> bool {
        matches!(self, AgentPhase::Completed | AgentPhase::Failed)
    }
}

impl std::fmt::Display for AgentPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentPhase::Plan => write!(f, "PLAN"),
            AgentPhase::Propose => write!(f, "PROPOSE"),
            AgentPhase::Proceed => write!(f, "PROCEED"),
            AgentPhase::Completed => write!(f, "COMPLETED"),
            AgentPhase::Failed => write!(f, "FAILED"),
        }
    }
}

impl std::str::FromStr for AgentPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLAN" => Ok(AgentPhase::Plan),
            "PROPOSE" => Ok(AgentPhase::Propose),
            "PROCEED" => Ok(AgentPhase::Proceed),
            "COMPLETED" => Ok(AgentPhase::Completed),
            "FAILED" => Ok(AgentPhase::Failed),
            _ => Err(format!("Unknown agent phase: {}", s)),
        }
    }
}
