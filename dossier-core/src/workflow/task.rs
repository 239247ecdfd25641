//! Agent task types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DossierError, Result};

/// Maximum length of a task description
pub const MAX_DESCRIPTION_LEN: usize = 1_000;

/// Status of an agent task
///
/// Transitions are caller-managed; no transition table is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Completed => write!(f, "completed"),
            TaskStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One unit of work assigned to an agent
///
/// References the briefing context by id only; the task does not own it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentTask {
    /// Unique identifier for this task
    pub id: Uuid,

    /// What the agent should do (1-1000 characters)
    pub description: String,

    /// Id of the [`ProjectContext`](crate::ProjectContext) briefing this task
    pub context_id: Uuid,

    /// Constraints the agent must respect
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Names of tools the task needs
    #[serde(default)]
    pub tools_required: Vec<String>,

    /// When this task was created
    pub created_at: DateTime<Utc>,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,
}

impl AgentTask {
    /// Create a new pending task
    ///
    /// Fails if the description bounds are violated.
    pub fn new(description: impl Into<String>, context_id: Uuid) -> Result<Self> {
        let task = Self {
            id: Uuid::new_v4(),
            description: description.into(),
            context_id,
            constraints: Vec::new(),
            tools_required: Vec::new(),
            created_at: Utc::now(),
            status: TaskStatus::Pending,
        };
        task.validate()?;
        Ok(task)
    }

    /// Attach constraints
    pub fn with_constraints(mut self, constraints: Vec<String>) -> Self {
        self.constraints = constraints;
        self
    }

    /// Declare required tools
    pub fn with_tools_required(mut self, tools: Vec<String>) -> Self {
        self.tools_required = tools;
        self
    }

    /// Update the status
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Validate field constraints
    pub fn validate(&self) -> Result<()> {
        if self.description.is_empty() {
            return Err(DossierError::InvalidTask {
                reason: "description cannot be empty".to_string(),
            });
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(DossierError::InvalidTask {
                reason: format!("description exceeds {} characters", MAX_DESCRIPTION_LEN),
            });
        }
        Ok(())
    }
}
