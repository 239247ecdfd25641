//! Execution plan types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Risk assessment for an execution plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Read-only or trivially reversible work
    Low,
    /// Creates or updates project artifacts
    Medium,
    /// Destructive or security-sensitive work
    High,
}

impl RiskLevel {
    /// Numeric rank (higher = riskier)
    pub fn rank(&self) -> u8 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }

    /// Whether plans at this level should be gated on human approval
    pub fn requires_approval(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(RiskLevel::Low),
            "MEDIUM" => Ok(RiskLevel::Medium),
            "HIGH" => Ok(RiskLevel::High),
            _ => Err(format!("Unknown risk level: {}", s)),
        }
    }
}

/// Output of the Plan phase
///
/// Carries the approval state (`approved`, `approval_token`) but does not
/// enforce that approval precedes use; the orchestrator owns that guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionPlan {
    /// Unique identifier for this plan
    pub id: Uuid,

    /// The task this plan was drafted for
    pub task_id: Uuid,

    /// Ordered step descriptors (free-form key/value records)
    pub steps: Vec<Value>,

    /// Estimated wall-clock duration in seconds
    #[serde(default)]
    pub estimated_time_seconds: u64,

    /// Assessed risk of executing this plan
    pub risk_assessment: RiskLevel,

    /// When this plan was created
    pub created_at: DateTime<Utc>,

    /// Whether the plan has been approved
    #[serde(default)]
    pub approved: bool,

    /// Token recorded at approval time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_token: Option<String>,
}

impl ExecutionPlan {
    /// Create an unapproved plan
    pub fn new(task_id: Uuid, steps: Vec<Value>, risk_assessment: RiskLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            steps,
            estimated_time_seconds: 0,
            risk_assessment,
            created_at: Utc::now(),
            approved: false,
            approval_token: None,
        }
    }

    /// Set the estimated duration
    pub fn with_estimated_time(mut self, seconds: u64) -> Self {
        self.estimated_time_seconds = seconds;
        self
    }

    /// Record approval of this plan
    ///
    /// State only: nothing downstream checks it.
    pub fn approve(&mut self, token: impl Into<String>) {
        self.approved = true;
        self.approval_token = Some(token.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plan_defaults_unapproved() {
        let plan = ExecutionPlan::new(
            Uuid::new_v4(),
            vec![json!({"action": "read", "target": "src/lib.rs"})],
            RiskLevel::Low,
        );
        assert!(!plan.approved);
        assert!(plan.approval_token.is_none());
        assert_eq!(plan.estimated_time_seconds, 0);
    }

    #[test]
    fn test_approve_records_token() {
        let mut plan = ExecutionPlan::new(Uuid::new_v4(), vec![], RiskLevel::High);
        plan.approve("reviewer-7f3a");
        assert!(plan.approved);
        assert_eq!(plan.approval_token.as_deref(), Some("reviewer-7f3a"));
    }

    #[test]
    fn test_risk_levels() {
        assert_eq!(RiskLevel::Low.rank(), 1);
        assert_eq!(RiskLevel::High.rank(), 3);
        assert!(RiskLevel::High.requires_approval());
        assert!(!RiskLevel::Medium.requires_approval());

        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"MEDIUM\"");
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
    }

    #[test]
    fn test_plan_round_trip() {
        let plan = ExecutionPlan::new(
            Uuid::new_v4(),
            vec![json!({"action": "edit", "file": "main.rs"})],
            RiskLevel::Medium,
        )
        .with_estimated_time(120);

        let json = serde_json::to_string(&plan).unwrap();
        let parsed: ExecutionPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, plan.id);
        assert_eq!(parsed.task_id, plan.task_id);
        assert_eq!(parsed.estimated_time_seconds, 120);
        assert_eq!(parsed.steps.len(), 1);
    }
}
