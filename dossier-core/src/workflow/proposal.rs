//! Change proposal types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Output of the Propose phase
///
/// Describes the concrete changes a plan would make, for review before
/// anything executes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeProposal {
    /// Unique identifier for this proposal
    pub id: Uuid,

    /// The plan these changes implement
    pub plan_id: Uuid,

    /// Ordered change records (free-form key/value records)
    pub changes: Vec<Value>,

    /// Whether the changes need approval before execution
    #[serde(default = "default_true")]
    pub requires_approval: bool,

    /// Whether a preview of the changes can be rendered
    #[serde(default = "default_true")]
    pub preview_available: bool,

    /// When this proposal was created
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl ChangeProposal {
    /// Create a proposal that requires approval and offers a preview
    pub fn new(plan_id: Uuid, changes: Vec<Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            plan_id,
            changes,
            requires_approval: true,
            preview_available: true,
            created_at: Utc::now(),
        }
    }

    /// Mark the proposal as exempt from approval
    pub fn without_approval(mut self) -> Self {
        self.requires_approval = false;
        self
    }

    /// Mark the proposal as having no renderable preview
    pub fn without_preview(mut self) -> Self {
        self.preview_available = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_proposal_defaults() {
        let proposal = ChangeProposal::new(
            Uuid::new_v4(),
            vec![json!({"file": "src/lib.rs", "operation": "modify"})],
        );
        assert!(proposal.requires_approval);
        assert!(proposal.preview_available);
        assert_eq!(proposal.changes.len(), 1);
    }

    #[test]
    fn test_opt_outs() {
        let proposal = ChangeProposal::new(Uuid::new_v4(), vec![])
            .without_approval()
            .without_preview();
        assert!(!proposal.requires_approval);
        assert!(!proposal.preview_available);
    }

    #[test]
    fn test_defaults_applied_on_deserialize() {
        let plan_id = Uuid::new_v4();
        let json = format!(
            r#"{{"id":"{}","plan_id":"{}","changes":[],"created_at":"2026-01-01T00:00:00Z"}}"#,
            Uuid::new_v4(),
            plan_id
        );
        let parsed: ChangeProposal = serde_json::from_str(&json).unwrap();
        assert!(parsed.requires_approval);
        assert!(parsed.preview_available);
        assert_eq!(parsed.plan_id, plan_id);
    }
}
