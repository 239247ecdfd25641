//! Execution result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{DossierError, Result};

/// Outcome of executing a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    /// Every change applied
    Success,
    /// Some changes applied, some did not
    Partial,
    /// Nothing applied
    Failed,
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionStatus::Success => write!(f, "SUCCESS"),
            ExecutionStatus::Partial => write!(f, "PARTIAL"),
            ExecutionStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Output of the Proceed phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Unique identifier for this result
    pub id: Uuid,

    /// The proposal that was executed
    pub proposal_id: Uuid,

    /// How the execution went
    pub status: ExecutionStatus,

    /// Ordered per-change result records (free-form key/value records)
    pub results: Vec<Value>,

    /// Wall-clock execution time in seconds
    #[serde(default)]
    pub execution_time_seconds: f64,

    /// When execution finished
    pub completed_at: DateTime<Utc>,

    /// Error description when the execution did not fully succeed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ExecutionResult {
    /// Create a result
    ///
    /// Fails if `execution_time_seconds` is negative or not finite.
    pub fn new(
        proposal_id: Uuid,
        status: ExecutionStatus,
        results: Vec<Value>,
        execution_time_seconds: f64,
    ) -> Result<Self> {
        if !execution_time_seconds.is_finite() || execution_time_seconds < 0.0 {
            return Err(DossierError::InvalidDuration {
                seconds: execution_time_seconds,
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            proposal_id,
            status,
            results,
            execution_time_seconds,
            completed_at: Utc::now(),
            error_message: None,
        })
    }

    /// Create a failed result with an error message
    pub fn failure(
        proposal_id: Uuid,
        error_message: impl Into<String>,
        execution_time_seconds: f64,
    ) -> Result<Self> {
        let mut result = Self::new(
            proposal_id,
            ExecutionStatus::Failed,
            Vec::new(),
            execution_time_seconds,
        )?;
        result.error_message = Some(error_message.into());
        Ok(result)
    }

    /// Attach an error message
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_creation() {
        let result = ExecutionResult::new(
            Uuid::new_v4(),
            ExecutionStatus::Success,
            vec![json!({"file": "src/lib.rs", "applied": true})],
            1.5,
        )
        .unwrap();
        assert_eq!(result.status, ExecutionStatus::Success);
        assert!(result.error_message.is_none());
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert!(ExecutionResult::new(Uuid::new_v4(), ExecutionStatus::Success, vec![], -0.1)
            .is_err());
        assert!(
            ExecutionResult::new(Uuid::new_v4(), ExecutionStatus::Success, vec![], f64::NAN)
                .is_err()
        );
        assert!(
            ExecutionResult::new(Uuid::new_v4(), ExecutionStatus::Success, vec![], 0.0).is_ok()
        );
    }

    #[test]
    fn test_failure_carries_error() {
        let result = ExecutionResult::failure(Uuid::new_v4(), "compile error", 0.4).unwrap();
        assert_eq!(result.status, ExecutionStatus::Failed);
        assert_eq!(result.error_message.as_deref(), Some("compile error"));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(
            serde_json::to_string(&ExecutionStatus::Partial).unwrap(),
            "\"PARTIAL\""
        );
        let parsed: ExecutionStatus = serde_json::from_str("\"FAILED\"").unwrap();
        assert_eq!(parsed, ExecutionStatus::Failed);
    }

    #[test]
    fn test_result_round_trip() {
        let result = ExecutionResult::new(
            Uuid::new_v4(),
            ExecutionStatus::Partial,
            vec![json!({"step": 1})],
            3.25,
        )
        .unwrap()
        .with_error("step 2 skipped");

        let json = serde_json::to_string(&result).unwrap();
        let parsed: ExecutionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, result.id);
        assert_eq!(parsed.execution_time_seconds, 3.25);
        assert_eq!(parsed.error_message.as_deref(), Some("step 2 skipped"));
    }
}
