//! # Dossier Core - Context Briefing for AI Agents
//!
//! Dossier is the data model for briefing automated task-execution agents
//! about a software project:
//!
//! - **Context**: a token-budgeted collection of documentation artifacts
//!   (ADRs, user stories, API specs) that fits an agent's context window
//! - **Workflow**: the Plan-Propose-Proceed record chain that gates
//!   agent-initiated changes behind an explicit approval step
//! - **Validation**: completeness checks that tell a caller whether a
//!   context is safe to brief an agent with
//!
//! The model is caller-driven: an external orchestrator constructs these
//! structures and calls the free functions; no component acts on its own.
//!
//! ## Example
//!
//! ```rust
//! use dossier_core::{
//!     validate_context_completeness, ContextDocument, ContextType, ProjectContext,
//! };
//!
//! let mut context = ProjectContext::new("billing-service", "/repos/billing-service");
//!
//! let adr = ContextDocument::new(
//!     ContextType::Adr,
//!     "ADR-001: Event-sourced ledger",
//!     "# ADR-001\n\nWe record every balance change as an event...",
//! )
//! .unwrap();
//! assert!(context.add_document(adr));
//!
//! // The context is missing user stories and an API spec.
//! let report = validate_context_completeness(&context);
//! assert!(!report.valid);
//! assert_eq!(report.missing_types.len(), 2);
//! for issue in &report.issues {
//!     println!("{:?}: {}", issue.severity, issue.message);
//! }
//! ```

pub mod context;
pub mod error;
pub mod workflow;

// Re-export main types
pub use context::{
    create_context_from_directory, estimate_tokens, load_context,
    validate_context_completeness, ContextDocument, ContextDocumentBuilder, ContextLoadRequest,
    ContextScanner, ContextType, ContextValidationResult, NullScanner, ProjectContext,
    ProjectContextBuilder, ScannedDocument, Severity, ValidationIssue, DEFAULT_MAX_TOKENS,
    MIN_MAX_TOKENS, REQUIRED_TYPES,
};
pub use error::{DossierError, ErrorCategory, ErrorDetail, ErrorResponse, Result};
pub use workflow::{
    AgentPhase, AgentTask, ChangeProposal, ExecutionPlan, ExecutionResult, ExecutionStatus,
    RiskLevel, TaskStatus,
};
