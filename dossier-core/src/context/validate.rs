//! Context completeness validation and scanner-driven loading

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DossierError, Result};

use super::document::{ContextDocument, ContextType};
use super::project::{ProjectContext, DEFAULT_MAX_TOKENS, MIN_MAX_TOKENS};

/// Document types every briefing context must contain
pub const REQUIRED_TYPES: [ContextType; 3] = [
    ContextType::Adr,
    ContextType::UserStory,
    ContextType::OpenApi,
];

/// Largest permitted token budget for a load request
pub const MAX_LOAD_TOKENS: u64 = 1_000_000;

/// Severity of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARNING")]
    Warning,
}

/// A single validation finding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// How serious the finding is
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

/// Result of validating a context for completeness
///
/// Advisory data for the caller to act on or ignore; completeness findings
/// are never errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextValidationResult {
    /// True iff no required document type is missing
    pub valid: bool,

    /// Required types absent from the context, in required-list order
    #[serde(default)]
    pub missing_types: Vec<ContextType>,

    /// Severity-tagged findings
    #[serde(default)]
    pub issues: Vec<ValidationIssue>,

    /// Advisory follow-ups, present iff a required type is missing
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Validate that a context contains every required document type
///
/// Pure and total: the context is not mutated and there is no failure path.
/// A context over its token budget stays `valid` but picks up a WARNING
/// issue.
pub fn validate_context_completeness(context: &ProjectContext) -> ContextValidationResult {
    let missing_types: Vec<ContextType> = REQUIRED_TYPES
        .iter()
        .copied()
        .filter(|required| !context.documents.iter().any(|doc| doc.doc_type == *required))
        .collect();

    let mut issues = Vec::new();
    if !missing_types.is_empty() {
        let names: Vec<String> = missing_types.iter().map(|t| t.to_string()).collect();
        issues.push(ValidationIssue {
            severity: Severity::Error,
            message: format!("Missing required document types: {}", names.join(", ")),
        });
    }

    if context.total_tokens > context.max_tokens {
        issues.push(ValidationIssue {
            severity: Severity::Warning,
            message: format!(
                "Context exceeds token limit: {}/{}",
                context.total_tokens, context.max_tokens
            ),
        });
    }

    let recommendations = if missing_types.is_empty() {
        Vec::new()
    } else {
        vec![
            "Consider adding more ADRs to document architectural decisions".to_string(),
            "Ensure all API endpoints have OpenAPI specifications".to_string(),
        ]
    };

    ContextValidationResult {
        valid: missing_types.is_empty(),
        missing_types,
        issues,
        recommendations,
    }
}

/// One document discovered by a [`ContextScanner`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannedDocument {
    /// What kind of documentation was found
    pub doc_type: ContextType,
    /// Title for the document
    pub title: String,
    /// The document content
    pub content: String,
    /// Where the content was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// Directory-scanning collaborator
///
/// The model defines no filesystem traversal of its own; callers inject an
/// implementation of this trait to discover documents under a project path.
pub trait ContextScanner {
    /// Discover context documents under `path`
    fn scan(&self, path: &str) -> Result<Vec<ScannedDocument>>;
}

/// Scanner that finds nothing
///
/// Stand-in for environments without a scanning capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScanner;

impl ContextScanner for NullScanner {
    fn scan(&self, _path: &str) -> Result<Vec<ScannedDocument>> {
        Ok(Vec::new())
    }
}

/// Request to load a project context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextLoadRequest {
    /// Root path to scan for documentation
    pub project_path: String,

    /// Document types to include
    #[serde(default = "all_context_types")]
    pub context_types: Vec<ContextType>,

    /// Token budget for the loaded context
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u64,
}

fn all_context_types() -> Vec<ContextType> {
    ContextType::ALL.to_vec()
}

fn default_max_tokens() -> u64 {
    DEFAULT_MAX_TOKENS
}

impl ContextLoadRequest {
    /// Create a request for all document types with the default budget
    pub fn new(project_path: impl Into<String>) -> Self {
        Self {
            project_path: project_path.into(),
            context_types: all_context_types(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Restrict the request to specific document types
    pub fn with_context_types(mut self, context_types: Vec<ContextType>) -> Self {
        self.context_types = context_types;
        self
    }

    /// Set the token budget (1 000 - 1 000 000)
    pub fn with_max_tokens(mut self, max_tokens: u64) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Validate field constraints
    pub fn validate(&self) -> Result<()> {
        if self.max_tokens < MIN_MAX_TOKENS || self.max_tokens > MAX_LOAD_TOKENS {
            return Err(DossierError::InvalidContext {
                reason: format!(
                    "max_tokens must be between {} and {}, got {}",
                    MIN_MAX_TOKENS, MAX_LOAD_TOKENS, self.max_tokens
                ),
            });
        }
        Ok(())
    }
}

/// Load a project context through a scanner
///
/// Scans the request's path, keeps documents whose type the request asks
/// for, and adds each one that fits the budget. Documents that would exceed
/// the budget are skipped -- capacity is a recoverable condition, not an
/// error. Document construction failures (empty content, bad titles)
/// propagate.
pub fn load_context(
    request: &ContextLoadRequest,
    scanner: &dyn ContextScanner,
) -> Result<ProjectContext> {
    request.validate()?;

    let project_name = project_name_from_path(&request.project_path);
    let mut context = ProjectContext::builder(project_name, request.project_path.clone())
        .max_tokens(request.max_tokens)
        .build()?;

    for scanned in scanner.scan(&request.project_path)? {
        if !request.context_types.contains(&scanned.doc_type) {
            continue;
        }
        let mut builder =
            ContextDocument::builder(scanned.doc_type, scanned.title, scanned.content);
        if let Some(path) = scanned.file_path {
            builder = builder.file_path(path);
        }
        context.add_document(builder.build()?);
    }

    Ok(context)
}

/// Create a project context from a documentation directory
///
/// Convenience wrapper around [`load_context`] with a default request: all
/// document types, default budget, project name taken from the last path
/// component.
pub fn create_context_from_directory(
    directory_path: &str,
    scanner: &dyn ContextScanner,
) -> Result<ProjectContext> {
    load_context(&ContextLoadRequest::new(directory_path), scanner)
}

fn project_name_from_path(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
