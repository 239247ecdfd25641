//! Context documents, the project context aggregate, and completeness
//! validation

pub mod document;
pub mod project;
pub mod validate;

pub use document::{estimate_tokens, ContextDocument, ContextDocumentBuilder, ContextType};
pub use project::{ProjectContext, ProjectContextBuilder, DEFAULT_MAX_TOKENS, MIN_MAX_TOKENS};
pub use validate::{
    create_context_from_directory, load_context, validate_context_completeness,
    ContextLoadRequest, ContextScanner, ContextValidationResult, NullScanner, ScannedDocument,
    Severity, ValidationIssue, REQUIRED_TYPES,
};
