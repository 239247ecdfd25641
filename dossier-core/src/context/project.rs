//! Project context aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DossierError, Result};

use super::document::{ContextDocument, ContextType};

/// Default token budget for a project context
pub const DEFAULT_MAX_TOKENS: u64 = 100_000;

/// Smallest permitted token budget
pub const MIN_MAX_TOKENS: u64 = 1_000;

/// The complete briefing context for one project: every document an agent
/// needs, bounded by a token budget.
///
/// The context exclusively owns its documents. `total_tokens` is derived
/// from the members once at construction and maintained by
/// [`add_document`](ProjectContext::add_document); it is never recomputed
/// implicitly. Callers that mutate `documents` directly must call
/// [`recompute_total_tokens`](ProjectContext::recompute_total_tokens).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectContext {
    /// Unique identifier for this context
    pub id: Uuid,

    /// Name of the project being briefed
    pub project_name: String,

    /// Root path of the project
    pub project_path: String,

    /// Documents in insertion order
    #[serde(default)]
    pub documents: Vec<ContextDocument>,

    /// Sum of the member documents' token counts
    pub total_tokens: u64,

    /// Token budget for this context
    pub max_tokens: u64,

    /// When this context was created
    pub created_at: DateTime<Utc>,

    /// When a document was last added
    pub last_updated: DateTime<Utc>,
}

impl ProjectContext {
    /// Create an empty context with the default token budget
    pub fn new(project_name: impl Into<String>, project_path: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_name: project_name.into(),
            project_path: project_path.into(),
            documents: Vec::new(),
            total_tokens: 0,
            max_tokens: DEFAULT_MAX_TOKENS,
            created_at: now,
            last_updated: now,
        }
    }

    /// Create a builder for contexts with a custom budget or initial documents
    pub fn builder(
        project_name: impl Into<String>,
        project_path: impl Into<String>,
    ) -> ProjectContextBuilder {
        ProjectContextBuilder::new(project_name.into(), project_path.into())
    }

    /// Add a document if it fits within the token budget
    ///
    /// Returns `true` and refreshes `last_updated` when the document was
    /// appended. Returns `false` when `total_tokens + document.tokens` would
    /// exceed `max_tokens`; in that case nothing changes. Exceeding the
    /// budget is an expected condition, not an error.
    pub fn add_document(&mut self, document: ContextDocument) -> bool {
        if self.total_tokens + document.tokens > self.max_tokens {
            return false;
        }
        self.total_tokens += document.tokens;
        self.documents.push(document);
        self.last_updated = Utc::now();
        true
    }

    /// All documents of the given type, in insertion order
    pub fn get_documents_by_type(&self, doc_type: ContextType) -> Vec<&ContextDocument> {
        self.documents
            .iter()
            .filter(|doc| doc.doc_type == doc_type)
            .collect()
    }

    /// Recompute `total_tokens` from the member documents
    ///
    /// The explicit re-derivation step for callers that mutated `documents`
    /// directly.
    pub fn recompute_total_tokens(&mut self) {
        self.total_tokens = self.documents.iter().map(|doc| doc.tokens).sum();
    }

    /// Tokens left in the budget (0 when over budget)
    pub fn remaining_tokens(&self) -> u64 {
        self.max_tokens.saturating_sub(self.total_tokens)
    }

    /// Validate field constraints
    pub fn validate(&self) -> Result<()> {
        if self.max_tokens < MIN_MAX_TOKENS {
            return Err(DossierError::InvalidContext {
                reason: format!(
                    "max_tokens must be at least {}, got {}",
                    MIN_MAX_TOKENS, self.max_tokens
                ),
            });
        }
        Ok(())
    }
}

/// Builder for [`ProjectContext`]
#[derive(Debug)]
pub struct ProjectContextBuilder {
    context: ProjectContext,
}

impl ProjectContextBuilder {
    fn new(project_name: String, project_path: String) -> Self {
        Self {
            context: ProjectContext::new(project_name, project_path),
        }
    }

    /// Set the token budget (must be at least [`MIN_MAX_TOKENS`])
    pub fn max_tokens(mut self, max_tokens: u64) -> Self {
        self.context.max_tokens = max_tokens;
        self
    }

    /// Seed the context with documents
    ///
    /// The total token count is derived from these at build time. The
    /// budget is not enforced here -- an over-budget context is
    /// constructible and reported by the completeness validator.
    pub fn documents(mut self, documents: Vec<ContextDocument>) -> Self {
        self.context.documents = documents;
        self
    }

    /// Validate and build the context
    pub fn build(mut self) -> Result<ProjectContext> {
        self.context.validate()?;
        self.context.recompute_total_tokens();
        Ok(self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_tokens(doc_type: ContextType, title: &str, tokens: u64) -> ContextDocument {
        ContextDocument::builder(doc_type, title, "content")
            .tokens(tokens)
            .build()
            .unwrap()
    }

    #[test]
    fn test_add_document_within_budget() {
        let mut context = ProjectContext::builder("demo", "/tmp/demo")
            .max_tokens(1_000)
            .build()
            .unwrap();

        let added = context.add_document(doc_with_tokens(ContextType::Adr, "ADR-001", 400));
        assert!(added);
        assert_eq!(context.documents.len(), 1);
        assert_eq!(context.total_tokens, 400);
    }

    #[test]
    fn test_add_document_rejection_is_atomic() {
        let mut context = ProjectContext::builder("demo", "/tmp/demo")
            .max_tokens(1_000)
            .build()
            .unwrap();
        assert!(context.add_document(doc_with_tokens(ContextType::Adr, "ADR-001", 900)));
        let before_update = context.last_updated;

        let added = context.add_document(doc_with_tokens(ContextType::Readme, "README", 200));
        assert!(!added);
        assert_eq!(context.documents.len(), 1);
        assert_eq!(context.total_tokens, 900);
        assert_eq!(context.last_updated, before_update);
    }

    #[test]
    fn test_add_document_exact_fit() {
        let mut context = ProjectContext::builder("demo", "/tmp/demo")
            .max_tokens(1_000)
            .build()
            .unwrap();
        assert!(context.add_document(doc_with_tokens(ContextType::Adr, "ADR-001", 1_000)));
        assert_eq!(context.remaining_tokens(), 0);
    }

    #[test]
    fn test_get_documents_by_type_preserves_order() {
        let mut context = ProjectContext::new("demo", "/tmp/demo");
        context.add_document(doc_with_tokens(ContextType::Adr, "ADR-001", 10));
        context.add_document(doc_with_tokens(ContextType::Readme, "README", 10));
        context.add_document(doc_with_tokens(ContextType::Adr, "ADR-002", 10));

        let adrs = context.get_documents_by_type(ContextType::Adr);
        assert_eq!(adrs.len(), 2);
        assert_eq!(adrs[0].title, "ADR-001");
        assert_eq!(adrs[1].title, "ADR-002");

        assert!(context
            .get_documents_by_type(ContextType::OpenApi)
            .is_empty());
    }

    #[test]
    fn test_builder_derives_total_from_documents() {
        let docs = vec![
            doc_with_tokens(ContextType::Adr, "ADR-001", 300),
            doc_with_tokens(ContextType::UserStory, "Story", 200),
        ];
        let context = ProjectContext::builder("demo", "/tmp/demo")
            .documents(docs)
            .build()
            .unwrap();
        assert_eq!(context.total_tokens, 500);
    }

    #[test]
    fn test_min_budget_enforced() {
        let result = ProjectContext::builder("demo", "/tmp/demo")
            .max_tokens(999)
            .build();
        assert!(result.is_err());

        assert!(ProjectContext::builder("demo", "/tmp/demo")
            .max_tokens(1_000)
            .build()
            .is_ok());
    }

    #[test]
    fn test_recompute_total_tokens() {
        let mut context = ProjectContext::new("demo", "/tmp/demo");
        context
            .documents
            .push(doc_with_tokens(ContextType::Adr, "ADR-001", 123));
        assert_eq!(context.total_tokens, 0);

        context.recompute_total_tokens();
        assert_eq!(context.total_tokens, 123);
    }

    #[test]
    fn test_context_round_trip() {
        let mut context = ProjectContext::new("demo", "/tmp/demo");
        context.add_document(doc_with_tokens(ContextType::Adr, "ADR-001", 42));

        let json = serde_json::to_string(&context).unwrap();
        let parsed: ProjectContext = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, context.id);
        assert_eq!(parsed.total_tokens, 42);
        assert_eq!(parsed.documents.len(), 1);
    }
}
