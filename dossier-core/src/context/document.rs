//! Context document types

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{DossierError, Result};

/// Maximum length of a document title
pub const MAX_TITLE_LEN: usize = 200;

/// Types of context documents supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextType {
    /// Architecture decision record
    #[serde(rename = "ADR")]
    Adr,
    /// User story or requirement
    #[serde(rename = "USER_STORY")]
    UserStory,
    /// OpenAPI specification
    #[serde(rename = "OPENAPI")]
    OpenApi,
    /// Data schema (SQL, JSON Schema, protobuf, ...)
    #[serde(rename = "SCHEMA")]
    Schema,
    /// Typed data-model definitions
    #[serde(rename = "DATA_MODEL")]
    DataModel,
    /// Project README
    #[serde(rename = "README")]
    Readme,
    /// Agent-facing instruction file
    #[serde(rename = "AGENT_INSTRUCTIONS")]
    AgentInstructions,
}

impl ContextType {
    /// All supported document types
    pub const ALL: [ContextType; 7] = [
        ContextType::Adr,
        ContextType::UserStory,
        ContextType::OpenApi,
        ContextType::Schema,
        ContextType::DataModel,
        ContextType::Readme,
        ContextType::AgentInstructions,
    ];
}

impl std::fmt::Display for ContextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextType::Adr => write!(f, "ADR"),
            ContextType::UserStory => write!(f, "USER_STORY"),
            ContextType::OpenApi => write!(f, "OPENAPI"),
            ContextType::Schema => write!(f, "SCHEMA"),
            ContextType::DataModel => write!(f, "DATA_MODEL"),
            ContextType::Readme => write!(f, "README"),
            ContextType::AgentInstructions => write!(f, "AGENT_INSTRUCTIONS"),
        }
    }
}

impl std::str::FromStr for ContextType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ADR" => Ok(ContextType::Adr),
            "USER_STORY" => Ok(ContextType::UserStory),
            "OPENAPI" => Ok(ContextType::OpenApi),
            "SCHEMA" => Ok(ContextType::Schema),
            "DATA_MODEL" => Ok(ContextType::DataModel),
            "README" => Ok(ContextType::Readme),
            "AGENT_INSTRUCTIONS" => Ok(ContextType::AgentInstructions),
            _ => Err(format!("Unknown context type: {}", s)),
        }
    }
}

/// Estimate the token cost of a content string
///
/// Rough estimation: 1 token per 4 characters, rounding down.
pub fn estimate_tokens(content: &str) -> u64 {
    content.chars().count() as u64 / 4
}

fn version_is_valid(version: &str) -> bool {
    // Compiled at the call site; construction is not a hot path.
    regex::Regex::new(r"^\d+\.\d+\.\d+$")
        .map(|re| re.is_match(version))
        .unwrap_or(false)
}

/// A single context document that briefs an agent about one aspect of a
/// project: an ADR, a user story, a schema, or any other structured
/// documentation artifact, with an estimated token cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextDocument {
    /// Unique identifier for this document
    pub id: Uuid,

    /// What kind of documentation this is
    #[serde(rename = "type")]
    pub doc_type: ContextType,

    /// Human-readable title (1-200 characters)
    pub title: String,

    /// The document content (non-empty)
    pub content: String,

    /// Path the content was loaded from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Token cost of the content; derived from the content once at
    /// construction when not supplied, and never recomputed afterwards
    pub tokens: u64,

    /// When this document was created
    pub created_at: DateTime<Utc>,

    /// When this document was last updated
    pub updated_at: DateTime<Utc>,

    /// Semantic version of the document (e.g., "1.0.0")
    pub version: String,

    /// Free-form metadata
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl ContextDocument {
    /// Create a new document with default version and a derived token count
    ///
    /// Fails if the title or content bounds are violated.
    pub fn new(
        doc_type: ContextType,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(doc_type, title, content).build()
    }

    /// Create a builder for documents with optional fields
    pub fn builder(
        doc_type: ContextType,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> ContextDocumentBuilder {
        ContextDocumentBuilder::new(doc_type, title.into(), content.into())
    }

    /// Validate field constraints
    ///
    /// Builders run this before construction; call it directly on
    /// deserialized documents, which bypass the builder.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(DossierError::InvalidDocument {
                reason: "title cannot be empty".to_string(),
            });
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(DossierError::InvalidDocument {
                reason: format!("title exceeds {} characters", MAX_TITLE_LEN),
            });
        }
        if self.content.is_empty() {
            return Err(DossierError::InvalidDocument {
                reason: "content cannot be empty".to_string(),
            });
        }
        if !version_is_valid(&self.version) {
            return Err(DossierError::InvalidVersion {
                version: self.version.clone(),
            });
        }
        Ok(())
    }
}

/// Builder for [`ContextDocument`]
#[derive(Debug)]
pub struct ContextDocumentBuilder {
    document: ContextDocument,
    explicit_tokens: bool,
}

impl ContextDocumentBuilder {
    fn new(doc_type: ContextType, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            document: ContextDocument {
                id: Uuid::new_v4(),
                doc_type,
                title,
                content,
                file_path: None,
                tokens: 0,
                created_at: now,
                updated_at: now,
                version: "1.0.0".to_string(),
                metadata: HashMap::new(),
            },
            explicit_tokens: false,
        }
    }

    /// Set the source file path
    pub fn file_path(mut self, path: impl Into<String>) -> Self {
        self.document.file_path = Some(path.into());
        self
    }

    /// Supply an explicit token count instead of the derived estimate
    ///
    /// A count of 0 is treated as "not supplied" and derived instead.
    pub fn tokens(mut self, tokens: u64) -> Self {
        self.document.tokens = tokens;
        self.explicit_tokens = tokens > 0;
        self
    }

    /// Set the semantic version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.document.version = version.into();
        self
    }

    /// Attach a metadata entry
    pub fn metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.document.metadata.insert(key.into(), value);
        self
    }

    /// Validate and build the document
    pub fn build(mut self) -> Result<ContextDocument> {
        if !self.explicit_tokens {
            self.document.tokens = estimate_tokens(&self.document.content);
        }
        self.document.validate()?;
        Ok(self.document)
    }
}
