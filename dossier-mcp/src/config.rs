//! MCP server connection configuration

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{McpError, McpResult};

/// Maximum length of a server name
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of a server description
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Where an MCP server runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum McpServerType {
    /// Process launched on the local machine
    Local,
    /// Server reached over the network
    Remote,
    /// Server running in a container
    Docker,
}

impl std::fmt::Display for McpServerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            McpServerType::Local => write!(f, "LOCAL"),
            McpServerType::Remote => write!(f, "REMOTE"),
            McpServerType::Docker => write!(f, "DOCKER"),
        }
    }
}

impl std::str::FromStr for McpServerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCAL" => Ok(McpServerType::Local),
            "REMOTE" => Ok(McpServerType::Remote),
            "DOCKER" => Ok(McpServerType::Docker),
            _ => Err(format!("Unknown server type: {}", s)),
        }
    }
}

/// How much an MCP server is trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrustLevel {
    Low,
    Medium,
    High,
    Maximum,
}

impl TrustLevel {
    /// Numeric rank (higher = more trusted)
    pub fn rank(&self) -> u8 {
        match self {
            TrustLevel::Low => 1,
            TrustLevel::Medium => 2,
            TrustLevel::High => 3,
            TrustLevel::Maximum => 4,
        }
    }
}

impl std::fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrustLevel::Low => write!(f, "LOW"),
            TrustLevel::Medium => write!(f, "MEDIUM"),
            TrustLevel::High => write!(f, "HIGH"),
            TrustLevel::Maximum => write!(f, "MAXIMUM"),
        }
    }
}

impl std::str::FromStr for TrustLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(TrustLevel::Low),
            "MEDIUM" => Ok(TrustLevel::Medium),
            "HIGH" => Ok(TrustLevel::High),
            "MAXIMUM" => Ok(TrustLevel::Maximum),
            _ => Err(format!("Unknown trust level: {}", s)),
        }
    }
}

/// Transport used to talk to an MCP server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Stdio,
    Http,
    Sse,
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transport::Stdio => write!(f, "stdio"),
            Transport::Http => write!(f, "http"),
            Transport::Sse => write!(f, "sse"),
        }
    }
}

/// Connection descriptor for a tool-providing MCP server
///
/// The descriptor carries everything needed to launch or reach the server;
/// nothing here launches anything. Authentication fields are carried but
/// not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpServerConfig {
    /// Server name (1-50 characters)
    pub name: String,

    /// Where the server runs
    #[serde(rename = "type")]
    pub server_type: McpServerType,

    /// How much the server is trusted
    pub trust_level: TrustLevel,

    /// Command used to launch the server
    pub command: String,

    /// Arguments for the launch command
    #[serde(default)]
    pub args: Vec<String>,

    /// Environment variables for the server process
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Transport to communicate over
    #[serde(default)]
    pub transport: Transport,

    /// Endpoint URL; required for remote servers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Url>,

    /// Authentication material (carried, not enforced)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<HashMap<String, String>>,

    /// What the server provides (up to 500 characters)
    #[serde(default)]
    pub description: String,

    /// Whether the server should be used
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl McpServerConfig {
    /// Create a builder with the required fields
    pub fn builder(
        name: impl Into<String>,
        server_type: McpServerType,
        trust_level: TrustLevel,
        command: impl Into<String>,
    ) -> McpServerConfigBuilder {
        McpServerConfigBuilder::new(name.into(), server_type, trust_level, command.into())
    }

    /// Validate field constraints
    ///
    /// Builders run this before construction; call it directly on
    /// deserialized configs, which bypass the builder.
    pub fn validate(&self) -> McpResult<()> {
        if self.name.is_empty() {
            return Err(McpError::InvalidServer {
                reason: "name cannot be empty".to_string(),
            });
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(McpError::InvalidServer {
                reason: format!("name exceeds {} characters", MAX_NAME_LEN),
            });
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(McpError::InvalidServer {
                reason: format!("description exceeds {} characters", MAX_DESCRIPTION_LEN),
            });
        }
        if self.server_type == McpServerType::Remote && self.endpoint.is_none() {
            return Err(McpError::MissingEndpoint {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Builder for [`McpServerConfig`]
#[derive(Debug)]
pub struct McpServerConfigBuilder {
    config: McpServerConfig,
    endpoint_error: Option<McpError>,
}

impl McpServerConfigBuilder {
    fn new(
        name: String,
        server_type: McpServerType,
        trust_level: TrustLevel,
        command: String,
    ) -> Self {
        Self {
            config: McpServerConfig {
                name,
                server_type,
                trust_level,
                command,
                args: Vec::new(),
                env: HashMap::new(),
                transport: Transport::Stdio,
                endpoint: None,
                authentication: None,
                description: String::new(),
                enabled: true,
            },
            endpoint_error: None,
        }
    }

    /// Set launch arguments
    pub fn args(mut self, args: Vec<String>) -> Self {
        self.config.args = args;
        self
    }

    /// Set an environment variable for the server process
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.env.insert(key.into(), value.into());
        self
    }

    /// Set the transport
    pub fn transport(mut self, transport: Transport) -> Self {
        self.config.transport = transport;
        self
    }

    /// Set the endpoint URL
    ///
    /// The URL is parsed eagerly; a malformed URL fails the build.
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        match Url::parse(endpoint) {
            Ok(url) => self.config.endpoint = Some(url),
            Err(e) => {
                self.endpoint_error = Some(McpError::InvalidEndpoint {
                    name: self.config.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
        self
    }

    /// Attach authentication material
    pub fn authentication(mut self, auth: HashMap<String, String>) -> Self {
        self.config.authentication = Some(auth);
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = description.into();
        self
    }

    /// Disable the server
    pub fn disabled(mut self) -> Self {
        self.config.enabled = false;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> McpResult<McpServerConfig> {
        if let Some(err) = self.endpoint_error {
            return Err(err);
        }
        self.config.validate()?;
        Ok(self.config)
    }
}
