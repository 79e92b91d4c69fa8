//! Error types for the Strimzi CRD provider

use std::fmt;

/// Result type for the provider
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the provider
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Local value could not be serialized for the API
    #[error("failed to marshal {what}: {source}")]
    MarshalError {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// API response could not be read back into the model
    #[error("failed to unmarshal {what}: {source}")]
    UnmarshalError {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest could not be rendered
    #[error("failed to render YAML manifest: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Kubernetes API error
    #[error("{verb} {target} failed: {source}")]
    KubeError {
        verb: &'static str,
        target: String,
        #[source]
        source: kube::Error,
    },

    /// Import identifier did not have the `namespace/name` shape
    #[error("invalid import identifier '{0}'")]
    ImportError(String),

    /// Configuration did not satisfy the attribute schema
    #[error("invalid configuration: {}", join_violations(.0))]
    InvalidConfig(Vec<Violation>),

    /// Provider configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// No resource or data source registered under this type name
    #[error("unsupported type '{0}'")]
    UnknownType(String),

    /// Operation needs a cluster client but none was configured
    #[error("provider has no Kubernetes client configured")]
    NotConfigured,
}

/// A single schema validation failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Dotted attribute path, e.g. `spec.http.port`
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Whether the error is a Kubernetes 404
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::KubeError {
                source: kube::Error::Api(response),
                ..
            } if response.code == 404
        )
    }
}
