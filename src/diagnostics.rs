//! Diagnostics reported back to the caller for a failed operation

use serde::{Deserialize, Serialize};

use crate::Error;

/// Diagnostic severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A user-facing diagnostic
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// Attribute path the diagnostic refers to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

const REPORT_ISSUE: &str = "Please report this issue to the provider developers.";

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    /// Create a warning diagnostic
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(summary, detail)
        }
    }

    /// Attach an attribute path
    pub fn with_attribute(mut self, path: impl Into<String>) -> Self {
        self.attribute = Some(path.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Convert an error into the diagnostics it reports
    pub fn from_error(err: &Error) -> Vec<Diagnostic> {
        match err {
            Error::MarshalError { what, source } => vec![Diagnostic::error(
                "Error marshalling JSON",
                format!("{}\n\nCould not marshal {}: {}", REPORT_ISSUE, what, source),
            )],
            Error::UnmarshalError { what, source } => vec![Diagnostic::error(
                "Error unmarshalling JSON",
                format!("{}\n\nCould not unmarshal {}: {}", REPORT_ISSUE, what, source),
            )],
            Error::YamlError(source) => vec![Diagnostic::error(
                "Error marshalling YAML",
                format!("{}\n\n{}", REPORT_ISSUE, source),
            )],
            Error::KubeError {
                verb,
                target,
                source,
            } => {
                let mut detail = format!("{} Error ({}): {}", verb, target, source);
                if err.is_not_found() {
                    detail.push_str("\n\nThe object does not exist in the cluster.");
                }
                vec![Diagnostic::error(format!("Error during {}", verb), detail)]
            }
            Error::ImportError(id) => vec![Diagnostic::error(
                "Error importing resource",
                format!(
                    "Expected import identifier with format: 'namespace/name'. Got: '{}'",
                    id
                ),
            )],
            Error::InvalidConfig(violations) => violations
                .iter()
                .map(|v| {
                    Diagnostic::error("Invalid attribute value", v.message.clone())
                        .with_attribute(v.path.clone())
                })
                .collect(),
            Error::ConfigError(msg) => {
                vec![Diagnostic::error("Invalid provider configuration", msg.clone())]
            }
            Error::UnknownType(name) => vec![Diagnostic::error(
                "Unsupported type",
                format!("No resource or data source is registered as '{}'", name),
            )],
            Error::NotConfigured => vec![Diagnostic::error(
                "Provider not configured",
                "The provider has no Kubernetes client. Configure it with cluster access \
                 (offline mode only supports manifests).",
            )],
        }
    }
}
