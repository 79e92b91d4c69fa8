//! State identity and import identifiers

use serde_json::Value;

use crate::{Error, Result};

/// Object coordinates in the cluster
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectKey {
    pub namespace: String,
    pub name: String,
}

impl ObjectKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// State ID: `name/namespace`
    pub fn id(&self) -> String {
        format!("{}/{}", self.name, self.namespace)
    }

    /// Read `metadata.name` and `metadata.namespace` from a state or config value
    pub fn from_value(value: &Value) -> Result<Self> {
        let metadata = value.get("metadata");
        let field = |field: &str| -> Result<String> {
            metadata
                .and_then(|m| m.get(field))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(|| {
                    Error::InvalidConfig(vec![crate::error::Violation::new(
                        format!("metadata.{}", field),
                        "attribute is required",
                    )])
                })
        };
        Ok(Self::new(field("namespace")?, field("name")?))
    }

    /// Parse an import identifier of the form `namespace/name`
    pub fn parse_import_id(id: &str) -> Result<Self> {
        let parts: Vec<&str> = id.split('/').collect();
        match parts.as_slice() {
            [namespace, name] if !namespace.is_empty() && !name.is_empty() => {
                Ok(Self::new(*namespace, *name))
            }
            _ => Err(Error::ImportError(id.to_string())),
        }
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
