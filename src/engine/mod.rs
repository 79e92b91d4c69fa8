//! Generic resource, data source and manifest adapters
//!
//! The adapters are written once and parameterized by a [`CrdModel`]: the
//! typed custom resource (which carries its group, version, kind and plural
//! through `kube::Resource`) plus its attribute table.

mod data_source;
mod manifest;
mod resource;

pub use data_source::CrdDataSource;
pub use manifest::CrdManifest;
pub use resource::CrdResource;

use async_trait::async_trait;
use kube::api::DynamicObject;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;

use crate::adapters::{codec, ApplyOptions, ClusterClient};
use crate::schema::{Attribute, Schema};
use crate::{Error, Result};

/// Field manager used when neither the resource nor the provider sets one
pub const DEFAULT_FIELD_MANAGER: &str = "terraform-provider-k8s";

/// A typed custom resource exposed by the provider
pub trait CrdModel:
    kube::Resource<DynamicType = ()>
    + Clone
    + fmt::Debug
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Kind in snake_case, used to build type names
    const KIND_SNAKE: &'static str;

    /// Whether the `spec` block must be configured
    const SPEC_REQUIRED: bool = false;

    /// One-line description of the custom resource
    fn description() -> &'static str;

    /// Attribute table of the `spec` block
    fn spec_attributes() -> Vec<Attribute>;
}

/// Type name, e.g. `k8s_kafka_strimzi_io_kafka_bridge_v1beta2`
pub fn type_name<R: CrdModel>() -> String {
    format!(
        "k8s_{}_{}_{}",
        R::group(&()).replace(['.', '-'], "_"),
        R::KIND_SNAKE,
        R::version(&())
    )
}

/// Configuration injected into every adapter
#[derive(Clone)]
pub struct ProviderContext {
    client: Option<Arc<dyn ClusterClient>>,
    /// Field manager used when a resource does not set one
    pub field_manager: String,
    /// Force-conflicts flag used when a resource does not set one
    pub force_conflicts: bool,
}

impl ProviderContext {
    pub fn new(client: Arc<dyn ClusterClient>) -> Self {
        Self {
            client: Some(client),
            ..Self::offline()
        }
    }

    /// Context without cluster access; only manifests work
    pub fn offline() -> Self {
        Self {
            client: None,
            field_manager: DEFAULT_FIELD_MANAGER.to_string(),
            force_conflicts: false,
        }
    }

    pub fn with_field_manager(mut self, field_manager: impl Into<String>) -> Self {
        self.field_manager = field_manager.into();
        self
    }

    pub fn with_force_conflicts(mut self, force_conflicts: bool) -> Self {
        self.force_conflicts = force_conflicts;
        self
    }

    pub fn is_offline(&self) -> bool {
        self.client.is_none()
    }

    pub fn client(&self) -> Result<&Arc<dyn ClusterClient>> {
        self.client.as_ref().ok_or(Error::NotConfigured)
    }

    /// Per-resource `field_manager`/`force_conflicts` win over provider defaults
    pub fn apply_options(&self, config: &Value) -> ApplyOptions {
        ApplyOptions {
            field_manager: config
                .get("field_manager")
                .and_then(Value::as_str)
                .map_or_else(|| self.field_manager.clone(), str::to_string),
            force: config
                .get("force_conflicts")
                .and_then(Value::as_bool)
                .unwrap_or(self.force_conflicts),
        }
    }
}

impl fmt::Debug for ProviderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderContext")
            .field("offline", &self.is_offline())
            .field("field_manager", &self.field_manager)
            .field("force_conflicts", &self.force_conflicts)
            .finish()
    }
}

/// Outcome of planning a change
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PlanResult {
    pub planned_state: Value,
    /// Attribute paths whose change forces destroy/create
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires_replace: Vec<String>,
}

impl PlanResult {
    pub fn requires_replacement(&self) -> bool {
        !self.requires_replace.is_empty()
    }
}

/// A managed resource: full lifecycle against the cluster
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    fn type_name(&self) -> String;
    fn schema(&self) -> Schema;
    fn validate(&self, config: &Value) -> Result<()>;
    fn plan(&self, prior_state: Option<&Value>, config: &Value) -> Result<PlanResult>;
    async fn create(&self, config: &Value) -> Result<Value>;
    async fn read(&self, state: &Value) -> Result<Value>;
    async fn update(&self, prior_state: &Value, config: &Value) -> Result<Value>;
    async fn delete(&self, state: &Value) -> Result<()>;
    fn import(&self, id: &str) -> Result<Value>;
}

/// A read-only data source
#[async_trait]
pub trait DataSourceHandler: Send + Sync {
    fn type_name(&self) -> String;
    fn schema(&self) -> Schema;
    fn validate(&self, config: &Value) -> Result<()>;
    async fn read(&self, config: &Value) -> Result<Value>;
}

/// Validate configuration and fill defaults
pub(crate) fn prepare(schema: &Schema, config: &Value) -> Result<Value> {
    let violations = schema.validate(config);
    if !violations.is_empty() {
        return Err(Error::InvalidConfig(violations));
    }
    let mut config = match config {
        Value::Null => json!({}),
        other => other.clone(),
    };
    schema.apply_defaults(&mut config);
    Ok(config)
}

/// Build the typed object from configuration, stamping apiVersion and kind
pub(crate) fn build_object<R: CrdModel>(schema: &Schema, config: &Value) -> Result<R> {
    let metadata = codec::to_api(schema.nested("metadata"), &config["metadata"]);
    let spec = match codec::to_api(schema.nested("spec"), &config["spec"]) {
        Value::Null => json!({}),
        spec => spec,
    };
    let document = json!({
        "apiVersion": R::api_version(&()),
        "kind": R::kind(&()),
        "metadata": metadata,
        "spec": spec,
    });
    serde_json::from_value(document).map_err(|source| Error::MarshalError {
        what: "configuration",
        source,
    })
}

/// Metadata and spec blocks of a state value, read from a typed object
pub(crate) fn object_state<R: CrdModel>(schema: &Schema, object: &R) -> Result<(Value, Value)> {
    let document = serde_json::to_value(object).map_err(|source| Error::UnmarshalError {
        what: "API response",
        source,
    })?;
    let metadata = codec::from_api(schema.nested("metadata"), document.get("metadata"));
    let spec = match document.get("spec") {
        Some(Value::Object(spec)) if !spec.is_empty() => {
            codec::from_api(schema.nested("spec"), document.get("spec"))
        }
        _ => Value::Null,
    };
    Ok((metadata, spec))
}

pub(crate) fn to_dynamic<R: CrdModel>(object: &R) -> Result<DynamicObject> {
    serde_json::to_value(object)
        .and_then(serde_json::from_value)
        .map_err(|source| Error::MarshalError {
            what: "apply patch",
            source,
        })
}

pub(crate) fn from_dynamic<R: CrdModel>(object: &DynamicObject) -> Result<R> {
    serde_json::to_value(object)
        .and_then(serde_json::from_value)
        .map_err(|source| Error::UnmarshalError {
            what: "API response",
            source,
        })
}
