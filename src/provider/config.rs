//! Provider configuration and Kubernetes client construction

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::adapters::KubeClusterClient;
use crate::engine::{prepare, ProviderContext, DEFAULT_FIELD_MANAGER};
use crate::schema::{Attribute, Schema};
use crate::{Error, Result};

/// Settings accepted by the `configure` request
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Path to a kubeconfig file; in-cluster or default kubeconfig when unset
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one
    pub context: Option<String>,

    /// Default field manager for server-side apply
    pub field_manager: String,

    /// Default force-conflicts flag for server-side apply
    pub force_conflicts: bool,

    /// Render manifests only, never connect to a cluster
    pub offline: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kubeconfig: None,
            context: None,
            field_manager: DEFAULT_FIELD_MANAGER.to_string(),
            force_conflicts: false,
            offline: false,
        }
    }
}

impl ProviderConfig {
    /// Schema of the provider block
    pub fn schema() -> Schema {
        Schema::new("Provider for Strimzi Kafka custom resources.")
            .with_attribute(Attribute::string("kubeconfig").description(
                "Path to the kubeconfig file. When unset, the in-cluster configuration or \
                 the default kubeconfig is used.",
            ))
            .with_attribute(
                Attribute::string("context")
                    .length_at_least(1)
                    .description("Kubeconfig context to use."),
            )
            .with_attribute(
                Attribute::string("field_manager")
                    .length_at_least(1)
                    .default_value(json!(DEFAULT_FIELD_MANAGER))
                    .description("Default field manager used for server-side apply."),
            )
            .with_attribute(
                Attribute::bool("force_conflicts")
                    .default_value(json!(false))
                    .description("Default force-conflicts flag used for server-side apply."),
            )
            .with_attribute(
                Attribute::bool("offline")
                    .default_value(json!(false))
                    .description(
                        "Do not connect to a cluster. Only manifest data sources are usable.",
                    ),
            )
    }

    /// Validate a `configure` payload and fill in defaults
    pub fn from_value(value: &Value) -> Result<Self> {
        let config = prepare(&Self::schema(), value)?;
        serde_json::from_value(config).map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Build the context injected into every adapter
    pub async fn build_context(&self) -> Result<ProviderContext> {
        let ctx = if self.offline {
            info!("Provider running offline, only manifests are available");
            ProviderContext::offline()
        } else {
            let client = self.create_client().await?;
            ProviderContext::new(Arc::new(KubeClusterClient::new(client)))
        };

        Ok(ctx
            .with_field_manager(self.field_manager.clone())
            .with_force_conflicts(self.force_conflicts))
    }

    async fn create_client(&self) -> Result<Client> {
        let options = KubeConfigOptions {
            context: self.context.clone(),
            ..KubeConfigOptions::default()
        };

        let config = match (&self.kubeconfig, &self.context) {
            (Some(path), _) => {
                let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                    Error::ConfigError(format!(
                        "failed to read kubeconfig {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Config::from_custom_kubeconfig(kubeconfig, &options)
                    .await
                    .map_err(|e| Error::ConfigError(format!("failed to load kubeconfig: {}", e)))?
            }
            (None, Some(_)) => Config::from_kubeconfig(&options)
                .await
                .map_err(|e| Error::ConfigError(format!("failed to load kubeconfig: {}", e)))?,
            (None, None) => Config::infer().await.map_err(|e| {
                Error::ConfigError(format!("failed to infer Kubernetes configuration: {}", e))
            })?,
        };

        info!("Connecting to Kubernetes API server {}", config.cluster_url);
        Client::try_from(config)
            .map_err(|e| Error::ConfigError(format!("failed to create client: {}", e)))
    }
}
