//! Provider: configuration, type registry and request dispatch

mod config;
mod protocol;

pub use config::ProviderConfig;
pub use protocol::{Request, Response};

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;

use crate::crd::{KafkaBridge, KafkaRebalance, KafkaTopic, KafkaUser};
use crate::engine::{
    CrdDataSource, CrdManifest, CrdModel, CrdResource, DataSourceHandler, ProviderContext,
    ResourceHandler,
};
use crate::schema::Schema;
use crate::{Error, Result};

/// Full schema surface of the provider
#[derive(Clone, Debug, Serialize)]
pub struct ProviderSchema {
    pub provider: Schema,
    pub resources: BTreeMap<String, Schema>,
    pub data_sources: BTreeMap<String, Schema>,
}

/// Resource and data source handlers keyed by type name
#[derive(Default)]
struct Registry {
    resources: BTreeMap<String, Box<dyn ResourceHandler>>,
    data_sources: BTreeMap<String, Box<dyn DataSourceHandler>>,
}

impl Registry {
    fn build(ctx: &ProviderContext) -> Self {
        let mut registry = Self::default();
        registry.register::<KafkaBridge>(ctx);
        registry.register::<KafkaRebalance>(ctx);
        registry.register::<KafkaTopic>(ctx);
        registry.register::<KafkaUser>(ctx);
        registry
    }

    /// Resource, data source and manifest for one custom resource
    fn register<R: CrdModel>(&mut self, ctx: &ProviderContext) {
        let resource = CrdResource::<R>::new(ctx.clone());
        self.resources.insert(resource.type_name(), Box::new(resource));

        let data_source = CrdDataSource::<R>::new(ctx.clone());
        self.data_sources
            .insert(data_source.type_name(), Box::new(data_source));

        let manifest = CrdManifest::<R>::new();
        self.data_sources.insert(manifest.type_name(), Box::new(manifest));
    }
}

/// The provider
pub struct Provider {
    ctx: ProviderContext,
    configured: bool,
    registry: Registry,
}

impl Provider {
    /// Unconfigured provider: manifests work, cluster operations do not
    pub fn new() -> Self {
        let ctx = ProviderContext::offline();
        Self {
            registry: Registry::build(&ctx),
            ctx,
            configured: false,
        }
    }

    /// Provider already configured with the given context
    pub fn with_context(ctx: ProviderContext) -> Self {
        Self {
            registry: Registry::build(&ctx),
            ctx,
            configured: true,
        }
    }

    pub fn context(&self) -> &ProviderContext {
        &self.ctx
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Validate the provider block, connect and rebuild every handler
    pub async fn configure(&mut self, config: &Value) -> Result<()> {
        let config = ProviderConfig::from_value(config)?;
        let ctx = config.build_context().await?;
        info!(
            offline = ctx.is_offline(),
            field_manager = %ctx.field_manager,
            force_conflicts = ctx.force_conflicts,
            "Provider configured"
        );
        *self = Self::with_context(ctx);
        Ok(())
    }

    pub fn schema(&self) -> ProviderSchema {
        ProviderSchema {
            provider: ProviderConfig::schema(),
            resources: self
                .registry
                .resources
                .iter()
                .map(|(name, handler)| (name.clone(), handler.schema()))
                .collect(),
            data_sources: self
                .registry
                .data_sources
                .iter()
                .map(|(name, handler)| (name.clone(), handler.schema()))
                .collect(),
        }
    }

    pub fn resource(&self, type_name: &str) -> Result<&dyn ResourceHandler> {
        self.registry
            .resources
            .get(type_name)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))
    }

    pub fn data_source(&self, type_name: &str) -> Result<&dyn DataSourceHandler> {
        self.registry
            .data_sources
            .get(type_name)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}
