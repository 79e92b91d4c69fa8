//! Data source adapter: reads a live object by namespace and name

use async_trait::async_trait;
use kube::api::ApiResource;
use serde_json::{json, Value};
use std::marker::PhantomData;
use tracing::debug;

use super::{
    from_dynamic, object_state, prepare, type_name, CrdModel, DataSourceHandler, ProviderContext,
};
use crate::adapters::ObjectKey;
use crate::schema::{metadata, Attribute, Schema};
use crate::{Error, Result};

pub struct CrdDataSource<R> {
    ctx: ProviderContext,
    api_resource: ApiResource,
    schema: Schema,
    _model: PhantomData<fn() -> R>,
}

impl<R: CrdModel> CrdDataSource<R> {
    pub fn new(ctx: ProviderContext) -> Self {
        let spec = Attribute::object("spec", R::spec_attributes())
            .into_computed()
            .description("The observed state of the custom resource.");

        Self {
            ctx,
            api_resource: ApiResource::erase::<R>(&()),
            schema: Schema::new(R::description())
                .with_attribute(
                    Attribute::string("id")
                        .computed()
                        .description("The unique identifier 'name/namespace' of this object."),
                )
                .with_attribute(metadata::data_source_metadata())
                .with_attribute(spec),
            _model: PhantomData,
        }
    }
}

#[async_trait]
impl<R: CrdModel> DataSourceHandler for CrdDataSource<R> {
    fn type_name(&self) -> String {
        type_name::<R>()
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    fn validate(&self, config: &Value) -> Result<()> {
        prepare(&self.schema, config).map(|_| ())
    }

    async fn read(&self, config: &Value) -> Result<Value> {
        let config = prepare(&self.schema, config)?;
        let key = ObjectKey::from_value(&config)?;
        debug!("Reading {} {}", R::kind(&()), key);

        let live = self
            .ctx
            .client()?
            .get(&self.api_resource, &key.namespace, &key.name)
            .await
            .map_err(|source| Error::KubeError {
                verb: "GET",
                target: key.to_string(),
                source,
            })?;
        let object: R = from_dynamic(&live)?;
        let (metadata, spec) = object_state(&self.schema, &object)?;

        Ok(json!({
            "id": key.id(),
            "metadata": metadata,
            "spec": spec,
        }))
    }
}
