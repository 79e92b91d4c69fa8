//! Manifest adapter: renders the object as YAML without touching the cluster

use async_trait::async_trait;
use serde_json::{json, Value};
use std::marker::PhantomData;
use tracing::debug;

use super::{build_object, object_state, prepare, type_name, CrdModel, DataSourceHandler};
use crate::adapters::ObjectKey;
use crate::schema::{metadata, Attribute, Schema};
use crate::Result;

pub struct CrdManifest<R> {
    schema: Schema,
    _model: PhantomData<fn() -> R>,
}

impl<R: CrdModel> CrdManifest<R> {
    pub fn new() -> Self {
        let spec = Attribute::object("spec", R::spec_attributes())
            .description("The desired state of the custom resource.");
        let spec = if R::SPEC_REQUIRED { spec.required() } else { spec };

        Self {
            schema: Schema::new(R::description())
                .with_attribute(
                    Attribute::string("id")
                        .computed()
                        .description("The unique identifier 'name/namespace' of this manifest."),
                )
                .with_attribute(metadata::resource_metadata())
                .with_attribute(spec)
                .with_attribute(
                    Attribute::string("yaml")
                        .computed()
                        .description("The generated manifest in YAML format."),
                ),
            _model: PhantomData,
        }
    }
}

impl<R: CrdModel> Default for CrdManifest<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: CrdModel> DataSourceHandler for CrdManifest<R> {
    fn type_name(&self) -> String {
        format!("{}_manifest", type_name::<R>())
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
        let object: R = build_object(&self.schema, &config)?;
        let yaml = serde_yaml::to_string(&object)?;
        debug!("Rendered {} manifest {}", R::kind(&()), key);

        let (metadata, spec) = object_state(&self.schema, &object)?;
        Ok(json!({
            "id": key.id(),
            "metadata": metadata,
            "spec": spec,
            "yaml": yaml,
        }))
    }
}
