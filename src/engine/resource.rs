//! Managed resource adapter: create, read, update, delete, import, plan

use async_trait::async_trait;
use kube::api::ApiResource;
use serde_json::{json, Value};
use std::marker::PhantomData;
use tracing::{info, instrument};

use super::{
    build_object, from_dynamic, object_state, prepare, to_dynamic, type_name, CrdModel,
    PlanResult, ProviderContext, ResourceHandler,
};
use crate::adapters::{codec, ObjectKey};
use crate::schema::{metadata, Attribute, Schema};
use crate::{Error, Result};

/// Resource adapter for the custom resource `R`
pub struct CrdResource<R> {
    ctx: ProviderContext,
    api_resource: ApiResource,
    schema: Schema,
    _model: PhantomData<fn() -> R>,
}

impl<R: CrdModel> CrdResource<R> {
    pub fn new(ctx: ProviderContext) -> Self {
        Self {
            ctx,
            api_resource: ApiResource::erase::<R>(&()),
            schema: Self::build_schema(),
            _model: PhantomData,
        }
    }

    fn build_schema() -> Schema {
        let spec = Attribute::object("spec", R::spec_attributes())
            .description("The desired state of the custom resource.");
        let spec = if R::SPEC_REQUIRED { spec.required() } else { spec };

        Schema::new(R::description())
            .with_attribute(
                Attribute::string("id")
                    .computed()
                    .description("The unique identifier 'name/namespace' of this resource."),
            )
            .with_attribute(Attribute::bool("force_conflicts").description(
                "If 'true', server-side apply will force the changes against conflicts. \
                 If not set, the provider default is used.",
            ))
            .with_attribute(
                Attribute::string("field_manager")
                    .length_at_least(1)
                    .description(
                        "The name of the manager used to track field ownership. If not set, \
                         the provider default is used.",
                    ),
            )
            .with_attribute(metadata::resource_metadata())
            .with_attribute(spec)
    }

    /// Server-side apply the configuration and return the server's view
    #[instrument(skip(self, config), fields(kind = %R::kind(&()), namespace = %key.namespace, name = %key.name))]
    async fn apply(&self, config: &Value, key: &ObjectKey) -> Result<R> {
        let object: R = build_object(&self.schema, config)?;
        let patch = to_dynamic(&object)?;
        let options = self.ctx.apply_options(config);

        let response = self
            .ctx
            .client()?
            .apply(&self.api_resource, &key.namespace, &key.name, &patch, &options)
            .await
            .map_err(|source| Error::KubeError {
                verb: "PATCH",
                target: key.to_string(),
                source,
            })?;

        from_dynamic(&response)
    }

    /// State from a server object, keeping the provider-side attributes of `base`
    fn state(&self, base: &Value, object: &R, id: Value) -> Result<Value> {
        let (metadata, spec) = object_state(&self.schema, object)?;
        Ok(json!({
            "id": id,
            "force_conflicts": base["force_conflicts"],
            "field_manager": base["field_manager"],
            "metadata": metadata,
            "spec": spec,
        }))
    }
}

#[async_trait]
impl<R: CrdModel> ResourceHandler for CrdResource<R> {
    fn type_name(&self) -> String {
        type_name::<R>()
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    fn validate(&self, config: &Value) -> Result<()> {
        prepare(&self.schema, config).map(|_| ())
    }

    fn plan(&self, prior_state: Option<&Value>, config: &Value) -> Result<PlanResult> {
        let mut planned = prepare(&self.schema, config)?;
        let requires_replace = match prior_state {
            Some(prior) => {
                let paths = self.schema.replacement_paths(prior, &planned);
                if paths.is_empty() {
                    planned["id"] = prior["id"].clone();
                }
                paths
            }
            None => Vec::new(),
        };
        Ok(PlanResult {
            planned_state: planned,
            requires_replace,
        })
    }

    async fn create(&self, config: &Value) -> Result<Value> {
        let config = prepare(&self.schema, config)?;
        let key = ObjectKey::from_value(&config)?;
        let applied = self.apply(&config, &key).await?;
        info!("Created {} {}", R::kind(&()), key);
        self.state(&config, &applied, Value::String(key.id()))
    }

    async fn read(&self, state: &Value) -> Result<Value> {
        let key = ObjectKey::from_value(state)?;
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
        let id = match &state["id"] {
            Value::String(id) => Value::String(id.clone()),
            _ => Value::String(key.id()),
        };
        self.state(state, &object, id)
    }

    async fn update(&self, prior_state: &Value, config: &Value) -> Result<Value> {
        let config = prepare(&self.schema, config)?;
        let key = ObjectKey::from_value(&config)?;
        let applied = self.apply(&config, &key).await?;
        info!("Updated {} {}", R::kind(&()), key);
        self.state(&config, &applied, prior_state["id"].clone())
    }

    async fn delete(&self, state: &Value) -> Result<()> {
        let key = ObjectKey::from_value(state)?;
        self.ctx
            .client()?
            .delete(&self.api_resource, &key.namespace, &key.name)
            .await
            .map_err(|source| Error::KubeError {
                verb: "DELETE",
                target: key.to_string(),
                source,
            })?;
        info!("Deleted {} {}", R::kind(&()), key);
        Ok(())
    }

    fn import(&self, id: &str) -> Result<Value> {
        let key = ObjectKey::parse_import_id(id)?;
        let metadata = codec::from_api(
            self.schema.nested("metadata"),
            Some(&json!({ "name": key.name, "namespace": key.namespace })),
        );
        Ok(json!({
            "id": key.id(),
            "force_conflicts": null,
            "field_manager": null,
            "metadata": metadata,
            "spec": null,
        }))
    }
}
