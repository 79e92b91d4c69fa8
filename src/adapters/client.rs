//! Dynamic Kubernetes client used by every resource type

use async_trait::async_trait;
use kube::api::{Api, ApiResource, DeleteParams, DynamicObject, Patch, PatchParams};
use kube::Client;
use tracing::debug;

/// Server-side apply settings for one PATCH
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplyOptions {
    pub field_manager: String,
    pub force: bool,
}

impl ApplyOptions {
    /// PATCH parameters: apply with field manager, strict field validation
    pub fn patch_params(&self) -> PatchParams {
        let params = PatchParams::apply(&self.field_manager).validation_strict();
        if self.force {
            params.force()
        } else {
            params
        }
    }
}

/// Minimal set of verbs the adapters issue against the API server
#[async_trait]
pub trait ClusterClient: Send + Sync {
    async fn get(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> Result<DynamicObject, kube::Error>;

    async fn apply(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
        object: &DynamicObject,
        options: &ApplyOptions,
    ) -> Result<DynamicObject, kube::Error>;

    async fn delete(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> Result<(), kube::Error>;
}

/// [`ClusterClient`] backed by a live kube [`Client`]
#[derive(Clone)]
pub struct KubeClusterClient {
    client: Client,
}

impl KubeClusterClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, resource: &ApiResource, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(self.client.clone(), namespace, resource)
    }
}

#[async_trait]
impl ClusterClient for KubeClusterClient {
    async fn get(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> Result<DynamicObject, kube::Error> {
        debug!("GET {} {}/{}", resource.plural, namespace, name);
        self.api(resource, namespace).get(name).await
    }

    async fn apply(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
        object: &DynamicObject,
        options: &ApplyOptions,
    ) -> Result<DynamicObject, kube::Error> {
        debug!(
            "PATCH {} {}/{} (field manager {}, force {})",
            resource.plural, namespace, name, options.field_manager, options.force
        );
        self.api(resource, namespace)
            .patch(name, &options.patch_params(), &Patch::Apply(object))
            .await
    }

    async fn delete(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> Result<(), kube::Error> {
        debug!("DELETE {} {}/{}", resource.plural, namespace, name);
        self.api(resource, namespace)
            .delete(name, &DeleteParams::default())
            .await
            .map(|_| ())
    }
}
