//! Shared test fixtures: an in-memory cluster and sample configurations

#![allow(dead_code)]

use async_trait::async_trait;
use kube::api::{ApiResource, DynamicObject};
use kube::error::ErrorResponse;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use strimzi_crd_provider::adapters::{ApplyOptions, ClusterClient};
use strimzi_crd_provider::engine::ProviderContext;
use strimzi_crd_provider::provider::Provider;

pub const BRIDGE: &str = "k8s_kafka_strimzi_io_kafka_bridge_v1beta2";
pub const REBALANCE: &str = "k8s_kafka_strimzi_io_kafka_rebalance_v1beta2";
pub const TOPIC: &str = "k8s_kafka_strimzi_io_kafka_topic_v1beta2";
pub const USER: &str = "k8s_kafka_strimzi_io_kafka_user_v1beta2";

// ============================================================================
// In-memory cluster
// ============================================================================

/// API server stand-in that stores applied objects by plural/namespace/name
#[derive(Default)]
pub struct MockCluster {
    objects: Mutex<BTreeMap<String, DynamicObject>>,
    calls: Mutex<Vec<String>>,
    apply_options: Mutex<Vec<ApplyOptions>>,
    /// Merged into `spec` of every applied object, like a defaulting webhook
    spec_defaults: Value,
}

impl MockCluster {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_spec_defaults(spec_defaults: Value) -> Arc<Self> {
        Arc::new(Self {
            spec_defaults,
            ..Self::default()
        })
    }

    /// Verbs issued so far, e.g. `PATCH kafkabridges default/my-bridge`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_apply_options(&self) -> Option<ApplyOptions> {
        self.apply_options.lock().unwrap().last().cloned()
    }

    pub fn stored(&self, plural: &str, namespace: &str, name: &str) -> Option<Value> {
        self.objects
            .lock()
            .unwrap()
            .get(&key(plural, namespace, name))
            .map(|object| serde_json::to_value(object).unwrap())
    }

    /// Seed an object as if another client had created it
    pub fn insert(&self, plural: &str, object: Value) {
        let object: DynamicObject = serde_json::from_value(object).unwrap();
        let namespace = object.metadata.namespace.clone().unwrap();
        let name = object.metadata.name.clone().unwrap();
        self.objects
            .lock()
            .unwrap()
            .insert(key(plural, &namespace, &name), object);
    }

    fn record(&self, verb: &str, resource: &ApiResource, namespace: &str, name: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {} {}/{}", verb, resource.plural, namespace, name));
    }
}

fn key(plural: &str, namespace: &str, name: &str) -> String {
    format!("{}/{}/{}", plural, namespace, name)
}

fn not_found(resource: &ApiResource, name: &str) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message: format!("{}.{} \"{}\" not found", resource.plural, resource.group, name),
        reason: "NotFound".to_string(),
        code: 404,
    })
}

#[async_trait]
impl ClusterClient for MockCluster {
    async fn get(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> Result<DynamicObject, kube::Error> {
        self.record("GET", resource, namespace, name);
        self.objects
            .lock()
            .unwrap()
            .get(&key(&resource.plural, namespace, name))
            .cloned()
            .ok_or_else(|| not_found(resource, name))
    }

    async fn apply(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
        object: &DynamicObject,
        options: &ApplyOptions,
    ) -> Result<DynamicObject, kube::Error> {
        self.record("PATCH", resource, namespace, name);
        self.apply_options.lock().unwrap().push(options.clone());

        let mut stored = object.clone();
        stored.metadata.namespace = Some(namespace.to_string());
        stored.metadata.uid = Some(format!("uid-{}", name));
        stored.metadata.resource_version = Some("1".to_string());
        if let (Some(Value::Object(spec)), Value::Object(defaults)) =
            (stored.data.get_mut("spec"), &self.spec_defaults)
        {
            for (field, value) in defaults {
                spec.entry(field.clone()).or_insert_with(|| value.clone());
            }
        }

        self.objects
            .lock()
            .unwrap()
            .insert(key(&resource.plural, namespace, name), stored.clone());
        Ok(stored)
    }

    async fn delete(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> Result<(), kube::Error> {
        self.record("DELETE", resource, namespace, name);
        self.objects
            .lock()
            .unwrap()
            .remove(&key(&resource.plural, namespace, name))
            .map(|_| ())
            .ok_or_else(|| not_found(resource, name))
    }
}

// ============================================================================
// Providers and configurations
// ============================================================================

pub fn provider(cluster: &Arc<MockCluster>) -> Provider {
    Provider::with_context(ProviderContext::new(cluster.clone()))
}

pub fn bridge_config(namespace: &str, name: &str) -> Value {
    json!({
        "metadata": {
            "name": name,
            "namespace": namespace,
            "labels": { "strimzi.io/cluster": "my-cluster" }
        },
        "spec": {
            "bootstrap_servers": "my-cluster-kafka-bootstrap:9092",
            "http": { "port": 8080 },
            "producer": { "config": { "acks": "all" } }
        }
    })
}

pub fn topic_config(namespace: &str, name: &str) -> Value {
    json!({
        "metadata": {
            "name": name,
            "namespace": namespace,
            "labels": { "strimzi.io/cluster": "my-cluster" }
        },
        "spec": {
            "partitions": 12,
            "replicas": 3,
            "config": { "retention.ms": 604800000, "cleanup.policy": "delete" }
        }
    })
}
