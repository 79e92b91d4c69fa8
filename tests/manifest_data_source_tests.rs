//! Integration tests for manifest rendering and data source reads

mod common;

use common::{bridge_config, provider, topic_config, MockCluster, BRIDGE, REBALANCE, TOPIC, USER};
use serde_json::{json, Value};
use strimzi_crd_provider::diagnostics::Diagnostic;
use strimzi_crd_provider::provider::Provider;

fn manifest(type_name: &str) -> String {
    format!("{}_manifest", type_name)
}

// ============================================================================
// Manifests
// ============================================================================

#[tokio::test]
async fn test_manifest_never_calls_the_cluster() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);

    let state = provider
        .data_source(&manifest(BRIDGE))
        .unwrap()
        .read(&bridge_config("kafka", "my-bridge"))
        .await
        .unwrap();

    assert!(cluster.calls().is_empty());
    assert_eq!(state["id"], "my-bridge/kafka");
    assert_eq!(state["spec"]["http"]["port"], 8080);
}

#[tokio::test]
async fn test_manifest_yaml_has_api_version_and_kind() {
    let provider = Provider::new();

    let state = provider
        .data_source(&manifest(BRIDGE))
        .unwrap()
        .read(&bridge_config("kafka", "my-bridge"))
        .await
        .unwrap();

    let yaml = state["yaml"].as_str().unwrap();
    assert!(yaml.contains("apiVersion: kafka.strimzi.io/v1beta2"));
    assert!(yaml.contains("kind: KafkaBridge"));

    let document: Value = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(document["metadata"]["name"], "my-bridge");
    assert_eq!(document["metadata"]["namespace"], "kafka");
    assert_eq!(
        document["spec"]["bootstrapServers"],
        "my-cluster-kafka-bootstrap:9092"
    );
    assert_eq!(document["spec"]["producer"]["config"]["acks"], "all");
    assert!(document["spec"].get("bootstrap_servers").is_none());
}

#[tokio::test]
async fn test_manifest_renders_api_names_for_jvm_options() {
    let provider = Provider::new();

    let mut config = bridge_config("kafka", "my-bridge");
    config["spec"]["jvm_options"] = json!({ "xms": "512m", "xmx": "1g" });
    let state = provider
        .data_source(&manifest(BRIDGE))
        .unwrap()
        .read(&config)
        .await
        .unwrap();

    let document: Value = serde_yaml::from_str(state["yaml"].as_str().unwrap()).unwrap();
    assert_eq!(document["spec"]["jvmOptions"]["-Xms"], "512m");
    assert_eq!(document["spec"]["jvmOptions"]["-Xmx"], "1g");
    assert_eq!(state["spec"]["jvm_options"]["xmx"], "1g");
}

#[tokio::test]
async fn test_manifest_without_spec_renders_empty_spec() {
    let provider = Provider::new();

    let state = provider
        .data_source(&manifest(REBALANCE))
        .unwrap()
        .read(&json!({
            "metadata": {
                "name": "full-rebalance",
                "namespace": "kafka",
                "labels": { "strimzi.io/cluster": "my-cluster" }
            }
        }))
        .await
        .unwrap();

    assert_eq!(state["spec"], Value::Null);
    let document: Value = serde_yaml::from_str(state["yaml"].as_str().unwrap()).unwrap();
    assert_eq!(document["kind"], "KafkaRebalance");
    assert_eq!(document["spec"], json!({}));
}

#[tokio::test]
async fn test_manifest_renders_acl_rules() {
    let provider = Provider::new();

    let state = provider
        .data_source(&manifest(USER))
        .unwrap()
        .read(&json!({
            "metadata": { "name": "orders-app", "namespace": "kafka" },
            "spec": {
                "authentication": { "type": "scram-sha-512" },
                "authorization": {
                    "type": "simple",
                    "acls": [{
                        "resource": { "type": "topic", "name": "orders", "pattern_type": "prefix" },
                        "operations": ["Read", "Describe"]
                    }]
                }
            }
        }))
        .await
        .unwrap();

    let document: Value = serde_yaml::from_str(state["yaml"].as_str().unwrap()).unwrap();
    let acl = &document["spec"]["authorization"]["acls"][0];
    assert_eq!(acl["resource"]["patternType"], "prefix");
    assert_eq!(acl["operations"], json!(["Read", "Describe"]));
    assert_eq!(
        state["spec"]["authorization"]["acls"][0]["resource"]["pattern_type"],
        "prefix"
    );
}

#[tokio::test]
async fn test_manifest_rejects_invalid_config() {
    let provider = Provider::new();

    let mut config = topic_config("kafka", "orders");
    config["spec"]["replicas"] = json!(40000);
    let err = provider
        .data_source(&manifest(TOPIC))
        .unwrap()
        .read(&config)
        .await
        .unwrap_err();

    let diagnostics = Diagnostic::from_error(&err);
    assert_eq!(diagnostics[0].attribute.as_deref(), Some("spec.replicas"));
}

// ============================================================================
// Data sources
// ============================================================================

#[tokio::test]
async fn test_data_source_reads_live_object() {
    let cluster = MockCluster::new();
    cluster.insert(
        "kafkatopics",
        json!({
            "apiVersion": "kafka.strimzi.io/v1beta2",
            "kind": "KafkaTopic",
            "metadata": {
                "name": "orders",
                "namespace": "kafka",
                "labels": { "strimzi.io/cluster": "my-cluster" },
                "uid": "1234"
            },
            "spec": { "partitions": 6, "replicas": 3 }
        }),
    );
    let provider = provider(&cluster);

    let state = provider
        .data_source(TOPIC)
        .unwrap()
        .read(&json!({ "metadata": { "name": "orders", "namespace": "kafka" } }))
        .await
        .unwrap();

    assert_eq!(state["id"], "orders/kafka");
    assert_eq!(state["spec"]["partitions"], 6);
    assert_eq!(state["spec"]["topic_name"], Value::Null);
    assert_eq!(
        state["metadata"]["labels"]["strimzi.io/cluster"],
        "my-cluster"
    );
    assert_eq!(cluster.calls(), vec!["GET kafkatopics kafka/orders"]);
}

#[tokio::test]
async fn test_data_source_missing_object_is_an_error() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);

    let err = provider
        .data_source(TOPIC)
        .unwrap()
        .read(&json!({ "metadata": { "name": "orders", "namespace": "kafka" } }))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn test_data_source_spec_cannot_be_configured() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);

    let err = provider
        .data_source(TOPIC)
        .unwrap()
        .validate(&json!({
            "metadata": { "name": "orders", "namespace": "kafka" },
            "spec": { "partitions": 6 }
        }))
        .unwrap_err();

    assert!(err.to_string().contains("spec: attribute is computed"));
}
