//! Integration tests for the resource lifecycle against an in-memory cluster
//!
//! Create, read, update and delete go through the same handlers the host
//! dispatches to, with the Kubernetes API replaced by `MockCluster`.

mod common;

use common::{bridge_config, provider, topic_config, MockCluster, BRIDGE, TOPIC, USER};
use serde_json::{json, Value};
use strimzi_crd_provider::adapters::ApplyOptions;
use strimzi_crd_provider::diagnostics::Diagnostic;
use strimzi_crd_provider::engine::{ProviderContext, DEFAULT_FIELD_MANAGER};
use strimzi_crd_provider::provider::Provider;

// ============================================================================
// Create / Read
// ============================================================================

#[tokio::test]
async fn test_create_sets_id_and_applies_object() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let bridge = provider.resource(BRIDGE).unwrap();

    let state = bridge
        .create(&bridge_config("kafka", "my-bridge"))
        .await
        .unwrap();

    assert_eq!(state["id"], "my-bridge/kafka");
    assert_eq!(cluster.calls(), vec!["PATCH kafkabridges kafka/my-bridge"]);

    let stored = cluster.stored("kafkabridges", "kafka", "my-bridge").unwrap();
    assert_eq!(stored["apiVersion"], "kafka.strimzi.io/v1beta2");
    assert_eq!(stored["kind"], "KafkaBridge");
    assert_eq!(
        stored["spec"]["bootstrapServers"],
        "my-cluster-kafka-bootstrap:9092"
    );
    assert_eq!(stored["spec"]["http"]["port"], 8080);
    assert_eq!(stored["spec"]["producer"]["config"]["acks"], "all");
    assert_eq!(
        stored["metadata"]["labels"]["strimzi.io/cluster"],
        "my-cluster"
    );
}

#[tokio::test]
async fn test_create_state_is_snake_case_and_null_filled() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let bridge = provider.resource(BRIDGE).unwrap();

    let state = bridge
        .create(&bridge_config("kafka", "my-bridge"))
        .await
        .unwrap();

    let spec = &state["spec"];
    assert_eq!(spec["bootstrap_servers"], "my-cluster-kafka-bootstrap:9092");
    assert_eq!(spec["http"]["port"], 8080);
    assert_eq!(spec["http"]["cors"], Value::Null);
    assert_eq!(spec["replicas"], Value::Null);
    assert!(spec.get("bootstrapServers").is_none());
    assert_eq!(state["metadata"]["annotations"], Value::Null);
    assert_eq!(state["force_conflicts"], Value::Null);
    assert_eq!(state["field_manager"], Value::Null);
}

#[tokio::test]
async fn test_create_then_read_returns_stored_object() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let topic = provider.resource(TOPIC).unwrap();

    let created = topic.create(&topic_config("kafka", "orders")).await.unwrap();
    let read = topic.read(&created).await.unwrap();

    assert_eq!(read, created);
    assert_eq!(read["spec"]["partitions"], 12);
    assert_eq!(read["spec"]["config"]["retention.ms"], 604800000);
    assert_eq!(
        cluster.calls(),
        vec!["PATCH kafkatopics kafka/orders", "GET kafkatopics kafka/orders"]
    );
}

#[tokio::test]
async fn test_create_overwrites_computed_fields_from_response() {
    let cluster = MockCluster::with_spec_defaults(json!({ "replicas": 1 }));
    let provider = provider(&cluster);
    let bridge = provider.resource(BRIDGE).unwrap();

    let state = bridge
        .create(&bridge_config("kafka", "my-bridge"))
        .await
        .unwrap();

    assert_eq!(state["spec"]["replicas"], 1);
}

#[tokio::test]
async fn test_read_reflects_changes_made_outside() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let topic = provider.resource(TOPIC).unwrap();

    let created = topic.create(&topic_config("kafka", "orders")).await.unwrap();
    cluster.insert(
        "kafkatopics",
        json!({
            "apiVersion": "kafka.strimzi.io/v1beta2",
            "kind": "KafkaTopic",
            "metadata": { "name": "orders", "namespace": "kafka" },
            "spec": { "partitions": 24, "replicas": 3, "topicName": "orders.v1" },
            "status": { "topicId": "abc" }
        }),
    );

    let read = topic.read(&created).await.unwrap();

    assert_eq!(read["id"], "orders/kafka");
    assert_eq!(read["spec"]["partitions"], 24);
    assert_eq!(read["spec"]["topic_name"], "orders.v1");
    assert_eq!(read["spec"]["config"], Value::Null);
    assert_eq!(read["metadata"]["labels"], Value::Null);
    assert!(read.get("status").is_none());
}

#[tokio::test]
async fn test_read_missing_object_is_an_error() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let topic = provider.resource(TOPIC).unwrap();

    let state = json!({
        "id": "orders/kafka",
        "metadata": { "name": "orders", "namespace": "kafka" }
    });
    let err = topic.read(&state).await.unwrap_err();

    assert!(err.is_not_found());
    let diagnostics = Diagnostic::from_error(&err);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].summary, "Error during GET");
    assert!(diagnostics[0].detail.contains("GET Error (kafka/orders)"));
}

// ============================================================================
// Numeric values
// ============================================================================

fn user_with_quotas(quotas: Value) -> Value {
    json!({
        "metadata": { "name": "orders-app", "namespace": "kafka" },
        "spec": { "quotas": quotas }
    })
}

#[tokio::test]
async fn test_int64_values_beyond_i32_survive_create() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let bridge = provider.resource(BRIDGE).unwrap();

    let large = i64::from(i32::MAX) + 1;
    let mut config = bridge_config("kafka", "my-bridge");
    config["spec"]["replicas"] = json!(large);
    config["spec"]["consumer"] = json!({ "timeout_seconds": large });

    let planned = bridge.plan(None, &config).unwrap().planned_state;
    let state = bridge.create(&config).await.unwrap();

    assert_eq!(state["spec"], planned["spec"]);
    assert_eq!(state["spec"]["replicas"], large);
    let stored = cluster.stored("kafkabridges", "kafka", "my-bridge").unwrap();
    assert_eq!(stored["spec"]["replicas"], large);
    assert_eq!(stored["spec"]["consumer"]["timeoutSeconds"], large);
}

#[tokio::test]
async fn test_topic_partitions_beyond_i32_survive_read() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let topic = provider.resource(TOPIC).unwrap();

    let large = i64::from(i32::MAX) + 1;
    let mut config = topic_config("kafka", "orders");
    config["spec"]["partitions"] = json!(large);

    let state = topic.create(&config).await.unwrap();
    let read = topic.read(&state).await.unwrap();

    assert_eq!(read["spec"]["partitions"], large);
    assert_eq!(read["spec"], state["spec"]);
}

#[tokio::test]
async fn test_whole_float_reads_back_as_configured() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let user = provider.resource(USER).unwrap();

    let config = user_with_quotas(json!({ "controller_mutation_rate": 5 }));
    let planned = user.plan(None, &config).unwrap().planned_state;
    let state = user.create(&config).await.unwrap();

    assert_eq!(state["spec"]["quotas"]["controller_mutation_rate"], json!(5));
    assert_eq!(state["spec"], planned["spec"]);

    let read = user.read(&state).await.unwrap();
    assert_eq!(read["spec"], state["spec"]);
}

#[tokio::test]
async fn test_fractional_float_is_kept() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let user = provider.resource(USER).unwrap();

    let config = user_with_quotas(json!({ "controller_mutation_rate": 0.5 }));
    let state = user.create(&config).await.unwrap();

    assert_eq!(state["spec"]["quotas"]["controller_mutation_rate"], json!(0.5));
    let stored = cluster.stored("kafkausers", "kafka", "orders-app").unwrap();
    assert_eq!(stored["spec"]["quotas"]["controllerMutationRate"], json!(0.5));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_keeps_prior_id() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let topic = provider.resource(TOPIC).unwrap();

    let mut prior = topic.create(&topic_config("kafka", "orders")).await.unwrap();
    prior["id"] = json!("legacy-id");

    let mut config = topic_config("kafka", "orders");
    config["spec"]["partitions"] = json!(24);
    let state = topic.update(&prior, &config).await.unwrap();

    assert_eq!(state["id"], "legacy-id");
    assert_eq!(state["spec"]["partitions"], 24);
    let stored = cluster.stored("kafkatopics", "kafka", "orders").unwrap();
    assert_eq!(stored["spec"]["partitions"], 24);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_removes_object() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let topic = provider.resource(TOPIC).unwrap();

    let state = topic.create(&topic_config("kafka", "orders")).await.unwrap();
    topic.delete(&state).await.unwrap();

    assert!(cluster.stored("kafkatopics", "kafka", "orders").is_none());
    assert_eq!(
        cluster.calls().last().unwrap(),
        "DELETE kafkatopics kafka/orders"
    );
}

#[tokio::test]
async fn test_delete_missing_object_is_an_error() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let topic = provider.resource(TOPIC).unwrap();

    let state = json!({
        "id": "orders/kafka",
        "metadata": { "name": "orders", "namespace": "kafka" }
    });
    let err = topic.delete(&state).await.unwrap_err();

    assert!(err.is_not_found());
    let diagnostics = Diagnostic::from_error(&err);
    assert_eq!(diagnostics[0].summary, "Error during DELETE");
    assert!(diagnostics[0].detail.contains("does not exist"));
}

// ============================================================================
// Field manager and force conflicts
// ============================================================================

#[tokio::test]
async fn test_apply_uses_provider_defaults() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let topic = provider.resource(TOPIC).unwrap();

    topic.create(&topic_config("kafka", "orders")).await.unwrap();

    assert_eq!(
        cluster.last_apply_options().unwrap(),
        ApplyOptions {
            field_manager: DEFAULT_FIELD_MANAGER.to_string(),
            force: false,
        }
    );
}

#[tokio::test]
async fn test_apply_uses_configured_provider_defaults() {
    let cluster = MockCluster::new();
    let provider = Provider::with_context(
        ProviderContext::new(cluster.clone())
            .with_field_manager("platform-team")
            .with_force_conflicts(true),
    );
    let topic = provider.resource(TOPIC).unwrap();

    topic.create(&topic_config("kafka", "orders")).await.unwrap();

    let options = cluster.last_apply_options().unwrap();
    assert_eq!(options.field_manager, "platform-team");
    assert!(options.force);
}

#[tokio::test]
async fn test_per_resource_settings_override_provider_defaults() {
    let cluster = MockCluster::new();
    let provider = Provider::with_context(
        ProviderContext::new(cluster.clone()).with_force_conflicts(true),
    );
    let topic = provider.resource(TOPIC).unwrap();

    let mut config = topic_config("kafka", "orders");
    config["field_manager"] = json!("orders-pipeline");
    config["force_conflicts"] = json!(false);
    let state = topic.create(&config).await.unwrap();

    let options = cluster.last_apply_options().unwrap();
    assert_eq!(options.field_manager, "orders-pipeline");
    assert!(!options.force);
    assert_eq!(state["field_manager"], "orders-pipeline");
    assert_eq!(state["force_conflicts"], false);
}

#[test]
fn test_patch_params_carry_field_manager_and_force() {
    let params = ApplyOptions {
        field_manager: "orders-pipeline".to_string(),
        force: true,
    }
    .patch_params();

    assert_eq!(params.field_manager.as_deref(), Some("orders-pipeline"));
    assert!(params.force);

    let params = ApplyOptions {
        field_manager: "orders-pipeline".to_string(),
        force: false,
    }
    .patch_params();
    assert!(!params.force);
}

// ============================================================================
// Unconfigured provider
// ============================================================================

#[tokio::test]
async fn test_create_without_client_reports_not_configured() {
    let provider = Provider::new();
    let topic = provider.resource(TOPIC).unwrap();

    let err = topic
        .create(&topic_config("kafka", "orders"))
        .await
        .unwrap_err();

    assert_eq!(
        Diagnostic::from_error(&err)[0].summary,
        "Provider not configured"
    );
}

#[tokio::test]
async fn test_invalid_config_never_reaches_the_cluster() {
    let cluster = MockCluster::new();
    let provider = provider(&cluster);
    let topic = provider.resource(TOPIC).unwrap();

    let mut config = topic_config("kafka", "orders");
    config["spec"]["partitions"] = json!(0);
    let err = topic.create(&config).await.unwrap_err();

    assert!(err.to_string().to_lowercase().contains("spec.partitions"));
    assert!(cluster.calls().is_empty());
}
