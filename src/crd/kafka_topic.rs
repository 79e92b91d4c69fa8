//! KafkaTopic Custom Resource Definition

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::engine::CrdModel;
use crate::schema::Attribute;

/// Largest replication factor Kafka accepts
const MAX_REPLICAS: i64 = 32767;

/// KafkaTopic resource specification
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "kafka.strimzi.io",
    version = "v1beta2",
    kind = "KafkaTopic",
    plural = "kafkatopics",
    singular = "kafkatopic",
    shortname = "kt",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct KafkaTopicSpec {
    /// Topic name in Kafka, defaults to `metadata.name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitions: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,

    /// Topic-level configuration, e.g. `retention.ms`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, Value>>,
}

impl KafkaTopicSpec {
    pub fn attributes() -> Vec<Attribute> {
        vec![
            Attribute::string("topic_name").description(
                "The name of the topic. When absent this will default to the metadata.name \
                 of the topic.",
            ),
            Attribute::int64("partitions").at_least(1).description(
                "The number of partitions the topic should have. When absent this will \
                 default to the broker configuration for 'num.partitions'.",
            ),
            Attribute::int64("replicas")
                .at_least(1)
                .at_most(MAX_REPLICAS)
                .description(
                    "The number of replicas the topic should have. When absent this will \
                     default to the broker configuration for 'default.replication.factor'.",
                ),
            Attribute::dynamic_map("config").description("The topic configuration."),
        ]
    }
}

impl CrdModel for KafkaTopic {
    const KIND_SNAKE: &'static str = "kafka_topic";

    fn description() -> &'static str {
        "Kafka topic managed by the Strimzi Topic Operator."
    }

    fn spec_attributes() -> Vec<Attribute> {
        KafkaTopicSpec::attributes()
    }
}
