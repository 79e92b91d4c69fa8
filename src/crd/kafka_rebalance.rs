//! KafkaRebalance Custom Resource Definition

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::CrdModel;
use crate::schema::Attribute;

/// KafkaRebalance resource specification
///
/// Asks Cruise Control for an optimization proposal over the cluster named
/// by the `strimzi.io/cluster` label.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "kafka.strimzi.io",
    version = "v1beta2",
    kind = "KafkaRebalance",
    plural = "kafkarebalances",
    singular = "kafkarebalance",
    shortname = "kr",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct KafkaRebalanceSpec {
    /// `full`, `add-brokers` or `remove-brokers`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Broker IDs, only used by the `add-brokers` and `remove-brokers` modes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brokers: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_hard_goal_check: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebalance_disk: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_topics: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_partition_movements_per_broker: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_intra_broker_partition_movements: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_leader_movements: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_throttle: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replica_movement_strategies: Option<Vec<String>>,
}

impl KafkaRebalanceSpec {
    pub fn attributes() -> Vec<Attribute> {
        vec![
            Attribute::string("mode")
                .one_of(&["full", "add-brokers", "remove-brokers"])
                .description(
                    "Mode to run the rebalancing. 'full' uses all brokers of the cluster, \
                     'add-brokers' moves replicas to newly added brokers and \
                     'remove-brokers' moves replicas off brokers about to be removed. \
                     Defaults to 'full'.",
                ),
            Attribute::int64_list("brokers").description(
                "The list of newly added brokers in case of scaling up or the ones to be \
                 removed in case of scaling down to use for rebalancing.",
            ),
            Attribute::string_list("goals").description(
                "A list of goals, ordered by decreasing priority, to use for generating and \
                 executing the rebalance proposal.",
            ),
            Attribute::bool("skip_hard_goal_check").description(
                "Whether to allow the hard goals specified in the Kafka CR to be skipped in \
                 optimization proposal generation.",
            ),
            Attribute::bool("rebalance_disk").description(
                "Enables intra-broker disk balancing, which balances disk space utilization \
                 between disks on the same broker.",
            ),
            Attribute::string("excluded_topics").description(
                "A regular expression where any matching topics will be excluded from the \
                 calculation of optimization proposals.",
            ),
            Attribute::int64("concurrent_partition_movements_per_broker")
                .at_least(0)
                .description(
                    "The upper bound of ongoing partition replica movements going into/out \
                     of each broker. Default is 5.",
                ),
            Attribute::int64("concurrent_intra_broker_partition_movements")
                .at_least(0)
                .description(
                    "The upper bound of ongoing partition replica movements between disks \
                     within each broker. Default is 2.",
                ),
            Attribute::int64("concurrent_leader_movements")
                .at_least(0)
                .description(
                    "The upper bound of ongoing partition leadership movements. Default is \
                     1000.",
                ),
            Attribute::int64("replication_throttle")
                .at_least(0)
                .description(
                    "The upper bound, in bytes per second, on the bandwidth used to move \
                     replicas. There is no limit by default.",
                ),
            Attribute::string_list("replica_movement_strategies").description(
                "A list of strategy class names used to determine the execution order for \
                 the replica movements in the generated optimization proposal.",
            ),
        ]
    }
}

impl CrdModel for KafkaRebalance {
    const KIND_SNAKE: &'static str = "kafka_rebalance";

    fn description() -> &'static str {
        "Cruise Control rebalance request for a Kafka cluster."
    }

    fn spec_attributes() -> Vec<Attribute> {
        KafkaRebalanceSpec::attributes()
    }
}
