//! KafkaBridge Custom Resource Definition

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::common::{
    ClientTls, ContainerTemplate, DeploymentTemplate, InternalServiceTemplate, JvmOptions,
    KafkaClientAuthentication, Logging, PodDisruptionBudgetTemplate, PodTemplate, Probe, Rack,
    ResourceRequirements, ResourceTemplate, Tracing,
};
use crate::engine::CrdModel;
use crate::schema::Attribute;

/// KafkaBridge resource specification
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "kafka.strimzi.io",
    version = "v1beta2",
    kind = "KafkaBridge",
    plural = "kafkabridges",
    singular = "kafkabridge",
    shortname = "kb",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct KafkaBridgeSpec {
    /// Number of pods in the Deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,

    /// Container image used for Kafka Bridge pods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Comma-separated `host:port` pairs of the Kafka cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap_servers: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<ClientTls>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<KafkaClientAuthentication>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<KafkaBridgeHttpConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_client: Option<KafkaBridgeAdminClientSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer: Option<KafkaBridgeConsumerSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<KafkaBridgeProducerSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jvm_options: Option<JvmOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_rack_init_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rack: Option<Rack>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_metrics: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<KafkaBridgeTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracing: Option<Tracing>,
}

/// HTTP listener configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaBridgeHttpConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<KafkaBridgeHttpCors>,
}

/// Cross-origin resource sharing for the HTTP listener
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaBridgeHttpCors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct KafkaBridgeAdminClientSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, Value>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaBridgeConsumerSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, Value>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct KafkaBridgeProducerSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, Value>>,
}

/// Templates for the Kubernetes objects generated for the bridge
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaBridgeTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<DeploymentTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod: Option<PodTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_service: Option<InternalServiceTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_disruption_budget: Option<PodDisruptionBudgetTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_container: Option<ContainerTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_role_binding: Option<ResourceTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account: Option<ResourceTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_container: Option<ContainerTemplate>,
}

impl KafkaBridgeSpec {
    pub fn attributes() -> Vec<Attribute> {
        vec![
            Attribute::int64("replicas")
                .at_least(0)
                .description("The number of pods in the 'Deployment'. Defaults to '1'."),
            Attribute::string("image")
                .description("The container image used for Kafka Bridge pods."),
            Attribute::string("bootstrap_servers").required().description(
                "A list of host:port pairs for establishing the initial connection to the \
                 Kafka cluster.",
            ),
            ClientTls::attribute(),
            KafkaClientAuthentication::attribute(),
            Attribute::object(
                "http",
                vec![
                    Attribute::int64("port")
                        .at_least(1023)
                        .description("The port which is the server listening on."),
                    Attribute::object(
                        "cors",
                        vec![
                            Attribute::string_list("allowed_origins").required().description(
                                "List of allowed origins. Java regular expressions can be used.",
                            ),
                            Attribute::string_list("allowed_methods")
                                .required()
                                .description("List of allowed HTTP methods."),
                        ],
                    )
                    .description("CORS configuration for the HTTP Bridge."),
                ],
            )
            .description("The HTTP related configuration."),
            Attribute::object(
                "admin_client",
                vec![Attribute::dynamic_map("config")
                    .description("The Kafka AdminClient configuration used for AdminClient instances created by the bridge.")],
            )
            .description("Kafka AdminClient related configuration."),
            Attribute::object(
                "consumer",
                vec![
                    Attribute::bool("enabled").description(
                        "Whether the HTTP consumer should be enabled or disabled. The default \
                         is enabled ('true').",
                    ),
                    Attribute::int64("timeout_seconds").description(
                        "The timeout in seconds for deleting inactive consumers, default is \
                         -1 (disabled).",
                    ),
                    Attribute::dynamic_map("config").description(
                        "The Kafka consumer configuration used for consumer instances \
                         created by the bridge.",
                    ),
                ],
            )
            .description("Kafka consumer related configuration."),
            Attribute::object(
                "producer",
                vec![
                    Attribute::bool("enabled").description(
                        "Whether the HTTP producer should be enabled or disabled. The default \
                         is enabled ('true').",
                    ),
                    Attribute::dynamic_map("config").description(
                        "The Kafka producer configuration used for producer instances \
                         created by the bridge.",
                    ),
                ],
            )
            .description("Kafka producer related configuration."),
            ResourceRequirements::attribute(),
            JvmOptions::attribute(),
            Logging::attribute("Logging configuration for Kafka Bridge."),
            Attribute::string("client_rack_init_image").description(
                "The image of the init container used for initializing the 'client.rack'.",
            ),
            Rack::attribute(
                "Configuration of the node label which will be used as the client.rack \
                 consumer configuration.",
            ),
            Attribute::bool("enable_metrics")
                .description("Enable the metrics for the Kafka Bridge. Default is false."),
            Probe::attribute("liveness_probe", "Pod liveness checking."),
            Probe::attribute("readiness_probe", "Pod readiness checking."),
            Attribute::object(
                "template",
                vec![
                    DeploymentTemplate::attribute("Template for Kafka Bridge 'Deployment'."),
                    PodTemplate::attribute("Template for Kafka Bridge 'Pods'."),
                    InternalServiceTemplate::attribute(
                        "api_service",
                        "Template for Kafka Bridge API 'Service'.",
                    ),
                    PodDisruptionBudgetTemplate::attribute(
                        "Template for Kafka Bridge 'PodDisruptionBudget'.",
                    ),
                    ContainerTemplate::attribute(
                        "bridge_container",
                        "Template for the Kafka Bridge container.",
                    ),
                    ResourceTemplate::attribute(
                        "cluster_role_binding",
                        "Template for the Kafka Bridge ClusterRoleBinding.",
                    ),
                    ResourceTemplate::attribute(
                        "service_account",
                        "Template for the Kafka Bridge service account.",
                    ),
                    ContainerTemplate::attribute(
                        "init_container",
                        "Template for the Kafka Bridge init container.",
                    ),
                ],
            )
            .description(
                "Template for Kafka Bridge resources. The template allows users to specify \
                 how a 'Deployment' and 'Pod' is generated.",
            ),
            Tracing::attribute(),
        ]
    }
}

impl CrdModel for KafkaBridge {
    const KIND_SNAKE: &'static str = "kafka_bridge";
    const SPEC_REQUIRED: bool = true;

    fn description() -> &'static str {
        "Kafka Bridge exposing a Kafka cluster over HTTP."
    }

    fn spec_attributes() -> Vec<Attribute> {
        KafkaBridgeSpec::attributes()
    }
}
