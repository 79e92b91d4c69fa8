//! KafkaUser Custom Resource Definition

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::ResourceTemplate;
use crate::engine::CrdModel;
use crate::schema::Attribute;

const ACL_OPERATIONS: &[&str] = &[
    "Read",
    "Write",
    "Create",
    "Delete",
    "Alter",
    "Describe",
    "ClusterAction",
    "AlterConfigs",
    "DescribeConfigs",
    "IdempotentWrite",
    "All",
];

/// KafkaUser resource specification
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "kafka.strimzi.io",
    version = "v1beta2",
    kind = "KafkaUser",
    plural = "kafkausers",
    singular = "kafkauser",
    shortname = "ku",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct KafkaUserSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<KafkaUserAuthentication>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<KafkaUserAuthorization>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotas: Option<KafkaUserQuotas>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<KafkaUserTemplate>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaUserAuthentication {
    /// `tls`, `tls-external` or `scram-sha-512`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Custom SCRAM-SHA-512 password, generated by the User Operator if absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Password>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Password {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_from: Option<PasswordSource>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key_ref: Option<SecretKeySelector>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretKeySelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaUserAuthorization {
    /// Only `simple` is supported
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub acls: Option<Vec<AclRule>>,
}

/// A single ACL rule
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AclRule {
    /// `allow` or `deny`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<AclRuleResource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Deprecated in favour of `operations`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AclRuleResource {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<String>,
}

/// Client quotas enforced by the brokers
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaUserQuotas {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer_byte_rate: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_byte_rate: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_percentage: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_mutation_rate: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaUserTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<ResourceTemplate>,
}

impl KafkaUserSpec {
    pub fn attributes() -> Vec<Attribute> {
        vec![
            Attribute::object(
                "authentication",
                vec![
                    Attribute::string("type")
                        .required()
                        .one_of(&["tls", "tls-external", "scram-sha-512"])
                        .description("Authentication type."),
                    Attribute::object(
                        "password",
                        vec![Attribute::object(
                            "value_from",
                            vec![Attribute::object(
                                "secret_key_ref",
                                vec![
                                    Attribute::string("key").required().description(
                                        "The key of the secret to select from.",
                                    ),
                                    Attribute::string("name")
                                        .description("Name of the referent."),
                                    Attribute::bool("optional").description(
                                        "Specify whether the Secret or its key must be defined.",
                                    ),
                                ],
                            )
                            .description("Selects a key of a Secret in the resource's namespace.")],
                        )
                        .required()
                        .description("Secret from which the password should be read.")],
                    )
                    .description(
                        "Specify the password for the user. If not set, a new password is \
                         generated by the User Operator.",
                    ),
                ],
            )
            .description(
                "Authentication mechanism enabled for this Kafka user. Authentication is \
                 optional; if it is not configured, no credentials are generated.",
            ),
            Attribute::object(
                "authorization",
                vec![
                    Attribute::string("type")
                        .required()
                        .one_of(&["simple"])
                        .description("Authorization type. Currently the only supported type is 'simple'."),
                    Attribute::object_list(
                        "acls",
                        vec![
                            Attribute::string("type")
                                .one_of(&["allow", "deny"])
                                .description(
                                    "The type of the rule. Defaults to 'allow' when not set.",
                                ),
                            Attribute::object(
                                "resource",
                                vec![
                                    Attribute::string("type")
                                        .required()
                                        .one_of(&["topic", "group", "cluster", "transactionalId"])
                                        .description("Resource type."),
                                    Attribute::string("name").description(
                                        "Name of resource for which given ACL rule applies. \
                                         Not used for 'cluster' resources.",
                                    ),
                                    Attribute::string("pattern_type")
                                        .one_of(&["literal", "prefix"])
                                        .description(
                                            "Describes the pattern used in the resource \
                                             field. Defaults to 'literal'.",
                                        ),
                                ],
                            )
                            .required()
                            .description(
                                "Indicates the resource for which given ACL rule applies.",
                            ),
                            Attribute::string("host").description(
                                "The host from which the action described in the ACL rule \
                                 is allowed or denied. Defaults to '*'.",
                            ),
                            Attribute::string("operation")
                                .one_of(ACL_OPERATIONS)
                                .description(
                                    "Operation which will be allowed or denied. Deprecated, \
                                     use 'operations' instead.",
                                ),
                            Attribute::string_list("operations")
                                .one_of(ACL_OPERATIONS)
                                .description(
                                    "List of operations which will be allowed or denied.",
                                ),
                        ],
                    )
                    .required()
                    .description("List of ACL rules which should be applied to this user."),
                ],
            )
            .description("Authorization rules for this Kafka user."),
            Attribute::object(
                "quotas",
                vec![
                    Attribute::int64("producer_byte_rate").at_least(0).description(
                        "A quota on the maximum bytes per-second that each client group can \
                         publish to a broker before the clients in the group are throttled.",
                    ),
                    Attribute::int64("consumer_byte_rate").at_least(0).description(
                        "A quota on the maximum bytes per-second that each client group can \
                         fetch from a broker before the clients in the group are throttled.",
                    ),
                    Attribute::int64("request_percentage")
                        .at_least(0)
                        .at_most(100)
                        .description(
                            "A quota on the maximum CPU utilization of each client group as a \
                             percentage of network and I/O threads.",
                        ),
                    Attribute::float64("controller_mutation_rate")
                        .at_least(0)
                        .description(
                            "A quota on the rate at which mutations are accepted for the \
                             create topics, create partitions and delete topics requests.",
                        ),
                ],
            )
            .description(
                "Quotas on requests to control the broker resources used by clients.",
            ),
            Attribute::object(
                "template",
                vec![ResourceTemplate::attribute(
                    "secret",
                    "Template for KafkaUser resources. The template allows users to specify \
                     how the 'Secret' with password or TLS certificates is generated.",
                )],
            )
            .description("Template to specify how Kafka User 'Secrets' are generated."),
        ]
    }
}

impl CrdModel for KafkaUser {
    const KIND_SNAKE: &'static str = "kafka_user";

    fn description() -> &'static str {
        "Kafka user with its credentials, ACLs and quotas."
    }

    fn spec_attributes() -> Vec<Attribute> {
        KafkaUserSpec::attributes()
    }
}
