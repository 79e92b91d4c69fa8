//! Building blocks shared by several Strimzi custom resources
//!
//! Each struct mirrors one Strimzi API type and pairs it with the attribute
//! table that exposes it. Struct field order and attribute order match the
//! upstream CRD schemas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::schema::Attribute;

/// Labels and annotations applied to a generated Kubernetes object
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetadataTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl MetadataTemplate {
    pub fn attribute() -> Attribute {
        Attribute::object(
            "metadata",
            vec![
                Attribute::string_map("labels")
                    .description("Labels added to the Kubernetes resource."),
                Attribute::string_map("annotations")
                    .description("Annotations added to the Kubernetes resource."),
            ],
        )
        .description("Metadata applied to the resource.")
    }
}

/// Template carrying only metadata
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataTemplate>,
}

impl ResourceTemplate {
    pub fn attribute(name: &str, description: &str) -> Attribute {
        Attribute::object(name, vec![MetadataTemplate::attribute()]).description(description)
    }
}

/// Reference to a password stored in a Secret
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordSecretSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
}

impl PasswordSecretSource {
    pub fn attribute(name: &str, description: &str) -> Attribute {
        Attribute::object(
            name,
            vec![
                Attribute::string("password")
                    .required()
                    .description("The name of the key in the Secret under which the password is stored."),
                Attribute::string("secret_name")
                    .required()
                    .description("The name of the Secret containing the password."),
            ],
        )
        .description(description)
    }
}

/// Reference to a certificate and private key stored in a Secret
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertAndKeySecretSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
}

impl CertAndKeySecretSource {
    pub fn attribute(name: &str, description: &str) -> Attribute {
        Attribute::object(
            name,
            vec![
                Attribute::string("certificate")
                    .required()
                    .description("The name of the file certificate in the Secret."),
                Attribute::string("key")
                    .required()
                    .description("The name of the private key in the Secret."),
                Attribute::string("secret_name")
                    .required()
                    .description("The name of the Secret containing the certificate."),
            ],
        )
        .description(description)
    }
}

/// Reference to one or more certificates stored in a Secret
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertSecretSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
}

impl CertSecretSource {
    pub fn attribute(name: &str, description: &str) -> Attribute {
        Attribute::object_list(
            name,
            vec![
                Attribute::string("certificate")
                    .description("The name of the file certificate in the secret."),
                Attribute::string("pattern").description(
                    "Pattern for the certificate files in the secret. Use the glob syntax \
                     for the pattern. All files in the secret that match the pattern are used.",
                ),
                Attribute::string("secret_name")
                    .required()
                    .description("The name of the Secret containing the certificate."),
            ],
        )
        .description(description)
    }
}

/// Reference to a single key in a Secret
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenericSecretSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
}

impl GenericSecretSource {
    pub fn attribute(name: &str, description: &str) -> Attribute {
        Attribute::object(
            name,
            vec![
                Attribute::string("key")
                    .required()
                    .description("The key under which the secret value is stored in the Kubernetes Secret."),
                Attribute::string("secret_name")
                    .required()
                    .description("The name of the Kubernetes Secret containing the secret value."),
            ],
        )
        .description(description)
    }
}

/// TLS configuration for connecting to Kafka brokers
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientTls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_certificates: Option<Vec<CertSecretSource>>,
}

impl ClientTls {
    pub fn attribute() -> Attribute {
        Attribute::object(
            "tls",
            vec![CertSecretSource::attribute(
                "trusted_certificates",
                "Trusted certificates for TLS connection.",
            )],
        )
        .description("TLS configuration for connecting to the Kafka cluster.")
    }
}

/// Authentication used by a Kafka client component
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaClientAuthentication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<GenericSecretSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_is_jwt: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_and_key: Option<CertAndKeySecretSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_assertion: Option<GenericSecretSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<GenericSecretSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_tls_hostname_verification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_metrics: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_retries: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_retry_pause_ms: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_accept_header: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_expiry_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_secret: Option<PasswordSecretSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_timeout_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<GenericSecretSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_trusted_certificates: Option<Vec<CertSecretSource>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint_uri: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl KafkaClientAuthentication {
    pub fn attribute() -> Attribute {
        Attribute::object(
            "authentication",
            vec![
                GenericSecretSource::attribute(
                    "access_token",
                    "Link to Kubernetes Secret containing the access token which was obtained \
                     from the authorization server.",
                ),
                Attribute::bool("access_token_is_jwt").description(
                    "Configure whether access token should be treated as JWT. This should be \
                     set to 'false' if the authorization server returns opaque tokens. \
                     Defaults to 'true'.",
                ),
                Attribute::string("access_token_location").description(
                    "Path to the token file containing an access token to be used for \
                     authentication.",
                ),
                Attribute::string("audience").description(
                    "OAuth audience to use when authenticating against the authorization \
                     server.",
                ),
                CertAndKeySecretSource::attribute(
                    "certificate_and_key",
                    "Reference to the Secret which holds the certificate and private key pair.",
                ),
                GenericSecretSource::attribute(
                    "client_assertion",
                    "Link to Kubernetes secret containing the client assertion which was \
                     manually configured for the client.",
                ),
                Attribute::string("client_id").description(
                    "OAuth Client ID which the Kafka client can use to authenticate against \
                     the OAuth server and use the token endpoint URI.",
                ),
                GenericSecretSource::attribute(
                    "client_secret",
                    "Link to Kubernetes Secret containing the OAuth client secret which the \
                     Kafka client can use to authenticate against the OAuth server.",
                ),
                Attribute::int64("connect_timeout_seconds").description(
                    "The connect timeout in seconds when connecting to authorization server. \
                     If not set, the effective connect timeout is 60 seconds.",
                ),
                Attribute::bool("disable_tls_hostname_verification").description(
                    "Enable or disable TLS hostname verification. Default value is 'false'.",
                ),
                Attribute::bool("enable_metrics")
                    .description("Enable or disable OAuth metrics. Default value is 'false'."),
                Attribute::int64("http_retries").description(
                    "The maximum number of retries to attempt if an initial HTTP request \
                     fails. If not set, the default is to not attempt any retries.",
                ),
                Attribute::int64("http_retry_pause_ms").description(
                    "The pause to take before retrying a failed HTTP request. If not set, \
                     the default is to not pause at all but to immediately repeat a request.",
                ),
                Attribute::bool("include_accept_header").description(
                    "Whether the Accept header should be set in requests to the \
                     authorization servers. The default value is 'true'.",
                ),
                Attribute::int64("max_token_expiry_seconds").description(
                    "Set or limit time-to-live of the access tokens to the specified number \
                     of seconds.",
                ),
                PasswordSecretSource::attribute(
                    "password_secret",
                    "Reference to the Secret which holds the password.",
                ),
                Attribute::int64("read_timeout_seconds").description(
                    "The read timeout in seconds when connecting to authorization server. \
                     If not set, the effective read timeout is 60 seconds.",
                ),
                GenericSecretSource::attribute(
                    "refresh_token",
                    "Link to Kubernetes Secret containing the refresh token which can be \
                     used to obtain access token from the authorization server.",
                ),
                Attribute::string("scope").description(
                    "OAuth scope to use when authenticating against the authorization server.",
                ),
                CertSecretSource::attribute(
                    "tls_trusted_certificates",
                    "Trusted certificates for TLS connection to the OAuth server.",
                ),
                Attribute::string("token_endpoint_uri")
                    .description("Authorization server token endpoint URI."),
                Attribute::string("type")
                    .required()
                    .one_of(&["tls", "scram-sha-256", "scram-sha-512", "plain", "oauth"])
                    .description(
                        "Authentication type. Currently the supported types are 'tls', \
                         'scram-sha-256', 'scram-sha-512', 'plain', and 'oauth'.",
                    ),
                Attribute::string("username").description("Username used for the authentication."),
            ],
        )
        .description("Authentication configuration for connecting to the cluster.")
    }
}

/// Container health probe timings
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Probe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_threshold: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_delay_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_threshold: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i64>,
}

impl Probe {
    pub fn attribute(name: &str, description: &str) -> Attribute {
        Attribute::object(
            name,
            vec![
                Attribute::int64("failure_threshold").at_least(1).description(
                    "Minimum consecutive failures for the probe to be considered failed \
                     after having succeeded. Defaults to 3. Minimum value is 1.",
                ),
                Attribute::int64("initial_delay_seconds").at_least(0).description(
                    "The initial delay before first the health is first checked. Default \
                     to 15 seconds. Minimum value is 0.",
                ),
                Attribute::int64("period_seconds").at_least(1).description(
                    "How often (in seconds) to perform the probe. Default to 10 seconds. \
                     Minimum value is 1.",
                ),
                Attribute::int64("success_threshold").at_least(1).description(
                    "Minimum consecutive successes for the probe to be considered \
                     successful after having failed. Defaults to 1.",
                ),
                Attribute::int64("timeout_seconds").at_least(1).description(
                    "The timeout for each attempted health check. Default to 5 seconds. \
                     Minimum value is 1.",
                ),
            ],
        )
        .description(description)
    }
}

/// Java system property passed to the JVM
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// JVM options for a Strimzi-managed container
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct JvmOptions {
    #[serde(rename = "-XX", skip_serializing_if = "Option::is_none")]
    pub xx: Option<BTreeMap<String, String>>,

    #[serde(rename = "-Xms", skip_serializing_if = "Option::is_none")]
    pub xms: Option<String>,

    #[serde(rename = "-Xmx", skip_serializing_if = "Option::is_none")]
    pub xmx: Option<String>,

    #[serde(rename = "gcLoggingEnabled", skip_serializing_if = "Option::is_none")]
    pub gc_logging_enabled: Option<bool>,

    #[serde(rename = "javaSystemProperties", skip_serializing_if = "Option::is_none")]
    pub java_system_properties: Option<Vec<SystemProperty>>,
}

impl JvmOptions {
    pub fn attribute() -> Attribute {
        Attribute::object(
            "jvm_options",
            vec![
                Attribute::string_map("xx")
                    .api_name("-XX")
                    .description("A map of -XX options to the JVM."),
                Attribute::string("xms")
                    .api_name("-Xms")
                    .matches(r"^[0-9]+[mMgG]?$")
                    .description("-Xms option to the JVM."),
                Attribute::string("xmx")
                    .api_name("-Xmx")
                    .matches(r"^[0-9]+[mMgG]?$")
                    .description("-Xmx option to the JVM."),
                Attribute::bool("gc_logging_enabled").description(
                    "Specifies whether the Garbage Collection logging is enabled. The default \
                     is false.",
                ),
                Attribute::object_list(
                    "java_system_properties",
                    vec![
                        Attribute::string("name").description("The system property name."),
                        Attribute::string("value").description("The system property value."),
                    ],
                )
                .description("A map of additional system properties which will be passed using the '-D' option to the JVM."),
            ],
        )
        .description("JVM Options for pods.")
    }
}

/// Selects a key of a ConfigMap
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapKeySelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

/// External logging configuration source
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalConfigurationReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map_key_ref: Option<ConfigMapKeySelector>,
}

/// Inline or external logging configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Logging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loggers: Option<BTreeMap<String, String>>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_from: Option<ExternalConfigurationReference>,
}

impl Logging {
    pub fn attribute(description: &str) -> Attribute {
        Attribute::object(
            "logging",
            vec![
                Attribute::string_map("loggers")
                    .description("A Map from logger name to logger level."),
                Attribute::string("type")
                    .required()
                    .one_of(&["inline", "external"])
                    .description("Logging type, must be either 'inline' or 'external'."),
                Attribute::object(
                    "value_from",
                    vec![Attribute::object(
                        "config_map_key_ref",
                        vec![
                            Attribute::string("key").description("The key to select."),
                            Attribute::string("name")
                                .description("Name of the referent."),
                            Attribute::bool("optional").description(
                                "Specify whether the ConfigMap or its key must be defined",
                            ),
                        ],
                    )
                    .description("Reference to the key in the ConfigMap containing the configuration.")],
                )
                .description(
                    "'ConfigMap' entry where the logging configuration is stored.",
                ),
            ],
        )
        .description(description)
    }
}

/// Compute resources for a container
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<ResourceClaim>>,

    /// Quantities may be written as strings or numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct ResourceClaim {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ResourceRequirements {
    pub fn attribute() -> Attribute {
        Attribute::object(
            "resources",
            vec![
                Attribute::object_list(
                    "claims",
                    vec![Attribute::string("name").required().description(
                        "Name must match the name of one entry in pod.spec.resourceClaims \
                         of the Pod where this field is used.",
                    )],
                )
                .description("Claims lists the names of resources that are used by this container."),
                Attribute::dynamic_map("limits")
                    .description("Limits describes the maximum amount of compute resources allowed."),
                Attribute::dynamic_map("requests")
                    .description("Requests describes the minimum amount of compute resources required."),
            ],
        )
        .description("CPU and memory resources to reserve.")
    }
}

/// Rack awareness configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology_key: Option<String>,
}

impl Rack {
    pub fn attribute(description: &str) -> Attribute {
        Attribute::object(
            "rack",
            vec![Attribute::string("topology_key").required().description(
                "A key that matches labels assigned to the Kubernetes cluster nodes. The \
                 value of the label is used to set a broker's 'broker.rack' config, and \
                 the 'client.rack' config for Kafka Connect or MirrorMaker 2.",
            )],
        )
        .description(description)
    }
}

/// Distributed tracing configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Tracing {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

impl Tracing {
    pub fn attribute() -> Attribute {
        Attribute::object(
            "tracing",
            vec![Attribute::string("type")
                .required()
                .one_of(&["jaeger", "opentelemetry"])
                .description(
                    "Type of the tracing used. Currently the only supported type is \
                     'opentelemetry' for OpenTelemetry tracing. As of Strimzi 0.37.0, \
                     'jaeger' type is not supported anymore.",
                )],
        )
        .description("The configuration of tracing in Kafka Bridge.")
    }
}

/// Environment variable set on a container
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct ContainerEnvVar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Container customizations
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContainerTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<ContainerEnvVar>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_context: Option<serde_json::Value>,
}

impl ContainerTemplate {
    pub fn attribute(name: &str, description: &str) -> Attribute {
        Attribute::object(
            name,
            vec![
                Attribute::object_list(
                    "env",
                    vec![
                        Attribute::string("name")
                            .description("The environment variable key."),
                        Attribute::string("value")
                            .description("The environment variable value."),
                    ],
                )
                .description("Environment variables which should be applied to the container."),
                Attribute::dynamic("security_context")
                    .description("Security context for the container."),
            ],
        )
        .description(description)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct LocalObjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Toleration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub toleration_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct HostAlias {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostnames: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

/// Pod customizations
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PodTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_config: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_service_links: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_aliases: Option<Vec<HostAlias>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_secrets: Option<Vec<LocalObjectReference>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_context: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_grace_period_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmp_dir_size_limit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology_spread_constraints: Option<Vec<serde_json::Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<serde_json::Value>>,
}

impl PodTemplate {
    pub fn attribute(description: &str) -> Attribute {
        Attribute::object(
            "pod",
            vec![
                Attribute::dynamic("affinity").description("The pod's affinity rules."),
                Attribute::dynamic("dns_config").description(
                    "The pod's DNSConfig. If specified, it will be merged to the generated \
                     DNS configuration based on the DNSPolicy.",
                ),
                Attribute::string("dns_policy")
                    .one_of(&["ClusterFirst", "ClusterFirstWithHostNet", "Default", "None"])
                    .description("The pod's DNSPolicy. Defaults to 'ClusterFirst'."),
                Attribute::bool("enable_service_links").description(
                    "Indicates whether information about services should be injected into \
                     Pod's environment variables.",
                ),
                Attribute::object_list(
                    "host_aliases",
                    vec![
                        Attribute::string_list("hostnames")
                            .description("Hostnames for the above IP address."),
                        Attribute::string("ip")
                            .description("IP address of the host file entry."),
                    ],
                )
                .description(
                    "The pod's HostAliases. HostAliases is an optional list of hosts and \
                     IPs that will be injected into the Pod's hosts file if specified.",
                ),
                Attribute::object_list(
                    "image_pull_secrets",
                    vec![Attribute::string("name").description("Name of the referent.")],
                )
                .description(
                    "List of references to secrets in the same namespace to use for \
                     pulling any of the images used by this Pod.",
                ),
                MetadataTemplate::attribute(),
                Attribute::string("priority_class_name").description(
                    "The name of the priority class used to assign priority to the pods.",
                ),
                Attribute::string("scheduler_name").description(
                    "The name of the scheduler used to dispatch this 'Pod'. If not \
                     specified, the default scheduler will be used.",
                ),
                Attribute::dynamic("security_context").description(
                    "Configures pod-level security attributes and common container settings.",
                ),
                Attribute::int64("termination_grace_period_seconds")
                    .at_least(0)
                    .description(
                        "The grace period is the duration in seconds after the processes \
                         running in the pod are sent a termination signal, and the time \
                         when the processes are forcibly halted with a kill signal. \
                         Defaults to 30 seconds.",
                    ),
                Attribute::string("tmp_dir_size_limit")
                    .matches(r"^([0-9.]+)([eEinumkKMGTP]*[-+]?[0-9]*)$")
                    .description(
                        "Defines the total amount of pod memory allocated for the temporary \
                         'EmptyDir' volume '/tmp'. Specify the allocation in memory units, \
                         for example, '100Mi' for 100 mebibytes. Default value is '5Mi'.",
                    ),
                Attribute::object_list(
                    "tolerations",
                    vec![
                        Attribute::string("effect"),
                        Attribute::string("key"),
                        Attribute::string("operator"),
                        Attribute::int64("toleration_seconds"),
                        Attribute::string("value"),
                    ],
                )
                .description("The pod's tolerations."),
                Attribute::dynamic_list("topology_spread_constraints")
                .description("The pod's topology spread constraints."),
                Attribute::dynamic_list("volumes")
                .description("Additional volumes that can be mounted to the pod."),
            ],
        )
        .description(description)
    }
}

/// Template for a Kubernetes Deployment
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_strategy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataTemplate>,
}

impl DeploymentTemplate {
    pub fn attribute(description: &str) -> Attribute {
        Attribute::object(
            "deployment",
            vec![
                Attribute::string("deployment_strategy")
                    .one_of(&["RollingUpdate", "Recreate"])
                    .description(
                        "Pod replacement strategy for deployment configuration changes. \
                         Valid values are 'RollingUpdate' and 'Recreate'. Defaults to \
                         'RollingUpdate'.",
                    ),
                MetadataTemplate::attribute(),
            ],
        )
        .description(description)
    }
}

/// Template for an internal Kubernetes Service
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InternalServiceTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_families: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_family_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataTemplate>,
}

impl InternalServiceTemplate {
    pub fn attribute(name: &str, description: &str) -> Attribute {
        Attribute::object(
            name,
            vec![
                Attribute::string_list("ip_families")
                    .one_of(&["IPv4", "IPv6"])
                    .description(
                        "Specifies the IP Families used by the service. Available options \
                         are 'IPv4' and 'IPv6'. If unspecified, Kubernetes will choose the \
                         default value based on the 'ipFamilyPolicy' setting.",
                    ),
                Attribute::string("ip_family_policy")
                    .one_of(&["SingleStack", "PreferDualStack", "RequireDualStack"])
                    .description(
                        "Specifies the IP Family Policy used by the service. Available \
                         options are 'SingleStack', 'PreferDualStack' and 'RequireDualStack'.",
                    ),
                MetadataTemplate::attribute(),
            ],
        )
        .description(description)
    }
}

/// Template for a PodDisruptionBudget
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PodDisruptionBudgetTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataTemplate>,
}

impl PodDisruptionBudgetTemplate {
    pub fn attribute(description: &str) -> Attribute {
        Attribute::object(
            "pod_disruption_budget",
            vec![
                Attribute::int64("max_unavailable").at_least(0).description(
                    "Maximum number of unavailable pods to allow automatic Pod eviction. A \
                     Pod eviction is allowed when the 'maxUnavailable' number of pods or \
                     fewer are unavailable after the eviction. Defaults to 1.",
                ),
                MetadataTemplate::attribute(),
            ],
        )
        .description(description)
    }
}
