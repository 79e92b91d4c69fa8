//! The `metadata` block shared by every resource type

use super::{Attribute, Validator};

/// Metadata block for resources and manifests
///
/// Name and namespace are required and force replacement when changed.
pub fn resource_metadata() -> Attribute {
    Attribute::object(
        "metadata",
        vec![
            Attribute::string("name")
                .required()
                .requires_replace()
                .validator(Validator::DnsSubdomain)
                .description(
                    "Unique identifier for this object within its namespace. \
                     Cannot be updated.",
                ),
            Attribute::string("namespace")
                .required()
                .requires_replace()
                .validator(Validator::DnsLabel)
                .description("Namespace the object lives in. Cannot be updated."),
            Attribute::string_map("labels")
                .validator(Validator::Labels)
                .description(
                    "Map of string keys and values that can be used to organize and \
                     categorize objects.",
                ),
            Attribute::string_map("annotations")
                .validator(Validator::Annotations)
                .description(
                    "Unstructured key value map stored with the object that may be used \
                     to store arbitrary metadata.",
                ),
        ],
    )
    .required()
    .description("Data that helps uniquely identify this object.")
}

/// Metadata block for data sources: identity in, labels and annotations out
pub fn data_source_metadata() -> Attribute {
    Attribute::object(
        "metadata",
        vec![
            Attribute::string("name")
                .required()
                .validator(Validator::DnsSubdomain)
                .description("Name of the object to read."),
            Attribute::string("namespace")
                .required()
                .validator(Validator::DnsLabel)
                .description("Namespace of the object to read."),
            Attribute::string_map("labels").computed().description(
                "Map of string keys and values that can be used to organize and \
                 categorize objects.",
            ),
            Attribute::string_map("annotations").computed().description(
                "Unstructured key value map stored with the object.",
            ),
        ],
    )
    .required()
    .description("Data that identifies the object to read.")
}
