//! Attribute schemas mirroring the OpenAPI structure of custom resources
//!
//! Every attribute carries two names: the snake_case name users write in
//! configuration, and the camelCase name the Kubernetes API uses. The
//! conversion between both shapes is driven entirely by these tables.

mod check;
pub mod metadata;
mod validators;

pub use check::validate_attributes;
pub use validators::Validator;

use serde::Serialize;
use serde_json::Value;

use crate::error::Violation;

/// Whether an attribute is set by the user, the server, or either
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeMode {
    Required,
    Optional,
    Computed,
}

/// Attribute value type
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    String,
    Int64,
    Float64,
    Bool,
    /// Free-form JSON passed through untouched
    Dynamic,
    List(Box<AttributeKind>),
    Map(Box<AttributeKind>),
    Object(Vec<Attribute>),
}

/// A single attribute declaration
#[derive(Clone, Debug, Serialize)]
pub struct Attribute {
    pub name: String,
    pub api_name: String,
    pub kind: AttributeKind,
    pub mode: AttributeMode,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(skip_serializing_if = "is_false")]
    pub requires_replace: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Attribute {
    /// Optional attribute whose API name is the camelCase form of `name`
    pub fn new(name: &str, kind: AttributeKind) -> Self {
        Self {
            name: name.to_string(),
            api_name: to_camel_case(name),
            kind,
            mode: AttributeMode::Optional,
            description: String::new(),
            default: None,
            validators: Vec::new(),
            requires_replace: false,
        }
    }

    pub fn string(name: &str) -> Self {
        Self::new(name, AttributeKind::String)
    }

    pub fn int64(name: &str) -> Self {
        Self::new(name, AttributeKind::Int64)
    }

    pub fn float64(name: &str) -> Self {
        Self::new(name, AttributeKind::Float64)
    }

    pub fn bool(name: &str) -> Self {
        Self::new(name, AttributeKind::Bool)
    }

    pub fn dynamic(name: &str) -> Self {
        Self::new(name, AttributeKind::Dynamic)
    }

    pub fn string_list(name: &str) -> Self {
        Self::new(name, AttributeKind::List(Box::new(AttributeKind::String)))
    }

    pub fn int64_list(name: &str) -> Self {
        Self::new(name, AttributeKind::List(Box::new(AttributeKind::Int64)))
    }

    pub fn dynamic_list(name: &str) -> Self {
        Self::new(name, AttributeKind::List(Box::new(AttributeKind::Dynamic)))
    }

    pub fn string_map(name: &str) -> Self {
        Self::new(name, AttributeKind::Map(Box::new(AttributeKind::String)))
    }

    /// Map whose values may be strings or numbers (resource quantities)
    pub fn dynamic_map(name: &str) -> Self {
        Self::new(name, AttributeKind::Map(Box::new(AttributeKind::Dynamic)))
    }

    pub fn object(name: &str, attributes: Vec<Attribute>) -> Self {
        Self::new(name, AttributeKind::Object(attributes))
    }

    pub fn object_list(name: &str, attributes: Vec<Attribute>) -> Self {
        Self::new(
            name,
            AttributeKind::List(Box::new(AttributeKind::Object(attributes))),
        )
    }

    pub fn required(mut self) -> Self {
        self.mode = AttributeMode::Required;
        self
    }

    pub fn computed(mut self) -> Self {
        self.mode = AttributeMode::Computed;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Override the API name when it is not the camelCase form of the name
    pub fn api_name(mut self, api_name: &str) -> Self {
        self.api_name = api_name.to_string();
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// String (or every list element) must be one of `values`
    pub fn one_of(self, values: &[&str]) -> Self {
        self.validator(Validator::OneOf {
            values: values.iter().map(|v| v.to_string()).collect(),
        })
    }

    pub fn at_least(self, min: i64) -> Self {
        self.validator(Validator::AtLeast { min })
    }

    pub fn at_most(self, max: i64) -> Self {
        self.validator(Validator::AtMost { max })
    }

    pub fn matches(self, pattern: &str) -> Self {
        self.validator(Validator::Matches {
            pattern: pattern.to_string(),
        })
    }

    pub fn length_at_least(self, min: usize) -> Self {
        self.validator(Validator::LengthAtLeast { min })
    }

    /// Changing the value forces the object to be destroyed and recreated
    pub fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }

    /// The same attribute tree with every node computed and unconstrained
    pub fn into_computed(mut self) -> Self {
        self.mode = AttributeMode::Computed;
        self.default = None;
        self.validators.clear();
        self.requires_replace = false;
        self.kind = self.kind.into_computed();
        self
    }
}

impl AttributeKind {
    fn into_computed(self) -> Self {
        match self {
            AttributeKind::List(inner) => AttributeKind::List(Box::new(inner.into_computed())),
            AttributeKind::Map(inner) => AttributeKind::Map(Box::new(inner.into_computed())),
            AttributeKind::Object(attributes) => AttributeKind::Object(
                attributes
                    .into_iter()
                    .map(Attribute::into_computed)
                    .collect(),
            ),
            other => other,
        }
    }

    /// Nested attributes of an object kind
    pub fn attributes(&self) -> Option<&[Attribute]> {
        match self {
            AttributeKind::Object(attributes) => Some(attributes),
            _ => None,
        }
    }
}

/// Schema of one resource, data source, or the provider itself
#[derive(Clone, Debug, Default, Serialize)]
pub struct Schema {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Look up a top-level attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Nested attributes of a top-level object attribute
    pub fn nested(&self, name: &str) -> &[Attribute] {
        self.attribute(name)
            .and_then(|a| a.kind.attributes())
            .unwrap_or(&[])
    }

    /// Check a configuration value, collecting every violation
    pub fn validate(&self, config: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();
        validate_attributes(&self.attributes, config, "", &mut violations);
        violations
    }

    /// Fill declared defaults into null attributes of present objects
    pub fn apply_defaults(&self, config: &mut Value) {
        apply_defaults(&self.attributes, config);
    }

    /// Paths of `requires_replace` attributes whose values differ
    pub fn replacement_paths(&self, prior: &Value, planned: &Value) -> Vec<String> {
        let mut paths = Vec::new();
        collect_replacements(&self.attributes, prior, planned, "", &mut paths);
        paths
    }
}

fn apply_defaults(attributes: &[Attribute], value: &mut Value) {
    let Value::Object(map) = value else {
        return;
    };
    for attribute in attributes {
        let slot = map.entry(attribute.name.clone()).or_insert(Value::Null);
        if slot.is_null() {
            if let Some(default) = &attribute.default {
                *slot = default.clone();
            }
            continue;
        }
        match &attribute.kind {
            AttributeKind::Object(nested) => apply_defaults(nested, slot),
            AttributeKind::List(inner) => {
                if let (AttributeKind::Object(nested), Value::Array(items)) = (inner.as_ref(), slot)
                {
                    for item in items {
                        apply_defaults(nested, item);
                    }
                }
            }
            _ => {}
        }
    }
}

fn collect_replacements(
    attributes: &[Attribute],
    prior: &Value,
    planned: &Value,
    path: &str,
    out: &mut Vec<String>,
) {
    for attribute in attributes {
        let before = prior.get(&attribute.name).unwrap_or(&Value::Null);
        let after = planned.get(&attribute.name).unwrap_or(&Value::Null);
        let attribute_path = join_path(path, &attribute.name);
        if attribute.requires_replace && before != after {
            out.push(attribute_path);
            continue;
        }
        if let AttributeKind::Object(nested) = &attribute.kind {
            collect_replacements(nested, before, after, &attribute_path, out);
        }
    }
}

pub(crate) fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

/// `bootstrap_servers` -> `bootstrapServers`
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
