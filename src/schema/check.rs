//! Configuration checks against an attribute table

use serde_json::Value;

use super::{join_path, Attribute, AttributeKind, AttributeMode};
use crate::error::Violation;

/// Validate an object value against `attributes`, appending to `out`
pub fn validate_attributes(
    attributes: &[Attribute],
    value: &Value,
    path: &str,
    out: &mut Vec<Violation>,
) {
    let empty = serde_json::Map::new();
    let object = match value {
        Value::Object(map) => map,
        Value::Null => &empty,
        _ => {
            out.push(Violation::new(display_path(path), "expected an object"));
            return;
        }
    };

    for key in object.keys() {
        if !attributes.iter().any(|a| &a.name == key) {
            out.push(Violation::new(
                join_path(path, key),
                "unsupported attribute",
            ));
        }
    }

    for attribute in attributes {
        let attribute_path = join_path(path, &attribute.name);
        let value = object.get(&attribute.name).unwrap_or(&Value::Null);

        if value.is_null() {
            if attribute.mode == AttributeMode::Required && attribute.default.is_none() {
                out.push(Violation::new(attribute_path, "attribute is required"));
            }
            continue;
        }

        if attribute.mode == AttributeMode::Computed {
            out.push(Violation::new(
                attribute_path,
                "attribute is computed and cannot be configured",
            ));
            continue;
        }

        let before = out.len();
        check_kind(&attribute.kind, value, &attribute_path, out);
        if out.len() > before {
            continue;
        }

        for validator in &attribute.validators {
            if let Err(message) = validator.check(value) {
                out.push(Violation::new(attribute_path.clone(), message));
            }
        }
    }
}

fn check_kind(kind: &AttributeKind, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match kind {
        AttributeKind::String => {
            if !value.is_string() {
                out.push(Violation::new(path, "expected a string"));
            }
        }
        AttributeKind::Int64 => {
            if value.as_i64().is_none() {
                out.push(Violation::new(path, "expected an integer"));
            }
        }
        AttributeKind::Float64 => {
            if !value.is_number() {
                out.push(Violation::new(path, "expected a number"));
            }
        }
        AttributeKind::Bool => {
            if !value.is_boolean() {
                out.push(Violation::new(path, "expected a boolean"));
            }
        }
        AttributeKind::Dynamic => {}
        AttributeKind::List(inner) => match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{}[{}]", path, index);
                    if item.is_null() {
                        out.push(Violation::new(item_path, "list elements must not be null"));
                    } else {
                        check_kind(inner, item, &item_path, out);
                    }
                }
            }
            _ => out.push(Violation::new(path, "expected a list")),
        },
        AttributeKind::Map(inner) => match value {
            Value::Object(entries) => {
                for (key, item) in entries {
                    let item_path = format!("{}[\"{}\"]", path, key);
                    if !item.is_null() {
                        check_kind(inner, item, &item_path, out);
                    }
                }
            }
            _ => out.push(Violation::new(path, "expected a map")),
        },
        AttributeKind::Object(attributes) => validate_attributes(attributes, value, path, out),
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}
