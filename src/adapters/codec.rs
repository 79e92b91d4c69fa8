//! Conversion between the snake_case state shape and the camelCase API shape

use serde_json::{Map, Value};

use crate::schema::{Attribute, AttributeKind};

/// Rename configuration keys to API names, dropping nulls
///
/// Keys the attribute table does not know are dropped; map keys and
/// dynamic values are passed through untouched.
pub fn to_api(attributes: &[Attribute], value: &Value) -> Value {
    let Value::Object(object) = value else {
        return Value::Null;
    };
    let mut out = Map::new();
    for attribute in attributes {
        let Some(v) = object.get(&attribute.name) else {
            continue;
        };
        let converted = kind_to_api(&attribute.kind, v);
        if !converted.is_null() {
            out.insert(attribute.api_name.clone(), converted);
        }
    }
    Value::Object(out)
}

fn kind_to_api(kind: &AttributeKind, value: &Value) -> Value {
    if value.is_null() {
        return Value::Null;
    }
    match kind {
        AttributeKind::Object(attributes) => to_api(attributes, value),
        AttributeKind::List(inner) => match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| kind_to_api(inner, item))
                    .filter(|item| !item.is_null())
                    .collect(),
            ),
            other => other.clone(),
        },
        AttributeKind::Map(inner) => match value {
            Value::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), kind_to_api(inner, v)))
                    .filter(|(_, v)| !v.is_null())
                    .collect(),
            ),
            other => other.clone(),
        },
        _ => value.clone(),
    }
}

/// Rename API keys back to attribute names
///
/// Every declared attribute is present in the result; the ones the API
/// object does not carry are null. Fields the table does not declare
/// (status, managedFields, ...) are dropped.
pub fn from_api(attributes: &[Attribute], value: Option<&Value>) -> Value {
    let object = value.and_then(Value::as_object);
    let mut out = Map::new();
    for attribute in attributes {
        let v = object
            .and_then(|o| o.get(&attribute.api_name))
            .map_or(Value::Null, |v| kind_from_api(&attribute.kind, v));
        out.insert(attribute.name.clone(), v);
    }
    Value::Object(out)
}

fn kind_from_api(kind: &AttributeKind, value: &Value) -> Value {
    if value.is_null() {
        return Value::Null;
    }
    match kind {
        AttributeKind::Object(attributes) => from_api(attributes, Some(value)),
        AttributeKind::List(inner) => match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| kind_from_api(inner, item))
                    .collect(),
            ),
            other => other.clone(),
        },
        AttributeKind::Map(inner) => match value {
            Value::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), kind_from_api(inner, v)))
                    .collect(),
            ),
            other => other.clone(),
        },
        AttributeKind::Float64 => whole_number(value).unwrap_or_else(|| value.clone()),
        _ => value.clone(),
    }
}

/// Whole floats read back as integers so `5` in config stays `5` in state
fn whole_number(value: &Value) -> Option<Value> {
    if value.is_i64() || value.is_u64() {
        return None;
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(Value::from(f as i64))
    } else {
        None
    }
}
