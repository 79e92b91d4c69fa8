//! Value validators, including Kubernetes object naming rules

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

lazy_static::lazy_static! {
    static ref DNS_LABEL: Regex = Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").unwrap();

    static ref DNS_SUBDOMAIN: Regex =
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$").unwrap();

    static ref QUALIFIED_NAME: Regex =
        Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").unwrap();

    /// Compiled `Matches` patterns, keyed by source
    static ref PATTERNS: RwLock<HashMap<String, Regex>> = RwLock::new(HashMap::new());
}

const DNS_LABEL_MAX: usize = 63;
const DNS_SUBDOMAIN_MAX: usize = 253;
const QUALIFIED_NAME_MAX: usize = 63;
const LABEL_VALUE_MAX: usize = 63;
const ANNOTATIONS_TOTAL_MAX: usize = 256 * 1024;

/// Constraint on a configured value
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Validator {
    /// String, or each element of a string list, is one of `values`
    OneOf { values: Vec<String> },
    AtLeast { min: i64 },
    AtMost { max: i64 },
    /// String matches the regular expression
    Matches { pattern: String },
    LengthAtLeast { min: usize },
    /// DNS-1123 subdomain, used for object names
    DnsSubdomain,
    /// DNS-1123 label, used for namespaces
    DnsLabel,
    /// Map keys and values are valid label keys and values
    Labels,
    /// Map keys are valid annotation keys and the total size is bounded
    Annotations,
}

impl Validator {
    /// Check a non-null value, returning a message on failure
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match self {
            Validator::OneOf { values } => match value {
                Value::String(s) => check_one_of(values, s),
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .try_for_each(|s| check_one_of(values, s)),
                _ => Ok(()),
            },
            Validator::AtLeast { min } => match value.as_f64() {
                Some(n) if n < *min as f64 => {
                    Err(format!("value must be at least {}, got {}", min, value))
                }
                _ => Ok(()),
            },
            Validator::AtMost { max } => match value.as_f64() {
                Some(n) if n > *max as f64 => {
                    Err(format!("value must be at most {}, got {}", max, value))
                }
                _ => Ok(()),
            },
            Validator::Matches { pattern } => {
                let Some(s) = value.as_str() else {
                    return Ok(());
                };
                let re = compiled(pattern)?;
                if re.is_match(s) {
                    Ok(())
                } else {
                    Err(format!("value '{}' must match pattern '{}'", s, pattern))
                }
            }
            Validator::LengthAtLeast { min } => match value.as_str() {
                Some(s) if s.chars().count() < *min => Err(format!(
                    "string length must be at least {}, got {}",
                    min,
                    s.chars().count()
                )),
                _ => Ok(()),
            },
            Validator::DnsSubdomain => value.as_str().map_or(Ok(()), dns_subdomain),
            Validator::DnsLabel => value.as_str().map_or(Ok(()), dns_label),
            Validator::Labels => {
                let Some(map) = value.as_object() else {
                    return Ok(());
                };
                for (key, v) in map {
                    qualified_name(key).map_err(|e| format!("label key '{}': {}", key, e))?;
                    if let Some(v) = v.as_str() {
                        label_value(v).map_err(|e| format!("label '{}': {}", key, e))?;
                    }
                }
                Ok(())
            }
            Validator::Annotations => {
                let Some(map) = value.as_object() else {
                    return Ok(());
                };
                let mut total = 0;
                for (key, v) in map {
                    qualified_name(&key.to_lowercase())
                        .map_err(|e| format!("annotation key '{}': {}", key, e))?;
                    total += key.len() + v.as_str().map_or(0, str::len);
                }
                if total > ANNOTATIONS_TOTAL_MAX {
                    return Err(format!(
                        "annotations size {} exceeds the limit of {} bytes",
                        total, ANNOTATIONS_TOTAL_MAX
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Compile a pattern on first use and reuse it afterwards
fn compiled(pattern: &str) -> Result<Regex, String> {
    if let Some(re) = PATTERNS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(pattern)
    {
        return Ok(re.clone());
    }
    let re =
        Regex::new(pattern).map_err(|e| format!("invalid pattern '{}': {}", pattern, e))?;
    PATTERNS
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .insert(pattern.to_string(), re.clone());
    Ok(re)
}

fn check_one_of(values: &[String], s: &str) -> Result<(), String> {
    if values.iter().any(|v| v == s) {
        Ok(())
    } else {
        Err(format!("value '{}' must be one of: {:?}", s, values))
    }
}

/// DNS-1123 label: lowercase alphanumerics and '-', at most 63 characters
pub fn dns_label(s: &str) -> Result<(), String> {
    if s.len() > DNS_LABEL_MAX {
        return Err(format!("must be no more than {} characters", DNS_LABEL_MAX));
    }
    if !DNS_LABEL.is_match(s) {
        return Err(format!(
            "'{}' must consist of lower case alphanumeric characters or '-', \
             and must start and end with an alphanumeric character",
            s
        ));
    }
    Ok(())
}

/// DNS-1123 subdomain: dot-separated labels, at most 253 characters
pub fn dns_subdomain(s: &str) -> Result<(), String> {
    if s.len() > DNS_SUBDOMAIN_MAX {
        return Err(format!(
            "must be no more than {} characters",
            DNS_SUBDOMAIN_MAX
        ));
    }
    if !DNS_SUBDOMAIN.is_match(s) {
        return Err(format!(
            "'{}' must consist of lower case alphanumeric characters, '-' or '.', \
             and must start and end with an alphanumeric character",
            s
        ));
    }
    Ok(())
}

/// Label/annotation key: optional DNS subdomain prefix, '/', and a name
pub fn qualified_name(s: &str) -> Result<(), String> {
    let name = match s.split_once('/') {
        Some((prefix, name)) => {
            if prefix.is_empty() {
                return Err("prefix part must be non-empty".to_string());
            }
            dns_subdomain(prefix).map_err(|e| format!("prefix part {}", e))?;
            name
        }
        None => s,
    };
    if name.is_empty() {
        return Err("name part must be non-empty".to_string());
    }
    if name.len() > QUALIFIED_NAME_MAX {
        return Err(format!(
            "name part must be no more than {} characters",
            QUALIFIED_NAME_MAX
        ));
    }
    if !QUALIFIED_NAME.is_match(name) {
        return Err(
            "name part must consist of alphanumeric characters, '-', '_' or '.', \
             and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    Ok(())
}

/// Label value: empty, or a qualified name part of at most 63 characters
pub fn label_value(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Ok(());
    }
    if s.len() > LABEL_VALUE_MAX {
        return Err(format!(
            "value must be no more than {} characters",
            LABEL_VALUE_MAX
        ));
    }
    if !QUALIFIED_NAME.is_match(s) {
        return Err(format!(
            "value '{}' must consist of alphanumeric characters, '-', '_' or '.', \
             and must start and end with an alphanumeric character",
            s
        ));
    }
    Ok(())
}
