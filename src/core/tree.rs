//! Source tree model and loader.
//!
//! The raw YAML (or JSON, which `serde_yaml` reads as well) is converted once into
//! a [`SourceValue`] tree. Everything downstream matches on the tagged union
//! instead of inspecting raw values, and mappings keep their declared key order.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde_yaml::Value;

/// Ordered mapping of keys to values, in declaration order.
pub type ValueNode = IndexMap<String, SourceValue>;

/// Top-level document: message key to value.
pub type SourceTree = ValueNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceValue {
    Scalar(String),
    Node(ValueNode),
    /// Numbers, booleans, sequences, nulls and tagged values.
    Unsupported,
}

impl SourceValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            SourceValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    fn from_yaml(value: &Value) -> Self {
        match value {
            Value::String(s) => SourceValue::Scalar(s.clone()),
            Value::Mapping(map) => SourceValue::Node(
                map.iter()
                    .filter_map(|(k, v)| mapping_key(k).map(|k| (k, SourceValue::from_yaml(v))))
                    .collect(),
            ),
            _ => SourceValue::Unsupported,
        }
    }
}

/// Mapping keys are read as strings; `1: foo` and `true: bar` are kept as "1" and "true".
fn mapping_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse source text into a tree.
///
/// An empty document yields an empty tree. A root that is not a mapping is rejected.
pub fn parse_source(content: &str) -> Result<SourceTree> {
    if content.trim().is_empty() {
        return Ok(SourceTree::new());
    }

    let value: Value =
        serde_yaml::from_str(content).context("Failed to parse translation source")?;
    match SourceValue::from_yaml(&value) {
        SourceValue::Node(tree) => Ok(tree),
        _ if value.is_null() => Ok(SourceTree::new()),
        _ => bail!("Root of translation source must be a mapping of message keys"),
    }
}

pub fn load_source(path: &Path) -> Result<SourceTree> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation source: {}", path.display()))?;
    parse_source(&content)
        .with_context(|| format!("Invalid translation source: {}", path.display()))
}
