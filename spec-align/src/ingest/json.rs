//! JSON front end.
//!
//! Maps plain JSON onto content trees:
//!
//! - an object becomes a Mapping, or an OrderedMapping when it carries an
//!   `"order"` array naming its keys; keys listed in a `"wildcards"` array
//!   become Wildcards
//! - an array must start with a boolean: `true` makes the rest a Sequence,
//!   `false` a Multiset
//! - strings, numbers and booleans become Leaves of their text
//!
//! Every node is tagged with a [`Marker`] holding the document label.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde_json::{Map, Value};

use super::{Document, Producer};
use crate::constants::CONTENT_ROOT_KEY;
use crate::content::{Content, Marker, OrderedMapping, Origin, PosRef};
use crate::error::{Error, Result};

/// Object key holding the explicit key order.
pub const ORDER_KEY: &str = "order";

/// Object key listing the keys to treat as wildcards.
pub const WILDCARDS_KEY: &str = "wildcards";

/// Builds a document from a JSON value.
#[derive(Debug, Clone)]
pub struct JsonProducer {
    label: String,
    value: Value,
    position: PosRef,
}

impl JsonProducer {
    /// Creates a producer for an already parsed JSON value.
    pub fn new(label: impl Into<String>, value: Value) -> Self {
        let label = label.into();
        JsonProducer {
            position: Arc::new(Marker(label.clone())),
            label,
            value,
        }
    }

    /// Creates a producer from JSON text.
    pub fn from_json_str(label: impl Into<String>, text: &str) -> Result<Self> {
        let value = serde_json::from_str(text)?;
        Ok(Self::new(label, value))
    }

    /// Creates a producer from a JSON file, labelled with the file name.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_json_str(label, &text)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn origin(&self) -> Origin {
        Origin::Raw(self.position.clone())
    }

    /// Converts one JSON value into content.
    pub fn parse(&self, value: &Value) -> Result<Content> {
        let content = match value {
            Value::Object(object) => self.parse_object(object)?,
            Value::Array(values) => self.parse_array(values)?,
            Value::String(s) => Content::leaf(s.as_str()),
            Value::Number(n) => Content::leaf(n.to_string()),
            Value::Bool(b) => Content::leaf(b.to_string()),
            Value::Null => return Err(Error::Ingest("null has no content equivalent".to_string())),
        };
        Ok(content.with_origin(self.origin()))
    }

    fn parse_object(&self, object: &Map<String, Value>) -> Result<Content> {
        let order = match object.get(ORDER_KEY) {
            Some(value) => string_list(ORDER_KEY, value)?,
            None => Vec::new(),
        };
        let wildcards: FxHashSet<String> = match object.get(WILDCARDS_KEY) {
            Some(value) => string_list(WILDCARDS_KEY, value)?.into_iter().collect(),
            None => FxHashSet::default(),
        };

        let mut entries = IndexMap::with_capacity(object.len());
        for (key, value) in object {
            if key == ORDER_KEY || key == WILDCARDS_KEY {
                continue;
            }
            let content = if wildcards.contains(key) {
                Content::wildcard().with_origin(self.origin())
            } else {
                self.parse(value)?
            };
            entries.insert(key.clone(), content);
        }

        if order.is_empty() {
            return Ok(Content::mapping(entries));
        }

        // Keys the order does not mention follow the ordered ones.
        let mut order = order;
        let listed: FxHashSet<&str> = order.iter().map(String::as_str).collect();
        let unlisted: Vec<String> = entries
            .keys()
            .filter(|key| !listed.contains(key.as_str()))
            .cloned()
            .collect();
        order.extend(unlisted);

        Ok(Content::OrderedMapping(OrderedMapping::from_parts(entries, &order)?))
    }

    fn parse_array(&self, values: &[Value]) -> Result<Content> {
        let Some((head, rest)) = values.split_first() else {
            return Err(Error::Ingest(
                "array must start with a boolean ordering flag".to_string(),
            ));
        };
        let Value::Bool(is_ordered) = head else {
            return Err(Error::Ingest(format!(
                "array must start with a boolean ordering flag, found {}",
                head
            )));
        };

        let items = rest
            .iter()
            .map(|value| self.parse(value))
            .collect::<Result<Vec<_>>>()?;
        Ok(if *is_ordered {
            Content::sequence(items)
        } else {
            Content::multiset(items)
        })
    }
}

impl Producer for JsonProducer {
    fn produce(&self) -> Result<Document> {
        let root = self.parse(&self.value)?;
        let root = if root.is_record() {
            root
        } else {
            Content::mapping([(CONTENT_ROOT_KEY, root)]).with_origin(self.origin())
        };
        Ok(Document::new(self.label.clone(), root))
    }
}

/// Converts an already parsed JSON value into a document.
pub fn parse_value(label: &str, value: Value) -> Result<Document> {
    JsonProducer::new(label, value).produce()
}

/// Parses JSON text into a document.
pub fn parse_str(label: &str, text: &str) -> Result<Document> {
    JsonProducer::from_json_str(label, text)?.produce()
}

/// Parses a JSON file into a document.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    JsonProducer::open(path)?.produce()
}

fn string_list(name: &str, value: &Value) -> Result<Vec<String>> {
    let Value::Array(values) = value else {
        return Err(Error::Ingest(format!("`{}` must be an array of strings", name)));
    };
    values
        .iter()
        .map(|v| match v {
            Value::String(s) => Ok(s.clone()),
            other => Err(Error::Ingest(format!(
                "`{}` must only hold strings, found {}",
                name, other
            ))),
        })
        .collect()
}
