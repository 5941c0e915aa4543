use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Record must be a JSON object")]
    NotAnObject,
}

/// A raw source record: field name to JSON value.
///
/// Keys are kept sorted so serialized records are byte-stable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    inner: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Record {
            inner: BTreeMap::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            _ => Err(RecordError::NotAnObject),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.inner.insert(key.into(), value.into());
    }

    // Fields of `other` override fields of `self`
    pub fn merge(&mut self, other: Record) {
        for (k, v) in other.inner {
            self.inner.insert(k, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.inner.get(key).and_then(Value::as_str)
    }

    /// Only JSON numbers count; numeric strings are absent.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.inner.get(key).and_then(Value::as_f64)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record {
            inner: map.into_iter().collect(),
        }
    }
}
