use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::record::Record;
use super::identifiers::{FieldKey, Fingerprint};

/// Inputs every derivation sees besides the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationContext {
    /// Date recurring rules are resolved against.
    pub reference_date: NaiveDate,
}

impl DerivationContext {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    /// Resolve against the local calendar date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }
}

/// A single derived field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DerivedValue {
    Text(String),
    List(Vec<String>),
}

impl DerivedValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DerivedValue::Text(s) => Some(s),
            DerivedValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            DerivedValue::Text(_) => None,
            DerivedValue::List(items) => Some(items),
        }
    }
}

impl From<DerivedValue> for Value {
    fn from(value: DerivedValue) -> Self {
        match value {
            DerivedValue::Text(s) => Value::String(s),
            DerivedValue::List(items) => Value::Array(items.into_iter().map(Value::String).collect()),
        }
    }
}

/// Every field derived from one record, keyed and ordered by field.
/// Fields whose derivation produced nothing are absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DerivedRecord {
    fields: BTreeMap<FieldKey, DerivedValue>,
}

impl DerivedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FieldKey, value: DerivedValue) {
        self.fields.insert(key, value);
    }

    pub fn get(&self, key: FieldKey) -> Option<&DerivedValue> {
        self.fields.get(&key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &DerivedValue)> {
        self.fields.iter()
    }

    /// Write each derived field into `record` under its index field name,
    /// replacing any existing value.
    pub fn merge_into(self, record: &mut Record) {
        for (key, value) in self.fields {
            record.insert(key.as_str(), Value::from(value));
        }
    }

    /// Content hash of the derived fields. Equal derivations hash equal,
    /// whatever order the fields were inserted in.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut parts: Vec<String> = Vec::new();
        for (key, value) in &self.fields {
            parts.push(key.as_str().to_string());
            match value {
                DerivedValue::Text(s) => {
                    parts.push("text".into());
                    parts.push(s.clone());
                }
                DerivedValue::List(items) => {
                    parts.push("list".into());
                    parts.push(items.len().to_string());
                    parts.extend(items.iter().cloned());
                }
            }
        }
        Fingerprint::from_parts(parts)
    }
}
