use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::geocell::DEFAULT_PRECISION;
use crate::tokenize::BIGRAM;
use crate::types::FieldKey;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid n-gram size: {0}")]
    InvalidNgramSize(usize),
    #[error("Invalid geocell precision: {0}")]
    InvalidGeocellPrecision(usize),
    #[error("Empty record key for: {0}")]
    EmptyKey(String),
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DerivationConfig {
    pub version: String,
    /// Derived fields to compute, in this order.
    pub fields: Vec<FieldKey>,
    pub ngram_size: usize,
    pub geocell_precision: usize,
    pub keys: SourceKeys,
}

/// Where each derivation reads its input from in a raw record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SourceKeys {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub event_dates: String,
    pub prefecture: String,
    pub ward: String,
    pub municipality: String,
}

impl Default for SourceKeys {
    fn default() -> Self {
        Self {
            name: "name".into(),
            latitude: "latitude".into(),
            longitude: "longitude".into(),
            event_dates: "dates".into(),
            prefecture: "prefecture".into(),
            ward: "ward".into(),
            municipality: "municipality".into(),
        }
    }
}

impl SourceKeys {
    fn named(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("latitude", self.latitude.as_str()),
            ("longitude", self.longitude.as_str()),
            ("event_dates", self.event_dates.as_str()),
            ("prefecture", self.prefecture.as_str()),
            ("ward", self.ward.as_str()),
            ("municipality", self.municipality.as_str()),
        ]
    }
}

impl DerivationConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            fields: FieldKey::ALL.to_vec(),
            ngram_size: BIGRAM,
            geocell_precision: DEFAULT_PRECISION,
            keys: SourceKeys::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DerivationConfig = serde_json::from_str(json)?;
        config.validated()
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check limits and drop repeated fields, keeping first occurrences.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.ngram_size == 0 {
            return Err(ConfigError::InvalidNgramSize(self.ngram_size));
        }
        if self.geocell_precision == 0 {
            return Err(ConfigError::InvalidGeocellPrecision(self.geocell_precision));
        }
        for (field, key) in self.keys.named() {
            if key.is_empty() {
                return Err(ConfigError::EmptyKey(field.to_string()));
            }
        }

        let mut seen = Vec::with_capacity(self.fields.len());
        self.fields.retain(|key| {
            if seen.contains(key) {
                false
            } else {
                seen.push(*key);
                true
            }
        });

        Ok(self)
    }
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self::v0()
    }
}
