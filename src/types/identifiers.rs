use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Name of a derived index field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    NameBigram,
    Geocell,
    RecurringDates,
    AddressBigram,
}

impl FieldKey {
    pub const ALL: [FieldKey; 4] = [
        FieldKey::NameBigram,
        FieldKey::Geocell,
        FieldKey::RecurringDates,
        FieldKey::AddressBigram,
    ];

    /// The field name used in index records.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::NameBigram => "nameBigram",
            FieldKey::Geocell => "geocell",
            FieldKey::RecurringDates => "recurringDates",
            FieldKey::AddressBigram => "addressBigram",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content hash of a set of derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Parts are length-prefixed, so distinct part lists never share input bytes.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hasher = Sha256::new();
        for part in parts {
            let part = part.as_ref();
            hasher.update(part.len().to_string().as_bytes());
            hasher.update(b":");
            hasher.update(part.as_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        Fingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
