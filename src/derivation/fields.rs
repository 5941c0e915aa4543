use crate::calendar::{resolve_codes, EventDateRule};
use crate::geocell::encode_geocell;
use crate::record::Record;
use crate::tokenize::ngram;
use crate::types::{DerivationContext, DerivedValue, FieldKey};

/// A pure derivation of one index field from one raw record.
///
/// `None` means the record simply has no value for this field.
pub trait FieldDerivation: Send + Sync {
    fn key(&self) -> FieldKey;

    fn derive(&self, record: &Record, ctx: &DerivationContext) -> Option<DerivedValue>;
}

/// N-grams of the display name.
#[derive(Debug, Clone)]
pub struct NameBigram {
    pub source: String,
    pub size: usize,
}

impl FieldDerivation for NameBigram {
    fn key(&self) -> FieldKey {
        FieldKey::NameBigram
    }

    fn derive(&self, record: &Record, _ctx: &DerivationContext) -> Option<DerivedValue> {
        let name = record.get_str(&self.source)?;
        Some(DerivedValue::List(ngram(name, self.size)))
    }
}

/// Geocell of the record's coordinate.
#[derive(Debug, Clone)]
pub struct Geocell {
    pub latitude: String,
    pub longitude: String,
    pub precision: usize,
}

impl FieldDerivation for Geocell {
    fn key(&self) -> FieldKey {
        FieldKey::Geocell
    }

    fn derive(&self, record: &Record, _ctx: &DerivationContext) -> Option<DerivedValue> {
        match (record.get_f64(&self.latitude), record.get_f64(&self.longitude)) {
            (Some(lat), Some(lon)) => {
                let cell = encode_geocell(lat, lon, self.precision);
                Some(DerivedValue::Text(cell))
            }
            _ => {
                tracing::debug!(
                    latitude_key = %self.latitude,
                    longitude_key = %self.longitude,
                    "Record has no numeric coordinate"
                );
                None
            }
        }
    }
}

/// `MMDD` codes of every event date rule, in rule order.
#[derive(Debug, Clone)]
pub struct RecurringDates {
    pub source: String,
}

impl FieldDerivation for RecurringDates {
    fn key(&self) -> FieldKey {
        FieldKey::RecurringDates
    }

    fn derive(&self, record: &Record, ctx: &DerivationContext) -> Option<DerivedValue> {
        let rules = EventDateRule::parse_list(record.get(&self.source));
        Some(DerivedValue::List(resolve_codes(&rules, ctx.reference_date)))
    }
}

/// N-grams of prefecture + ward + municipality.
#[derive(Debug, Clone)]
pub struct AddressBigram {
    pub prefecture: String,
    pub ward: String,
    pub municipality: String,
    pub size: usize,
}

impl FieldDerivation for AddressBigram {
    fn key(&self) -> FieldKey {
        FieldKey::AddressBigram
    }

    fn derive(&self, record: &Record, _ctx: &DerivationContext) -> Option<DerivedValue> {
        // Missing parts contribute nothing, never a placeholder.
        let address: String = [&self.prefecture, &self.ward, &self.municipality]
            .iter()
            .filter_map(|key| record.get_str(key))
            .collect();

        if address.is_empty() {
            return None;
        }
        Some(DerivedValue::List(ngram(&address, self.size)))
    }
}
