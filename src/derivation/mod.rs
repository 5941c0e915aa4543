pub mod config;
pub mod fields;

use crate::record::Record;
use crate::types::{DerivationContext, DerivedRecord, DerivedValue, FieldKey};
pub use config::{ConfigError, DerivationConfig, SourceKeys};
pub use fields::{AddressBigram, FieldDerivation, Geocell, NameBigram, RecurringDates};

/// The derivation registered for `key`, wired to the configured record keys.
pub fn derivation_for(key: FieldKey, config: &DerivationConfig) -> Box<dyn FieldDerivation> {
	let keys = &config.keys;
	match key {
		FieldKey::NameBigram => Box::new(NameBigram {
			source: keys.name.clone(),
			size: config.ngram_size,
		}),
		FieldKey::Geocell => Box::new(Geocell {
			latitude: keys.latitude.clone(),
			longitude: keys.longitude.clone(),
			precision: config.geocell_precision,
		}),
		FieldKey::RecurringDates => Box::new(RecurringDates {
			source: keys.event_dates.clone(),
		}),
		FieldKey::AddressBigram => Box::new(AddressBigram {
			prefecture: keys.prefecture.clone(),
			ward: keys.ward.clone(),
			municipality: keys.municipality.clone(),
			size: config.ngram_size,
		}),
	}
}

/// Runs the configured field derivations over raw records.
///
/// Holds configuration only; one deriver can be shared across threads.
pub struct RecordDeriver {
	derivations: Vec<Box<dyn FieldDerivation>>,
}

impl Default for RecordDeriver {
	fn default() -> Self {
		Self::new(&DerivationConfig::v0())
	}
}

impl RecordDeriver {
	pub fn new(config: &DerivationConfig) -> Self {
		let derivations = config
			.fields
			.iter()
			.map(|key| derivation_for(*key, config))
			.collect();

		Self { derivations }
	}

	/// Enabled fields, in derivation order.
	pub fn fields(&self) -> impl Iterator<Item = FieldKey> + '_ {
		self.derivations.iter().map(|d| d.key())
	}

	/// Derive every enabled field. Fields with no value are left out.
	pub fn derive(&self, record: &Record, ctx: &DerivationContext) -> DerivedRecord {
		let mut derived = DerivedRecord::new();

		for derivation in &self.derivations {
			let key = derivation.key();
			match derivation.derive(record, ctx) {
				Some(value) => {
					tracing::trace!(field = %key, "Derived field");
					derived.insert(key, value);
				}
				None => {
					tracing::trace!(field = %key, "No value for field");
				}
			}
		}

		derived
	}

	/// Derive a single field, or `None` when it is disabled or has no value.
	pub fn derive_field(
		&self,
		key: FieldKey,
		record: &Record,
		ctx: &DerivationContext,
	) -> Option<DerivedValue> {
		self.derivations
			.iter()
			.find(|d| d.key() == key)
			.and_then(|d| d.derive(record, ctx))
	}
}
