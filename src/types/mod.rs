pub mod derived;
pub mod identifiers;

pub use derived::{DerivationContext, DerivedRecord, DerivedValue};
pub use identifiers::{FieldKey, Fingerprint};
