pub mod encoder;

pub use encoder::{encode_geocell, is_geocell, DEFAULT_PRECISION, GEOCELL_ALPHABET};
