pub mod ngram;

pub use ngram::{ngram, BIGRAM};
