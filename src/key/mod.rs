//! Scalar key values.
//!
//! Every level of the composite key index is keyed by a [`KeyValue`]; records only
//! hand out borrowed values and the index copies the scalars it keeps.
mod owned;

pub use owned::KeyValue;
