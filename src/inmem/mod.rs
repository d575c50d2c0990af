//! In-memory structures.
//!
//! - `composite` contains the nested composite key index used for duplicate detection.

pub(crate) mod composite;
