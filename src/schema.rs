//! Key schema declaration.

use std::{fmt, sync::Arc};

use crate::error::DedupError;

/// Ordered, non-empty list of key column names.
///
/// The order defines the nesting order of a
/// [`CompositeKeyIndex`](crate::CompositeKeyIndex); it must be the same for
/// inserts and lookups but need not match the column order of the data source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchema {
    columns: Arc<[String]>,
}

impl KeySchema {
    /// Build a schema from columns in key order.
    ///
    /// # Errors
    /// Returns [`DedupError::Configuration`] when `columns` is empty.
    pub fn new<I, S>(columns: I) -> Result<Self, DedupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(DedupError::Configuration(
                "key schema requires at least one column".to_string(),
            ));
        }
        Ok(Self {
            columns: columns.into(),
        })
    }

    /// Start an empty builder.
    pub fn builder() -> KeySchemaBuilder {
        KeySchemaBuilder::default()
    }

    /// Key columns in nesting order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of key columns; also the depth of an index built over this schema.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always `false`: construction rejects empty schemas.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for KeySchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.columns.join(", "))
    }
}

/// Builder for declaring key columns incrementally.
#[derive(Clone, Debug, Default)]
pub struct KeySchemaBuilder {
    key_parts: Vec<String>,
}

impl KeySchemaBuilder {
    /// Declare a composite key with fields in the provided order, replacing any prior selection.
    pub fn composite_key<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_parts = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Append a field to the key definition.
    pub fn add_key_part(mut self, field: impl Into<String>) -> Self {
        self.key_parts.push(field.into());
        self
    }

    /// Validate and produce the schema.
    pub fn build(self) -> Result<KeySchema, DedupError> {
        KeySchema::new(self.key_parts)
    }
}
