//! Records read by the key index.
//!
//! The index only ever asks a record for the value of a named column, so any
//! column-to-scalar mapping can take part through the [`Row`] trait. [`Record`] is the
//! owned implementation used for projections and decoded input.

pub mod extract;
pub mod json;

use std::{
    collections::{btree_map, BTreeMap, HashMap},
    hash::BuildHasher,
};

use serde::Serialize;

use crate::key::KeyValue;

/// Read access to the columns of a single record.
pub trait Row {
    /// Value stored under `column`, or `None` when the record has no such column.
    fn column(&self, column: &str) -> Option<&KeyValue>;
}

impl<R: Row + ?Sized> Row for &R {
    fn column(&self, column: &str) -> Option<&KeyValue> {
        (**self).column(column)
    }
}

impl<S: BuildHasher> Row for HashMap<String, KeyValue, S> {
    fn column(&self, column: &str) -> Option<&KeyValue> {
        self.get(column)
    }
}

impl Row for BTreeMap<String, KeyValue> {
    fn column(&self, column: &str) -> Option<&KeyValue> {
        self.get(column)
    }
}

/// Owned mapping from column name to scalar value.
///
/// Columns are kept sorted by name, so two records built with different insertion
/// orders compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    columns: BTreeMap<String, KeyValue>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `column` to `value`, returning the previous value if any.
    pub fn insert(
        &mut self,
        column: impl Into<String>,
        value: impl Into<KeyValue>,
    ) -> Option<KeyValue> {
        self.columns.insert(column.into(), value.into())
    }

    /// Value stored under `column`.
    pub fn get(&self, column: &str) -> Option<&KeyValue> {
        self.columns.get(column)
    }

    /// Remove `column`, returning its value.
    pub fn remove(&mut self, column: &str) -> Option<KeyValue> {
        self.columns.remove(column)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate columns in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, KeyValue> {
        self.columns.iter()
    }
}

impl Row for Record {
    fn column(&self, column: &str) -> Option<&KeyValue> {
        self.get(column)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<KeyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        record.extend(iter);
        record
    }
}

impl<K, V> Extend<(K, V)> for Record
where
    K: Into<String>,
    V: Into<KeyValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (column, value) in iter {
            self.insert(column, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Record
where
    K: Into<String>,
    V: Into<KeyValue>,
{
    fn from(columns: [(K, V); N]) -> Self {
        columns.into_iter().collect()
    }
}

impl From<BTreeMap<String, KeyValue>> for Record {
    fn from(columns: BTreeMap<String, KeyValue>) -> Self {
        Self { columns }
    }
}

impl IntoIterator for Record {
    type Item = (String, KeyValue);
    type IntoIter = btree_map::IntoIter<String, KeyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a KeyValue);
    type IntoIter = btree_map::Iter<'a, String, KeyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
