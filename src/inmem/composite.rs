//! Composite key index.
//!
//! A tree of depth `schema.len()`. Every level but the last maps the value of one key
//! column to the next level; the last level is a set of values of the final column.
//! A key tuple is present iff its full path exists and the final set holds the last
//! value. Tuples are never hashed as a whole: each level hashes a single scalar.

use std::collections::{HashMap, HashSet};

use crate::{error::DedupError, key::KeyValue, record::Row, schema::KeySchema};

/// Lookup value used for a column the record does not carry.
static ABSENT: KeyValue = KeyValue::Null;

#[derive(Clone, Debug)]
enum IndexLevel {
    Leaf(HashSet<KeyValue>),
    Branch(HashMap<KeyValue, IndexLevel>),
}

impl IndexLevel {
    /// Empty level for a subtree spanning `depth` key columns.
    fn for_depth(depth: usize) -> Self {
        if depth <= 1 {
            IndexLevel::Leaf(HashSet::new())
        } else {
            IndexLevel::Branch(HashMap::new())
        }
    }

    fn len(&self) -> usize {
        match self {
            IndexLevel::Leaf(values) => values.len(),
            IndexLevel::Branch(children) => children.values().map(IndexLevel::len).sum(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            IndexLevel::Leaf(values) => values.is_empty(),
            IndexLevel::Branch(children) => children.is_empty(),
        }
    }

    /// Insert a full path, returning `true` if the tuple was not present.
    fn insert(&mut self, path: &[&KeyValue]) -> bool {
        let mut level = self;
        for (depth, value) in path.iter().enumerate() {
            match level {
                IndexLevel::Leaf(values) => return values.insert((*value).clone()),
                IndexLevel::Branch(children) => {
                    level = children
                        .entry((*value).clone())
                        .or_insert_with(|| IndexLevel::for_depth(path.len() - depth - 1));
                }
            }
        }
        false
    }
}

/// Set of key tuples over a fixed [`KeySchema`].
///
/// Only the scalar key values of inserted rows are copied; rows themselves are never
/// retained.
///
/// ```
/// use dupkey::{CompositeKeyIndex, KeySchema, Record};
///
/// let schema = KeySchema::new(["aaa", "bbb"]).unwrap();
/// let mut index = CompositeKeyIndex::new(schema);
/// let row = Record::from([("aaa", "test"), ("bbb", "test")]);
///
/// index.insert(&row).unwrap();
/// assert!(index.contains(&row));
/// assert_eq!(index.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CompositeKeyIndex {
    schema: KeySchema,
    root: IndexLevel,
}

impl CompositeKeyIndex {
    /// Create an empty index scoped to `schema`.
    pub fn new(schema: KeySchema) -> Self {
        let root = IndexLevel::for_depth(schema.len());
        Self { schema, root }
    }

    /// Schema this index was built for.
    pub fn schema(&self) -> &KeySchema {
        &self.schema
    }

    /// Record the key tuple of `row`.
    ///
    /// Returns `true` if the tuple was not present before. Inserting a tuple that is
    /// already present leaves the index unchanged.
    ///
    /// # Errors
    /// Returns [`DedupError::MissingKey`] naming the first key column `row` lacks. Every
    /// key column is resolved before the index is touched, so a failed insert never
    /// leaves a partial path behind.
    pub fn insert<R: Row + ?Sized>(&mut self, row: &R) -> Result<bool, DedupError> {
        let path = self
            .schema
            .columns()
            .iter()
            .map(|column| {
                row.column(column).ok_or_else(|| DedupError::MissingKey {
                    column: column.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.root.insert(&path))
    }

    /// Whether the key tuple of `row` has been inserted.
    ///
    /// Never fails: a column missing from `row` is looked up as [`KeyValue::Null`], the
    /// same as a column explicitly set to null.
    pub fn contains<R: Row + ?Sized>(&self, row: &R) -> bool {
        let mut level = &self.root;
        for column in self.schema.columns() {
            let value = row.column(column).unwrap_or(&ABSENT);
            match level {
                IndexLevel::Leaf(values) => return values.contains(value),
                IndexLevel::Branch(children) => match children.get(value) {
                    Some(child) => level = child,
                    None => return false,
                },
            }
        }
        false
    }

    /// Number of distinct key tuples stored.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether no key tuple has been stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Drop every stored tuple, keeping the schema.
    pub fn clear(&mut self) {
        self.root = IndexLevel::for_depth(self.schema.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn index(columns: &[&str]) -> CompositeKeyIndex {
        CompositeKeyIndex::new(KeySchema::new(columns.iter().copied()).expect("schema"))
    }

    #[test]
    fn empty_index() {
        let set = index(&["aaa", "bbb"]);
        let missing = Record::from([("test", "test")]);

        assert!(!set.contains(&missing));
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn single_item() {
        let mut set = index(&["aaa", "bbb"]);
        let row = Record::from([("aaa", "test"), ("bbb", "test")]);

        assert!(set.insert(&row).expect("insert"));

        assert!(set.contains(&row));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn reinsert_is_idempotent() {
        let mut set = index(&["aaa", "bbb"]);
        let row = Record::from([("aaa", "test"), ("bbb", "test")]);

        assert!(set.insert(&row).expect("insert"));
        assert!(!set.insert(&row).expect("insert"));

        assert!(set.contains(&row));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn equal_values_collide_across_records() {
        let mut set = index(&["aaa", "bbb"]);
        let row = Record::from([("aaa", "test"), ("bbb", "test")]);
        let clone = Record::from([("aaa", "test"), ("bbb", "test"), ("ccc", "other")]);

        set.insert(&row).expect("insert");

        assert!(set.contains(&clone));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn multiple_items() {
        let mut set = index(&["aaa", "bbb"]);
        let row1 = Record::from([("aaa", "test"), ("bbb", "test")]);
        let row2 = Record::from([("aaa", "test1"), ("bbb", "test1")]);
        let row3 = Record::from([("aaa", "test"), ("bbb", "test1")]);

        set.insert(&row1).expect("insert");
        set.insert(&row2).expect("insert");
        set.insert(&row3).expect("insert");

        assert!(set.contains(&row1));
        assert!(set.contains(&row2));
        assert!(set.contains(&row3));
        assert!(!set.contains(&Record::from([("aaa", "test1"), ("bbb", "test")])));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn missing_key_is_rejected_without_mutation() {
        let mut set = index(&["aaa", "bbb", "ccc"]);

        let err = set
            .insert(&Record::from([("foo", "test"), ("bar", "test")]))
            .unwrap_err();
        assert!(matches!(err, DedupError::MissingKey { ref column } if column == "aaa"));

        let err = set
            .insert(&Record::from([("aaa", "a"), ("bbb", "b")]))
            .unwrap_err();
        assert!(matches!(err, DedupError::MissingKey { ref column } if column == "ccc"));

        assert!(set.is_empty());
    }

    #[test]
    fn single_column_schema_uses_a_flat_set() {
        let mut set = index(&["id"]);
        for id in [1, 2, 2, 3, 1] {
            set.insert(&Record::from([("id", id)])).expect("insert");
        }

        assert_eq!(set.len(), 3);
        assert!(set.contains(&Record::from([("id", 2)])));
        assert!(!set.contains(&Record::from([("id", 4)])));
    }

    #[test]
    fn deep_schema_sums_leaves() {
        let mut set = index(&["a", "b", "c", "d"]);
        for a in 0..3 {
            for b in 0..2 {
                for d in 0..4 {
                    set.insert(&Record::from([("a", a), ("b", b), ("c", 0), ("d", d)]))
                        .expect("insert");
                }
            }
        }

        assert_eq!(set.len(), 3 * 2 * 4);
        assert!(set.contains(&Record::from([("a", 2), ("b", 1), ("c", 0), ("d", 3)])));
        assert!(!set.contains(&Record::from([("a", 2), ("b", 1), ("c", 1), ("d", 3)])));
    }

    #[test]
    fn columns_out_of_record_order() {
        let mut set = index(&["bar", "foo"]);
        let row = Record::from([("foo", "test"), ("bar", "test")]);
        let clone = Record::from([("bar", "test"), ("foo", "test")]);

        set.insert(&row).expect("insert");

        assert_eq!(set.len(), 1);
        assert!(set.contains(&clone));
    }

    #[test]
    fn absent_and_null_columns_look_up_alike() {
        let mut set = index(&["aaa", "bbb"]);
        set.insert(&Record::from([("aaa", KeyValue::from("x")), ("bbb", KeyValue::Null)]))
            .expect("insert");

        assert!(set.contains(&Record::from([("aaa", "x")])));
        assert!(!set.contains(&Record::from([("bbb", KeyValue::Null)])));
    }

    #[test]
    fn typed_values_stay_distinct() {
        let mut set = index(&["k"]);
        set.insert(&Record::from([("k", 1)])).expect("insert");

        assert!(!set.contains(&Record::from([("k", "1")])));
        assert!(!set.contains(&Record::from([("k", true)])));
        assert!(set.contains(&Record::from([("k", 1u64)])));
    }

    #[test]
    fn clear_keeps_schema() {
        let mut set = index(&["aaa", "bbb"]);
        set.insert(&Record::from([("aaa", 1), ("bbb", 2)])).expect("insert");
        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.schema().columns(), ["aaa", "bbb"]);
        set.insert(&Record::from([("aaa", 1), ("bbb", 2)])).expect("insert");
        assert_eq!(set.len(), 1);
    }
}
