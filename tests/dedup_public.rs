use std::{collections::HashSet, io::Cursor};

use dupkey::{
    count_duplicates, extract_key_columns, read_json_lines, CompositeKeyIndex, DedupError,
    DedupOptions, KeySchema, KeyValue, MemoryReporter, Record,
};

const COLUMNS: [&str; 3] = ["region", "day", "sku"];

fn random_row(rng: &mut fastrand::Rng) -> Record {
    Record::from([
        ("region", KeyValue::from(["eu", "us", "apac"][rng.usize(0..3)])),
        ("day", KeyValue::from(rng.i64(0..4))),
        ("sku", KeyValue::from(rng.u32(0..5))),
        ("payload", KeyValue::from(rng.u64(..))),
    ])
}

fn tuple(row: &Record) -> Vec<KeyValue> {
    COLUMNS
        .iter()
        .map(|column| row.get(column).cloned().unwrap_or_default())
        .collect()
}

#[test]
fn len_matches_distinct_tuples() {
    let mut rng = fastrand::Rng::with_seed(42);
    let mut index = CompositeKeyIndex::new(KeySchema::new(COLUMNS).expect("schema"));
    let mut expected = HashSet::new();

    for _ in 0..2_000 {
        let row = random_row(&mut rng);
        let fresh = expected.insert(tuple(&row));
        assert_eq!(index.insert(&row).expect("insert"), fresh);
        assert!(index.contains(&row));
    }

    assert_eq!(index.len(), expected.len());
}

#[test]
fn counted_duplicates_match_reference() {
    let mut rng = fastrand::Rng::with_seed(7);
    let rows: Vec<Record> = (0..500).map(|_| random_row(&mut rng)).collect();
    let schema = KeySchema::new(COLUMNS).expect("schema");
    let mut reporter = MemoryReporter::new();

    let count =
        count_duplicates(&rows, &schema, &DedupOptions::default(), &mut reporter).expect("count");

    let distinct = rows.iter().map(tuple).collect::<HashSet<_>>().len();
    assert_eq!(count, rows.len() - distinct);
    assert_eq!(reporter.messages().len(), count);
    assert!(reporter
        .messages()
        .iter()
        .all(|message| message.starts_with("duplicate    region: ")));
}

#[test]
fn key_order_defines_nesting_not_identity() {
    let forward = KeySchema::new(["aaa", "bbb"]).expect("schema");
    let backward = KeySchema::new(["bbb", "aaa"]).expect("schema");
    let rows = vec![
        Record::from([("aaa", 1), ("bbb", 2)]),
        Record::from([("bbb", 2), ("aaa", 1)]),
        Record::from([("aaa", 2), ("bbb", 1)]),
    ];

    for schema in [forward, backward] {
        let mut index = CompositeKeyIndex::new(schema);
        index.insert(&rows[0]).expect("insert");
        assert!(index.contains(&rows[1]));
        assert!(!index.contains(&rows[2]));
    }
}

#[test]
fn missing_column_in_any_position_fails() {
    let schema = KeySchema::new(COLUMNS).expect("schema");
    for missing in COLUMNS {
        let mut index = CompositeKeyIndex::new(schema.clone());
        let mut row = Record::from([("region", "eu"), ("day", "mon"), ("sku", "x")]);
        row.remove(missing);

        let err = index.insert(&row).unwrap_err();
        assert!(matches!(err, DedupError::MissingKey { ref column } if column == missing));
        assert!(index.is_empty());
        assert!(!index.contains(&row));
    }
}

#[test]
fn projection_feeds_counter() {
    let records = vec![
        Record::from([("aaa", "A1"), ("bbb", "B1"), ("ccc", "x")]),
        Record::from([("aaa", "A1"), ("bbb", "B1"), ("ccc", "y")]),
    ];
    let projected = extract_key_columns(&records, &["aaa", "bbb"]);
    let schema = KeySchema::new(["aaa", "bbb"]).expect("schema");
    let mut reporter = MemoryReporter::new();

    assert_eq!(projected.len(), records.len());
    assert_eq!(projected[0], projected[1]);
    let count = count_duplicates(&projected, &schema, &DedupOptions::default(), &mut reporter)
        .expect("count");
    assert_eq!(count, 1);
}

#[test]
fn numerically_equal_json_values_are_duplicates() {
    let rows = read_json_lines(Cursor::new("{\"id\":1}\n{\"id\":1.0}\n{\"id\":1e0}\n"))
        .expect("decode");
    let schema = KeySchema::new(["id"]).expect("schema");
    let mut reporter = MemoryReporter::new();

    let count =
        count_duplicates(&rows, &schema, &DedupOptions::default(), &mut reporter).expect("count");

    assert_eq!(count, 2);
    assert_eq!(
        reporter.into_messages(),
        vec!["duplicate    id: 1".to_string(), "duplicate    id: 1".to_string()]
    );
}
