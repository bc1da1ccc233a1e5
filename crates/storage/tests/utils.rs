#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;
use wb_primitives::TableName;
use wb_storage::db::{Database, DatabaseSettings};

pub fn setup_db() -> (TempDir, Database) {
    let db_dir = tempfile::tempdir().unwrap();
    let db = DatabaseSettings::default()
        .with_rocksdb_stats(true)
        .open(db_dir.path())
        .unwrap();
    (db_dir, db)
}

pub fn open_read_only(path: &Path) -> Database {
    DatabaseSettings::default()
        .with_read_only(true)
        .open(path)
        .unwrap()
}

pub fn table(name: &str) -> TableName {
    TableName::try_from(name).unwrap()
}

pub fn create_table_with_keys<'a>(
    db: &Database,
    name: &str,
    keys: impl IntoIterator<Item = &'a [u8]>,
) -> TableName {
    let table = table(name);
    db.create_table(&table).unwrap();
    db.insert_rows(&table, keys.into_iter().map(|k| (k, b"v".as_slice())))
        .unwrap();
    table
}

pub fn scan_keys(db: &Database, table: &TableName) -> Vec<Vec<u8>> {
    db.snapshot()
        .scan_table(table)
        .unwrap()
        .map(|row| row.unwrap().key)
        .collect()
}
