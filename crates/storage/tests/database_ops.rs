use wb_storage::db::DatabaseSettings;

mod utils;
use utils::{create_table_with_keys, open_read_only, setup_db, table};

#[test]
fn create_table() {
    let (_dir, db) = setup_db();
    let pages = table("pages");

    assert!(!db.has_table("pages"));
    assert!(db.create_table(&pages).is_ok());
    assert!(db.has_table("pages"));

    let err = db.create_table(&pages).unwrap_err();
    assert_eq!(err.to_string(), "table 'pages' already exists");

    assert!(db.create_table_if_not_exists(&pages).is_ok());
    assert!(db.create_table_if_not_exists(&table("links")).is_ok());

    assert_eq!(db.list_tables().unwrap(), vec!["links".to_string(), "pages".to_string()]);
    assert!(db.get_statistics().is_some());
}

#[test]
fn new_database_has_no_tables() {
    let (_dir, db) = setup_db();
    assert!(db.list_tables().unwrap().is_empty());
    assert!(!db.has_table("default"));
}

#[test]
fn insert_into_missing_table() {
    let (_dir, db) = setup_db();
    let err = db
        .insert_rows(&table("missing"), [(b"a".as_slice(), b"1".as_slice())])
        .unwrap_err();
    assert_eq!(err.to_string(), "table 'missing' does not exist");
}

#[test]
fn insert_overwrites_existing_keys() {
    let (_dir, db) = setup_db();
    let pages = create_table_with_keys(&db, "pages", [b"a".as_slice(), b"b".as_slice()]);

    let written = db
        .insert_rows(&pages, [(b"a".as_slice(), b"new".as_slice())])
        .unwrap();
    assert_eq!(written, 1);

    let snapshot = db.snapshot();
    assert_eq!(snapshot.get_row(&pages, b"a").unwrap(), Some(b"new".to_vec()));
    assert_eq!(snapshot.get_row(&pages, b"b").unwrap(), Some(b"v".to_vec()));
    assert_eq!(snapshot.get_row(&pages, b"c").unwrap(), None);
    assert_eq!(snapshot.scan_table(&pages).unwrap().count_rows().unwrap(), 2);
}

#[test]
fn tables_survive_reopen() {
    let db_dir = tempfile::tempdir().unwrap();
    {
        let db = DatabaseSettings::default().open(db_dir.path()).unwrap();
        create_table_with_keys(&db, "pages", [b"a".as_slice(), b"b".as_slice(), b"c".as_slice()]);
    }

    let db = DatabaseSettings::default().open(db_dir.path()).unwrap();
    assert_eq!(db.list_tables().unwrap(), vec!["pages".to_string()]);
    let count = db.snapshot().scan_table(&table("pages")).unwrap().count_rows().unwrap();
    assert_eq!(count, 3);
}

#[test]
fn read_only_open_of_missing_database() {
    let db_dir = tempfile::tempdir().unwrap();
    let path = db_dir.path().join("nothing-here");

    let err = DatabaseSettings::default()
        .with_read_only(true)
        .open(&path)
        .err()
        .unwrap();
    assert!(err.to_string().starts_with("no database found at"));
}

#[test]
fn read_only_database_rejects_writes() {
    let db_dir = tempfile::tempdir().unwrap();
    {
        let db = DatabaseSettings::default().open(db_dir.path()).unwrap();
        create_table_with_keys(&db, "pages", [b"a".as_slice()]);
    }

    let db = open_read_only(db_dir.path());
    assert!(db.is_read_only());
    assert!(db.has_table("pages"));

    let err = db.create_table(&table("links")).unwrap_err();
    assert_eq!(err.to_string(), "database is opened in read-only mode");

    let err = db
        .insert_rows(&table("pages"), [(b"b".as_slice(), b"1".as_slice())])
        .unwrap_err();
    assert_eq!(err.to_string(), "database is opened in read-only mode");
}

#[test]
fn read_only_instance_sees_unflushed_writes() {
    let db_dir = tempfile::tempdir().unwrap();
    let writer = DatabaseSettings::default().open(db_dir.path()).unwrap();
    create_table_with_keys(&writer, "pages", [b"a".as_slice(), b"b".as_slice()]);

    let reader = open_read_only(db_dir.path());
    let count = reader.snapshot().scan_table(&table("pages")).unwrap().count_rows().unwrap();
    assert_eq!(count, 2);
}

const BLOCK_CACHE_CAPACITY: &str = "rocksdb.block-cache-capacity";

#[test]
fn reopened_tables_use_configured_block_cache() {
    let db_dir = tempfile::tempdir().unwrap();
    {
        let db = DatabaseSettings::default()
            .with_data_cache_size(1)
            .open(db_dir.path())
            .unwrap();
        let pages = create_table_with_keys(&db, "pages", [b"a".as_slice()]);
        assert_eq!(
            db.get_table_property(&pages, BLOCK_CACHE_CAPACITY).unwrap(),
            Some(1024 * 1024)
        );
    }

    {
        let db = DatabaseSettings::default()
            .with_data_cache_size(2)
            .open(db_dir.path())
            .unwrap();
        assert_eq!(
            db.get_table_property(&table("pages"), BLOCK_CACHE_CAPACITY).unwrap(),
            Some(2 * 1024 * 1024)
        );
    }

    let db = DatabaseSettings::default()
        .with_data_cache_size(3)
        .with_read_only(true)
        .open(db_dir.path())
        .unwrap();
    assert_eq!(
        db.get_table_property(&table("pages"), BLOCK_CACHE_CAPACITY).unwrap(),
        Some(3 * 1024 * 1024)
    );
}

#[test]
fn oversized_data_cache_is_rejected() {
    let db_dir = tempfile::tempdir().unwrap();
    let err = DatabaseSettings::default()
        .with_data_cache_size(usize::MAX / 1024)
        .open(db_dir.path())
        .err()
        .unwrap();
    assert_eq!(
        err.to_string(),
        format!("data cache size of {} MB is too large", usize::MAX / 1024)
    );
}
