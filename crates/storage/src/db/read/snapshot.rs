use crate::db::db::{table_handle, RocksDB, RocksSnapshot, RocksSnapshotIterator};
use crate::db::read::scan::RowScanner;
use rocksdb::ReadOptions;
use wb_primitives::TableName;


/// Point-in-time view of the database.
///
/// Everything read through a snapshot reflects the state at the moment it was taken,
/// regardless of writes made afterwards.
pub struct ReadSnapshot<'a> {
    db: &'a RocksDB,
    snapshot: RocksSnapshot<'a>
}


impl <'a> ReadSnapshot<'a> {
    pub fn new(db: &'a RocksDB) -> Self {
        Self {
            db,
            snapshot: db.snapshot()
        }
    }

    pub fn get_row(&self, table: &TableName, key: &[u8]) -> anyhow::Result<Option<Vec<u8>>> {
        let cf = table_handle(self.db, table)?;
        let value = self.db.get_cf_opt(&cf, key, &self.new_options())?;
        Ok(value)
    }

    /// Full scan over all rows of the given table in key order
    pub fn scan_table(&self, table: &TableName) -> anyhow::Result<SnapshotRowScanner<'_>> {
        let cf = table_handle(self.db, table)?;
        let cursor = self.db.raw_iterator_cf_opt(&cf, self.new_scan_options());
        Ok(RowScanner::new(cursor))
    }

    fn new_options(&self) -> ReadOptions {
        let mut options = ReadOptions::default();
        options.set_snapshot(&self.snapshot);
        options
    }

    fn new_scan_options(&self) -> ReadOptions {
        let mut options = self.new_options();
        // scans bypass the block cache
        options.fill_cache(false);
        options
    }
}


pub type SnapshotRowScanner<'a> = RowScanner<RocksSnapshotIterator<'a>>;
