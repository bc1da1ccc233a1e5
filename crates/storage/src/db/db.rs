use crate::db::read::snapshot::ReadSnapshot;
use anyhow::{anyhow, ensure, Context};
use rocksdb::{BoundColumnFamily, ColumnFamilyDescriptor, Options as RocksOptions, WriteBatch};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use wb_primitives::{Name, TableName};


const CF_DEFAULT: Name = rocksdb::DEFAULT_COLUMN_FAMILY_NAME;


pub(super) type RocksDB = rocksdb::DBWithThreadMode<rocksdb::MultiThreaded>;
pub(super) type RocksSnapshot<'a> = rocksdb::SnapshotWithThreadMode<'a, RocksDB>;
pub(super) type RocksSnapshotIterator<'a> = rocksdb::DBRawIteratorWithThreadMode<'a, RocksDB>;


#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    data_cache_size: usize,
    with_rocksdb_stats: bool,
    read_only: bool
}


impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            data_cache_size: 64,
            with_rocksdb_stats: false,
            read_only: false
        }
    }
}


impl DatabaseSettings {
    /// Block cache size in megabytes
    pub fn with_data_cache_size(mut self, mb: usize) -> Self {
        self.data_cache_size = mb;
        self
    }

    pub fn with_rocksdb_stats(mut self, yes: bool) -> Self {
        self.with_rocksdb_stats = yes;
        self
    }

    /// Open an existing database without taking the write lock.
    ///
    /// Read-only instances see the tables and rows that existed when they were opened.
    pub fn with_read_only(mut self, yes: bool) -> Self {
        self.read_only = yes;
        self
    }

    pub fn open(&self, path: impl AsRef<Path>) -> anyhow::Result<Database> {
        let path = path.as_ref();

        let mut options = RocksOptions::default();
        if self.with_rocksdb_stats {
            options.enable_statistics();
        }

        let cache_bytes = self.data_cache_size
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow!("data cache size of {} MB is too large", self.data_cache_size))?;
        let cache = rocksdb::Cache::new_lru_cache(cache_bytes);
        let mut block_based_table_factory = rocksdb::BlockBasedOptions::default();
        block_based_table_factory.set_block_cache(&cache);
        options.set_block_based_table_factory(&block_based_table_factory);

        let db = if self.read_only {
            let tables = RocksDB::list_cf(&options, path)
                .with_context(|| format!("no database found at {}", path.display()))?;
            RocksDB::open_cf_descriptors_read_only(
                &options,
                path,
                table_descriptors(&options, tables),
                false
            )?
        } else {
            options.create_if_missing(true);
            options.create_missing_column_families(true);
            let tables = if path.join("CURRENT").exists() {
                RocksDB::list_cf(&options, path)?
            } else {
                Vec::new()
            };
            RocksDB::open_cf_descriptors(&options, path, table_descriptors(&options, tables))?
        };

        debug!(
            path = %path.display(),
            read_only = self.read_only,
            "opened database"
        );

        Ok(Database {
            db,
            options,
            read_only: self.read_only
        })
    }
}


pub struct Database {
    db: RocksDB,
    options: RocksOptions,
    read_only: bool
}


impl Database {
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Names of all tables opened by this instance, sorted by name
    pub fn list_tables(&self) -> anyhow::Result<Vec<String>> {
        let mut tables: Vec<String> = RocksDB::list_cf(&self.options, self.db.path())?
            .into_iter()
            .filter(|name| self.has_table(name))
            .collect();
        tables.sort();
        Ok(tables)
    }

    pub fn has_table(&self, name: &str) -> bool {
        name != CF_DEFAULT && self.db.cf_handle(name).is_some()
    }

    pub fn create_table(&self, table: &TableName) -> anyhow::Result<()> {
        self.ensure_writable()?;
        ensure!(!self.has_table(table.as_str()), "table '{}' already exists", table);
        self.db.create_cf(table.as_str(), &self.options)?;
        info!(table = %table, "created table");
        Ok(())
    }

    pub fn create_table_if_not_exists(&self, table: &TableName) -> anyhow::Result<()> {
        if self.has_table(table.as_str()) {
            Ok(())
        } else {
            self.create_table(table)
        }
    }

    /// Atomically writes the given rows, overwriting existing values under the same keys.
    ///
    /// Returns the number of rows in the written batch.
    pub fn insert_rows<K, V>(
        &self,
        table: &TableName,
        rows: impl IntoIterator<Item = (K, V)>
    ) -> anyhow::Result<usize>
    where
        K: AsRef<[u8]>,
        V: AsRef<[u8]>
    {
        self.ensure_writable()?;
        let cf = table_handle(&self.db, table)?;

        let mut batch = WriteBatch::default();
        for (key, value) in rows {
            batch.put_cf(&cf, key, value);
        }

        let len = batch.len();
        self.db.write(batch).with_context(|| {
            format!("failed to write {} rows into table '{}'", len, table)
        })?;
        Ok(len)
    }

    pub fn get_table_property(&self, table: &TableName, name: &str) -> anyhow::Result<Option<u64>> {
        let cf = table_handle(&self.db, table)?;
        let value = self.db.property_int_value_cf(&cf, name)?;
        Ok(value)
    }

    pub fn snapshot(&self) -> ReadSnapshot<'_> {
        ReadSnapshot::new(&self.db)
    }

    pub fn get_statistics(&self) -> Option<String> {
        self.options.get_statistics()
    }

    fn ensure_writable(&self) -> anyhow::Result<()> {
        ensure!(!self.read_only, "database is opened in read-only mode");
        Ok(())
    }
}


fn table_descriptors(
    options: &RocksOptions,
    tables: Vec<String>
) -> impl Iterator<Item = ColumnFamilyDescriptor>
{
    let options = options.clone();
    tables.into_iter().map(move |name| {
        ColumnFamilyDescriptor::new(name, options.clone())
    })
}


pub(super) fn table_handle<'a>(
    db: &'a RocksDB,
    table: &TableName
) -> anyhow::Result<Arc<BoundColumnFamily<'a>>>
{
    db.cf_handle(table.as_str()).ok_or_else(|| {
        anyhow!("table '{}' does not exist", table)
    })
}
