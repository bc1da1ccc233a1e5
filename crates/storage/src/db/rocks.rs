use crate::db::db::RocksSnapshotIterator;
use crate::kv::KvReadCursor;


impl <'a> KvReadCursor for RocksSnapshotIterator<'a> {
    fn seek_first(&mut self) -> anyhow::Result<()> {
        self.seek_to_first();
        self.status()?;
        Ok(())
    }

    fn next(&mut self) -> anyhow::Result<()> {
        self.next();
        self.status()?;
        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.valid()
    }

    fn key(&self) -> &[u8] {
        self.key().unwrap_or(&[])
    }

    fn value(&self) -> &[u8] {
        self.value().unwrap_or(&[])
    }
}
