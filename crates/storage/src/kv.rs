/// Forward cursor over the rows of a single table.
///
/// Positioning methods report storage failures. `key()` and `value()` are only
/// meaningful while `is_valid()` returns `true`.
pub trait KvReadCursor {
    fn seek_first(&mut self) -> anyhow::Result<()>;

    fn next(&mut self) -> anyhow::Result<()>;

    fn is_valid(&self) -> bool;

    fn key(&self) -> &[u8];

    fn value(&self) -> &[u8];
}
