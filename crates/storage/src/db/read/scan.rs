use crate::kv::KvReadCursor;
use wb_primitives::RowKey;


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    pub key: RowKey,
    pub value: Vec<u8>
}


/// Iterates over all rows visible to the underlying cursor, from the first key to the last.
///
/// Once the cursor is exhausted or has failed, the scanner stays finished.
pub struct RowScanner<C> {
    cursor: C,
    first_seek: bool,
    finished: bool
}


impl<C: KvReadCursor> RowScanner<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            first_seek: true,
            finished: false
        }
    }

    fn advance(&mut self) -> anyhow::Result<bool> {
        if self.finished {
            return Ok(false)
        }

        let result = if self.first_seek {
            self.first_seek = false;
            self.cursor.seek_first()
        } else {
            self.cursor.next()
        };

        if let Err(err) = result {
            self.finished = true;
            return Err(err)
        }

        if !self.cursor.is_valid() {
            self.finished = true;
            return Ok(false)
        }

        Ok(true)
    }

    fn next_row(&mut self) -> anyhow::Result<Option<Row>> {
        if !self.advance()? {
            return Ok(None)
        }
        Ok(Some(Row {
            key: self.cursor.key().to_vec(),
            value: self.cursor.value().to_vec()
        }))
    }

    /// Drains the scanner and returns the number of remaining rows
    pub fn count_rows(self) -> anyhow::Result<u64> {
        self.count_rows_with_progress(0, |_| {})
    }

    /// Same as [`RowScanner::count_rows`], but calls `on_progress` with the running count
    /// after every `interval` rows. Zero interval disables progress reports.
    pub fn count_rows_with_progress(
        mut self,
        interval: u64,
        mut on_progress: impl FnMut(u64)
    ) -> anyhow::Result<u64>
    {
        let mut count = 0;
        while self.advance()? {
            count += 1;
            if interval > 0 && count % interval == 0 {
                on_progress(count)
            }
        }
        Ok(count)
    }
}


impl<C: KvReadCursor> Iterator for RowScanner<C> {
    type Item = anyhow::Result<Row>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}
