use anyhow::Context;
use std::time::Instant;
use tracing::info;
use wb_primitives::TableName;
use wb_storage::db::Database;


/// Counts the rows of `table` as of the moment the scan starts.
pub fn count_all_rows(
    db: &Database,
    table: &TableName,
    progress_interval: u64
) -> anyhow::Result<u64>
{
    let snapshot = db.snapshot();
    let scanner = snapshot.scan_table(table)?;

    info!(table = %table, "scanning full table");
    let start = Instant::now();

    let count = scanner
        .count_rows_with_progress(progress_interval, |rows| {
            info!(table = %table, rows, "scan in progress");
        })
        .with_context(|| format!("failed to scan table '{}'", table))?;

    info!(
        table = %table,
        rows = count,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scan finished"
    );

    Ok(count)
}
