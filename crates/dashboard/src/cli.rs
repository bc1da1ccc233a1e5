use crate::count::count_all_rows;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use wb_primitives::{TableName, DEFAULT_TABLE};
use wb_storage::db::{Database, DatabaseSettings};


#[derive(Parser, Debug)]
#[command(version, about = "Print the number of rows in a table", long_about = None)]
pub struct CLI {
    /// Database directory
    #[arg(long = "db", value_name = "DIR")]
    pub database_dir: PathBuf,

    /// Table to scan
    #[arg(short, long, default_value = DEFAULT_TABLE)]
    pub table: TableName,

    #[arg(long, value_name = "MB", default_value = "64")]
    pub data_cache_size: usize,

    /// Log scan progress every N rows, 0 disables progress reports
    #[arg(long, value_name = "N", default_value = "1000000")]
    pub progress_interval: u64,

    /// Print the names of all tables instead of counting rows
    #[arg(long)]
    pub list_tables: bool
}


impl CLI {
    pub fn open_database(&self) -> anyhow::Result<Database> {
        DatabaseSettings::default()
            .with_data_cache_size(self.data_cache_size)
            .with_read_only(true)
            .open(&self.database_dir)
            .with_context(|| {
                format!("failed to open database at {}", self.database_dir.display())
            })
    }

    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let db = self.open_database()?;

        if self.list_tables {
            for table in db.list_tables()? {
                writeln!(out, "{}", table)?;
            }
        } else {
            let count = count_all_rows(&db, &self.table, self.progress_interval)?;
            writeln!(out, "{}", count)?;
        }

        out.flush()?;
        Ok(())
    }
}
