mod db;
mod read;
mod rocks;


pub use db::*;
pub use read::scan::{Row, RowScanner};
pub use read::snapshot::*;
