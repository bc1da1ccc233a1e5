mod table_name;


pub use table_name::TableName;


pub type Name = &'static str;

pub type RowKey = Vec<u8>;


/// Table counted when no other table is requested.
pub const DEFAULT_TABLE: Name = "pages";
