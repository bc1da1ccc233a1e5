pub mod db;
mod kv;


pub use kv::KvReadCursor;
