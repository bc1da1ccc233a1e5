pub mod scan;
pub mod snapshot;
