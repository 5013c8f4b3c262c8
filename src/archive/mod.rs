//! # Archive
//!
//! Record model, JSON loader and category filter.
//!
//! The data file is the only source of records. It is decoded on every load
//! and never written back.

pub mod errors;
pub mod filter;
pub mod loader;
pub mod record;

pub use errors::{ArchiveError, ArchiveResult};
pub use filter::filter_by_type;
pub use loader::{decode_records, RecordLoader};
pub use record::Record;
