pub mod persistence;
pub mod records;

pub use persistence::Persistence;
pub use records::{Record, RecordStore};
