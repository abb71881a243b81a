pub mod ingest;
pub mod normalizer;
pub mod price;
pub mod record;
pub mod store;

pub use record::Record;
pub use store::RecordStore;
