pub mod config;
pub mod index;
pub mod listing;
pub mod query;

pub use index::{EngineState, SearchEngine, SharedEngine};
pub use query::{parse_query, Query};
