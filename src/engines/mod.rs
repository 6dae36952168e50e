//! Engine catalog: compiled-in reference data for the four Polly engines.
//!
//! The catalog is immutable process-wide data; lookups are pure and safe
//! for unsynchronized concurrent reads.

mod catalog;

pub use catalog::{CatalogError, Engine, EngineInfo, get_engine, list_all_engines};
