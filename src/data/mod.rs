//! Data ingestion
//!
//! Reads the box-score stats table produced by the external scraper.

pub mod table;

pub use table::StatTable;
