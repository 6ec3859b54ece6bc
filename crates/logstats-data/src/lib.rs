//! Ingestion and aggregation layer for logstats.
//!
//! Reads raw log lines, parses them into an ordered event collection,
//! exposes day-windowed views over it and derives summary statistics.

pub mod aggregator;
pub mod analysis;
pub mod parser;
pub mod reader;
pub mod store;

pub use logstats_core as core;
