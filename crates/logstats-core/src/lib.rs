//! Core types shared by the logstats crates.
//!
//! Holds the event data model, the error type, timestamp and calendar
//! helpers, number formatting and CLI settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
