//! Rapid view domain — the legacy name for agile boards.

pub mod client;
