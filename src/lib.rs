//! word-count-filter: log event filtering by message word count.
//!
//! The core is [`domain::WordCountFilter`], which renders any of the event
//! shapes a pipeline hands it to text, counts whitespace-delimited words and
//! returns its configured match or mismatch decision.

pub mod cli;
pub mod config;
pub mod domain;
pub mod service;
