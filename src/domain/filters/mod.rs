//! Filter system for log events.

mod filter_trait;
mod word_count_filter;

pub use filter_trait::Filter;
pub use word_count_filter::{Evaluation, WordCountFilter};
