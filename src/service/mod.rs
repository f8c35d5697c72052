//! Service layer containing stream processing orchestration.

mod adapter;
mod filter_service;

pub use adapter::{FormatAdapter, ParsedLine};
pub use filter_service::{FilterService, StreamStats};
