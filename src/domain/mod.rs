//! Domain layer containing core filtering logic.
//!
//! This module contains:
//! - Log event and decision types
//! - Message rendering shared by every event shape
//! - Word counter and word count filter
//! - Diagnostic reporter and logger with rotation

mod error;
pub mod filters;
pub mod logger;
mod message;
mod reporter;
mod types;
mod word_counter;

pub use error::{FilterError, RenderError};
pub use filters::{Evaluation, Filter, WordCountFilter};
pub use message::{format_params, render, Message};
pub use reporter::{DiagnosticReporter, TracingReporter};
pub use types::{Decision, EventMessage, EventRepresentation, Level, LogEvent};
pub use word_counter::{count_words, WordCounter};
