//! Input parsing and output formatting for the filter stream.

use anyhow::Result;
use tracing::warn;

use crate::cli::{InputFormat, OutputFormat};
use crate::domain::{Evaluation, LogEvent};

/// One parsed input line.
#[derive(Debug, Clone)]
pub enum ParsedLine {
    /// JSON log event
    Event(LogEvent),
    /// Raw message text
    Text(String),
}

/// Adapter between stream lines and domain types.
pub struct FormatAdapter {
    input: InputFormat,
    output: OutputFormat,
}

impl FormatAdapter {
    /// Create a new adapter for the given formats.
    pub fn new(input: InputFormat, output: OutputFormat) -> Self {
        Self { input, output }
    }

    /// Parse one input line.
    ///
    /// Returns `None` for blank lines in JSON mode. A line that is not a
    /// valid event becomes an event without a message, so it takes the
    /// mismatch branch instead of aborting the stream.
    pub fn parse_line(&self, line: &str) -> Option<ParsedLine> {
        match self.input {
            InputFormat::Text => Some(ParsedLine::Text(line.to_string())),
            InputFormat::Json => {
                if line.trim().is_empty() {
                    return None;
                }
                match serde_json::from_str::<LogEvent>(line) {
                    Ok(event) => Some(ParsedLine::Event(event)),
                    Err(e) => {
                        warn!("Unparseable log event ({}): {}", e, line);
                        Some(ParsedLine::Event(LogEvent::default()))
                    }
                }
            }
        }
    }

    /// Parse one raw input line.
    ///
    /// Bytes that are not UTF-8 carry no readable message and become an
    /// event without one.
    pub fn parse_bytes(&self, line: &[u8]) -> Option<ParsedLine> {
        match std::str::from_utf8(line) {
            Ok(text) => self.parse_line(text),
            Err(e) => {
                warn!(
                    "Non UTF-8 input line ({}): {}",
                    e,
                    String::from_utf8_lossy(line)
                );
                Some(ParsedLine::Event(LogEvent::default()))
            }
        }
    }

    /// Format the output for one raw line, or `None` if nothing is written.
    ///
    /// Passing events are echoed byte for byte.
    pub fn format_output(
        &self,
        line: &[u8],
        evaluation: &Evaluation,
    ) -> Result<Option<Vec<u8>>> {
        match self.output {
            OutputFormat::Events => Ok(evaluation.decision.passes().then(|| line.to_vec())),
            OutputFormat::Decisions => {
                let json = serde_json::json!({
                    "decision": evaluation.decision,
                    "words": evaluation.words,
                });
                Ok(Some(serde_json::to_vec(&json)?))
            }
        }
    }
}
