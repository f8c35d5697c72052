//! Log stream filtering service.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{InputFormat, OutputFormat};
use crate::domain::{EventRepresentation, Evaluation, WordCountFilter};
use crate::service::adapter::{FormatAdapter, ParsedLine};

/// Counters for one processed stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Lines evaluated by the filter
    pub processed: usize,
    /// Lines whose decision let them through
    pub passed: usize,
}

/// Service applying a word count filter to a stream of log lines.
pub struct FilterService {
    filter: WordCountFilter,
    adapter: FormatAdapter,
}

impl FilterService {
    /// Create a new FilterService.
    pub fn new(filter: WordCountFilter, input: InputFormat, output: OutputFormat) -> Self {
        Self {
            filter,
            adapter: FormatAdapter::new(input, output),
        }
    }

    /// Filter stdin to stdout.
    pub fn run(&self) -> Result<StreamStats> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stats = self.process_stream(stdin.lock(), stdout.lock())?;
        info!(
            "Stream finished: processed={}, passed={}",
            stats.processed, stats.passed
        );
        Ok(stats)
    }

    /// Filter every line of `reader` into `writer`.
    ///
    /// Lines are read as raw bytes so one malformed line cannot end the
    /// stream; only I/O failures do.
    pub fn process_stream<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> Result<StreamStats> {
        let mut stats = StreamStats::default();

        for line in reader.split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let Some(parsed) = self.adapter.parse_bytes(&line) else {
                continue;
            };

            let evaluation = self.process(&parsed);
            stats.processed += 1;
            if evaluation.decision.passes() {
                stats.passed += 1;
            }

            if let Some(output) = self.adapter.format_output(&line, &evaluation)? {
                writer.write_all(&output)?;
                writer.write_all(b"\n")?;
            }
        }

        writer.flush()?;
        Ok(stats)
    }

    /// Evaluate one parsed line.
    pub fn process(&self, parsed: &ParsedLine) -> Evaluation {
        let evaluation = match parsed {
            ParsedLine::Event(event) => self.filter.evaluate(EventRepresentation::Event(event)),
            ParsedLine::Text(text) => self
                .filter
                .evaluate(EventRepresentation::Text(Some(text.as_str()))),
        };
        debug!(
            "Decision: {} (words={:?})",
            evaluation.decision, evaluation.words
        );
        evaluation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Decision;

    fn service(input: InputFormat, output: OutputFormat) -> FilterService {
        let filter = WordCountFilter::new(3, Some(Decision::Accept), Some(Decision::Deny));
        FilterService::new(filter, input, output)
    }

    fn run(service: &FilterService, input: &str) -> (String, StreamStats) {
        let mut out = Vec::new();
        let stats = service.process_stream(input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn test_text_stream_passes_short_lines() {
        let svc = service(InputFormat::Text, OutputFormat::Events);
        let (out, stats) = run(&svc, "short line\nthis one is too long\n\n");

        assert_eq!(out, "short line\n\n");
        assert_eq!(
            stats,
            StreamStats {
                processed: 3,
                passed: 2
            }
        );
    }

    #[test]
    fn test_json_stream_decisions() {
        let svc = service(InputFormat::Json, OutputFormat::Decisions);
        let input = concat!(
            r#"{"level":"INFO","message":"ok then"}"#,
            "\n",
            r#"{"message":{"format":"{} {} {}","params":["a","b","c"]}}"#,
            "\n",
            r#"{"level":"ERROR"}"#,
            "\n",
            "garbage\n",
        );
        let (out, stats) = run(&svc, input);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"decision":"ACCEPT","words":2}"#,
                r#"{"decision":"DENY","words":3}"#,
                r#"{"decision":"DENY","words":null}"#,
                r#"{"decision":"DENY","words":null}"#,
            ]
        );
        assert_eq!(stats.processed, 4);
        assert_eq!(stats.passed, 1);
    }

    #[test]
    fn test_non_utf8_line_does_not_end_stream() {
        let svc = service(InputFormat::Json, OutputFormat::Decisions);
        let input: &[u8] = b"{\"message\":\"ok\"}\n\xff\xfe garbage\n{\"message\":\"later\"}\n";
        let mut out = Vec::new();

        let stats = svc.process_stream(input, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"decision":"ACCEPT","words":1}"#,
                r#"{"decision":"DENY","words":null}"#,
                r#"{"decision":"ACCEPT","words":1}"#,
            ]
        );
        assert_eq!(stats.processed, 3);
    }

    #[test]
    fn test_events_output_echoes_raw_bytes() {
        let filter = WordCountFilter::new(3, Some(Decision::Accept), Some(Decision::Neutral));
        let svc = FilterService::new(filter, InputFormat::Text, OutputFormat::Events);
        let input: &[u8] = b"short\r\n\xff bad\n";
        let mut out = Vec::new();

        let stats = svc.process_stream(input, &mut out).unwrap();

        // Undecodable line takes the NEUTRAL mismatch branch and passes unchanged
        assert_eq!(out, b"short\n\xff bad\n".to_vec());
        assert_eq!(stats.passed, 2);
    }

    #[test]
    fn test_json_stream_skips_blank_lines() {
        let svc = service(InputFormat::Json, OutputFormat::Events);
        let (out, stats) = run(&svc, "\n  \n{\"message\":\"hi\"}\n");

        assert_eq!(out, "{\"message\":\"hi\"}\n");
        assert_eq!(stats.processed, 1);
    }
}
