//! Word count filter implementation.

use std::fmt;

use tracing::debug;

use super::Filter;
use crate::config::Config;
use crate::domain::error::FilterError;
use crate::domain::message::{render, Message};
use crate::domain::reporter::DiagnosticReporter;
use crate::domain::word_counter::count_words;
use crate::domain::{Decision, EventRepresentation, LogEvent};

/// Result of evaluating one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Decision returned to the pipeline
    pub decision: Decision,
    /// Word count of the rendered message, if one was rendered
    pub words: Option<usize>,
}

/// Filter matching messages with fewer words than a threshold.
///
/// A message whose word count is strictly below `threshold` yields
/// `on_match`. Counts at or above the threshold, absent messages and messages
/// that fail to render yield `on_mismatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountFilter {
    threshold: usize,
    on_match: Decision,
    on_mismatch: Decision,
}

impl WordCountFilter {
    /// Create a filter with a known non-negative threshold.
    ///
    /// Missing actions fall back to `Decision::DEFAULT_ON_MATCH` and
    /// `Decision::DEFAULT_ON_MISMATCH`.
    pub fn new(
        threshold: usize,
        on_match: Option<Decision>,
        on_mismatch: Option<Decision>,
    ) -> Self {
        Self {
            threshold,
            on_match: on_match.unwrap_or(Decision::DEFAULT_ON_MATCH),
            on_mismatch: on_mismatch.unwrap_or(Decision::DEFAULT_ON_MISMATCH),
        }
    }

    /// Create a filter from a configured count.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidThreshold` if `count` is negative. The
    /// failure is also sent to `reporter`.
    pub fn create(
        count: i64,
        on_match: Option<Decision>,
        on_mismatch: Option<Decision>,
        reporter: &dyn DiagnosticReporter,
    ) -> Result<Self, FilterError> {
        let threshold = match usize::try_from(count) {
            Ok(t) => t,
            Err(_) => {
                let err = FilterError::InvalidThreshold { value: count };
                reporter.error(&err.to_string());
                return Err(err);
            }
        };
        Ok(Self::new(threshold, on_match, on_mismatch))
    }

    /// Create a filter from the loaded configuration.
    pub fn from_config(
        config: &Config,
        reporter: &dyn DiagnosticReporter,
    ) -> Result<Self, FilterError> {
        Self::create(config.count, config.on_match, config.on_mismatch, reporter)
    }

    /// Word count boundary.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Decide on a raw message string.
    pub fn filter_text(&self, text: Option<&str>) -> Decision {
        self.decide(EventRepresentation::Text(text))
    }

    /// Decide on any value through its textual form.
    pub fn filter_object(&self, object: Option<&dyn fmt::Display>) -> Decision {
        self.decide(EventRepresentation::Object(object))
    }

    /// Decide on a structured message.
    pub fn filter_message(&self, message: Option<&dyn Message>) -> Decision {
        self.decide(EventRepresentation::Message(message))
    }

    /// Decide on a full log event.
    pub fn filter_event(&self, event: &LogEvent) -> Decision {
        self.decide(EventRepresentation::Event(event))
    }

    /// Decide on an event and report the word count behind the decision.
    pub fn evaluate(&self, input: EventRepresentation<'_>) -> Evaluation {
        let text = match render(&input) {
            Ok(Some(text)) => text,
            Ok(None) => return self.mismatch(),
            Err(e) => {
                debug!("{}: message could not be rendered: {}", self.name(), e);
                return self.mismatch();
            }
        };

        let words = count_words(&text);
        let decision = if words < self.threshold {
            self.on_match
        } else {
            self.on_mismatch
        };
        Evaluation {
            decision,
            words: Some(words),
        }
    }

    fn mismatch(&self) -> Evaluation {
        Evaluation {
            decision: self.on_mismatch,
            words: None,
        }
    }
}

impl Filter for WordCountFilter {
    fn name(&self) -> &'static str {
        "WordCountFilter"
    }

    fn on_match(&self) -> Decision {
        self.on_match
    }

    fn on_mismatch(&self) -> Decision {
        self.on_mismatch
    }

    fn decide(&self, input: EventRepresentation<'_>) -> Decision {
        self.evaluate(input).decision
    }
}

impl fmt::Display for WordCountFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={}, onMatch={}, onMismatch={}",
            self.threshold, self.on_match, self.on_mismatch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::RenderError;
    use crate::domain::EventMessage;
    use std::sync::{Arc, Mutex};
    use std::thread;

    #[derive(Default)]
    struct RecordingReporter {
        messages: Mutex<Vec<String>>,
    }

    impl DiagnosticReporter for RecordingReporter {
        fn error(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    struct BrokenMessage;

    impl Message for BrokenMessage {
        fn formatted_message(&self) -> Result<String, RenderError> {
            Err(RenderError::new("cannot format"))
        }
    }

    fn accept_deny(threshold: usize) -> WordCountFilter {
        WordCountFilter::new(threshold, Some(Decision::Accept), Some(Decision::Deny))
    }

    #[test]
    fn test_scenario_threshold_five() {
        let filter = accept_deny(5);
        assert_eq!(filter.filter_text(Some("one two three")), Decision::Accept);
        assert_eq!(
            filter.filter_text(Some("one two three four five six")),
            Decision::Deny
        );
        assert_eq!(filter.filter_text(None), Decision::Deny);
    }

    #[test]
    fn test_threshold_boundary_is_strict() {
        let filter = accept_deny(3);
        assert_eq!(filter.filter_text(Some("a b")), Decision::Accept);
        assert_eq!(filter.filter_text(Some("a b c")), Decision::Deny);
        assert_eq!(filter.filter_text(Some("a b c d")), Decision::Deny);
    }

    #[test]
    fn test_empty_message_matches_positive_threshold() {
        let filter = accept_deny(1);
        assert_eq!(filter.filter_text(Some("")), Decision::Accept);
        assert_eq!(filter.filter_text(Some("   ")), Decision::Accept);
    }

    #[test]
    fn test_zero_threshold_always_mismatches() {
        let filter = WordCountFilter::create(
            0,
            Some(Decision::Accept),
            Some(Decision::Deny),
            &RecordingReporter::default(),
        )
        .unwrap();
        assert_eq!(filter.filter_text(Some("")), Decision::Deny);
        assert_eq!(filter.filter_text(Some("word")), Decision::Deny);
    }

    #[test]
    fn test_create_negative_threshold_fails_and_reports() {
        let reporter = RecordingReporter::default();
        let result =
            WordCountFilter::create(-1, Some(Decision::Accept), Some(Decision::Deny), &reporter);

        assert_eq!(result, Err(FilterError::InvalidThreshold { value: -1 }));
        let messages = reporter.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("-1"));
    }

    #[test]
    fn test_create_valid_threshold_does_not_report() {
        let reporter = RecordingReporter::default();
        let filter = WordCountFilter::create(4, None, None, &reporter).unwrap();
        assert_eq!(filter.threshold(), 4);
        assert!(reporter.messages.lock().unwrap().is_empty());
    }

    #[test]
    fn test_default_actions() {
        let filter = WordCountFilter::new(2, None, None);
        assert_eq!(filter.on_match(), Decision::Neutral);
        assert_eq!(filter.on_mismatch(), Decision::Deny);
        assert_eq!(filter.filter_text(Some("short")), Decision::Neutral);
    }

    #[test]
    fn test_null_inputs_yield_on_mismatch() {
        let filter = WordCountFilter::new(10, Some(Decision::Accept), Some(Decision::Neutral));
        assert_eq!(filter.filter_text(None), Decision::Neutral);
        assert_eq!(filter.filter_object(None), Decision::Neutral);
        assert_eq!(filter.filter_message(None), Decision::Neutral);
        assert_eq!(filter.filter_event(&LogEvent::default()), Decision::Neutral);
    }

    #[test]
    fn test_render_failure_yields_on_mismatch() {
        let filter = accept_deny(10);
        assert_eq!(filter.filter_message(Some(&BrokenMessage)), Decision::Deny);
    }

    #[test]
    fn test_all_entry_points_agree() {
        let filter = accept_deny(4);
        let text = "a b c";
        let object = text.to_string();
        let message = EventMessage::Parameterized {
            format: "a {} c".to_string(),
            params: vec![serde_json::json!("b")],
        };
        let event = LogEvent::with_message(message.clone());

        let decisions = [
            filter.filter_text(Some(text)),
            filter.filter_object(Some(&object)),
            filter.filter_message(Some(&message)),
            filter.filter_event(&event),
        ];
        assert!(decisions.iter().all(|d| *d == Decision::Accept));
    }

    #[test]
    fn test_shell_metacharacters_are_counted_not_executed() {
        let filter = accept_deny(3);
        assert_eq!(
            filter.filter_text(Some("\"; touch /tmp/pwned; echo \"")),
            Decision::Deny
        );
        assert_eq!(filter.filter_text(Some("$(reboot)")), Decision::Accept);
    }

    #[test]
    fn test_evaluate_reports_word_count() {
        let filter = accept_deny(3);
        assert_eq!(
            filter.evaluate(EventRepresentation::Text(Some("a b c d"))),
            Evaluation {
                decision: Decision::Deny,
                words: Some(4),
            }
        );
        assert_eq!(
            filter.evaluate(EventRepresentation::Message(Some(&BrokenMessage))),
            Evaluation {
                decision: Decision::Deny,
                words: None,
            }
        );
    }

    #[test]
    fn test_display() {
        let filter = accept_deny(5);
        assert_eq!(filter.to_string(), "count=5, onMatch=ACCEPT, onMismatch=DENY");
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            count: 2,
            on_match: Some(Decision::Accept),
            on_mismatch: None,
            ..Config::default()
        };
        let filter = WordCountFilter::from_config(&config, &RecordingReporter::default()).unwrap();
        assert_eq!(filter.filter_text(Some("hi")), Decision::Accept);
        assert_eq!(filter.filter_text(Some("hi there")), Decision::Deny);
    }

    #[test]
    fn test_shared_across_threads() {
        let filter = Arc::new(accept_deny(3));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || {
                    let text = "w ".repeat(i + 1);
                    filter.filter_text(Some(text.as_str()))
                })
            })
            .collect();

        let results: Vec<Decision> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(
            results,
            vec![Decision::Accept, Decision::Accept, Decision::Deny, Decision::Deny]
        );
    }
}
