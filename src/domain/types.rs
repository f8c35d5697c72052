//! Core domain types for log events and filter decisions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::FilterError;
use super::message::Message;

/// Outcome a filter returns to its pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Decision {
    /// Accept the event without consulting later filters
    Accept,
    /// Suppress the event
    Deny,
    /// No opinion; later filters decide
    Neutral,
}

impl Decision {
    /// Default action when the word count is below the threshold.
    pub const DEFAULT_ON_MATCH: Decision = Decision::Neutral;

    /// Default action otherwise.
    pub const DEFAULT_ON_MISMATCH: Decision = Decision::Deny;

    /// Upper-case name as written in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Accept => "ACCEPT",
            Decision::Deny => "DENY",
            Decision::Neutral => "NEUTRAL",
        }
    }

    /// Whether an event carrying this decision leaves a terminal stage.
    ///
    /// Only DENY drops the event.
    pub fn passes(&self) -> bool {
        !matches!(self, Decision::Deny)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACCEPT" => Ok(Decision::Accept),
            "DENY" => Ok(Decision::Deny),
            "NEUTRAL" => Ok(Decision::Neutral),
            _ => Err(FilterError::UnknownDecision(s.to_string())),
        }
    }
}

impl TryFrom<String> for Decision {
    type Error = FilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Severity of a log event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

/// Message payload carried by a log event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EventMessage {
    /// Plain text, rendered verbatim
    Text(String),
    /// Format string with `{}` placeholders filled from `params`
    Parameterized {
        format: String,
        #[serde(default)]
        params: Vec<serde_json::Value>,
    },
    /// Arbitrary structured value, rendered via its textual form
    Object(serde_json::Value),
}

/// A full log event as received from the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogEvent {
    /// Event severity
    #[serde(default)]
    pub level: Level,

    /// Name of the logger that produced the event
    #[serde(default)]
    pub logger: String,

    /// Optional marker name
    #[serde(default)]
    pub marker: Option<String>,

    /// Optional thread name
    #[serde(default)]
    pub thread: Option<String>,

    /// Optional timestamp, kept as given
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Event message; absent messages always take the mismatch branch
    #[serde(default)]
    pub message: Option<EventMessage>,

    /// Optional rendered throwable attached to the event
    #[serde(default)]
    pub thrown: Option<String>,
}

impl LogEvent {
    /// Build an event carrying only a message.
    pub fn with_message(message: EventMessage) -> Self {
        Self {
            message: Some(message),
            ..Self::default()
        }
    }
}

/// The shapes in which the pipeline hands an event to a filter.
///
/// Every shape reduces to the same rendered text before counting.
#[derive(Clone, Copy)]
pub enum EventRepresentation<'a> {
    /// Raw message string
    Text(Option<&'a str>),
    /// Any value with a textual form
    Object(Option<&'a dyn fmt::Display>),
    /// Structured message exposing formatted text
    Message(Option<&'a dyn Message>),
    /// Full log event; its message is extracted and formatted
    Event(&'a LogEvent),
}

impl fmt::Debug for EventRepresentation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventRepresentation::Text(text) => f.debug_tuple("Text").field(text).finish(),
            EventRepresentation::Object(obj) => f
                .debug_tuple("Object")
                .field(&obj.map(|o| o.to_string()))
                .finish(),
            EventRepresentation::Message(msg) => f
                .debug_tuple("Message")
                .field(&msg.map(|_| "<message>"))
                .finish(),
            EventRepresentation::Event(event) => f.debug_tuple("Event").field(event).finish(),
        }
    }
}
