//! Message rendering.
//!
//! Every event shape is reduced to a single rendered string here, so the
//! filter applies one decision rule regardless of how the event arrived.

use serde_json::Value;

use super::error::RenderError;
use super::types::{EventMessage, EventRepresentation};

/// A structured message that can produce its formatted text.
pub trait Message {
    /// Render the message as it would appear in the log output.
    fn formatted_message(&self) -> Result<String, RenderError>;
}

impl Message for EventMessage {
    fn formatted_message(&self) -> Result<String, RenderError> {
        match self {
            EventMessage::Text(text) => Ok(text.clone()),
            EventMessage::Parameterized { format, params } => Ok(format_params(format, params)),
            EventMessage::Object(value) => Ok(value_text(value)),
        }
    }
}

impl Message for String {
    fn formatted_message(&self) -> Result<String, RenderError> {
        Ok(self.clone())
    }
}

/// Reduce an event representation to its rendered text.
///
/// Returns `Ok(None)` when the message is absent and `Err` when a message
/// exists but cannot be rendered.
pub fn render(input: &EventRepresentation<'_>) -> Result<Option<String>, RenderError> {
    match input {
        EventRepresentation::Text(text) => Ok(text.map(str::to_string)),
        EventRepresentation::Object(obj) => Ok(obj.map(|o| o.to_string())),
        EventRepresentation::Message(msg) => msg.map(|m| m.formatted_message()).transpose(),
        EventRepresentation::Event(event) => event
            .message
            .as_ref()
            .map(|m| m.formatted_message())
            .transpose(),
    }
}

/// Substitute `{}` placeholders in order.
///
/// A run of backslashes directly before `{}` is halved: an odd run escapes
/// the placeholder (`\{}` yields `{}`), an even run leaves it live
/// (`\\{}` yields `\` followed by the parameter). Backslashes elsewhere are
/// kept. Placeholders without a parameter stay as written; surplus
/// parameters are ignored.
pub fn format_params(format: &str, params: &[Value]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut params = params.iter();
    let mut rest = format;

    while let Some(pos) = rest.find("{}") {
        let (before, after) = rest.split_at(pos);
        let text = before.trim_end_matches('\\');
        let slashes = before.len() - text.len();

        out.push_str(text);
        out.push_str(&"\\".repeat(slashes / 2));
        if slashes % 2 == 1 {
            out.push_str("{}");
        } else {
            match params.next() {
                Some(param) => out.push_str(&value_text(param)),
                None => out.push_str("{}"),
            }
        }
        rest = &after[2..];
    }
    out.push_str(rest);

    out
}

/// Textual form of a JSON value: strings unquoted, everything else compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
