//! Filter trait definition.

use crate::domain::{Decision, EventRepresentation};

/// Trait for log event filters.
pub trait Filter: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Decision returned when the filter condition holds.
    fn on_match(&self) -> Decision;

    /// Decision returned otherwise.
    fn on_mismatch(&self) -> Decision;

    /// Decide on one event.
    fn decide(&self, input: EventRepresentation<'_>) -> Decision;
}
