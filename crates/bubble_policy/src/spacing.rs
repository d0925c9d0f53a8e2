use serde::Serialize;

use crate::message::ThreadMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingCategory {
    Default,
    Collapsed,
}

/// Gap below `current`.
///
/// Collapsed only when the next message has the same sender and the same
/// direction. In a one-to-one thread the same direction implies the same
/// author, so this matches the thread's grouping key in both thread kinds.
pub fn classify_spacing<M: ThreadMessage>(current: &M, next: Option<&M>) -> SpacingCategory {
    match next {
        Some(next)
            if current.sender() == next.sender() && current.is_outgoing() == next.is_outgoing() =>
        {
            SpacingCategory::Collapsed
        }
        _ => SpacingCategory::Default,
    }
}

#[cfg(test)]
#[path = "tests/spacing_tests.rs"]
mod tests;
