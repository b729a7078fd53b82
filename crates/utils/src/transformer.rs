//! Per-line header transformations.
//!
//! A [`LineTransformer`] owns a single rewriting rule. The
//! [`HeaderProcessor`](crate::HeaderProcessor) offers each non-blank line
//! to its transformers in order and the first one that claims the line
//! decides what is emitted. Concrete implementations live in the
//! [`transformers`](crate::transformers) module.

use std::borrow::Cow;

use tracing::trace;

/// What a transformer decided to do with a line it claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    /// The line is omitted from the output.
    Drop,
    /// The line is emitted, possibly rewritten.
    Emit(Cow<'a, str>),
}

/// Trait for rules that rewrite or drop individual header lines.
pub trait LineTransformer: Send + Sync {
    /// Returns the outcome for `line`, or `None` when the line is not
    /// handled by this transformer and should be offered to the next one.
    fn transform<'a>(&self, line: &'a str) -> Option<LineOutcome<'a>>;

    /// Returns the name of this transformer.
    fn name(&self) -> &str;
}

/// Offers a line to a list of transformers in order, returning the first
/// outcome, or the line unchanged when no transformer claims it.
pub fn apply_transformers<'a>(
    transformers: &[Box<dyn LineTransformer>],
    line: &'a str,
) -> LineOutcome<'a> {
    for transformer in transformers {
        if let Some(outcome) = transformer.transform(line) {
            trace!(transformer = transformer.name(), "Line claimed");
            return outcome;
        }
    }
    LineOutcome::Emit(Cow::Borrowed(line))
}
