//! The header processor, applying every line transformer to a block of
//! raw header text.

use std::{borrow::Cow, sync::LazyLock};

use tracing::debug;

use crate::{
    apply_transformers, is_blank_line, split_lines, ConfigError, DenylistTransformer,
    FromDomainTransformer, LineOutcome, LineTransformer, MessageIdTransformer, ScrubConfig,
};

static DEFAULT_PROCESSOR: LazyLock<HeaderProcessor> = LazyLock::new(HeaderProcessor::new);

/// Rewrites raw email header text line by line.
///
/// Blank lines are always kept. Every other line is offered to the
/// transformers in priority order: the denylist first, then the `From`
/// domain rewrite, then the `Message-ID` marker. Lines nobody claims are
/// emitted unchanged, and the order of the surviving lines is preserved.
pub struct HeaderProcessor {
    transformers: Vec<Box<dyn LineTransformer>>,
}

impl HeaderProcessor {
    /// Creates a processor with the built-in denylist and markers.
    pub fn new() -> Self {
        Self::with_transformers(vec![
            Box::new(DenylistTransformer::default()),
            Box::new(default_from_domain()),
            Box::new(MessageIdTransformer::default()),
        ])
    }

    /// Creates a processor from the given configuration.
    pub fn from_config(config: &ScrubConfig) -> Result<Self, ConfigError> {
        let from_domain =
            FromDomainTransformer::new(&config.domain_suffix, &config.domain_marker)
                .map_err(ConfigError::Pattern)?;
        Ok(Self::with_transformers(vec![
            Box::new(DenylistTransformer::new(config.denied_headers())),
            Box::new(from_domain),
            Box::new(MessageIdTransformer::new(config.message_id_marker.clone())),
        ]))
    }

    /// Creates a processor from an explicit, ordered list of transformers.
    pub fn with_transformers(transformers: Vec<Box<dyn LineTransformer>>) -> Self {
        Self { transformers }
    }

    /// Returns the names of the transformers, in the order they are applied.
    pub fn transformer_names(&self) -> Vec<&str> {
        self.transformers.iter().map(|t| t.name()).collect()
    }

    /// Processes the given header text, returning the rewritten text.
    ///
    /// Lines are joined back with `\n`, no other normalization is applied.
    pub fn process(&self, header_text: &str) -> String {
        let mut lines: Vec<Cow<'_, str>> = Vec::new();
        let mut dropped = 0usize;
        for line in split_lines(header_text) {
            if is_blank_line(line) {
                lines.push(Cow::Borrowed(line));
                continue;
            }
            match apply_transformers(&self.transformers, line) {
                LineOutcome::Drop => dropped += 1,
                LineOutcome::Emit(text) => lines.push(text),
            }
        }
        debug!(kept = lines.len(), dropped = dropped, "Processed header text");
        lines.join("\n")
    }
}

impl Default for HeaderProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Processes header text with the built-in denylist and markers.
///
/// # Examples
///
/// ```rust
/// let processed = mailscrub_utils::process(
///     "Received: from x.com\nFrom: Alice <alice@mail.fin>\nSubject: Hi",
/// );
/// assert_eq!(processed, "From: Alice <alice@mail.[RDNS]>\nSubject: Hi");
/// ```
pub fn process(header_text: &str) -> String {
    DEFAULT_PROCESSOR.process(header_text)
}

fn default_from_domain() -> FromDomainTransformer {
    // the built-in suffix is a plain label, the pattern always compiles
    FromDomainTransformer::new(
        crate::DEFAULT_DOMAIN_SUFFIX,
        crate::DEFAULT_DOMAIN_MARKER,
    )
    .expect("Built-in domain pattern is valid")
}
