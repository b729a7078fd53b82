use tracing::{debug, info};

use crate::{has_header_name, header_name, LineOutcome, LineTransformer};

/// Header names dropped by default, these carry relay hops and
/// signatures that identify the delivering infrastructure.
pub const DEFAULT_DENYLIST: [&str; 9] = [
    "received",
    "return-path",
    "dkim-signature",
    "arc-seal",
    "arc-authentication-results",
    "arc-message-signature",
    "authentication-results",
    "x-google-dkim-signature",
    "x-gm-message-state",
];

/// Transformer that drops every line whose header name is in the denylist.
///
/// Names are matched case-insensitively and only as a prefix directly
/// followed by `:`, so `X-Received:` survives a `received` entry.
pub struct DenylistTransformer {
    names: Vec<String>,
}

impl DenylistTransformer {
    /// Creates a new [`DenylistTransformer`] for the given header names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_ascii_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        info!(count = names.len(), "Denylist transformer initialized");
        Self { names }
    }

    /// Returns the (lower-cased) header names dropped by this transformer.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for DenylistTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST)
    }
}

impl LineTransformer for DenylistTransformer {
    fn transform<'a>(&self, line: &'a str) -> Option<LineOutcome<'a>> {
        if self.names.iter().any(|name| has_header_name(line, name)) {
            debug!(
                header = header_name(line).unwrap_or_default(),
                "Dropping denylisted header"
            );
            return Some(LineOutcome::Drop);
        }
        None
    }

    fn name(&self) -> &str {
        "denylist"
    }
}
