use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use tracing::{debug, info};

use crate::{has_header_name, LineOutcome, LineTransformer};

/// Domain suffix rewritten by default.
pub const DEFAULT_DOMAIN_SUFFIX: &str = "fin";

/// Marker substituted for the domain suffix by default.
pub const DEFAULT_DOMAIN_MARKER: &str = "[RDNS]";

/// Transformer that replaces a top-level domain suffix in the `From` header.
///
/// The address must follow an `@` and the suffix must be directly followed
/// by `>`, whitespace or the end of the line, so `a@b.finance` is left
/// alone while `a@b.fin` and `<a@b.fin>` are rewritten. Every matching
/// address on the line is rewritten.
pub struct FromDomainTransformer {
    pattern: Regex,
    replacement: String,
}

impl FromDomainTransformer {
    /// Creates a new [`FromDomainTransformer`] replacing `.<suffix>` with
    /// `.<marker>`, the suffix is matched case-insensitively.
    pub fn new(suffix: &str, marker: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&format!(
            r"@([^\s>]+\.){}([>\s]|$)",
            regex::escape(suffix)
        ))
        .case_insensitive(true)
        .build()?;
        // `$` in the marker must not be read as a group reference
        let replacement = format!("@${{1}}{}${{2}}", marker.replace('$', "$$"));
        info!(suffix = %suffix, marker = %marker, "From domain transformer initialized");
        Ok(Self {
            pattern,
            replacement,
        })
    }
}

impl LineTransformer for FromDomainTransformer {
    fn transform<'a>(&self, line: &'a str) -> Option<LineOutcome<'a>> {
        if !has_header_name(line, "from") {
            return None;
        }
        let rewritten = self.pattern.replace_all(line, self.replacement.as_str());
        if let Cow::Owned(_) = rewritten {
            debug!("Rewrote domain suffix in From header");
        }
        Some(LineOutcome::Emit(rewritten))
    }

    fn name(&self) -> &str {
        "from_domain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(line: &str) -> String {
        let transformer =
            FromDomainTransformer::new(DEFAULT_DOMAIN_SUFFIX, DEFAULT_DOMAIN_MARKER).unwrap();
        match transformer.transform(line) {
            Some(LineOutcome::Emit(text)) => text.into_owned(),
            other => panic!("Expected emitted line, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_address() {
        assert_eq!(rewrite("From: a@b.fin"), "From: a@b.[RDNS]");
    }

    #[test]
    fn test_named_address() {
        assert_eq!(
            rewrite("From: Name <a@sub.example.fin>"),
            "From: Name <a@sub.example.[RDNS]>"
        );
    }

    #[test]
    fn test_longer_label_is_kept() {
        assert_eq!(rewrite("From: a@b.finance"), "From: a@b.finance");
        assert_eq!(rewrite("From: a@fin.example.com"), "From: a@fin.example.com");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(rewrite("FROM: A@B.FIN"), "FROM: A@B.[RDNS]");
        assert_eq!(rewrite("from: a@b.Fin"), "from: a@b.[RDNS]");
    }

    #[test]
    fn test_trailing_delimiter_preserved() {
        assert_eq!(rewrite("From: a@b.fin (Alice)"), "From: a@b.[RDNS] (Alice)");
        assert_eq!(rewrite("From: a@b.fin\r"), "From: a@b.[RDNS]\r");
    }

    #[test]
    fn test_multiple_addresses() {
        assert_eq!(
            rewrite("From: a@b.fin, c@d.fin"),
            "From: a@b.fin, c@d.[RDNS]"
        );
        assert_eq!(
            rewrite("From: a@b.fin c@d.fin"),
            "From: a@b.[RDNS] c@d.[RDNS]"
        );
    }

    #[test]
    fn test_no_domain_unchanged() {
        assert_eq!(rewrite("From: Alice"), "From: Alice");
        assert_eq!(rewrite("From:"), "From:");
    }

    #[test]
    fn test_other_headers_not_claimed() {
        let transformer =
            FromDomainTransformer::new(DEFAULT_DOMAIN_SUFFIX, DEFAULT_DOMAIN_MARKER).unwrap();
        assert_eq!(transformer.transform("To: a@b.fin"), None);
        assert_eq!(transformer.transform("X-From: a@b.fin"), None);
    }

    #[test]
    fn test_custom_suffix_is_escaped() {
        let transformer = FromDomainTransformer::new("co.uk", "[$TLD]").unwrap();
        assert_eq!(
            transformer.transform("From: a@b.co.uk"),
            Some(LineOutcome::Emit("From: a@b.[$TLD]".into()))
        );
        assert_eq!(
            transformer.transform("From: a@b.coXuk"),
            Some(LineOutcome::Emit("From: a@b.coXuk".into()))
        );
    }
}
