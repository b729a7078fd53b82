use std::borrow::Cow;

use tracing::{debug, info};

use crate::{has_header_name, LineOutcome, LineTransformer};

/// Marker injected into the `Message-ID` header by default.
pub const DEFAULT_MESSAGE_ID_MARKER: &str = "[EID]";

/// Transformer that injects a marker into the `Message-ID` header.
///
/// When the line carries an angle-bracketed value the marker is inserted
/// before every `>` on the line. Otherwise it is appended after trailing
/// whitespace is stripped. Lines already holding the marker are marked
/// again, the rewrite is literal.
pub struct MessageIdTransformer {
    marker: String,
}

impl MessageIdTransformer {
    /// Creates a new [`MessageIdTransformer`] injecting the given marker.
    pub fn new(marker: String) -> Self {
        info!(marker = %marker, "Message-ID transformer initialized");
        Self { marker }
    }
}

impl Default for MessageIdTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_ID_MARKER.to_string())
    }
}

impl LineTransformer for MessageIdTransformer {
    fn transform<'a>(&self, line: &'a str) -> Option<LineOutcome<'a>> {
        if !has_header_name(line, "message-id") {
            return None;
        }
        let marked = if line.contains('<') && line.contains('>') {
            debug!("Inserting marker into bracketed Message-ID");
            line.replace('>', &format!("{}>", self.marker))
        } else {
            debug!("Appending marker to bare Message-ID");
            format!("{}{}", line.trim_end(), self.marker)
        };
        Some(LineOutcome::Emit(Cow::Owned(marked)))
    }

    fn name(&self) -> &str {
        "message_id"
    }
}
