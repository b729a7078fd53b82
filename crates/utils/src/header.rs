//! Line level helpers for raw email header text.
//!
//! Header text is handled as plain lines, no folding, unfolding or
//! structural validation is applied. Header names are compared with
//! ASCII case folding only, in line with RFC 5322 field names.

/// Splits header text into its lines on `\n` only.
///
/// A `\r` from CRLF input stays attached to its line and a trailing
/// newline yields a final empty line, so that joining the lines back
/// with `\n` reproduces the input byte for byte.
///
/// # Examples
///
/// ```rust
/// let lines: Vec<_> = mailscrub_utils::split_lines("From: a@b\r\nTo: c@d\n").collect();
/// assert_eq!(lines, ["From: a@b\r", "To: c@d", ""]);
/// ```
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Checks whether a line is empty or made only of whitespace.
///
/// ```rust
/// assert!(mailscrub_utils::is_blank_line(" \t\r"));
/// assert!(!mailscrub_utils::is_blank_line("Subject: Hi"));
/// ```
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Checks whether `line` starts with the header `name` immediately
/// followed by a colon, ignoring ASCII case.
///
/// Only a true prefix counts, `X-Received:` is not a `Received` header.
///
/// # Examples
///
/// ```rust
/// assert!(mailscrub_utils::has_header_name("RECEIVED: from x", "received"));
/// assert!(!mailscrub_utils::has_header_name("X-Received: from x", "received"));
/// assert!(!mailscrub_utils::has_header_name("Received : from x", "received"));
/// ```
pub fn has_header_name(line: &str, name: &str) -> bool {
    let bytes = line.as_bytes();
    let name = name.as_bytes();
    bytes
        .get(..name.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
        && bytes.get(name.len()) == Some(&b':')
}

/// Returns the header name of a line, the text before the first colon,
/// or `None` when the line has no colon.
///
/// ```rust
/// assert_eq!(mailscrub_utils::header_name("Message-ID: <a@b>"), Some("Message-ID"));
/// assert_eq!(mailscrub_utils::header_name("no colon here"), None);
/// ```
pub fn header_name(line: &str) -> Option<&str> {
    line.split_once(':').map(|(name, _)| name)
}
