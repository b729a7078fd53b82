//! Resolution and reading of the header text to be processed.

use std::{
    io,
    path::{Path, PathBuf},
};

use tokio::{
    fs,
    io::{stdin, AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader},
};
use tracing::debug;

/// Prompt printed before reading header text typed in a terminal.
pub const INTERACTIVE_PROMPT: &str = "Paste email header (Ctrl+D or Ctrl+Z to finish):";

/// Where the header text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// An explicit input file.
    File(PathBuf),
    /// Standard input piped from another process.
    Stdin,
    /// Lines typed in a terminal until end-of-input.
    Interactive,
}

impl InputSource {
    /// Picks the input source, an explicit path wins over piped standard
    /// input, which wins over the interactive prompt.
    ///
    /// ```rust
    /// use mailscrub_utils::InputSource;
    ///
    /// assert_eq!(InputSource::resolve(None, false), InputSource::Stdin);
    /// assert_eq!(InputSource::resolve(None, true), InputSource::Interactive);
    /// ```
    pub fn resolve(path: Option<&Path>, stdin_is_terminal: bool) -> Self {
        match path {
            Some(path) => InputSource::File(path.to_path_buf()),
            None if !stdin_is_terminal => InputSource::Stdin,
            None => InputSource::Interactive,
        }
    }
}

/// Reads the complete header text from the given source.
pub async fn read_input(source: &InputSource) -> io::Result<String> {
    debug!(source = ?source, "Reading header text");
    match source {
        InputSource::File(path) => fs::read_to_string(path).await,
        InputSource::Stdin => read_all(stdin()).await,
        InputSource::Interactive => {
            println!("{INTERACTIVE_PROMPT}");
            read_lines(BufReader::new(stdin())).await
        }
    }
}

/// Reads everything from the reader as-is.
pub async fn read_all<R: AsyncRead + Unpin>(mut reader: R) -> io::Result<String> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer).await?;
    Ok(buffer)
}

/// Reads lines until end-of-input and joins them with `\n`, without a
/// trailing newline.
pub async fn read_lines<R: AsyncBufRead + Unpin>(reader: R) -> io::Result<String> {
    let mut lines = reader.lines();
    let mut collected = Vec::new();
    while let Some(line) = lines.next_line().await? {
        collected.push(line);
    }
    Ok(collected.join("\n"))
}

/// Checks whether the resolved input has nothing to process.
///
/// ```rust
/// assert!(mailscrub_utils::is_blank_input(" \n\t\n"));
/// assert!(!mailscrub_utils::is_blank_input("Subject: Hi"));
/// ```
pub fn is_blank_input(text: &str) -> bool {
    text.trim().is_empty()
}
