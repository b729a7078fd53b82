//! Delivery of the processed header text.

use std::{io, path::PathBuf};

use tokio::{
    fs,
    io::{stdout, AsyncWrite, AsyncWriteExt},
};
use tracing::debug;

/// Width of the `=` rules framing the processed text on standard output.
pub const BANNER_WIDTH: usize = 60;

/// Where the processed header text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// An explicit output file, written verbatim.
    File(PathBuf),
    /// Standard output, framed by a banner.
    Stdout,
}

impl OutputTarget {
    /// Returns the file target for `path`, or standard output.
    pub fn resolve(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }
}

/// Renders the processed text framed by the banner printed on
/// standard output.
///
/// ```rust
/// let banner = mailscrub_utils::render_banner("Subject: Hi");
/// assert!(banner.starts_with("\n====="));
/// assert!(banner.contains("PROCESSED EMAIL HEADER:"));
/// assert!(banner.ends_with("Subject: Hi\n"));
/// ```
pub fn render_banner(processed: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("\n{rule}\nPROCESSED EMAIL HEADER:\n{rule}\n{processed}\n")
}

/// Writes the processed text to the given target.
pub async fn write_output(processed: &str, target: &OutputTarget) -> io::Result<()> {
    match target {
        OutputTarget::File(path) => {
            fs::write(path, processed).await?;
            debug!(path = %path.display(), bytes = processed.len(), "Wrote processed header");
            println!("Processed header saved to {}", path.display());
            Ok(())
        }
        OutputTarget::Stdout => write_banner(stdout(), processed).await,
    }
}

/// Writes the banner-framed processed text to the writer.
pub async fn write_banner<W: AsyncWrite + Unpin>(mut writer: W, processed: &str) -> io::Result<()> {
    writer.write_all(render_banner(processed).as_bytes()).await?;
    writer.flush().await
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(OutputTarget::resolve(None), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::resolve(Some(PathBuf::from("out.txt"))),
            OutputTarget::File(PathBuf::from("out.txt"))
        );
    }

    #[test]
    fn test_render_banner() {
        let rule = "=".repeat(60);
        assert_eq!(
            render_banner("From: a@b.[RDNS]"),
            format!("\n{rule}\nPROCESSED EMAIL HEADER:\n{rule}\nFrom: a@b.[RDNS]\n")
        );
    }

    #[tokio::test]
    async fn test_write_banner() {
        let mut buffer = Vec::new();
        write_banner(&mut buffer, "Subject: Hi").await.unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), render_banner("Subject: Hi"));
    }

    #[tokio::test]
    async fn test_write_output_to_file_is_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("processed.txt");

        write_output("From: a@b.[RDNS]\n", &OutputTarget::File(path.clone()))
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "From: a@b.[RDNS]\n");
    }

    #[tokio::test]
    async fn test_write_output_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("processed.txt");

        let result = write_output("x", &OutputTarget::File(path)).await;
        assert!(result.is_err());
    }
}
