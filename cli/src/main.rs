use std::{
    io::{stdin, IsTerminal},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use mailscrub_utils::{
    copy_to_clipboard, is_blank_input, load_config, read_input, write_output, HeaderProcessor,
    InputSource, OutputTarget, ScrubConfig,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Scrubs identifying lines from email headers.
///
/// Drops relay and signature headers, replaces the `.fin` domain of the
/// `From` address with `.[RDNS]` and marks the `Message-ID` with `[EID]`.
#[derive(Debug, Parser)]
#[command(name = "mailscrub", version)]
struct Cli {
    /// Input file with the email header (defaults to piped stdin or a prompt)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Copy the processed header to the clipboard
    #[arg(long)]
    clipboard: bool,

    /// TOML configuration file overriding the denylist and markers
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    Ok(ExitCode::from(run(cli).await?))
}

/// Runs a single scrub, returning the process exit status.
async fn run(cli: Cli) -> anyhow::Result<u8> {
    let scrub_config = match &cli.config {
        Some(path) => {
            load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
                .scrub
        }
        None => ScrubConfig::default(),
    };
    let processor = HeaderProcessor::from_config(&scrub_config)?;

    let source = InputSource::resolve(cli.input.as_deref(), stdin().is_terminal());
    let header = read_input(&source)
        .await
        .with_context(|| format!("Failed to read input from {source:?}"))?;

    if is_blank_input(&header) {
        println!("No input provided!");
        return Ok(1);
    }

    let processed = processor.process(&header);
    info!(
        input_bytes = header.len(),
        output_bytes = processed.len(),
        "Header processed"
    );

    let target = OutputTarget::resolve(cli.output);
    write_output(&processed, &target)
        .await
        .with_context(|| format!("Failed to write output to {target:?}"))?;

    if cli.clipboard {
        match copy_to_clipboard(&processed) {
            Ok(()) => println!("\n✓ Copied to clipboard!"),
            Err(e) => {
                warn!(error = %e, "Clipboard copy failed");
                println!("\n⚠ Could not copy to clipboard: {e}");
            }
        }
    }

    Ok(0)
}
