//! CLI binary for gmi2gopher.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use gmi2gopher::{convert_file, convert_to_file, ConversionConfig, Dialect, FencePolicy};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Gophermap on stdout
  gmi2gopher index.gmi

  # Write a gophermap next to the capsule
  gmi2gopher index.gmi -o gophermap

  # Plain text rendition of a post
  gmi2gopher --plain-text posts/hello.gmi -o posts/hello.txt

  # Keep preformatted blocks verbatim
  gmi2gopher --preserve-fences notes.gmi

  # Conversion stats as JSON
  gmi2gopher --json index.gmi > index.json

LINK TRANSLATION (gophermap):
  => gopher://host:7070/1/dir  →  1label<TAB>/dir<TAB>host<TAB>7070
  => https://example.com       →  hlabel<TAB>URL:https://example.com
  => /post.gmi                 →  0label<TAB>/post.txt
  => /dir/index.gmi            →  1label<TAB>/dir

ENVIRONMENT VARIABLES:
  RUST_LOG                Override the log filter (e.g. gmi2gopher=debug)
"#;

/// Convert Gemini text files to gopher maps or plain text.
#[derive(Parser, Debug)]
#[command(
    name = "gmi2gopher",
    version,
    about = "Convert Gemini text files to gopher maps or plain text",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Gemini (.gmi) file to convert.
    input: PathBuf,

    /// Write output to this file instead of stdout.
    #[arg(short, long, env = "GMI2GOPHER_OUTPUT")]
    output: Option<PathBuf>,

    /// Emit stripped plain text instead of a gophermap.
    #[arg(short, long, env = "GMI2GOPHER_PLAIN_TEXT")]
    plain_text: bool,

    /// Wrap width in columns (20–1000).
    #[arg(long, env = "GMI2GOPHER_WIDTH", default_value_t = 80)]
    width: usize,

    /// Emit the lines between ``` fences verbatim instead of rendering them.
    #[arg(long, env = "GMI2GOPHER_PRESERVE_FENCES")]
    preserve_fences: bool,

    /// Output structured JSON (ConversionOutput) instead of text.
    #[arg(long, env = "GMI2GOPHER_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "GMI2GOPHER_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "GMI2GOPHER_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli)?;

    // ── Run conversion ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        if cli.json {
            let output = convert_file(&cli.input, &config).context("Conversion failed")?;
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
            std::fs::write(output_path, json)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            return Ok(());
        }

        let stats = convert_to_file(&cli.input, output_path, &config)
            .context("Conversion failed")?;

        if !cli.quiet {
            eprintln!(
                "{} lines → {} lines ({} links)  →  {}",
                stats.input_lines,
                stats.output_lines,
                stats.links,
                output_path.display(),
            );
        }
    } else {
        let output = convert_file(&cli.input, &config).context("Conversion failed")?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if cli.json {
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
            writeln!(handle, "{json}").context("Failed to write to stdout")?;
        } else {
            handle
                .write_all(output.text.as_bytes())
                .context("Failed to write to stdout")?;
        }

        if output.stats.malformed_links > 0 && !cli.quiet {
            eprintln!(
                "  {} link line(s) had no target and were copied unchanged",
                output.stats.malformed_links
            );
        }
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli) -> Result<ConversionConfig> {
    let dialect = if cli.plain_text {
        Dialect::PlainText
    } else {
        Dialect::GopherMap
    };
    let fence_policy = if cli.preserve_fences {
        FencePolicy::Preserve
    } else {
        FencePolicy::StripDelimiters
    };

    ConversionConfig::builder()
        .dialect(dialect)
        .width(cli.width)
        .fence_policy(fence_policy)
        .build()
        .context("Invalid configuration")
}
