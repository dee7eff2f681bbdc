//! Generate command — build a tag cloud and write the HTML document.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument, warn};

use tagweave_core::TagCloud;

use super::read_input_file;

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Text file to read.
    pub file: Utf8PathBuf,

    /// Path of the HTML file to write.
    #[arg(short, long, value_name = "FILE")]
    pub output: Utf8PathBuf,

    /// Number of words to render (clamped to the distinct word count).
    #[arg(short = 'n', long)]
    pub words: Option<usize>,
}

/// Build a tag cloud from a text file and write it as a standalone HTML page.
///
/// The document is rendered fully in memory before the single output write,
/// so an input-side failure never leaves a partial output file behind.
#[instrument(name = "cmd_generate", skip_all, fields(file = %args.file))]
pub fn cmd_generate(
    args: GenerateArgs,
    global_json: bool,
    config_top_words: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, output = %args.output, words = ?args.words, "executing generate command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let n = args.words.unwrap_or(config_top_words);
    let cloud = TagCloud::build(&content, n);
    if cloud.len() < n {
        warn!(
            requested = n,
            distinct = cloud.distinct,
            "fewer distinct words than requested; rendering all of them"
        );
    }

    let html = cloud.to_html(args.file.as_str());
    std::fs::write(args.output.as_std_path(), html)
        .with_context(|| format!("failed to write {}", args.output))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&cloud.report())?);
    } else {
        println!(
            "{} wrote {} words from {} to {}",
            "DONE:".green(),
            cloud.len(),
            args.file,
            args.output,
        );
    }

    Ok(())
}
