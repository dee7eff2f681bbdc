//! Count command — print word frequencies for a file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use tagweave_core::frequency::count_frequencies;
use tagweave_core::select::{WordCount, select_top};

use super::read_input_file;

/// Arguments for the `count` subcommand.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Text file to read.
    pub file: Utf8PathBuf,

    /// Only show the N most frequent words.
    #[arg(short = 'n', long)]
    pub words: Option<usize>,
}

#[derive(Serialize)]
struct FrequencyReport {
    total_words: usize,
    distinct_words: usize,
    words: Vec<WordCount>,
}

/// Print the word frequency table for a file, most frequent first.
#[instrument(name = "cmd_count", skip_all, fields(file = %args.file))]
pub fn cmd_count(
    args: CountArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, words = ?args.words, "executing count command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let frequencies = count_frequencies(&content);
    let total_words: usize = frequencies.values().sum();
    let distinct_words = frequencies.len();
    let limit = args.words.unwrap_or(distinct_words);
    let selection = select_top(limit, &frequencies);

    if global_json {
        let report = FrequencyReport {
            total_words,
            distinct_words,
            words: selection.by_count,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} words, {} distinct in {}",
        total_words,
        distinct_words,
        args.file.bold(),
    );
    for entry in &selection.by_count {
        println!("{:>8}  {}", entry.count, entry.word);
    }

    Ok(())
}
