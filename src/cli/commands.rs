use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::index_storage::{read_ordering, render_index, save_index};
use crate::indexer::rebuild_index;
use crate::utils::index_path;

/// Questions directory used when none is given, relative to the working directory
pub const DEFAULT_QUESTIONS_DIR: &str = "public/questions";

#[derive(Parser)]
#[command(name = "question-index")]
#[command(version = "0.1.0")]
#[command(about = "Regenerate the question-set index from per-set metadata", long_about = None)]
pub struct Cli {
    /// Directory holding index.yaml and one subdirectory per question set
    #[arg(default_value = DEFAULT_QUESTIONS_DIR)]
    pub questions_dir: PathBuf,

    /// Print the regenerated index instead of overwriting index.yaml
    #[arg(long)]
    pub dry_run: bool,

    /// Increase diagnostic logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    rebuild(&cli.questions_dir, cli.dry_run, &mut out)?;

    Ok(())
}

/// Read the ordering, rebuild, then write (or print) the new index
///
/// Returns the number of summary records produced.
///
/// # Errors
///
/// Fails before anything is written if `index.yaml` is missing or malformed.
/// Fails afterwards only if the new index cannot be written. Skipped question
/// sets are never an error.
pub fn rebuild<W: Write>(questions_dir: &Path, dry_run: bool, out: &mut W) -> Result<usize> {
    let index_file = index_path(questions_dir);
    let ordering = read_ordering(&index_file)?;
    info!("Read {} identifiers from {}", ordering.len(), index_file.display());

    let outcome = rebuild_index(questions_dir, &ordering, out)?;
    let count = outcome.index.len();

    if dry_run {
        let rendered = render_index(&outcome.index)?;
        write!(out, "{}", rendered).context("Failed to write index to output")?;
        writeln!(out, "\n✓ Dry run: {} question sets (not written)", count)
            .context("Failed to write summary")?;
    } else {
        save_index(&index_file, &outcome.index)?;
        writeln!(out, "\n✓ Generated {} with {} question sets", index_file.display(), count)
            .context("Failed to write summary")?;
    }

    Ok(count)
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `-v` when set
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
