use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use giza_align::LoadMode;
use tracing::info;
use tracing_subscriber::util::SubscriberInitExt;

use giza_convert::{Config, convert, log_filter, log_subscriber, parse_load_mode};

#[derive(Parser)]
#[command(name = "giza-to-standard")]
#[command(about = "Convert GIZA word alignments into src-trg-* pair lines")]
struct Cli {
    /// Source corpus, one whitespace-tokenized sentence per line.
    src_corpus: PathBuf,
    /// Target corpus, parallel to the source corpus.
    trg_corpus: PathBuf,
    /// GIZA alignment file (e.g. `*.A3.final`).
    giza_alignments: PathBuf,
    /// How corpus files are read: `mmap` or `owned`.
    #[arg(long, env = "GIZA_LOAD_MODE", default_value = "mmap", value_parser = parse_load_mode)]
    load_mode: LoadMode,
    /// Write to this file instead of standard output.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config {
        source_path: cli.src_corpus,
        target_path: cli.trg_corpus,
        alignment_path: cli.giza_alignments,
        load_mode: cli.load_mode,
    };
    info!(
        "converting {} with corpora {} / {} (mode: {:?})",
        config.alignment_path.display(),
        config.source_path.display(),
        config.target_path.display(),
        config.load_mode
    );

    let conversion = convert(&config)?;
    match &cli.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
            conversion.write_to(BufWriter::new(file))?;
        }
        None => conversion.write_to(BufWriter::new(io::stdout().lock()))?,
    }

    let summary = conversion.summary();
    info!(
        "wrote {} lines ({} pairs){}",
        summary.sentences,
        summary.pairs,
        if summary.fallback {
            ", all empty after line count mismatch"
        } else {
            ""
        }
    );
    Ok(())
}

fn init_tracing() {
    log_subscriber(log_filter(), io::stderr).init();
}
