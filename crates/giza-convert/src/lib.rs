use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use giza_align::{AlignmentSet, Corpus, LoadMode, read_alignment_file, write_alignments};
use tracing::{Subscriber, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Input locations and loading strategy for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    pub alignment_path: PathBuf,
    pub load_mode: LoadMode,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RunSummary {
    pub sentences: usize,
    pub pairs: usize,
    pub fallback: bool,
}

/// Fully parsed alignments, ready to be written.
#[derive(Debug)]
pub struct Conversion {
    set: AlignmentSet,
}

impl Conversion {
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            sentences: self.set.alignments.len(),
            pairs: self.set.pair_count(),
            fallback: self.set.fallback,
        }
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        write_alignments(writer, &self.set.alignments).context("write alignments")
    }
}

/// Load both corpora and parse the alignment file. Nothing is written.
pub fn convert(config: &Config) -> Result<Conversion> {
    let start = Instant::now();
    let source = Corpus::load_with_mode(&config.source_path, config.load_mode)
        .with_context(|| format!("loading source corpus {}", config.source_path.display()))?;
    let target = Corpus::load_with_mode(&config.target_path, config.load_mode)
        .with_context(|| format!("loading target corpus {}", config.target_path.display()))?;
    info!(
        "loaded {} source / {} target sentences in {} ms",
        source.len(),
        target.len(),
        start.elapsed().as_millis()
    );
    if source.len() != target.len() {
        warn!(
            "corpora differ in length ({} source, {} target)",
            source.len(),
            target.len()
        );
    }

    let parse_start = Instant::now();
    let set = read_alignment_file(&config.alignment_path, &source, &target)?;
    info!(
        "parsed {} alignments ({} pairs) in {} ms",
        set.alignments.len(),
        set.pair_count(),
        parse_start.elapsed().as_millis()
    );
    Ok(Conversion { set })
}

/// Convert and write in one step.
pub fn run<W: Write>(config: &Config, writer: W) -> Result<RunSummary> {
    let conversion = convert(config)?;
    conversion.write_to(writer)?;
    Ok(conversion.summary())
}

pub fn parse_load_mode(raw: &str) -> Result<LoadMode, String> {
    match raw.to_ascii_lowercase().as_str() {
        "mmap" => Ok(LoadMode::Mmap),
        "owned" => Ok(LoadMode::Owned),
        other => Err(format!("unknown load mode `{other}` (expected mmap or owned)")),
    }
}

/// `RUST_LOG` directives, or `info` when unset or unparsable.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Formatting subscriber filtered only by `filter`, so per-target
/// directives apply.
pub fn log_subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .with_level(true)
        .finish()
}
