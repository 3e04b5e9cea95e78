use std::path::Path;

use giza_align::LoadMode;
use giza_convert::{Config, RunSummary, run};

fn write_inputs(dir: &Path, src: &str, trg: &str, giza: &str) -> Config {
    let source_path = dir.join("corpus.src");
    let target_path = dir.join("corpus.trg");
    let alignment_path = dir.join("corpus.A3.final");
    std::fs::write(&source_path, src).unwrap();
    std::fs::write(&target_path, trg).unwrap();
    std::fs::write(&alignment_path, giza).unwrap();
    Config {
        source_path,
        target_path,
        alignment_path,
        load_mode: LoadMode::Owned,
    }
}

fn run_to_string(config: &Config) -> anyhow::Result<(String, RunSummary)> {
    let mut out = Vec::new();
    let summary = run(config, &mut out)?;
    Ok((String::from_utf8(out).unwrap(), summary))
}

#[test]
fn converts_single_sentence() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(
        dir.path(),
        "a b c\n",
        "x y\n",
        "# Sentence pair (1)\na b c\nNULL ({ }) a ({ 1 }) b ({ 2 }) c ({ })\n",
    );
    let (out, summary) = run_to_string(&config).unwrap();
    assert_eq!(out, "0-0-* 1-1-*\n");
    assert_eq!(
        summary,
        RunSummary {
            sentences: 1,
            pairs: 2,
            fallback: false
        }
    );
}

#[test]
fn output_lines_match_sentence_count() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(
        dir.path(),
        "a b\nc\n\n",
        "x y z\nw\nv\n",
        "# Sentence pair (1)\nx y z\nNULL ({ }) a ({ 2 }) b ({ 1 3 })\n\
         # Sentence pair (2)\nw\nNULL ({ 1 }) c ({ })\n\
         # Sentence pair (3)\nv\nNULL ({ 1 })\n",
    );
    for mode in [LoadMode::Mmap, LoadMode::Owned] {
        let config = Config {
            load_mode: mode,
            ..config.clone()
        };
        let (out, summary) = run_to_string(&config).unwrap();
        assert_eq!(out, "0-1-* 1-0-* 1-2-*\n\n\n");
        assert_eq!(summary.sentences, 3);
        assert_eq!(summary.pairs, 3);
    }
}

#[test]
fn dropped_sentence_pair_empties_every_line() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(
        dir.path(),
        "a\nb\n",
        "x\ny\n",
        "# Sentence pair (1)\nx\nNULL ({ }) a ({ 1 })\n",
    );
    let (out, summary) = run_to_string(&config).unwrap();
    assert_eq!(out, "\n\n");
    assert!(summary.fallback);
    assert_eq!(summary.pairs, 0);
}

#[test]
fn token_mismatch_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(
        dir.path(),
        "a\nb\n",
        "x\ny\n",
        "# Sentence pair (1)\nx\nNULL ({ }) a ({ 1 })\n\
         # Sentence pair (2)\ny\nNULL ({ }) q ({ 1 })\n",
    );
    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();
    assert!(out.is_empty());
    assert!(format!("{err:#}").contains("\"q\""));
}

#[test]
fn target_index_one_past_end_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(
        dir.path(),
        "a\n",
        "x y\n",
        "# Sentence pair (1)\nx y\nNULL ({ }) a ({ 3 })\n",
    );
    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();
    assert!(out.is_empty());
    assert!(format!("{err:#}").contains("out of range"));
}

#[test]
fn missing_alignment_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_inputs(dir.path(), "a\n", "x\n", "");
    config.alignment_path = dir.path().join("missing.A3.final");
    let err = run_to_string(&config).unwrap_err();
    assert!(format!("{err:#}").contains("missing.A3.final"));
}
