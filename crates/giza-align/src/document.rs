//! Whole-file handling of GIZA `*.A3.*` alignment output.
//!
//! The file is a sequence of three-line blocks, one per sentence pair:
//! a `# Sentence pair (n) ...` comment, the echoed sentence, and the
//! `NULL ({ ... })` alignment line. Only the alignment lines are parsed.

use std::path::Path;

use anyhow::{Context, Result};
use giza_types::{
    ALIGNMENT_PREFIX, LINES_PER_SENTENCE_PAIR, SENTENCE_PAIR_HEADER, SentenceAlignment,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::corpus::Corpus;
use crate::parse::{AlignmentError, parse_alignment_line};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("alignment file line {line} (sentence {sentence})")]
    Line {
        line: usize,
        sentence: usize,
        #[source]
        source: AlignmentError,
    },
    #[error("alignment file line {line}: more alignment lines than the {expected} source sentences")]
    TooManyAlignments { expected: usize, line: usize },
    #[error("found {found} alignment lines for {expected} source sentences")]
    MissingAlignments { expected: usize, found: usize },
    #[error("target corpus has no sentence {sentence}")]
    MissingTargetSentence { sentence: usize },
}

/// One alignment per source sentence, in corpus order.
#[derive(Clone, Debug, Default)]
pub struct AlignmentSet {
    pub alignments: Vec<SentenceAlignment>,
    /// True when the line count check failed and every alignment was
    /// replaced by an empty one.
    pub fallback: bool,
}

impl AlignmentSet {
    fn empty(sentences: usize) -> Self {
        Self {
            alignments: vec![SentenceAlignment::new(); sentences],
            fallback: true,
        }
    }

    /// Total emitted pairs across all sentences.
    pub fn pair_count(&self) -> usize {
        self.alignments.iter().map(SentenceAlignment::pair_count).sum()
    }
}

/// Read and parse an alignment file against both corpora.
pub fn read_alignment_file(
    path: impl AsRef<Path>,
    source: &Corpus,
    target: &Corpus,
) -> Result<AlignmentSet> {
    let path = path.as_ref();
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    debug!("read {} bytes from {}", text.len(), path.display());
    parse_alignment_document(&text, source, target)
        .with_context(|| format!("parse {}", path.display()))
}

/// Parse alignment file contents against both corpora.
///
/// GIZA occasionally drops sentence pairs without saying so. When the line
/// count is not exactly three per source sentence the alignments can no
/// longer be matched to the corpus, so every sentence gets an empty
/// alignment instead.
pub fn parse_alignment_document(
    text: &str,
    source: &Corpus,
    target: &Corpus,
) -> Result<AlignmentSet, DocumentError> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let expected_lines = source.len() * LINES_PER_SENTENCE_PAIR;
    if lines.len() != expected_lines {
        warn!(
            "alignment file has {} lines, expected {} for {} sentences; emitting empty alignments",
            lines.len(),
            expected_lines,
            source.len()
        );
        return Ok(AlignmentSet::empty(source.len()));
    }

    let mut alignments = Vec::with_capacity(source.len());
    for (lineno, line) in lines.iter().enumerate() {
        if line.starts_with(SENTENCE_PAIR_HEADER) || !line.starts_with(ALIGNMENT_PREFIX) {
            continue;
        }
        let sentence = alignments.len();
        let src = source
            .sentence(sentence)
            .ok_or(DocumentError::TooManyAlignments {
                expected: source.len(),
                line: lineno + 1,
            })?;
        let trg = target
            .sentence(sentence)
            .ok_or(DocumentError::MissingTargetSentence {
                sentence: sentence + 1,
            })?;
        let parsed =
            parse_alignment_line(line, &src, &trg).map_err(|err| DocumentError::Line {
                line: lineno + 1,
                sentence: sentence + 1,
                source: err,
            })?;
        alignments.push(parsed);
    }

    if alignments.len() != source.len() {
        return Err(DocumentError::MissingAlignments {
            expected: source.len(),
            found: alignments.len(),
        });
    }

    Ok(AlignmentSet {
        alignments,
        fallback: false,
    })
}
