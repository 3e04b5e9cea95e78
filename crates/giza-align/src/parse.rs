//! Parse a single GIZA alignment line against its sentence pair.

use giza_types::{
    ALIGNMENT_PREFIX, GIZA_INDEX_BASE, NULL_SEGMENT_INDEX, SEGMENT_CLOSE, SEGMENT_OPEN, Sentence,
    SentenceAlignment,
};
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AlignmentError {
    #[error("malformed alignment line (expected `{prefix} ... {close}`): {line}", prefix = ALIGNMENT_PREFIX, close = SEGMENT_CLOSE)]
    MalformedLine { line: String },
    #[error("segment {segment} has no `{open}`: {text:?}", open = SEGMENT_OPEN)]
    MalformedSegment { segment: usize, text: String },
    #[error("source token {src_index} is {found:?} but the corpus has {expected:?}")]
    TokenMismatch {
        src_index: usize,
        found: String,
        expected: String,
    },
    #[error("source index {src_index} out of range for a sentence of {len} tokens")]
    SourceIndexOutOfRange { src_index: usize, len: usize },
    #[error("target index {index} (source {src_index}) out of range for a sentence of {len} tokens")]
    TargetIndexOutOfRange {
        src_index: usize,
        index: usize,
        len: usize,
    },
    #[error("invalid target index {raw:?} (source {src_index})")]
    InvalidIndex { src_index: usize, raw: String },
}

/// Parse one `NULL ({ ... }) word ({ ... }) ...` line.
///
/// Segment `i` (after the NULL segment) describes `source[i - 1]`. Its word
/// must match the corpus token and its 1-based target indices must fall
/// inside `target`. The NULL segment is skipped.
pub fn parse_alignment_line(
    line: &str,
    source: &Sentence<'_>,
    target: &Sentence<'_>,
) -> Result<SentenceAlignment, AlignmentError> {
    let line = line.trim();
    if !line.starts_with(ALIGNMENT_PREFIX) || !line.ends_with(SEGMENT_CLOSE) {
        return Err(AlignmentError::MalformedLine {
            line: line.to_string(),
        });
    }

    let mut segments: Vec<&str> = line.split(SEGMENT_CLOSE).collect();
    // Trailing empty piece left by the line's own terminator.
    segments.pop();

    let mut alignment = SentenceAlignment::new();
    for (segment, text) in segments.into_iter().enumerate() {
        if segment == NULL_SEGMENT_INDEX {
            continue;
        }
        let src_index = segment - (NULL_SEGMENT_INDEX + 1);

        let (word, indices) =
            text.split_once(SEGMENT_OPEN)
                .ok_or_else(|| AlignmentError::MalformedSegment {
                    segment,
                    text: text.to_string(),
                })?;
        let word = word.trim();

        let expected = source
            .get(src_index)
            .ok_or(AlignmentError::SourceIndexOutOfRange {
                src_index,
                len: source.len(),
            })?;
        if word != expected {
            return Err(AlignmentError::TokenMismatch {
                src_index,
                found: word.to_string(),
                expected: expected.to_string(),
            });
        }

        alignment.add_source(src_index);
        for raw in indices.split_whitespace() {
            let index: usize = raw.parse().map_err(|_| AlignmentError::InvalidIndex {
                src_index,
                raw: raw.to_string(),
            })?;
            let trg = index
                .checked_sub(GIZA_INDEX_BASE)
                .filter(|trg| *trg < target.len())
                .ok_or(AlignmentError::TargetIndexOutOfRange {
                    src_index,
                    index,
                    len: target.len(),
                })?;
            alignment.link(src_index, trg);
        }
    }

    Ok(alignment)
}
