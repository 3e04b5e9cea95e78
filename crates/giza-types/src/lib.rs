//! Shared types that mirror the GIZA word-alignment text format.
//!
//! A GIZA alignment line annotates every source token with the 1-based
//! target positions it is aligned to, prefixed by a synthetic `NULL` token
//! that collects unaligned target positions:
//!
//! ```text
//! NULL ({ 3 }) the ({ 1 }) house ({ 2 })
//! ```
//!
//! This crate holds the format constants, a borrowed [`Sentence`] view, and
//! [`SentenceAlignment`], the insertion-ordered mapping from source index to
//! target indices that the converter emits as `src-trg-*` pairs.
//!
//! ```rust
//! use giza_types::{AlignmentPair, SentenceAlignment};
//!
//! let mut alignment = SentenceAlignment::new();
//! alignment.link(0, 1);
//! alignment.link(1, 0);
//! alignment.link(1, 2);
//! let pairs: Vec<String> = alignment.pairs().map(|p| p.to_string()).collect();
//! assert_eq!(pairs, ["0-1-*", "1-0-*", "1-2-*"]);
//! assert_eq!(AlignmentPair { src: 4, trg: 7 }.to_string(), "4-7-*");
//! ```

use std::fmt;

/// Every alignment line starts with the NULL token and its opening brace.
pub const ALIGNMENT_PREFIX: &str = "NULL ({";
/// Opens the target index list of a segment.
pub const SEGMENT_OPEN: &str = "({";
/// Closes the target index list of a segment.
pub const SEGMENT_CLOSE: &str = "})";
/// Segment position of the synthetic NULL token. It carries no output.
pub const NULL_SEGMENT_INDEX: usize = 0;
/// GIZA counts target positions from one.
pub const GIZA_INDEX_BASE: usize = 1;
/// Comment line opening each sentence pair block.
pub const SENTENCE_PAIR_HEADER: &str = "# Sentence pair";
/// Header, source echo and alignment data.
pub const LINES_PER_SENTENCE_PAIR: usize = 3;
/// Literal suffix written after every emitted pair.
pub const PAIR_MARKER: &str = "*";

/// Ordered, whitespace-split tokens of one corpus line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sentence<'a> {
    pub tokens: Vec<&'a str>,
}

impl<'a> Sentence<'a> {
    /// Split a raw line on Unicode whitespace.
    pub fn from_line(line: &'a str) -> Self {
        Self {
            tokens: line.split_whitespace().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }
}

/// One `(source, target)` correspondence, both 0-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AlignmentPair {
    pub src: usize,
    pub trg: usize,
}

impl fmt::Display for AlignmentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.src, self.trg, PAIR_MARKER)
    }
}

/// Target indices linked to a single source index, in first-seen order.
///
/// Only [`SentenceAlignment::link`] adds targets, so the list never holds
/// duplicates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceLinks {
    src: usize,
    targets: Vec<usize>,
}

impl SourceLinks {
    pub fn src(&self) -> usize {
        self.src
    }

    pub fn targets(&self) -> &[usize] {
        &self.targets
    }
}

/// Per-sentence mapping from source index to a set of target indices.
///
/// Both levels keep insertion order, so output follows the order in which
/// the alignment line mentioned sources and targets rather than sorted order.
/// Duplicate targets for the same source collapse into one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SentenceAlignment {
    links: Vec<SourceLinks>,
}

impl SentenceAlignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source index without linking it to anything yet.
    ///
    /// A registered source keeps its position even if it never gains targets.
    pub fn add_source(&mut self, src: usize) {
        self.entry(src);
    }

    /// Link `src` to `trg`. Returns `false` if the pair was already present.
    pub fn link(&mut self, src: usize, trg: usize) -> bool {
        let entry = self.entry(src);
        if entry.targets.contains(&trg) {
            return false;
        }
        entry.targets.push(trg);
        true
    }

    /// Targets linked to `src`, or an empty slice.
    pub fn targets_for(&self, src: usize) -> &[usize] {
        self.links
            .iter()
            .find(|l| l.src == src)
            .map(SourceLinks::targets)
            .unwrap_or(&[])
    }

    /// Sources in registration order, including those without targets.
    pub fn sources(&self) -> impl Iterator<Item = &SourceLinks> + '_ {
        self.links.iter()
    }

    /// Flatten into pairs, source order first, then target order.
    pub fn pairs(&self) -> impl Iterator<Item = AlignmentPair> + '_ {
        self.links.iter().flat_map(|l| {
            l.targets
                .iter()
                .map(move |&trg| AlignmentPair { src: l.src, trg })
        })
    }

    /// Number of pairs (not sources).
    pub fn pair_count(&self) -> usize {
        self.links.iter().map(|l| l.targets.len()).sum()
    }

    /// True when no pair would be emitted.
    pub fn is_empty(&self) -> bool {
        self.pair_count() == 0
    }

    // Parsers register sources in increasing order, so the wanted entry is
    // almost always the last one.
    fn entry(&mut self, src: usize) -> &mut SourceLinks {
        let pos = match self.links.iter().rposition(|l| l.src == src) {
            Some(pos) => pos,
            None => {
                self.links.push(SourceLinks {
                    src,
                    targets: Vec::new(),
                });
                self.links.len() - 1
            }
        };
        &mut self.links[pos]
    }
}
