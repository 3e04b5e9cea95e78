//! Convert GIZA word-alignment output into flat `src-trg-*` alignment lines.
//!
//! The pipeline reads two whitespace-tokenized parallel corpora and a GIZA
//! `*.A3.*` file, checks every alignment line against the corpora, and
//! emits one line per source sentence listing its aligned index pairs.
//!
//! # Stages
//! - [`Corpus`]: sentences as borrowed token slices, memory-mapped or owned
//!   via [`LoadMode`].
//! - [`parse_alignment_line`]: one `NULL ({ ... }) word ({ ... }) ...` line
//!   into a [`SentenceAlignment`], with token and bounds checks.
//! - [`read_alignment_file`] / [`parse_alignment_document`]: the three-line
//!   block structure, including the empty fallback when GIZA dropped
//!   sentences.
//! - [`format_alignment`] / [`write_alignments`]: output lines.
//!
//! # Example
//! ```
//! use giza_align::{Corpus, format_alignment, parse_alignment_document};
//!
//! let source = Corpus::from_text("a b c\n");
//! let target = Corpus::from_text("x y\n");
//! let giza = "# Sentence pair (1)\na b c\nNULL ({ }) a ({ 1 }) b ({ 2 }) c ({ })\n";
//! let set = parse_alignment_document(giza, &source, &target).unwrap();
//! assert_eq!(format_alignment(&set.alignments[0]), "0-0-* 1-1-*");
//! ```

pub mod corpus;
pub mod document;
pub mod emit;
pub mod parse;

pub use corpus::{Corpus, LoadMode};
pub use document::{AlignmentSet, DocumentError, parse_alignment_document, read_alignment_file};
pub use emit::{format_alignment, write_alignments};
pub use giza_types::{AlignmentPair, Sentence, SentenceAlignment};
pub use parse::{AlignmentError, parse_alignment_line};
