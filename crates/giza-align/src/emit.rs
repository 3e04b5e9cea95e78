//! Render alignments as flat `src-trg-*` lines.

use std::io::{self, Write};

use giza_types::SentenceAlignment;

/// Space-separated pairs for one sentence; empty when nothing is aligned.
pub fn format_alignment(alignment: &SentenceAlignment) -> String {
    alignment
        .pairs()
        .map(|pair| pair.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write one line per sentence, keeping positional correspondence with the
/// corpus.
pub fn write_alignments<W: Write>(
    mut writer: W,
    alignments: &[SentenceAlignment],
) -> io::Result<()> {
    for alignment in alignments {
        writeln!(writer, "{}", format_alignment(alignment))?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_insertion_order() {
        let mut a = SentenceAlignment::new();
        a.link(0, 1);
        a.link(1, 0);
        a.link(1, 2);
        assert_eq!(format_alignment(&a), "0-1-* 1-0-* 1-2-*");

        let mut unsorted = SentenceAlignment::new();
        unsorted.link(2, 4);
        unsorted.link(0, 3);
        unsorted.link(0, 1);
        assert_eq!(format_alignment(&unsorted), "2-4-* 0-3-* 0-1-*");
    }

    #[test]
    fn empty_alignment_is_empty_line() {
        let mut a = SentenceAlignment::new();
        a.add_source(0);
        assert_eq!(format_alignment(&a), "");
    }

    #[test]
    fn writes_one_line_per_sentence() {
        let mut first = SentenceAlignment::new();
        first.link(0, 0);
        let empty = SentenceAlignment::new();
        let mut last = SentenceAlignment::new();
        last.link(1, 0);
        last.link(0, 1);

        let mut out = Vec::new();
        write_alignments(&mut out, &[first, empty, last]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0-0-*\n\n1-0-* 0-1-*\n");
    }
}
