//! Whitespace-tokenized parallel corpus files, one sentence per line.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use giza_types::Sentence;
use memmap2::Mmap;
use tracing::debug;

/// Strategy for loading corpus files.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map the file (fast, zero-copy).
    #[default]
    Mmap,
    /// Read the file into an owned buffer (portable fallback).
    Owned,
}

enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

#[derive(Clone, Copy)]
struct TextRef {
    start: usize,
    len: usize,
}

/// Ordered sentences of a corpus, each an ordered list of tokens.
///
/// Tokens borrow from the backing buffer; nothing is copied after load.
pub struct Corpus {
    buffer: Buffer,
    sentences: Vec<Vec<TextRef>>,
}

impl Corpus {
    /// Load a corpus file, memory-mapping it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_mode(path, LoadMode::Mmap)
    }

    /// Load a corpus file choosing between mmap and owned buffers.
    pub fn load_with_mode(path: impl AsRef<Path>, mode: LoadMode) -> Result<Self> {
        let path = path.as_ref();
        let buffer = load_file(path, mode)?;
        let sentences = index_sentences(buffer.as_slice())
            .with_context(|| format!("decode {}", path.display()))?;
        debug!(
            "indexed {} sentences from {} ({:?})",
            sentences.len(),
            path.display(),
            mode
        );
        Ok(Self { buffer, sentences })
    }

    /// Build a corpus from in-memory text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let sentences = tokenize(&text);
        Self {
            buffer: Buffer::Owned(text.into_bytes()),
            sentences,
        }
    }

    /// Number of sentences (lines).
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total tokens across all sentences.
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    /// Borrowed view of sentence `index`, if present.
    pub fn sentence(&self, index: usize) -> Option<Sentence<'_>> {
        self.sentences.get(index).map(|refs| self.make_sentence(refs))
    }

    /// Iterate over all sentences in file order.
    pub fn iter(&self) -> impl Iterator<Item = Sentence<'_>> + '_ {
        self.sentences.iter().map(|refs| self.make_sentence(refs))
    }

    fn make_sentence(&self, refs: &[TextRef]) -> Sentence<'_> {
        Sentence {
            tokens: refs.iter().map(|r| self.text(*r)).collect(),
        }
    }

    fn text(&self, r: TextRef) -> &str {
        let slice = &self.buffer.as_slice()[r.start..r.start + r.len];
        std::str::from_utf8(slice).expect("corpus text validated at load")
    }
}

fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer> {
    match mode {
        LoadMode::Mmap => {
            let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            let len = file
                .metadata()
                .with_context(|| format!("stat {}", path.display()))?
                .len();
            if len == 0 {
                return Ok(Buffer::Owned(Vec::new()));
            }
            unsafe { Mmap::map(&file) }
                .map(Buffer::Mmap)
                .with_context(|| format!("mmap {}", path.display()))
        }
        LoadMode::Owned => {
            let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .with_context(|| format!("read {}", path.display()))?;
            Ok(Buffer::Owned(buf))
        }
    }
}

fn index_sentences(bytes: &[u8]) -> Result<Vec<Vec<TextRef>>> {
    let text = std::str::from_utf8(bytes).context("corpus is not valid UTF-8")?;
    Ok(tokenize(text))
}

fn tokenize(text: &str) -> Vec<Vec<TextRef>> {
    let root = text.as_ptr() as usize;
    text.lines()
        .map(|line| {
            line.split_whitespace()
                .map(|token| TextRef {
                    start: token.as_ptr() as usize - root,
                    len: token.len(),
                })
                .collect()
        })
        .collect()
}
