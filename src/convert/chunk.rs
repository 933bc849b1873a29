//! Splitting raw text into escape chunks.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Control-sequence introducer: ESC followed by `[`.
pub const INTRODUCER: &str = "\x1b[";

/// Parameter run and terminator at the head of a chunk.
static SGR_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9;]*m").expect("Invalid SGR regex pattern"));

/// One piece of a line after splitting on the introducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    /// Text before the first introducer. Never decoded.
    Prefix(&'a str),
    /// A chunk whose head is not a valid SGR sequence, emitted unchanged.
    Literal(&'a str),
    /// A recognized SGR sequence and the text that follows it.
    Sgr { params: &'a str, text: &'a str },
}

impl<'a> Chunk<'a> {
    /// Classify the text that followed an introducer.
    ///
    /// A chunk that does not start with digits/semicolons and an `m` is
    /// returned as a literal. The introducer itself is not part of the chunk,
    /// so it does not reappear in the output.
    pub fn parse(chunk: &'a str) -> Self {
        match SGR_HEAD.find(chunk) {
            Some(head) => Chunk::Sgr {
                params: &chunk[..head.end() - 1],
                text: &chunk[head.end()..],
            },
            None => {
                trace!(chunk, "escape chunk has no SGR terminator, passing through");
                Chunk::Literal(chunk)
            }
        }
    }
}

/// Split a line into its prefix and the chunks following each introducer.
pub fn split_chunks(raw: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut pieces = raw.split(INTRODUCER);
    let prefix = pieces.next().map(Chunk::Prefix);
    prefix.into_iter().chain(pieces.map(Chunk::parse))
}
