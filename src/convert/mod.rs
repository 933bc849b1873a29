//! ANSI SGR to HTML conversion.
//!
//! A line is split on the control-sequence introducer (`ESC [`). The text
//! before the first introducer is emitted as is. Every following chunk whose
//! head is a parameter run terminated by `m` updates the style state, and the
//! text after it is wrapped in a `<span style="...">` whenever a foreground
//! or background color is set. Chunks that do not match are emitted as is,
//! minus the introducer that preceded them.
//!
//! Conversion does not escape HTML. Run [`crate::html::escape`] on the text
//! first, or use [`crate::render::Pipeline`] which filters each text fragment.
//!
//! # Example
//!
//! ```
//! use ansihtml::convert;
//!
//! assert_eq!(
//!     convert("\x1b[31mred\x1b[0m plain"),
//!     "<span style=\"color:rgb(187, 0, 0)\">red</span> plain"
//! );
//! ```

mod chunk;

pub use chunk::{split_chunks, Chunk, INTRODUCER};

use crate::terminal::handlers::parse_params;
use crate::terminal::{apply_codes, StyleState};

/// Convert one line, starting from the default style.
pub fn convert(raw: &str) -> String {
    convert_from(raw, StyleState::default()).0
}

/// Convert one line starting from `state`; returns the markup and the style
/// in effect at the end of the line.
pub fn convert_from(raw: &str, state: StyleState) -> (String, StyleState) {
    let mut state = state;
    let html = convert_with(raw, &mut state, |out, text| out.push_str(text));
    (html, state)
}

/// Convert one line, passing every literal text fragment through `emit_text`.
///
/// `emit_text` appends its rendition of a fragment to the output buffer. It
/// only ever sees text, never the generated `<span>` markup.
pub fn convert_with<F>(raw: &str, state: &mut StyleState, mut emit_text: F) -> String
where
    F: FnMut(&mut String, &str),
{
    let mut out = String::with_capacity(raw.len());
    for chunk in split_chunks(raw) {
        match chunk {
            Chunk::Prefix("") => {}
            // Only a style carried in from a previous line can be active here.
            Chunk::Prefix(text) => emit_styled(&mut out, state, text, &mut emit_text),
            Chunk::Literal(text) => emit_text(&mut out, text),
            Chunk::Sgr { params, text } => {
                apply_codes(state, parse_params(params));
                emit_styled(&mut out, state, text, &mut emit_text);
            }
        }
    }
    out
}

fn emit_styled<F>(out: &mut String, state: &StyleState, text: &str, emit_text: &mut F)
where
    F: FnMut(&mut String, &str),
{
    match state.css() {
        Some(css) => {
            out.push_str("<span style=\"");
            out.push_str(&css);
            out.push_str("\">");
            emit_text(out, text);
            out.push_str("</span>");
        }
        None => emit_text(out, text),
    }
}

/// Converts successive lines, carrying the style from one line to the next.
///
/// [`convert`] forgets the style at the end of every call; this keeps it,
/// which matches how a terminal treats a color that is never reset.
#[derive(Debug, Clone, Default)]
pub struct LineConverter {
    state: StyleState,
}

impl LineConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously saved style.
    pub fn with_state(state: StyleState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> StyleState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn convert_line(&mut self, line: &str) -> String {
        let (html, state) = convert_from(line, self.state);
        self.state = state;
        html
    }

    /// Like [`convert_line`](Self::convert_line) with a text filter.
    pub fn convert_line_with<F>(&mut self, line: &str, emit_text: F) -> String
    where
        F: FnMut(&mut String, &str),
    {
        convert_with(line, &mut self.state, emit_text)
    }
}
