//! Line rendering pipeline.
//!
//! Composes escaping, SGR conversion and linkification over a batch of log
//! lines. Escaping and linkification run on text fragments only, so a URL at
//! the end of a colored run never swallows the closing `</span>`. The flip
//! side is that a URL interrupted by an escape sequence is linked only up to
//! the sequence; the rest of it stays plain text.
//!
//! Links built here quote-escape the URL, so a `"` in log text cannot close
//! the `href` attribute.

mod page;

pub use page::render_page;

use std::borrow::Cow;

use rayon::prelude::*;
use regex::Captures;
use tracing::debug;

use crate::config::RenderConfig;
use crate::convert::{convert_with, LineConverter};
use crate::html::{escape, URL_REGEX};
use crate::terminal::StyleState;

/// Renders log lines to HTML according to a [`RenderConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    options: RenderConfig,
}

impl Pipeline {
    pub fn new(options: RenderConfig) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderConfig {
        &self.options
    }

    /// Render a single line from the default style.
    pub fn render_line(&self, line: &str) -> String {
        let mut state = StyleState::default();
        convert_with(line, &mut state, |out, text| self.emit_text(out, text))
    }

    /// Render a batch of lines.
    ///
    /// Lines are independent unless `carry_style` is set, in which case they
    /// are converted in order through a single [`LineConverter`].
    pub fn render_lines<S>(&self, lines: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        if self.options.carry_style {
            debug!(lines = lines.len(), "rendering lines sequentially");
            let mut converter = LineConverter::new();
            lines
                .iter()
                .map(|line| {
                    converter.convert_line_with(line.as_ref(), |out, text| self.emit_text(out, text))
                })
                .collect()
        } else {
            debug!(lines = lines.len(), "rendering lines in parallel");
            lines
                .par_iter()
                .map(|line| self.render_line(line.as_ref()))
                .collect()
        }
    }

    fn emit_text(&self, out: &mut String, text: &str) {
        let escaped = if self.options.escape_html {
            escape(text)
        } else {
            Cow::Borrowed(text)
        };
        if self.options.linkify {
            out.push_str(&linkify_quoted(&escaped));
        } else {
            out.push_str(&escaped);
        }
    }
}

/// Like [`crate::html::linkify`], but with `"` in the URL written as `&quot;`.
fn linkify_quoted(text: &str) -> Cow<'_, str> {
    URL_REGEX.replace_all(text, |caps: &Captures<'_>| {
        let url = caps[0].replace('"', "&quot;");
        format!("<a href=\"{}\">{}</a>", url, url)
    })
}
