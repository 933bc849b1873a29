//! Plain-text to HTML helpers.
//!
//! Neither function knows about escape sequences or about each other; the
//! render pipeline decides the order they run in.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

pub(crate) static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("Invalid URL regex pattern"));

/// Escape `&`, `<` and `>` for inclusion in HTML text.
///
/// Already-escaped input is escaped again (`&amp;` becomes `&amp;amp;`).
/// Quotes are left alone since output only lands in element content.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Wrap every `http://` or `https://` URL in an anchor.
///
/// A URL runs until the next whitespace character. The matched text is used
/// verbatim for both the `href` and the link text; it is not escaped.
pub fn linkify(text: &str) -> Cow<'_, str> {
    URL_REGEX.replace_all(text, r#"<a href="$0">$0</a>"#)
}
