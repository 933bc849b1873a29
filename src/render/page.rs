//! Standalone HTML document around rendered lines.

use crate::config::PageConfig;
use crate::html::escape;

/// Wrap already-rendered lines in a complete HTML page.
///
/// Lines are inserted verbatim inside a `<pre>`; only the page settings are
/// escaped here.
pub fn render_page<S>(lines: &[S], page: &PageConfig) -> String
where
    S: AsRef<str>,
{
    let body_len: usize = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(body_len + 512);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>");
    out.push_str(&escape(&page.title));
    out.push_str("</title>\n<style>\n");
    out.push_str(&format!(
        "body {{ margin: 0; background: {}; }}\n\
         pre.log {{ margin: 0; padding: 1em; color: {}; font-family: {}; \
         white-space: pre-wrap; word-break: break-all; }}\n\
         pre.log a {{ color: inherit; }}\n",
        escape(&page.background),
        escape(&page.foreground),
        escape(&page.font_family),
    ));
    out.push_str("</style>\n</head>\n<body>\n<pre class=\"log\">");
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out.push_str("</pre>\n</body>\n</html>\n");
    out
}
