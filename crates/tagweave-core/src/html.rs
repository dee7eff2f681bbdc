//! HTML rendering for the tag cloud document.
//!
//! Produces the fixed document skeleton: a head whose title interpolates the
//! word count and source label, links to the remote and local `tagcloud.css`
//! stylesheets, and a body with one `<span>` per selected word in
//! alphabetical order, carrying a `f{size}` class and a `count:` tooltip.
//!
//! Word text and the source label are HTML-escaped. The reference
//! implementation interpolated both verbatim; that is an injection vector
//! (tokens may contain `&` or `<`, and the label is arbitrary user input),
//! so this renderer deliberately diverges and escapes.

use std::collections::HashMap;
use std::fmt::Write;

use crate::scale::DEFAULT_FONT;
use crate::select::WordCount;

/// Remote stylesheet every generated document links to.
pub const REMOTE_STYLESHEET: &str = "http://web.cse.ohio-state.edu/software/2231/web-sw2/\
     assignments/projects/tag-cloud-generator/data/tagcloud.css";

/// Local stylesheet name linked next to the output file.
pub const LOCAL_STYLESHEET: &str = "tagcloud.css";

/// Escape text for interpolation into HTML content or attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the opening `<html>` and `<head>` section.
pub fn render_head(count: usize, source: &str) -> String {
    let source = escape(source);
    let mut out = String::new();
    out.push_str("<html>\n<head>\n");
    let _ = writeln!(out, "<title>Top {count} words in {source}</title>");
    let _ = writeln!(
        out,
        "<link href=\"{REMOTE_STYLESHEET}\" rel=\"stylesheet\" type=\"text/css\">"
    );
    let _ = writeln!(
        out,
        "<link href=\"{LOCAL_STYLESHEET}\" rel=\"stylesheet\" type=\"text/css\">"
    );
    out.push_str("</head>\n");
    out
}

/// Render the `<body>` section and closing `</html>`.
///
/// `alphabetical` must be the selection's alphabetically ordered view; one
/// span is emitted per entry, in that order. Words missing from
/// `font_sizes` fall back to [`DEFAULT_FONT`] rather than rendering a
/// malformed class.
pub fn render_body(
    count: usize,
    source: &str,
    alphabetical: &[WordCount],
    font_sizes: &HashMap<String, u32>,
) -> String {
    let source = escape(source);
    let mut out = String::new();
    out.push_str("<body>\n");
    let _ = writeln!(out, "<h2>Top {count} words in {source}</h2>");
    out.push_str("<hr>\n<div class=\"cdiv\">\n<p class=\"cbox\">\n");

    for entry in alphabetical {
        let size = font_sizes.get(&entry.word).copied().unwrap_or(DEFAULT_FONT);
        let _ = writeln!(
            out,
            "<span style=\"cursor:default\" class=\"f{size}\" title=\"count: {}\">{}</span>",
            entry.count,
            escape(&entry.word),
        );
    }

    out.push_str("</p>\n</div>\n</body>\n</html>\n");
    out
}

/// Render the complete document, head plus body.
pub fn render_document(
    count: usize,
    source: &str,
    alphabetical: &[WordCount],
    font_sizes: &HashMap<String, u32>,
) -> String {
    let mut out = render_head(count, source);
    out.push_str(&render_body(count, source, alphabetical, font_sizes));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(words: &[(&str, usize)]) -> Vec<WordCount> {
        words
            .iter()
            .map(|&(word, count)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect()
    }

    #[test]
    fn head_contains_title_and_both_stylesheets() {
        let head = render_head(3, "input.txt");
        assert!(head.contains("<title>Top 3 words in input.txt</title>"));
        assert!(head.contains(REMOTE_STYLESHEET));
        assert!(head.contains("<link href=\"tagcloud.css\""));
    }

    #[test]
    fn body_emits_one_span_per_word_in_order() {
        let alphabetical = entries(&[("cat", 2), ("mat", 1), ("the", 3)]);
        let sizes = HashMap::from([
            ("cat".to_string(), 29),
            ("mat".to_string(), 11),
            ("the".to_string(), 48),
        ]);
        let body = render_body(3, "input.txt", &alphabetical, &sizes);

        assert_eq!(body.matches("<span").count(), 3);
        assert!(body.contains(
            "<span style=\"cursor:default\" class=\"f48\" title=\"count: 3\">the</span>"
        ));
        let cat = body.find("class=\"f29\"").unwrap();
        let mat = body.find("class=\"f11\"").unwrap();
        let the = body.find("class=\"f48\"").unwrap();
        assert!(cat < mat && mat < the);
    }

    #[test]
    fn words_and_source_are_escaped() {
        let alphabetical = entries(&[("a&b", 1)]);
        let sizes = HashMap::from([("a&b".to_string(), 20)]);
        let doc = render_document(1, "<weird>.txt", &alphabetical, &sizes);
        assert!(doc.contains(">a&amp;b</span>"));
        assert!(doc.contains("Top 1 words in &lt;weird&gt;.txt"));
        assert!(!doc.contains("<weird>"));
    }

    #[test]
    fn document_has_full_skeleton() {
        let doc = render_document(0, "empty.txt", &[], &HashMap::new());
        for needle in [
            "<html>", "<head>", "</head>", "<body>", "<hr>", "<div class=\"cdiv\">",
            "<p class=\"cbox\">", "</body>", "</html>",
        ] {
            assert!(doc.contains(needle), "missing {needle}");
        }
        assert_eq!(doc.matches("<span").count(), 0);
    }
}
