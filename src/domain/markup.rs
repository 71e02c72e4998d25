// ============================================================
// Layer 3 — Tag Markup
// ============================================================
// Bodies are escaped with the three XML entities:
//
//   &  → &amp;     <  → &lt;     >  → &gt;
//
// After escaping, a rendered body contains no `<`, so the first
// `</tag>` after `<tag>` always closes it and the non-greedy
// pattern `<tag>(.*?)</tag>` recovers the body exactly.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::example::Tag;

/// One compiled `<tag>(.*?)</tag>` pattern per tag, indexed like `Tag::ALL`
static TAG_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Tag::ALL
        .iter()
        .map(|tag| {
            let pattern = format!(r"(?s){}(.*?){}", regex::escape(&tag.open()), regex::escape(&tag.close()));
            Regex::new(&pattern).expect("Invalid tag pattern")
        })
        .collect()
});

pub fn escape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    for c in body.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c   => out.push(c),
        }
    }
    out
}

pub fn unescape(body: &str) -> String {
    // &amp; last, so "&amp;lt;" comes back as "&lt;" and not "<"
    body.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Body of the first `<tag>…</tag>` in a rendered example, unescaped
pub fn extract(text: &str, tag: Tag) -> Option<String> {
    TAG_PATTERNS[tag.index()]
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| unescape(m.as_str()))
}
