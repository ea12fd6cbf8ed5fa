use crate::utils::escape_html;

/// Maximum excerpt length, in characters, before truncation
pub const EXCERPT_LIMIT: usize = 150;

/// Query terms shorter than this are never highlighted; wrapping one- and
/// two-letter terms would mark tiny common substrings all over the text
const MIN_HIGHLIGHT_CHARS: usize = 3;

/// Extract the highlightable terms of a query: whitespace-delimited,
/// lower-cased, length > 2 only
pub fn highlight_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|term| term.chars().count() >= MIN_HIGHLIGHT_CHARS)
        .map(|term| term.to_string())
        .collect()
}

/// HTML-escape `text` and wrap every case-insensitive occurrence of every
/// term in `<mark>`. Overlapping and adjacent occurrences merge into one
/// wrapped span.
pub fn highlight(text: &str, terms: &[String]) -> String {
    if text.is_empty() || terms.is_empty() {
        return escape_html(text);
    }

    let chars: Vec<char> = text.chars().collect();
    // Per-char lowercase mapping keeps positions aligned with `chars`
    let lower: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let mut marked = vec![false; chars.len()];
    for term in terms {
        let needle: Vec<char> = term.chars().collect();
        if needle.is_empty() || needle.len() > lower.len() {
            continue;
        }
        for start in 0..=(lower.len() - needle.len()) {
            if lower[start..start + needle.len()] == needle[..] {
                for flag in &mut marked[start..start + needle.len()] {
                    *flag = true;
                }
            }
        }
    }

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while pos < chars.len() {
        let in_match = marked[pos];
        let run_start = pos;
        while pos < chars.len() && marked[pos] == in_match {
            pos += 1;
        }
        let run: String = chars[run_start..pos].iter().collect();
        if in_match {
            out.push_str("<mark>");
            out.push_str(&escape_html(&run));
            out.push_str("</mark>");
        } else {
            out.push_str(&escape_html(&run));
        }
    }
    out
}

/// Truncate an excerpt to [`EXCERPT_LIMIT`] characters, suffixing an
/// ellipsis when anything was cut
pub fn truncate_excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_LIMIT {
        return text.to_string();
    }
    let truncated: String = text.chars().take(EXCERPT_LIMIT).collect();
    format!("{}...", truncated)
}
