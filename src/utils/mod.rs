use time::OffsetDateTime;

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace("&", "&amp;")
        .replace("<", "&lt;")
        .replace(">", "&gt;")
        .replace("\"", "&quot;")
        .replace("'", "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    text.replace("&", "&amp;")
        .replace("<", "&lt;")
        .replace(">", "&gt;")
        .replace("\"", "&quot;")
        .replace("'", "&#39;")
}

/// Generate the publication metadata line for an article
pub fn published_html(published: OffsetDateTime) -> String {
    let fmt = time::format_description::well_known::Rfc3339;
    match published.format(&fmt) {
        Ok(s) => format!("<p class=\"meta\">Publicado: {}</p>", escape_html(&s)),
        Err(_) => String::new(),
    }
}

/// Normalize request path
pub fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Parse query parameter with basic URL decoding
pub fn parse_query_param(query: &str, param: &str) -> String {
    let query_string = query.trim_start_matches('?');
    for pair in query_string.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            if key == param {
                // Form encoding turns spaces into '+'
                return value
                    .replace("+", " ")
                    .replace("%20", " ")
                    .replace("%21", "!")
                    .replace("%22", "\"")
                    .replace("%23", "#")
                    .replace("%24", "$")
                    .replace("%26", "&")
                    .replace("%27", "'")
                    .replace("%28", "(")
                    .replace("%29", ")")
                    .replace("%2B", "+")
                    .replace("%2C", ",")
                    .replace("%2D", "-")
                    .replace("%2E", ".")
                    .replace("%2F", "/")
                    .replace("%3A", ":")
                    .replace("%3B", ";")
                    .replace("%3C", "<")
                    .replace("%3D", "=")
                    .replace("%3E", ">")
                    .replace("%3F", "?")
                    .replace("%40", "@")
                    .replace("%C3%A1", "á")
                    .replace("%C3%A9", "é")
                    .replace("%C3%AD", "í")
                    .replace("%C3%B3", "ó")
                    .replace("%C3%BA", "ú")
                    .replace("%C3%B1", "ñ")
                    .replace("%C3%8D", "Í")
                    .replace("%25", "%");
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html("<script>alert(\"x\")</script>"),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn parse_query_param_decodes_spaces_and_accents() {
        assert_eq!(parse_query_param("?q=apple+robot", "q"), "apple robot");
        assert_eq!(parse_query_param("q=econom%C3%ADa", "q"), "economía");
        assert_eq!(parse_query_param("?q=one&i=2", "i"), "2");
    }

    #[test]
    fn parse_query_param_missing_yields_empty() {
        assert_eq!(parse_query_param("?q=x", "start"), "");
        assert_eq!(parse_query_param("", "q"), "");
    }

    #[test]
    fn normalize_path_strips_slashes() {
        assert_eq!(normalize_path("/css/portada.css/"), "css/portada.css");
        assert_eq!(normalize_path("/"), "");
    }
}
