use log::{debug, info};

use crate::components::highlight::{highlight, highlight_terms, truncate_excerpt};
use crate::services::SearchResponse;
use crate::types::SearchItem;
use crate::utils::{escape_attr, escape_html};

/// Component rendering the search panel: results, suggestions and the
/// no-results payload
pub struct SearchResultsComponent;

impl SearchResultsComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the answer to a query
    pub fn render(&self, query: &str, response: &SearchResponse<'_>) -> String {
        match response {
            SearchResponse::Suggestions(tags) => self.render_suggestions(tags),
            SearchResponse::Results(items) => self.render_results(query, items),
        }
    }

    /// Render the fixed suggestion tags shown for short or empty queries
    pub fn render_suggestions(&self, tags: &[String]) -> String {
        debug!("Rendering {} suggestion tags", tags.len());
        let mut html = String::new();
        html.push_str("<div class=\"search-suggestions\">");
        html.push_str("<h3 class=\"suggestions-title\">Temas sugeridos</h3>");
        html.push_str("<div class=\"suggestion-tags\">");
        for tag in tags {
            html.push_str(&format!(
                "<a class=\"suggestion-tag\" href=\"/search?q={}\">{}</a>",
                escape_attr(tag),
                escape_html(tag)
            ));
        }
        html.push_str("</div>");
        html.push_str("</div>");
        html
    }

    /// Render matched items, or the no-results payload carrying the
    /// original query text
    pub fn render_results(&self, query: &str, items: &[&SearchItem]) -> String {
        let start_time = std::time::Instant::now();
        let terms = highlight_terms(query);
        let mut html = String::new();

        html.push_str("<div class=\"search-results\">");
        html.push_str(&format!(
            "<h2 class=\"search-header\">Resultados para \"{}\"</h2>",
            escape_html(query)
        ));

        if items.is_empty() {
            html.push_str(&format!(
                "<p class=\"no-results\">No se encontraron resultados para \"{}\"</p>",
                escape_html(query)
            ));
            html.push_str("<p class=\"search-tip\">Prueba con otras palabras o términos más generales.</p>");
            html.push_str("</div>");
            return html;
        }

        html.push_str(&format!(
            "<p class=\"results-count\">{} resultado{}</p>",
            items.len(),
            if items.len() == 1 { "" } else { "s" }
        ));
        html.push_str("<div class=\"search-results-list\">");
        for item in items {
            html.push_str(&format!(
                "<div class=\"search-result-item kind-{}\">",
                item.kind.as_str()
            ));
            if !item.category.is_empty() {
                html.push_str(&format!(
                    "<span class=\"result-category\">{}</span>",
                    escape_html(&item.category)
                ));
            }
            html.push_str(&format!(
                "<h3 class=\"result-title\"><a href=\"{}\">{}</a></h3>",
                escape_attr(&item.target_url),
                highlight(&item.title, &terms)
            ));
            html.push_str(&format!(
                "<p class=\"result-excerpt\">{}</p>",
                highlight(&truncate_excerpt(&item.excerpt), &terms)
            ));
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html.push_str("</div>");

        let duration = start_time.elapsed();
        info!(
            "Rendered {} search results in {:?}ms",
            items.len(),
            duration.as_millis()
        );
        html
    }
}

impl Default for SearchResultsComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SearchIndex;
    use crate::types::{ContentBlock, ItemKind};

    fn index() -> SearchIndex {
        let mut featured = ContentBlock::new(ItemKind::Featured);
        featured.title = Some("IA en robots".to_string());
        featured.category = Some("Tecnología".to_string());
        featured.excerpt = Some("Los asistentes aprenden solos".to_string());
        featured.link = Some("/articulo/ia-robots".to_string());
        SearchIndex::build(&[featured])
    }

    #[test]
    fn single_match_renders_highlighted_title() {
        let index = index();
        let component = SearchResultsComponent::new();
        let html = component.render("robot", &index.search("robot"));
        assert!(html.contains("1 resultado"));
        // Only the matched term is wrapped, not the whole word
        assert!(html.contains("IA en <mark>robot</mark>s"));
        assert!(html.contains("href=\"/articulo/ia-robots\""));
    }

    #[test]
    fn no_results_payload_escapes_the_raw_query() {
        let component = SearchResultsComponent::new();
        let html = component.render_results("<script>alert(1)</script>", &[]);
        assert!(html.contains("no-results"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn short_query_renders_the_suggestion_view() {
        let index = index();
        let component = SearchResultsComponent::new();
        let html = component.render("ia", &index.search("ia"));
        assert!(html.contains("search-suggestions"));
        assert!(html.contains("Tecnología"));
        assert!(!html.contains("search-results-list"));
    }
}
