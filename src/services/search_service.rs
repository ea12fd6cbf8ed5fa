use log::{debug, info, warn};

use crate::types::{ContentBlock, SearchItem};

/// Fixed suggestion tags served instead of a catalog search when the
/// query is too short to filter on
pub const DEFAULT_SUGGESTIONS: [&str; 6] = [
    "Tecnología",
    "Economía",
    "Deportes",
    "Cultura",
    "Ciencia",
    "Internacional",
];

/// Live queries only hit the catalog past this many characters; anything
/// shorter (including empty input) reverts to the suggestion view
pub const MIN_QUERY_CHARS: usize = 3;

/// Answer to a query: either the fixed suggestion set or a stable filter
/// of the catalog
#[derive(Debug)]
pub enum SearchResponse<'a> {
    Suggestions(&'a [String]),
    Results(Vec<&'a SearchItem>),
}

/// In-memory index over the page's content blocks.
///
/// Built exactly once per startup from an injected snapshot of the
/// catalog; never mutated afterward.
pub struct SearchIndex {
    items: Vec<SearchItem>,
    suggestions: Vec<String>,
}

impl SearchIndex {
    /// Build the index from a snapshot of content blocks.
    ///
    /// Blocks without a title are skipped; every other missing field
    /// degrades to an empty string, never an error.
    pub fn build(blocks: &[ContentBlock]) -> Self {
        let start_time = std::time::Instant::now();
        let mut items = Vec::new();

        for (source_ref, block) in blocks.iter().enumerate() {
            let title = block.title.clone().unwrap_or_default();
            if title.trim().is_empty() {
                debug!("Skipping untitled {} block #{}", block.kind.as_str(), source_ref);
                continue;
            }

            items.push(SearchItem {
                kind: block.kind,
                title,
                category: block.category.clone().unwrap_or_default(),
                excerpt: block.excerpt.clone().unwrap_or_default(),
                target_url: block.link.clone().unwrap_or_else(|| "#".to_string()),
                source_ref,
            });
        }

        let duration = start_time.elapsed();
        info!(
            "Search index built with {} items from {} blocks in {:?}ms",
            items.len(),
            blocks.len(),
            duration.as_millis()
        );
        if items.is_empty() {
            warn!("Search index is empty; every query will yield no results");
        }

        Self {
            items,
            suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the default suggestion set
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Answer a query string.
    ///
    /// A trimmed query shorter than [`MIN_QUERY_CHARS`] (including empty
    /// and whitespace-only input) gets the suggestion set rather than a
    /// catalog search.
    pub fn search(&self, query: &str) -> SearchResponse<'_> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            debug!("Query '{}' below live-search length, serving suggestions", trimmed);
            return SearchResponse::Suggestions(&self.suggestions);
        }
        SearchResponse::Results(self.matches(trimmed))
    }

    /// Raw catalog filter: an item matches if ANY whitespace-delimited
    /// query term is a case-insensitive substring of its concatenated
    /// title, category and excerpt. Insertion order is preserved and no
    /// result cap is applied.
    pub fn matches(&self, query: &str) -> Vec<&SearchItem> {
        let query_lower = query.to_lowercase();
        let terms: Vec<&str> = query_lower.split_whitespace().collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let start_time = std::time::Instant::now();
        let results: Vec<&SearchItem> = self
            .items
            .iter()
            .filter(|item| {
                let haystack =
                    format!("{} {} {}", item.title, item.category, item.excerpt).to_lowercase();
                terms.iter().any(|term| haystack.contains(term))
            })
            .collect();

        let duration = start_time.elapsed();
        info!(
            "Search for '{}' matched {} of {} items in {:?}ms",
            query,
            results.len(),
            self.items.len(),
            duration.as_millis()
        );
        if results.is_empty() {
            warn!("No results found for query: '{}'", query);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKind;

    fn block(kind: ItemKind, title: &str, category: &str, excerpt: &str) -> ContentBlock {
        let mut b = ContentBlock::new(kind);
        b.title = Some(title.to_string());
        b.category = Some(category.to_string());
        b.excerpt = Some(excerpt.to_string());
        b
    }

    fn sample_index() -> SearchIndex {
        SearchIndex::build(&[
            block(
                ItemKind::Featured,
                "IA en robots",
                "Tecnología",
                "Los nuevos asistentes domésticos aprenden solos",
            ),
            block(
                ItemKind::Sidebar,
                "Mercados al alza",
                "Economía",
                "La bolsa cierra su mejor semana del año",
            ),
            block(
                ItemKind::Card,
                "Final de liga",
                "Deportes",
                "El derbi define al campeón de la temporada",
            ),
        ])
    }

    #[test]
    fn short_queries_serve_suggestions() {
        let index = sample_index();
        for query in ["", "  ", "a", "ab", " ab "] {
            match index.search(query) {
                SearchResponse::Suggestions(s) => assert_eq!(s, index.suggestions()),
                SearchResponse::Results(_) => panic!("query '{}' should serve suggestions", query),
            }
        }
    }

    #[test]
    fn three_char_query_hits_the_catalog() {
        let index = sample_index();
        match index.search("bol") {
            SearchResponse::Results(results) => {
                assert_eq!(results.len(), 1);
                assert_eq!(results[0].title, "Mercados al alza");
            }
            SearchResponse::Suggestions(_) => panic!("three chars should search"),
        }
    }

    #[test]
    fn any_term_matches_and_non_matches_are_excluded() {
        let index = sample_index();
        // OR across terms: "robots" hits the first item, "liga" the third
        let results = index.matches("robots liga");
        assert_eq!(results.len(), 2);

        for item in &results {
            let haystack =
                format!("{} {} {}", item.title, item.category, item.excerpt).to_lowercase();
            assert!(haystack.contains("robots") || haystack.contains("liga"));
        }
        assert!(!results.iter().any(|item| item.title == "Mercados al alza"));
    }

    #[test]
    fn matching_is_case_insensitive_across_fields() {
        let index = sample_index();
        assert_eq!(index.matches("TECNOLOGÍA").len(), 1);
        assert_eq!(index.matches("Bolsa").len(), 1);
    }

    #[test]
    fn result_order_is_catalog_insertion_order() {
        let index = SearchIndex::build(&[
            block(ItemKind::Card, "A tech story", "tech", ""),
            block(ItemKind::Card, "B tech story", "tech", ""),
            block(ItemKind::Card, "C tech story", "tech", ""),
        ]);
        let titles: Vec<&str> = index
            .matches("tech")
            .iter()
            .map(|item| item.title.as_str())
            .collect();
        assert_eq!(titles, ["A tech story", "B tech story", "C tech story"]);
    }

    #[test]
    fn untitled_blocks_are_not_indexed() {
        let mut untitled = ContentBlock::new(ItemKind::Sidebar);
        untitled.excerpt = Some("contenido sin titular".to_string());
        let index = SearchIndex::build(&[untitled, block(ItemKind::Card, "Con título", "", "")]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.items()[0].source_ref, 1);
    }

    #[test]
    fn missing_fields_degrade_to_defaults() {
        let mut bare = ContentBlock::new(ItemKind::Card);
        bare.title = Some("Solo titular".to_string());
        let index = SearchIndex::build(&[bare]);
        let item = &index.items()[0];
        assert_eq!(item.category, "");
        assert_eq!(item.excerpt, "");
        assert_eq!(item.target_url, "#");
    }

    #[test]
    fn empty_index_yields_no_results_for_any_query() {
        let index = SearchIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.matches("cualquier cosa").is_empty());
        match index.search("noticias") {
            SearchResponse::Results(results) => assert!(results.is_empty()),
            SearchResponse::Suggestions(_) => panic!("long query should still search"),
        }
    }
}
