use std::path::PathBuf;
use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::services::{CarouselService, ContentService, SearchIndex, TokioScheduler};

/// Kind of content block an item was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Featured,
    Sidebar,
    Card,
    CarouselSlide,
}

impl ItemKind {
    /// CSS-friendly tag for this kind
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Featured => "featured",
            ItemKind::Sidebar => "sidebar",
            ItemKind::Card => "card",
            ItemKind::CarouselSlide => "carousel-slide",
        }
    }
}

/// Pre-extracted snapshot of one content block of the page.
///
/// The search index never walks the rendered page itself; it receives
/// these descriptors from the content catalog. Every field except `kind`
/// is optional because source markup routinely omits sub-elements.
#[derive(Debug, Clone)]
pub struct ContentBlock {
    pub kind: ItemKind,
    pub title: Option<String>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub link: Option<String>,
    /// Markdown body, rendered only for blocks shown in full
    pub body: Option<String>,
    pub published: Option<OffsetDateTime>,
}

impl ContentBlock {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            title: None,
            category: None,
            excerpt: None,
            link: None,
            body: None,
            published: None,
        }
    }
}

/// One searchable entry of the index. Immutable once built.
#[derive(Debug, Clone)]
pub struct SearchItem {
    pub kind: ItemKind,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub target_url: String,
    /// Index of the originating block in the catalog. Non-owning
    /// back-reference, unused by matching.
    pub source_ref: usize,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<SearchIndex>,
    pub catalog: Arc<ContentService>,
    pub carousel: Arc<Mutex<CarouselService<TokioScheduler>>>,
    pub static_dir: Arc<PathBuf>,
}
