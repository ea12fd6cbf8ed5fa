//! Portada - the interactivity core of a static news page
//!
//! Two components carry the real state: an in-memory search index built
//! from an injected snapshot of the page's content blocks, and a carousel
//! controller reconciling manual navigation, timed autoplay and touch
//! gestures into one current slide. Everything around them is a thin
//! server-side composition root that renders the page and funnels input
//! events into the two cores.

pub mod components;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use components::{
    CarouselComponent, HeaderComponent, SearchResultsComponent, TemplateComponent,
};
pub use config::Config;
pub use errors::PortadaError;
pub use services::{
    AutoplayScheduler, CarouselService, ContentService, RenderFrame, SearchIndex, SearchResponse,
    TokioScheduler,
};
pub use types::{AppState, ContentBlock, ItemKind, SearchItem};

// Re-export utility functions
pub use utils::{escape_attr, escape_html, normalize_path, parse_query_param, published_html};
