pub mod carousel;
pub mod header;
pub mod highlight;
pub mod search_results;
pub mod templates;

pub use carousel::CarouselComponent;
pub use header::HeaderComponent;
pub use search_results::SearchResultsComponent;
pub use templates::TemplateComponent;
