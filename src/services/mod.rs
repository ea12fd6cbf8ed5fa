pub mod carousel_service;
pub mod content_service;
pub mod search_service;

pub use carousel_service::{AutoplayScheduler, CarouselService, RenderFrame, TokioScheduler};
pub use content_service::ContentService;
pub use search_service::{SearchIndex, SearchResponse};
