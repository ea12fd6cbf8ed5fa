use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::{mpsc, Mutex};

use portada::config::Config;
use portada::errors::PortadaError;
use portada::handlers;
use portada::logger::Logger;
use portada::services::{CarouselService, ContentService, SearchIndex, TokioScheduler};
use portada::types::AppState;

#[tokio::main]
async fn main() -> Result<(), PortadaError> {
    if Logger::init().is_err() {
        eprintln!("Logger already initialized");
    }

    let config = Config::new();

    // Snapshot of the page content, taken once; the index never sees the
    // rendered page itself
    let catalog = Arc::new(ContentService::seed());
    let index = Arc::new(SearchIndex::build(catalog.blocks()));

    // Autoplay expiries flow through a channel so every state transition
    // runs to completion on one logical thread of control
    let (ticks, mut tick_rx) = mpsc::unbounded_channel();
    let carousel = Arc::new(Mutex::new(CarouselService::new(
        catalog.carousel_slides().len(),
        config.autoplay_interval,
        config.swipe_threshold,
        TokioScheduler::new(ticks),
    )));

    let autoplay_carousel = Arc::clone(&carousel);
    tokio::spawn(async move {
        while tick_rx.recv().await.is_some() {
            let mut carousel = autoplay_carousel.lock().await;
            // A tick already in flight when autoplay stops must not land
            if carousel.is_autoplaying() {
                carousel.tick();
            }
        }
    });

    let state = AppState {
        index,
        catalog,
        carousel,
        static_dir: Arc::new(config.static_dir.clone()),
    };

    let app = Router::new()
        .route("/", get(handlers::handle_root))
        .route("/search", get(handlers::handle_search))
        .route("/carousel/next", get(handlers::carousel_next))
        .route("/carousel/prev", get(handlers::carousel_prev))
        .route("/carousel/go", get(handlers::carousel_go))
        .route("/carousel/toggle", get(handlers::carousel_toggle))
        .route("/carousel/swipe", get(handlers::carousel_swipe))
        .route("/static/*path", get(handlers::handle_static))
        .with_state(state);

    let addr = config.socket_addr();
    log::info!("Portada listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(PortadaError::from)
}
