use axum::{
    body::Body,
    extract::{Path as AxumPath, RawQuery, State},
    http::{header, Response},
    response::{Html, IntoResponse, Redirect},
};
use std::path::Path;

use crate::components::{
    CarouselComponent, HeaderComponent, SearchResultsComponent, TemplateComponent,
};
use crate::errors::PortadaError;
use crate::types::AppState;
use crate::utils::{escape_attr, escape_html, normalize_path, parse_query_param, published_html};

/// Render the front page
pub async fn handle_root(State(state): State<AppState>) -> Result<impl IntoResponse, PortadaError> {
    let start_time = std::time::Instant::now();

    let header = HeaderComponent::new().render();
    let mut content = String::new();

    // Carousel viewport, rendered from the controller's current frame
    let frame = state.carousel.lock().await.frame();
    let slides = state.catalog.carousel_slides();
    content.push_str(&CarouselComponent::new().render(&frame, &slides));

    content.push_str("<div class=\"layout\">");

    if let Some(featured) = state.catalog.featured() {
        content.push_str("<article class=\"featured\">");
        if let Some(category) = featured.category.as_deref() {
            content.push_str(&format!(
                "<span class=\"featured-category\">{}</span>",
                escape_html(category)
            ));
        }
        let href = featured.link.as_deref().unwrap_or("#");
        let title = featured.title.as_deref().unwrap_or("");
        content.push_str(&format!(
            "<h1 class=\"featured-title\"><a href=\"{}\">{}</a></h1>",
            escape_attr(href),
            escape_html(title)
        ));
        if let Some(published) = featured.published {
            content.push_str(&published_html(published));
        }
        if let Some(body) = featured.body.as_deref() {
            content.push_str("<div class=\"featured-body\">");
            content.push_str(&state.catalog.render_markdown(body));
            content.push_str("</div>");
        } else if let Some(excerpt) = featured.excerpt.as_deref() {
            content.push_str(&format!(
                "<p class=\"featured-excerpt\">{}</p>",
                escape_html(excerpt)
            ));
        }
        content.push_str("</article>");
    }

    content.push_str("<aside class=\"sidebar\">");
    content.push_str("<h2 class=\"sidebar-title\">En breve</h2>");
    for brief in state.catalog.sidebar_briefs() {
        let href = brief.link.as_deref().unwrap_or("#");
        let title = brief.title.as_deref().unwrap_or("");
        content.push_str("<div class=\"sidebar-item\">");
        content.push_str(&format!(
            "<h3><a href=\"{}\">{}</a></h3>",
            escape_attr(href),
            escape_html(title)
        ));
        if let Some(excerpt) = brief.excerpt.as_deref() {
            content.push_str(&format!("<p>{}</p>", escape_html(excerpt)));
        }
        content.push_str("</div>");
    }
    content.push_str("</aside>");
    content.push_str("</div>");

    content.push_str("<section class=\"cards\">");
    for card in state.catalog.cards() {
        let href = card.link.as_deref().unwrap_or("#");
        let title = card.title.as_deref().unwrap_or("");
        content.push_str("<div class=\"card\">");
        if let Some(category) = card.category.as_deref() {
            content.push_str(&format!(
                "<span class=\"card-category\">{}</span>",
                escape_html(category)
            ));
        }
        content.push_str(&format!(
            "<h3 class=\"card-title\"><a href=\"{}\">{}</a></h3>",
            escape_attr(href),
            escape_html(title)
        ));
        if let Some(excerpt) = card.excerpt.as_deref() {
            content.push_str(&format!(
                "<p class=\"card-excerpt\">{}</p>",
                escape_html(excerpt)
            ));
        }
        content.push_str("</div>");
    }
    content.push_str("</section>");

    let page = TemplateComponent::new().render_page("Portada", &header, &content)?;

    let duration = start_time.elapsed();
    log::info!("Front page rendered in {:?}ms", duration.as_millis());
    Ok(Html(page).into_response())
}

/// Handle search requests
pub async fn handle_search(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse, PortadaError> {
    let raw_query = raw.unwrap_or_default();
    let query = parse_query_param(&raw_query, "q");

    log::info!("Search request received for query: '{}'", query);

    // Guard against pathological input lengths
    let query = if query.chars().count() > 1000 {
        log::warn!("Very long search query received, truncating");
        query.chars().take(1000).collect()
    } else {
        query
    };

    let start_time = std::time::Instant::now();
    let response = state.index.search(&query);
    let results_html = SearchResultsComponent::new().render(&query, &response);

    let header = HeaderComponent::new().render();
    let page = TemplateComponent::new().render_page("Buscar - Portada", &header, &results_html)?;

    let duration = start_time.elapsed();
    log::info!("Search request completed in {:?}ms", duration.as_millis());
    Ok(Html(page).into_response())
}

/// Advance the carousel one slide
pub async fn carousel_next(State(state): State<AppState>) -> Redirect {
    state.carousel.lock().await.next();
    Redirect::to("/")
}

/// Rewind the carousel one slide
pub async fn carousel_prev(State(state): State<AppState>) -> Redirect {
    state.carousel.lock().await.previous();
    Redirect::to("/")
}

/// Jump to the slide named by the indicator index `i`
pub async fn carousel_go(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Redirect {
    let raw_query = raw.unwrap_or_default();
    if let Ok(index) = parse_query_param(&raw_query, "i").parse::<usize>() {
        state.carousel.lock().await.go_to(index);
    } else {
        log::debug!("Carousel go request without a valid index, ignoring");
    }
    Redirect::to("/")
}

/// Toggle autoplay on or off
pub async fn carousel_toggle(State(state): State<AppState>) -> Redirect {
    state.carousel.lock().await.toggle_autoplay();
    Redirect::to("/")
}

/// Resolve a touch gesture reported by the page script
pub async fn carousel_swipe(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Redirect {
    let raw_query = raw.unwrap_or_default();
    let start = parse_query_param(&raw_query, "start").parse::<f32>();
    let end = parse_query_param(&raw_query, "end").parse::<f32>();
    if let (Ok(start), Ok(end)) = (start, end) {
        let mut carousel = state.carousel.lock().await;
        carousel.touch_start(start);
        carousel.touch_end(end);
    } else {
        log::debug!("Swipe request with missing coordinates, ignoring");
    }
    Redirect::to("/")
}

/// Handle static file requests
pub async fn handle_static(
    State(state): State<AppState>,
    AxumPath(path): AxumPath<String>,
) -> Result<impl IntoResponse, PortadaError> {
    let normalized = normalize_path(&path);
    if normalized.split('/').any(|segment| segment == "..") {
        return Err(PortadaError::InvalidPath);
    }

    let requested = state.static_dir.join(&normalized);
    if !requested.is_file() {
        return Err(PortadaError::NotFound);
    }

    let bytes = std::fs::read(&requested)?;
    let content_type = content_type_for(&requested);
    let mut resp = Response::new(Body::from(bytes));
    resp.headers_mut().insert(
        header::CONTENT_TYPE,
        content_type
            .parse()
            .unwrap_or_else(|_| header::HeaderValue::from_static("application/octet-stream")),
    );
    Ok(resp)
}

/// Guess a MIME type from the file extension
fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript",
        Some("html") => "text/html; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_cover_page_assets() {
        assert_eq!(
            content_type_for(Path::new("static/css/portada.css")),
            "text/css; charset=utf-8"
        );
        assert_eq!(
            content_type_for(Path::new("logo.SVG")),
            "image/svg+xml"
        );
        assert_eq!(
            content_type_for(Path::new("unknown.bin")),
            "application/octet-stream"
        );
    }
}
