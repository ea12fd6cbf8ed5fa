use log::debug;

use crate::services::RenderFrame;
use crate::types::ContentBlock;
use crate::utils::{escape_attr, escape_html};

/// Component rendering the slide viewport for one [`RenderFrame`].
///
/// Pure function of the frame and slide set: rendering the same frame
/// twice produces the same markup.
pub struct CarouselComponent;

impl CarouselComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &RenderFrame, slides: &[&ContentBlock]) -> String {
        if slides.is_empty() || frame.total == 0 {
            debug!("Carousel has no slides, rendering nothing");
            return String::new();
        }

        let mut html = String::new();
        html.push_str("<section class=\"carousel\" id=\"carousel\">");
        html.push_str(&format!(
            "<div class=\"carousel-track\" style=\"transform: translateX({}%)\">",
            frame.offset_percent
        ));
        for slide in slides {
            html.push_str("<div class=\"carousel-slide\">");
            if let Some(category) = slide.category.as_deref() {
                if !category.is_empty() {
                    html.push_str(&format!(
                        "<span class=\"slide-category\">{}</span>",
                        escape_html(category)
                    ));
                }
            }
            let href = slide.link.as_deref().unwrap_or("#");
            let title = slide.title.as_deref().unwrap_or("");
            html.push_str(&format!(
                "<h3 class=\"slide-title\"><a href=\"{}\">{}</a></h3>",
                escape_attr(href),
                escape_html(title)
            ));
            if let Some(excerpt) = slide.excerpt.as_deref() {
                if !excerpt.is_empty() {
                    html.push_str(&format!(
                        "<p class=\"slide-excerpt\">{}</p>",
                        escape_html(excerpt)
                    ));
                }
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");

        html.push_str("<a class=\"carousel-control prev\" href=\"/carousel/prev\" aria-label=\"Anterior\">&#8249;</a>");
        html.push_str("<a class=\"carousel-control next\" href=\"/carousel/next\" aria-label=\"Siguiente\">&#8250;</a>");

        html.push_str("<div class=\"carousel-indicators\">");
        for i in 0..frame.total {
            let class = if i == frame.active {
                "indicator active"
            } else {
                "indicator"
            };
            html.push_str(&format!(
                "<a class=\"{}\" href=\"/carousel/go?i={}\" aria-label=\"Diapositiva {}\"></a>",
                class,
                i,
                i + 1
            ));
        }
        html.push_str("</div>");

        html.push_str(&format!(
            "<a class=\"autoplay-toggle\" href=\"/carousel/toggle\">{}</a>",
            frame.autoplay_label
        ));
        html.push_str("</section>");
        html
    }
}

impl Default for CarouselComponent {
    fn default() -> Self {
        Self::new()
    }
}
