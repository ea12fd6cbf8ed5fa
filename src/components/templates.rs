use std::fs;
use std::path::Path;

use crate::errors::PortadaError;
use crate::utils::escape_attr;

/// Component for handling HTML template rendering
pub struct TemplateComponent;

impl TemplateComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the page shell around header and content.
    ///
    /// An on-disk template under `static/html/base.html` wins when
    /// present; otherwise an inline shell is used.
    pub fn render_page(
        &self,
        title: &str,
        header: &str,
        content: &str,
    ) -> Result<String, PortadaError> {
        let possible_paths = [
            "static/html/base.html",
            "./static/html/base.html",
            "../static/html/base.html",
        ];

        for path_str in &possible_paths {
            if let Ok(base) = fs::read_to_string(Path::new(path_str)) {
                let mut html = base;
                html = html.replace("{{TITLE}}", &escape_attr(title));
                html = html.replace(
                    "{{STYLE}}",
                    "<link rel=\"stylesheet\" href=\"/static/css/portada.css\">",
                );
                html = html.replace("{{HEADER}}", header);
                html = html.replace("{{CONTENT}}", content);
                return Ok(html);
            }
        }

        // Fallback inline shell
        Ok(format!(
            "<!doctype html><html lang=\"es\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{}</title><link rel=\"stylesheet\" href=\"/static/css/portada.css\"></head><body>{}<main class=\"content\">{}</main></body></html>",
            escape_attr(title),
            header,
            content
        ))
    }
}

impl Default for TemplateComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_shell_embeds_header_and_content() {
        let page = TemplateComponent::new()
            .render_page("Portada", "<header>h</header>", "<p>c</p>")
            .unwrap();
        assert!(page.contains("<title>Portada</title>"));
        assert!(page.contains("<header>h</header>"));
        assert!(page.contains("<p>c</p>"));
    }

    #[test]
    fn title_is_escaped_in_the_shell() {
        let page = TemplateComponent::new()
            .render_page("a \"b\"", "", "")
            .unwrap();
        assert!(page.contains("a &quot;b&quot;"));
    }
}
