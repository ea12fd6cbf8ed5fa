use log::debug;

/// Component for the page header: brand, section links, fullscreen menu,
/// search box and theme toggle.
///
/// The stateless client-side wiring (menu overlay, search box dropdown,
/// theme persistence) is plain listener-and-class toggling, so it ships
/// as an embedded script rather than server state.
pub struct HeaderComponent;

const SECTIONS: [&str; 6] = [
    "Tecnología",
    "Economía",
    "Deportes",
    "Cultura",
    "Ciencia",
    "Internacional",
];

impl HeaderComponent {
    pub fn new() -> Self {
        debug!("Creating new HeaderComponent");
        Self
    }

    /// Build the header HTML
    pub fn render(&self) -> String {
        let mut html = String::new();
        html.push_str("<header class=\"site-header\">");
        html.push_str("<button class=\"hamburger\" id=\"hamburgerBtn\" aria-label=\"Abrir menú\"><span></span><span></span><span></span></button>");
        html.push_str("<a class=\"brand\" href=\"/\">Portada</a>");

        html.push_str("<nav class=\"section-links\">");
        for section in SECTIONS {
            html.push_str(&format!(
                "<a href=\"/search?q={}\">{}</a>",
                section, section
            ));
        }
        html.push_str("</nav>");

        html.push_str("<div class=\"header-tools\">");
        html.push_str("<button class=\"search-toggle\" id=\"searchToggle\" aria-label=\"Buscar\">&#128269;</button>");
        html.push_str("<div class=\"search-box\" id=\"searchBox\">");
        html.push_str("<form action=\"/search\" method=\"get\">");
        html.push_str("<input type=\"text\" name=\"q\" placeholder=\"Buscar noticias...\" autocomplete=\"off\">");
        html.push_str("</form>");
        html.push_str("</div>");
        html.push_str("<button class=\"theme-toggle\" id=\"themeToggle\">Modo Oscuro</button>");
        html.push_str("</div>");
        html.push_str("</header>");

        // Fullscreen menu overlay
        html.push_str("<div class=\"fullscreen-menu\" id=\"fullscreenMenu\">");
        html.push_str("<button class=\"close-btn\" id=\"closeBtn\" aria-label=\"Cerrar menú\">&times;</button>");
        html.push_str("<nav class=\"menu-links\">");
        html.push_str("<a href=\"/\">Portada</a>");
        for section in SECTIONS {
            html.push_str(&format!(
                "<a href=\"/search?q={}\">{}</a>",
                section, section
            ));
        }
        html.push_str("</nav>");
        html.push_str("</div>");

        html.push_str(Self::interaction_script());
        html
    }

    /// Client-side wiring for the header. The theme button labels the
    /// action: it reads "Modo Claro" while dark mode is active.
    fn interaction_script() -> &'static str {
        r#"<script>
      document.addEventListener('DOMContentLoaded', function() {
        const themeToggle = document.getElementById('themeToggle');
        const prefersDarkScheme = window.matchMedia('(prefers-color-scheme: dark)');

        function applyTheme(dark) {
          document.body.classList.toggle('dark-mode', dark);
          themeToggle.textContent = dark ? 'Modo Claro' : 'Modo Oscuro';
        }

        applyTheme(localStorage.getItem('theme') === 'dark' ||
          (localStorage.getItem('theme') === null && prefersDarkScheme.matches));

        themeToggle.addEventListener('click', function() {
          const dark = !document.body.classList.contains('dark-mode');
          applyTheme(dark);
          localStorage.setItem('theme', dark ? 'dark' : 'light');
        });

        prefersDarkScheme.addEventListener('change', function(e) {
          if (localStorage.getItem('theme') === null) {
            applyTheme(e.matches);
          }
        });

        const hamburgerBtn = document.getElementById('hamburgerBtn');
        const fullscreenMenu = document.getElementById('fullscreenMenu');
        const closeBtn = document.getElementById('closeBtn');

        function openMenu() {
          fullscreenMenu.classList.add('active');
          hamburgerBtn.classList.add('active');
          document.body.style.overflow = 'hidden';
        }

        function closeMenu() {
          fullscreenMenu.classList.remove('active');
          hamburgerBtn.classList.remove('active');
          document.body.style.overflow = 'auto';
        }

        hamburgerBtn.addEventListener('click', openMenu);
        closeBtn.addEventListener('click', closeMenu);
        document.querySelectorAll('.menu-links a').forEach(link => {
          link.addEventListener('click', closeMenu);
        });
        document.addEventListener('keydown', (e) => {
          if (e.key === 'Escape') closeMenu();
        });
        fullscreenMenu.addEventListener('click', (e) => {
          if (e.target === fullscreenMenu) closeMenu();
        });

        const searchToggle = document.getElementById('searchToggle');
        const searchBox = document.getElementById('searchBox');

        searchToggle.addEventListener('click', function(e) {
          e.stopPropagation();
          searchBox.classList.toggle('active');
        });
        document.addEventListener('click', function() {
          searchBox.classList.remove('active');
        });
        searchBox.addEventListener('click', function(e) {
          e.stopPropagation();
        });

        const carousel = document.getElementById('carousel');
        if (carousel) {
          let touchStartX = null;
          carousel.addEventListener('touchstart', (e) => {
            touchStartX = e.changedTouches[0].screenX;
          });
          carousel.addEventListener('touchend', (e) => {
            if (touchStartX === null) return;
            const endX = e.changedTouches[0].screenX;
            window.location = '/carousel/swipe?start=' + touchStartX + '&end=' + endX;
            touchStartX = null;
          });
        }
      });
    </script>"#
    }
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_carries_search_menu_and_theme_controls() {
        let html = HeaderComponent::new().render();
        assert!(html.contains("id=\"searchToggle\""));
        assert!(html.contains("id=\"hamburgerBtn\""));
        assert!(html.contains("id=\"themeToggle\""));
        assert!(html.contains("action=\"/search\""));
    }

    #[test]
    fn theme_button_labels_the_action_not_the_state() {
        let html = HeaderComponent::new().render();
        // Dark mode shows the way back to light, and vice versa
        assert!(html.contains("dark ? 'Modo Claro' : 'Modo Oscuro'"));
    }
}
