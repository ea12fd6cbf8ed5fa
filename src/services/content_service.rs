use log::{debug, info};
use pulldown_cmark::{html, Options, Parser};
use time::OffsetDateTime;

use crate::types::{ContentBlock, ItemKind};

/// Catalog of the page's content blocks.
///
/// This is the boundary adapter between the page and the search index:
/// the index consumes the catalog as a pre-extracted snapshot and never
/// queries the rendered page itself.
pub struct ContentService {
    blocks: Vec<ContentBlock>,
}

impl ContentService {
    /// Create a catalog from an explicit set of blocks
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        debug!("Creating ContentService with {} blocks", blocks.len());
        Self { blocks }
    }

    /// Create the catalog of the front page
    pub fn seed() -> Self {
        let catalog = Self::new(seed_blocks());
        info!(
            "Content catalog seeded: {} blocks, {} carousel slides",
            catalog.blocks.len(),
            catalog.carousel_slides().len()
        );
        catalog
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn featured(&self) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.kind == ItemKind::Featured)
    }

    pub fn sidebar_briefs(&self) -> Vec<&ContentBlock> {
        self.of_kind(ItemKind::Sidebar)
    }

    pub fn cards(&self) -> Vec<&ContentBlock> {
        self.of_kind(ItemKind::Card)
    }

    pub fn carousel_slides(&self) -> Vec<&ContentBlock> {
        self.of_kind(ItemKind::CarouselSlide)
    }

    fn of_kind(&self, kind: ItemKind) -> Vec<&ContentBlock> {
        self.blocks.iter().filter(|b| b.kind == kind).collect()
    }

    /// Render a Markdown body to HTML
    pub fn render_markdown(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        let parser = Parser::new_ext(markdown, options);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}

fn block(kind: ItemKind, title: &str, category: &str, excerpt: &str, link: &str) -> ContentBlock {
    let mut b = ContentBlock::new(kind);
    b.title = Some(title.to_string());
    b.category = Some(category.to_string());
    b.excerpt = Some(excerpt.to_string());
    if !link.is_empty() {
        b.link = Some(link.to_string());
    }
    b
}

/// Content of the front page, in catalog order: featured story first,
/// then sidebar briefs, article cards and carousel slides.
fn seed_blocks() -> Vec<ContentBlock> {
    let mut featured = block(
        ItemKind::Featured,
        "IA en robots domésticos: la casa que aprende",
        "Tecnología",
        "Los nuevos asistentes combinan visión artificial y modelos de lenguaje para anticipar tareas del hogar.",
        "/articulo/ia-robots",
    );
    featured.body = Some(
        "Los fabricantes presentaron esta semana una generación de robots \
domésticos capaz de **aprender rutinas** sin programación previa.\n\n\
El salto llega de la mano de modelos multimodales que interpretan la \
escena completa de la vivienda:\n\n\
- reconocimiento de objetos cotidianos\n\
- planificación de tareas encadenadas\n\
- control por voz en lenguaje natural\n\n\
Los analistas esperan los primeros modelos comerciales para finales de año."
            .to_string(),
    );
    featured.published = OffsetDateTime::from_unix_timestamp(1_787_184_000).ok();

    vec![
        featured,
        block(
            ItemKind::Sidebar,
            "Mercados al alza tras el dato de inflación",
            "Economía",
            "La bolsa cierra su mejor semana del año impulsada por el sector tecnológico.",
            "/articulo/mercados",
        ),
        block(
            ItemKind::Sidebar,
            "El derbi define al campeón",
            "Deportes",
            "Final de liga con los dos grandes empatados a puntos en la última jornada.",
            "/articulo/derbi",
        ),
        block(
            ItemKind::Sidebar,
            "Festival de cine: palmarés sorpresa",
            "Cultura",
            "Una ópera prima rodada con presupuesto mínimo se lleva el premio mayor.",
            "",
        ),
        block(
            ItemKind::Card,
            "Chips fotónicos salen del laboratorio",
            "Ciencia",
            "Los primeros procesadores de luz prometen multiplicar la eficiencia de los centros de datos.",
            "/articulo/fotonica",
        ),
        block(
            ItemKind::Card,
            "Acuerdo comercial en la cumbre del Pacífico",
            "Internacional",
            "Doce países firman la rebaja arancelaria más amplia de la década.",
            "/articulo/cumbre",
        ),
        block(
            ItemKind::Card,
            "Vuelve el vinilo, ahora reciclado",
            "Cultura",
            "Las discográficas adoptan prensados de PVC recuperado ante la demanda récord.",
            "",
        ),
        block(
            ItemKind::Card,
            "Maratón popular: récord de inscritos",
            "Deportes",
            "La prueba agota dorsales por primera vez en su historia con 40.000 corredores.",
            "/articulo/maraton",
        ),
        block(
            ItemKind::CarouselSlide,
            "Auroras boreales visibles en latitudes bajas",
            "Ciencia",
            "La mayor tormenta solar del ciclo tiñe el cielo nocturno de media Europa.",
            "/articulo/auroras",
        ),
        block(
            ItemKind::CarouselSlide,
            "La nueva estación central abre sus puertas",
            "Internacional",
            "Diez años de obras culminan en el mayor nudo ferroviario del continente.",
            "/articulo/estacion",
        ),
        block(
            ItemKind::CarouselSlide,
            "Videojuegos: estudio local gana el premio del año",
            "Tecnología",
            "Un equipo de doce personas se impone a las grandes producciones.",
            "/articulo/videojuegos",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_covers_every_kind() {
        let catalog = ContentService::seed();
        assert!(catalog.featured().is_some());
        assert_eq!(catalog.sidebar_briefs().len(), 3);
        assert_eq!(catalog.cards().len(), 4);
        assert_eq!(catalog.carousel_slides().len(), 3);
    }

    #[test]
    fn seed_blocks_all_carry_titles() {
        let catalog = ContentService::seed();
        for block in catalog.blocks() {
            assert!(block.title.as_deref().is_some_and(|t| !t.is_empty()));
        }
    }

    #[test]
    fn markdown_body_renders_to_html() {
        let catalog = ContentService::seed();
        let body = catalog.featured().and_then(|f| f.body.clone()).unwrap();
        let html = catalog.render_markdown(&body);
        assert!(html.contains("<strong>aprender rutinas</strong>"));
        assert!(html.contains("<li>"));
    }
}
