//! Project page loader: resolves the requested project from the catalog,
//! renders its photo column and publishes the looped navigation state.

use crate::config::SiteConfig;
use crate::error::Result;
use crate::escape::html_escape;
use crate::model::{Project, ProjectCatalog};
use crate::navigation::{project_href, Neighbors};
use crate::query::PageQuery;
use crate::signal::ReadySignal;

/// One rendered gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub src: String,
    pub alt: String,
}

/// Everything the project page shows for a resolved project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPage {
    pub document_title: String,
    pub title: String,
    pub meta: String,
    pub photos: Vec<Photo>,
    pub neighbors: Neighbors,
    pub prev_href: String,
    pub next_href: String,
}

/// Page elements the loader writes to.
///
/// The browser implementation maps these onto `#p-title`, `#p-meta`,
/// `.project-gallery`, `.nav-prev`/`.nav-next` and the `data-project*`
/// attributes of `<body>`.
pub trait GallerySurface {
    fn set_title(&mut self, text: &str);
    fn set_meta(&mut self, text: &str);
    fn set_document_title(&mut self, text: &str);
    fn set_gallery_html(&mut self, html: &str);
    /// `None` removes the link target.
    fn set_nav_links(&mut self, prev: Option<&str>, next: Option<&str>);
    fn set_navigation(&mut self, neighbors: &Neighbors);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { count: usize },
    NotFound,
    Failed,
}

/// Build the page model for `id`, or `None` when the catalog lacks it.
pub fn resolve_project(catalog: &ProjectCatalog, id: &str, config: &SiteConfig) -> Option<ProjectPage> {
    let (index, project) = catalog.find(id)?;
    let neighbors = catalog.neighbors(index)?;
    let title = project.display_title(&config.labels.untitled_prefix);

    Some(ProjectPage {
        document_title: format!("{title} — {}", config.site_name),
        meta: project.meta.clone(),
        photos: photos(project, &config.labels.untitled_prefix),
        prev_href: project_href(&config.project_page, &neighbors.prev),
        next_href: project_href(&config.project_page, &neighbors.next),
        neighbors,
        title,
    })
}

fn photos(project: &Project, untitled_prefix: &str) -> Vec<Photo> {
    let label = match project.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => untitled_prefix,
    };
    project
        .image_sources()
        .enumerate()
        .map(|(i, src)| Photo {
            src,
            alt: format!("{label} — photo {}", i + 1),
        })
        .collect()
}

/// Vertical gallery markup, one figure per photo.
pub fn gallery_html(photos: &[Photo]) -> String {
    let mut html = String::new();
    for photo in photos {
        html.push_str(&format!(
            "<figure class=\"project-photo\"><img src=\"{}\" alt=\"{}\"></figure>\n",
            html_escape(&photo.src),
            html_escape(&photo.alt),
        ));
    }
    html
}

/// Applies a fetched catalog to the project page.
#[derive(Debug)]
pub struct ProjectLoader<'a> {
    config: &'a SiteConfig,
    id: String,
}

impl<'a> ProjectLoader<'a> {
    pub fn new(config: &'a SiteConfig, query: &PageQuery) -> Self {
        Self {
            config,
            id: query.id.clone(),
        }
    }

    /// Render the outcome of the catalog fetch onto `surface`.
    ///
    /// `ready` fires exactly once, and only after a successful render.
    pub fn apply(
        &self,
        fetched: Result<ProjectCatalog>,
        surface: &mut impl GallerySurface,
        ready: &ReadySignal,
    ) -> LoadOutcome {
        let catalog = match fetched {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "project catalog load failed");
                surface.set_title(&self.config.labels.load_error);
                return LoadOutcome::Failed;
            }
        };

        let Some(page) = resolve_project(&catalog, &self.id, self.config) else {
            tracing::warn!(id = %self.id, "project not found in catalog");
            surface.set_title(&self.config.labels.not_found);
            surface.set_gallery_html("");
            surface.set_nav_links(None, None);
            return LoadOutcome::NotFound;
        };

        surface.set_document_title(&page.document_title);
        surface.set_title(&page.title);
        surface.set_meta(&page.meta);
        surface.set_gallery_html(&gallery_html(&page.photos));
        surface.set_nav_links(Some(&page.prev_href), Some(&page.next_href));
        surface.set_navigation(&page.neighbors);

        let count = page.photos.len();
        tracing::debug!(id = %self.id, count, prev = %page.neighbors.prev, next = %page.neighbors.next, "project rendered");
        ready.fire(count);
        LoadOutcome::Rendered { count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    #[derive(Default)]
    struct Recorder {
        title: Option<String>,
        meta: Option<String>,
        document_title: Option<String>,
        gallery: Option<String>,
        links: Option<(Option<String>, Option<String>)>,
        navigation: Option<Neighbors>,
    }

    impl GallerySurface for Recorder {
        fn set_title(&mut self, text: &str) {
            self.title = Some(text.to_string());
        }
        fn set_meta(&mut self, text: &str) {
            self.meta = Some(text.to_string());
        }
        fn set_document_title(&mut self, text: &str) {
            self.document_title = Some(text.to_string());
        }
        fn set_gallery_html(&mut self, html: &str) {
            self.gallery = Some(html.to_string());
        }
        fn set_nav_links(&mut self, prev: Option<&str>, next: Option<&str>) {
            self.links = Some((prev.map(str::to_string), next.map(str::to_string)));
        }
        fn set_navigation(&mut self, neighbors: &Neighbors) {
            self.navigation = Some(neighbors.clone());
        }
    }

    fn catalog() -> ProjectCatalog {
        ProjectCatalog::from_json(
            r#"{ "projects": [
                { "id": "01", "title": "Brume", "meta": "2023", "base": "img/01/", "images": ["a.jpg", "b.jpg", "c.jpg"] },
                { "id": "02", "base": "img/02/", "images": ["x.jpg"] },
                { "id": "03", "title": "Sel", "base": "img/03/", "images": [] }
            ] }"#,
        )
        .unwrap()
    }

    fn load(search: &str, fetched: Result<ProjectCatalog>) -> (LoadOutcome, Recorder, ReadySignal) {
        let config = SiteConfig::default();
        let query = PageQuery::parse(search, &config.default_project_id);
        let loader = ProjectLoader::new(&config, &query);
        let mut surface = Recorder::default();
        let ready = ReadySignal::new();
        let outcome = loader.apply(fetched, &mut surface, &ready);
        (outcome, surface, ready)
    }

    #[test]
    fn renders_requested_project() {
        let (outcome, surface, ready) = load("?id=1", Ok(catalog()));
        assert_eq!(outcome, LoadOutcome::Rendered { count: 3 });
        assert_eq!(surface.title.as_deref(), Some("Brume"));
        assert_eq!(surface.meta.as_deref(), Some("2023"));
        assert_eq!(surface.document_title.as_deref(), Some("Brume — Philémon Croc"));
        let gallery = surface.gallery.unwrap();
        assert_eq!(gallery.matches("<figure").count(), 3);
        assert!(gallery.contains(r#"src="img/01/b.jpg" alt="Brume — photo 2""#));
        assert_eq!(ready.fired(), Some(3));
    }

    #[test]
    fn neighbors_and_links_wrap() {
        let (_, surface, _) = load("?id=01", Ok(catalog()));
        let nav = surface.navigation.unwrap();
        assert_eq!((nav.prev.as_str(), nav.current.as_str(), nav.next.as_str()), ("03", "01", "02"));
        assert_eq!(
            surface.links,
            Some((
                Some("photo-projects.html?id=03".to_string()),
                Some("photo-projects.html?id=02".to_string())
            ))
        );
    }

    #[test]
    fn untitled_project_uses_fallbacks() {
        let (_, surface, _) = load("?id=02", Ok(catalog()));
        assert_eq!(surface.title.as_deref(), Some("Projet 02"));
        assert!(surface.gallery.unwrap().contains(r#"alt="Projet — photo 1""#));
    }

    #[test]
    fn unknown_id_clears_page() {
        let (outcome, surface, ready) = load("?id=42", Ok(catalog()));
        assert_eq!(outcome, LoadOutcome::NotFound);
        assert_eq!(surface.title.as_deref(), Some("Projet introuvable"));
        assert_eq!(surface.gallery.as_deref(), Some(""));
        assert_eq!(surface.links, Some((None, None)));
        assert!(surface.navigation.is_none());
        assert_eq!(ready.fired(), None);
    }

    #[test]
    fn load_failure_shows_error_without_signal() {
        let (outcome, surface, ready) = load("", Err(FolioError::status(500)));
        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(surface.title.as_deref(), Some("Erreur de chargement"));
        assert!(surface.gallery.is_none());
        assert_eq!(ready.fired(), None);
    }

    #[test]
    fn empty_project_still_signals() {
        let (outcome, _, ready) = load("?id=03", Ok(catalog()));
        assert_eq!(outcome, LoadOutcome::Rendered { count: 0 });
        assert_eq!(ready.fired(), Some(0));
    }

    #[test]
    fn gallery_markup_is_escaped() {
        let html = gallery_html(&[Photo {
            src: "a\".jpg".to_string(),
            alt: "<b>".to_string(),
        }]);
        assert!(html.contains("a&quot;.jpg"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
