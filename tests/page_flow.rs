//! Loader and lightbox sharing one fake page, coupled only through the
//! page content and the ready signal.

use std::cell::RefCell;
use std::rc::Rc;

use folio::config::SiteConfig;
use folio::error::FolioError;
use folio::gallery::{GallerySurface, LoadOutcome, Photo, ProjectLoader};
use folio::lightbox::{Lightbox, LightboxHost, NavTargets, Step};
use folio::model::ProjectCatalog;
use folio::navigation::Neighbors;
use folio::query::PageQuery;
use folio::signal::ReadySignal;

#[derive(Default)]
struct Dom {
    title: String,
    gallery_html: String,
    body_data: Option<Neighbors>,
    shown: Option<String>,
    open: bool,
    navigated: Vec<String>,
}

/// Both components hold a handle to the same page.
#[derive(Clone, Default)]
struct PageHandle(Rc<RefCell<Dom>>);

impl GallerySurface for PageHandle {
    fn set_title(&mut self, text: &str) {
        self.0.borrow_mut().title = text.to_string();
    }
    fn set_meta(&mut self, _text: &str) {}
    fn set_document_title(&mut self, _text: &str) {}
    fn set_gallery_html(&mut self, html: &str) {
        self.0.borrow_mut().gallery_html = html.to_string();
    }
    fn set_nav_links(&mut self, _prev: Option<&str>, _next: Option<&str>) {}
    fn set_navigation(&mut self, neighbors: &Neighbors) {
        self.0.borrow_mut().body_data = Some(neighbors.clone());
    }
}

impl LightboxHost for PageHandle {
    fn gallery_images(&self) -> Vec<Photo> {
        parse_gallery(&self.0.borrow().gallery_html)
    }
    fn nav_targets(&self) -> NavTargets {
        match &self.0.borrow().body_data {
            Some(nav) => NavTargets {
                prev: Some(nav.prev.clone()),
                next: Some(nav.next.clone()),
            },
            None => NavTargets::default(),
        }
    }
    fn display(&mut self, photo: &Photo) {
        self.0.borrow_mut().shown = Some(photo.src.clone());
    }
    fn preload(&mut self, _src: &str) {}
    fn set_open(&mut self, open: bool) {
        self.0.borrow_mut().open = open;
    }
    fn lock_scroll(&mut self, _locked: bool) {}
    fn navigate(&mut self, href: &str) {
        self.0.borrow_mut().navigated.push(href.to_string());
    }
}

/// Pull `src`/`alt` pairs back out of the rendered figures.
fn parse_gallery(html: &str) -> Vec<Photo> {
    let attr = |tag: &str, name: &str| -> String {
        let key = format!("{name}=\"");
        let start = tag.find(&key).map(|i| i + key.len()).unwrap_or(0);
        let end = tag[start..].find('"').map(|i| start + i).unwrap_or(start);
        tag[start..end].to_string()
    };
    html.split("<img ")
        .skip(1)
        .map(|tag| Photo {
            src: attr(tag, "src"),
            alt: attr(tag, "alt"),
        })
        .collect()
}

const CATALOG: &str = r#"{ "projects": [
    { "id": "01", "title": "Brume", "base": "img/01/", "images": ["a.jpg", "b.jpg", "c.jpg"] },
    { "id": "02", "title": "Sel", "base": "img/02/", "images": ["d.jpg"] }
] }"#;

/// Sets up the page the way the browser runtime does: lightbox first,
/// deferred auto-open, then the (simulated) catalog fetch completes.
fn boot(search: &str, fetched: Result<ProjectCatalog, FolioError>) -> (PageHandle, Rc<RefCell<Lightbox<PageHandle>>>, LoadOutcome) {
    let config = SiteConfig::default();
    let query = PageQuery::parse(search, &config.default_project_id);
    let page = PageHandle::default();
    let ready = ReadySignal::new();

    let lightbox = Rc::new(RefCell::new(Lightbox::new(page.clone(), config.project_page.clone())));
    if query.lightbox && !lightbox.borrow_mut().try_auto_open(query.start) {
        let lightbox = lightbox.clone();
        let start = query.start;
        ready.subscribe(move |_| {
            lightbox.borrow_mut().try_auto_open(start);
        });
    }

    let mut surface = page.clone();
    let outcome = ProjectLoader::new(&config, &query).apply(fetched, &mut surface, &ready);
    (page, lightbox, outcome)
}

#[test]
fn auto_open_waits_for_gallery() {
    let (page, lightbox, outcome) = boot("?id=01&lb=1&img=-1", ProjectCatalog::from_json(CATALOG));
    assert_eq!(outcome, LoadOutcome::Rendered { count: 3 });
    assert!(page.0.borrow().open);
    assert_eq!(lightbox.borrow().index(), Some(2));
    assert_eq!(page.0.borrow().shown.as_deref(), Some("img/01/c.jpg"));
}

#[test]
fn chaining_uses_loader_published_neighbors() {
    let (page, lightbox, _) = boot("?id=02&lb=1&img=0", ProjectCatalog::from_json(CATALOG));
    let step = lightbox.borrow_mut().next();
    assert_eq!(step, Step::Chained("photo-projects.html?id=01&lb=1&img=0".to_string()));
    assert_eq!(page.0.borrow().navigated.len(), 1);
}

#[test]
fn no_auto_open_without_request() {
    let (page, lightbox, _) = boot("?id=01", ProjectCatalog::from_json(CATALOG));
    assert!(!page.0.borrow().open);
    assert!(!lightbox.borrow().is_open());
}

#[test]
fn failed_load_never_opens() {
    let (page, lightbox, outcome) = boot("?id=01&lb=1", Err(FolioError::network("offline")));
    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(page.0.borrow().title, "Erreur de chargement");
    assert!(!lightbox.borrow().is_open());
}

#[test]
fn unknown_project_never_opens() {
    let (page, lightbox, outcome) = boot("?id=99&lb=1", ProjectCatalog::from_json(CATALOG));
    assert_eq!(outcome, LoadOutcome::NotFound);
    assert!(page.0.borrow().gallery_html.is_empty());
    assert!(!lightbox.borrow().is_open());
    assert!(lightbox.borrow_mut().next() == Step::Ignored);
}
