//! Project page: catalog loading onto the DOM and the lightbox bound to
//! the rendered gallery.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent};

use super::dom;
use crate::config::SiteConfig;
use crate::gallery::{GallerySurface, Photo, ProjectLoader};
use crate::lightbox::{Key, Lightbox, LightboxHost, NavTargets};
use crate::model::ProjectCatalog;
use crate::navigation::Neighbors;
use crate::query::PageQuery;
use crate::signal::ReadySignal;
use crate::transition::FADE_CLASS;

const OPEN_CLASS: &str = "open";

/// Wire the project page if this document has a gallery.
pub(super) fn install(config: Rc<SiteConfig>) {
    let Some(gallery) = dom::query(".project-gallery") else {
        return;
    };
    let query = PageQuery::parse(&dom::location_search(), &config.default_project_id);
    let ready = ReadySignal::new();

    install_lightbox(&gallery, &config, &query, &ready);

    let mut surface = DomGallery {
        title: dom::query("#p-title"),
        meta: dom::query("#p-meta"),
        prev: dom::query(".nav-prev"),
        next: dom::query(".nav-next"),
        gallery,
    };
    wasm_bindgen_futures::spawn_local(async move {
        let fetched = dom::fetch_text(&config.projects_url)
            .await
            .and_then(|source| ProjectCatalog::from_json(&source));
        if let Err(e) = &fetched {
            gloo::console::error!("[projects.json] load error:", e.to_string());
        }
        ProjectLoader::new(&config, &query).apply(fetched, &mut surface, &ready);
    });
}

// ── Loader surface ────────────────────────────────────────────────────

struct DomGallery {
    title: Option<Element>,
    meta: Option<Element>,
    prev: Option<Element>,
    next: Option<Element>,
    gallery: Element,
}

impl GallerySurface for DomGallery {
    fn set_title(&mut self, text: &str) {
        if let Some(el) = &self.title {
            el.set_text_content(Some(text));
        }
    }

    fn set_meta(&mut self, text: &str) {
        if let Some(el) = &self.meta {
            el.set_text_content(Some(text));
        }
    }

    fn set_document_title(&mut self, text: &str) {
        if let Some(document) = dom::document() {
            document.set_title(text);
        }
    }

    fn set_gallery_html(&mut self, html: &str) {
        self.gallery.set_inner_html(html);
    }

    fn set_nav_links(&mut self, prev: Option<&str>, next: Option<&str>) {
        for (link, href) in [(&self.prev, prev), (&self.next, next)] {
            let Some(link) = link else { continue };
            let _ = match href {
                Some(href) => link.set_attribute("href", href),
                None => link.remove_attribute("href"),
            };
        }
    }

    fn set_navigation(&mut self, neighbors: &Neighbors) {
        let Some(body) = dom::body() else { return };
        let data = body.dataset();
        let _ = data.set("project", &neighbors.current);
        let _ = data.set("projectPrev", &neighbors.prev);
        let _ = data.set("projectNext", &neighbors.next);
    }
}

// ── Lightbox host ─────────────────────────────────────────────────────

struct DomLightbox {
    overlay: HtmlElement,
    media: HtmlImageElement,
    gallery: Element,
}

impl DomLightbox {
    fn gallery_elements(&self) -> Vec<HtmlImageElement> {
        dom::query_all_in(&self.gallery, "img")
            .into_iter()
            .filter_map(|el| el.dyn_into().ok())
            .collect()
    }
}

impl LightboxHost for DomLightbox {
    fn gallery_images(&self) -> Vec<Photo> {
        self.gallery_elements()
            .iter()
            .map(|img| Photo {
                src: img.src(),
                alt: img.alt(),
            })
            .collect()
    }

    fn nav_targets(&self) -> NavTargets {
        let Some(body) = dom::body() else {
            return NavTargets::default();
        };
        let data = body.dataset();
        NavTargets {
            prev: data.get("projectPrev"),
            next: data.get("projectNext"),
        }
    }

    fn display(&mut self, photo: &Photo) {
        self.media.set_src(&photo.src);
        self.media.set_alt(&photo.alt);
    }

    fn preload(&mut self, src: &str) {
        if let Ok(img) = HtmlImageElement::new() {
            img.set_src(src);
        }
    }

    fn set_open(&mut self, open: bool) {
        let classes = self.overlay.class_list();
        let _ = if open {
            classes.add_1(OPEN_CLASS)
        } else {
            classes.remove_1(OPEN_CLASS)
        };
    }

    fn lock_scroll(&mut self, locked: bool) {
        let value = if locked { "hidden" } else { "" };
        let root = dom::document()
            .and_then(|d| d.document_element())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        for el in root.into_iter().chain(dom::body()) {
            let _ = el.style().set_property("overflow", value);
        }
    }

    fn navigate(&mut self, href: &str) {
        if let Some(body) = dom::body() {
            let _ = body.class_list().remove_1(FADE_CLASS);
        }
        dom::navigate(href);
    }
}

#[derive(Clone, Copy)]
enum Control {
    Prev,
    Next,
    Close,
}

fn install_lightbox(gallery: &Element, config: &SiteConfig, query: &PageQuery, ready: &ReadySignal) {
    let Some(overlay) = dom::query_html(".lightbox") else {
        return;
    };
    let Some(media) = overlay
        .query_selector(".lb-media")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    else {
        return;
    };

    let host = DomLightbox {
        overlay: overlay.clone(),
        media,
        gallery: gallery.clone(),
    };
    let lightbox = Rc::new(RefCell::new(Lightbox::new(host, config.project_page.clone())));

    // Delegated: the gallery content is replaced after load.
    {
        let lightbox = lightbox.clone();
        EventListener::new(gallery, "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(clicked) = target.closest("img").ok().flatten() else {
                return;
            };
            let mut lightbox = lightbox.borrow_mut();
            let index = lightbox
                .host()
                .gallery_elements()
                .iter()
                .position(|img| *AsRef::<Element>::as_ref(img) == clicked);
            if let Some(index) = index {
                lightbox.open(index);
            }
        })
        .forget();
    }

    for (selector, control) in [
        (".lb-prev", Control::Prev),
        (".lb-next", Control::Next),
        (".lb-close", Control::Close),
    ] {
        let Some(button) = overlay.query_selector(selector).ok().flatten() else {
            continue;
        };
        let lightbox = lightbox.clone();
        EventListener::new(&button, "click", move |_| {
            let mut lightbox = lightbox.borrow_mut();
            match control {
                Control::Prev => {
                    lightbox.prev();
                }
                Control::Next => {
                    lightbox.next();
                }
                Control::Close => lightbox.close(),
            }
        })
        .forget();
    }

    if let Some(window) = web_sys::window() {
        let lightbox = lightbox.clone();
        EventListener::new(&window, "keydown", move |event| {
            let Some(key) = event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|e| Key::from_event_key(&e.key()))
            else {
                return;
            };
            lightbox.borrow_mut().handle_key(key);
        })
        .forget();
    }

    {
        let lightbox = lightbox.clone();
        let backdrop: EventTarget = overlay.clone().into();
        EventListener::new(&overlay, "click", move |event| {
            let on_backdrop = event.target().as_ref() == Some(&backdrop);
            lightbox.borrow_mut().click_overlay(on_backdrop);
        })
        .forget();
    }

    if query.lightbox {
        let start = query.start;
        if !lightbox.borrow_mut().try_auto_open(start) {
            ready.subscribe(move |_| {
                lightbox.borrow_mut().try_auto_open(start);
            });
        }
    }
}
