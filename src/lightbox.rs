//! Fullscreen viewer over the rendered gallery.
//!
//! Stepping past either end of a project chains to the neighboring
//! project's page, which reopens the viewer at its first or last image.
//! The image list is re-read from the host on every open.

use crate::gallery::Photo;
use crate::navigation::{chain_href, ChainStart};
use crate::query::resolve_start;

/// Neighbor project ids published on the page by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTargets {
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Page operations the lightbox needs.
pub trait LightboxHost {
    /// Images currently rendered in the gallery, in page order.
    fn gallery_images(&self) -> Vec<Photo>;
    fn nav_targets(&self) -> NavTargets;
    fn display(&mut self, photo: &Photo);
    /// Warm the browser cache for an image that may be shown next.
    fn preload(&mut self, src: &str);
    fn set_open(&mut self, open: bool);
    fn lock_scroll(&mut self, locked: bool);
    /// Full page load. Implementations drop any pending fade-out first.
    fn navigate(&mut self, href: &str);
}

/// Keys the open viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_event_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Key::Escape),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            _ => None,
        }
    }
}

/// Result of a navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Shown(usize),
    /// Left the page for a neighboring project.
    Chained(String),
    /// Nothing happened (closed viewer, or no neighbor to chain to).
    Ignored,
}

#[derive(Debug)]
pub struct Lightbox<H> {
    host: H,
    project_page: String,
    images: Vec<Photo>,
    index: usize,
    open: bool,
}

impl<H: LightboxHost> Lightbox<H> {
    pub fn new(host: H, project_page: impl Into<String>) -> Self {
        Self {
            host,
            project_page: project_page.into(),
            images: Vec::new(),
            index: 0,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> Option<usize> {
        self.open.then_some(self.index)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Open on image `index`. Returns `false` for an empty gallery or an
    /// index past its end.
    pub fn open(&mut self, index: usize) -> bool {
        self.images = self.host.gallery_images();
        if index >= self.images.len() {
            return false;
        }
        self.index = index;
        self.show_current();
        self.open = true;
        self.host.set_open(true);
        self.host.lock_scroll(true);
        true
    }

    /// Open from a URL start request; see [`resolve_start`] for clamping.
    pub fn try_auto_open(&mut self, start: i64) -> bool {
        let len = self.host.gallery_images().len();
        match resolve_start(start, len) {
            Some(index) => self.open(index),
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.host.set_open(false);
        self.host.lock_scroll(false);
    }

    pub fn next(&mut self) -> Step {
        if !self.open {
            return Step::Ignored;
        }
        if self.index + 1 < self.images.len() {
            self.index += 1;
            self.show_current();
            return Step::Shown(self.index);
        }
        let target = self.host.nav_targets().next;
        self.chain(target, ChainStart::First)
    }

    pub fn prev(&mut self) -> Step {
        if !self.open {
            return Step::Ignored;
        }
        if self.index > 0 {
            self.index -= 1;
            self.show_current();
            return Step::Shown(self.index);
        }
        let target = self.host.nav_targets().prev;
        self.chain(target, ChainStart::Last)
    }

    /// Keyboard handling; keys are ignored while closed.
    pub fn handle_key(&mut self, key: Key) -> Step {
        if !self.open {
            return Step::Ignored;
        }
        match key {
            Key::Escape => {
                self.close();
                Step::Ignored
            }
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.prev(),
        }
    }

    /// A click on the overlay closes it only when it hit the backdrop
    /// itself, not the media or the controls.
    pub fn click_overlay(&mut self, on_backdrop: bool) {
        if self.open && on_backdrop {
            self.close();
        }
    }

    fn chain(&mut self, target: Option<String>, start: ChainStart) -> Step {
        match target.filter(|id| !id.is_empty()) {
            Some(id) => {
                let href = chain_href(&self.project_page, &id, start);
                tracing::debug!(%href, "lightbox chaining to neighbor project");
                self.host.navigate(&href);
                Step::Chained(href)
            }
            None => Step::Ignored,
        }
    }

    fn show_current(&mut self) {
        let photo = &self.images[self.index];
        self.host.display(photo);
        if let Some(next) = self.images.get(self.index + 1) {
            self.host.preload(&next.src);
        }
        if let Some(prev) = self.index.checked_sub(1).and_then(|i| self.images.get(i)) {
            self.host.preload(&prev.src);
        }
    }
}
