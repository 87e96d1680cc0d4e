//! Looped prev/next adjacency between projects and the hrefs built from it.

use crate::model::ProjectCatalog;

/// Ids of the current project and its looped neighbors.
///
/// Always fully defined for a non-empty catalog: a single project is its
/// own prev and next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors {
    pub prev: String,
    pub current: String,
    pub next: String,
}

/// Where the lightbox should open on the destination page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStart {
    First,
    Last,
}

impl ChainStart {
    /// Value of the `img` query parameter.
    pub fn query_value(self) -> i64 {
        match self {
            ChainStart::First => 0,
            ChainStart::Last => -1,
        }
    }
}

impl ProjectCatalog {
    /// Neighbors of the project at `index`, wrapping modulo catalog length.
    pub fn neighbors(&self, index: usize) -> Option<Neighbors> {
        let n = self.projects.len();
        if index >= n {
            return None;
        }
        Some(Neighbors {
            prev: self.projects[(index + n - 1) % n].id.clone(),
            current: self.projects[index].id.clone(),
            next: self.projects[(index + 1) % n].id.clone(),
        })
    }
}

/// Link to a project page.
pub fn project_href(page: &str, id: &str) -> String {
    format!("{page}?id={id}")
}

/// Link to a project page that auto-opens its lightbox.
pub fn chain_href(page: &str, id: &str, start: ChainStart) -> String {
    format!("{page}?id={id}&lb=1&img={}", start.query_value())
}
