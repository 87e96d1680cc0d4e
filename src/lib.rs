pub mod background;
pub mod check;
pub mod config;
pub mod error;
pub mod escape;
pub mod film;
pub mod gallery;
pub mod lightbox;
pub mod model;
pub mod navigation;
pub mod query;
pub mod signal;
pub mod transition;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
#[cfg(not(target_arch = "wasm32"))]
pub mod site;

#[cfg(feature = "wasm")]
pub mod wasm;

use config::SiteConfig;
use error::Result;
use gallery::ProjectPage;
use model::{FilmCatalog, ProjectCatalog};
use query::PageQuery;

/// Resolve the project page for a `location.search` string against a
/// project catalog document. `Ok(None)` means the id is not in the catalog.
pub fn project_page(projects_json: &str, search: &str, config: &SiteConfig) -> Result<Option<ProjectPage>> {
    let catalog = ProjectCatalog::from_json(projects_json)?;
    let query = PageQuery::parse(search, &config.default_project_id);
    Ok(gallery::resolve_project(&catalog, &query.id, config))
}

/// Render a film catalog document to list markup.
pub fn render_films(films_json: &str, config: &SiteConfig) -> Result<String> {
    let catalog = FilmCatalog::from_json(films_json)?;
    Ok(film::render_film_list(&catalog, config))
}
