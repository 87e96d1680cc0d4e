//! Film list rendering from `data/films.json`.
//!
//! This module is split into:
//! - `youtube`: video id extraction and thumbnail/player URLs
//! - `card`: per-entry render mode and markup

mod card;
pub mod youtube;

pub use card::{film_card, player_iframe, FilmMedia};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::escape::html_escape;
use crate::model::FilmCatalog;

/// Markup for the whole list. Entries without media are skipped.
pub fn render_film_list(catalog: &FilmCatalog, config: &SiteConfig) -> String {
    let mut html = String::new();
    for film in &catalog.films {
        match film_card(film, &config.labels.play) {
            Some(card) => html.push_str(&card),
            None => tracing::debug!(title = %film.title, "film has no renderable media"),
        }
    }
    html
}

/// Markup for the list container given the outcome of the catalog fetch.
///
/// A failed fetch becomes an inline message; the error is logged.
pub fn render_film_section(fetched: Result<FilmCatalog>, config: &SiteConfig) -> String {
    match fetched {
        Ok(catalog) => render_film_list(&catalog, config),
        Err(e) => {
            tracing::error!(error = %e, "film catalog load failed");
            format!(
                "<p class=\"film-error\">{}</p>",
                html_escape(&config.labels.films_load_error)
            )
        }
    }
}
