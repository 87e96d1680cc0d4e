//! WASM browser runtime for the portfolio site.
//!
//! Exposes the page wiring and a few pure helpers to JavaScript via
//! wasm-bindgen.
//! Build with: `wasm-pack build --target web --features wasm`

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;

mod dom;
mod films;
mod page;
mod project;

/// Wire every component present on the current page.
///
/// `config` is an optional object with `SiteConfig` fields (camelCase);
/// `undefined` or `null` selects the defaults.
#[wasm_bindgen]
pub fn boot(config: JsValue) -> Result<(), JsError> {
    let config: SiteConfig = if config.is_undefined() || config.is_null() {
        SiteConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?
    };
    config.validate().map_err(|e| JsError::new(&e.to_string()))?;
    let config = Rc::new(config);

    page::install_background(&config);
    page::install_transitions(&config);
    page::install_footer_year();
    page::reveal_triangles();
    project::install(config.clone());
    films::install(config);
    Ok(())
}

/// YouTube video id for a bare id or URL; empty when none is found.
#[wasm_bindgen]
pub fn youtube_id(input: &str) -> String {
    crate::film::youtube::video_id(input).unwrap_or_default()
}

/// Render a `films.json` document to list markup.
///
/// Returns the HTML string on success, or throws a JS error on failure.
#[wasm_bindgen]
pub fn render_films(films_json: &str) -> Result<String, JsError> {
    crate::render_films(films_json, &SiteConfig::default()).map_err(|e| JsError::new(&e.to_string()))
}
