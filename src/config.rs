//! Site configuration shared by the browser runtime and the CLI.
//!
//! Every field has a default matching the published site, so an empty
//! object (or no config at all) is valid.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Project catalog location, relative to the page.
    pub projects_url: String,
    /// Film catalog location, relative to the page.
    pub films_url: String,
    /// Page that renders a single project from `?id=`.
    pub project_page: String,
    pub default_project_id: String,
    /// Appended to every project document title.
    pub site_name: String,
    /// Viewports at or below this width pick the mobile background.
    pub mobile_breakpoint_px: u32,
    pub resize_debounce_ms: u32,
    pub fade_delay_ms: u32,
    pub labels: Labels,
}

/// User-visible fallback texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub not_found: String,
    pub load_error: String,
    pub untitled_prefix: String,
    pub films_load_error: String,
    pub play: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            projects_url: "data/projects.json".to_string(),
            films_url: "data/films.json".to_string(),
            project_page: "photo-projects.html".to_string(),
            default_project_id: "01".to_string(),
            site_name: "Philémon Croc".to_string(),
            mobile_breakpoint_px: 720,
            resize_debounce_ms: 250,
            fade_delay_ms: 200,
            labels: Labels::default(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            not_found: "Projet introuvable".to_string(),
            load_error: "Erreur de chargement".to_string(),
            untitled_prefix: "Projet".to_string(),
            films_load_error: "Impossible de charger les films.".to_string(),
            play: "Lire".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config document. Missing fields keep their defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(source).map_err(|e| FolioError::from(e).in_document("config"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the runtime cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.project_page.is_empty() {
            return Err(FolioError::config("projectPage must not be empty"));
        }
        if self.default_project_id.is_empty() {
            return Err(FolioError::config("defaultProjectId must not be empty"));
        }
        if self.mobile_breakpoint_px == 0 {
            return Err(FolioError::config("mobileBreakpointPx must be positive"));
        }
        Ok(())
    }

    /// Media query selecting the mobile background.
    pub fn mobile_media_query(&self) -> String {
        format!("(max-width: {}px)", self.mobile_breakpoint_px)
    }
}
