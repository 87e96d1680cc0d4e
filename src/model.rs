//! Catalog documents: `data/projects.json` and `data/films.json`.
//!
//! Both are read once per page view and never mutated. Order is
//! significant for projects (it defines prev/next adjacency).

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FolioError, Result};

/// Ordered list of photo projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Two-digit, zero-padded identifier (`"01"`).
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: String,
    /// Path prefix joined with every image file name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub base: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

/// Ordered list of film entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmCatalog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub films: Vec<Film>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Free text; `\n` marks a visual line break.
    #[serde(default, deserialize_with = "null_as_default")]
    pub credits: String,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub no_embed: bool,
    #[serde(default)]
    pub poster: Option<String>,
}

/// `null` reads like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a catalog document; a bare `null` is an empty catalog.
fn parse_document<T>(source: &str, document: &str) -> Result<T>
where
    T: Default + for<'de> Deserialize<'de>,
{
    serde_json::from_str::<Option<T>>(source)
        .map(Option::unwrap_or_default)
        .map_err(|e| FolioError::from(e).in_document(document))
}

impl ProjectCatalog {
    pub fn from_json(source: &str) -> Result<Self> {
        parse_document(source, "projects.json")
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Position of the first project whose id matches exactly.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    pub fn find(&self, id: &str) -> Option<(usize, &Project)> {
        let index = self.position(id)?;
        Some((index, &self.projects[index]))
    }
}

impl Project {
    /// Title shown on the page: the project title, or `"<prefix> <id>"`
    /// when it is missing or empty.
    pub fn display_title(&self, untitled_prefix: &str) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("{untitled_prefix} {}", self.id),
        }
    }

    /// Full source path of every image, in catalog order.
    pub fn image_sources(&self) -> impl Iterator<Item = String> + '_ {
        self.images.iter().map(move |name| format!("{}{name}", self.base))
    }
}

impl FilmCatalog {
    pub fn from_json(source: &str) -> Result<Self> {
        parse_document(source, "films.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECTS: &str = r#"{
        "projects": [
            { "id": "01", "title": "Brume", "meta": "2023 — Argentique", "base": "img/p01/", "images": ["a.jpg", "b.jpg"] },
            { "id": "02", "base": "img/p02/", "images": [] }
        ]
    }"#;

    #[test]
    fn parse_projects() {
        let catalog = ProjectCatalog::from_json(PROJECTS).expect("valid catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.projects[0].title.as_deref(), Some("Brume"));
        assert_eq!(catalog.projects[1].title, None);
        assert_eq!(catalog.projects[1].meta, "");
    }

    #[test]
    fn missing_projects_key_is_empty() {
        let catalog = ProjectCatalog::from_json("{}").expect("empty object");
        assert!(catalog.is_empty());
    }

    #[test]
    fn find_is_exact_match() {
        let catalog = ProjectCatalog::from_json(PROJECTS).unwrap();
        assert_eq!(catalog.position("02"), Some(1));
        assert_eq!(catalog.position("2"), None);
        assert!(catalog.find("03").is_none());
    }

    #[test]
    fn display_title_falls_back() {
        let catalog = ProjectCatalog::from_json(PROJECTS).unwrap();
        assert_eq!(catalog.projects[0].display_title("Projet"), "Brume");
        assert_eq!(catalog.projects[1].display_title("Projet"), "Projet 02");

        let mut empty = catalog.projects[0].clone();
        empty.title = Some(String::new());
        assert_eq!(empty.display_title("Projet"), "Projet 01");
    }

    #[test]
    fn image_sources_join_base() {
        let catalog = ProjectCatalog::from_json(PROJECTS).unwrap();
        let sources: Vec<_> = catalog.projects[0].image_sources().collect();
        assert_eq!(sources, vec!["img/p01/a.jpg", "img/p01/b.jpg"]);
    }

    #[test]
    fn parse_films_camel_case() {
        let catalog = FilmCatalog::from_json(
            r#"{ "films": [ { "title": "Nuit", "credits": "Réal.\nImage", "videoId": "abcdefghijk", "noEmbed": true } ] }"#,
        )
        .expect("valid films");
        let film = &catalog.films[0];
        assert_eq!(film.video_id.as_deref(), Some("abcdefghijk"));
        assert!(film.no_embed);
        assert_eq!(film.poster, None);
    }

    #[test]
    fn null_fields_read_as_empty() {
        let catalog = ProjectCatalog::from_json(
            r#"{ "projects": [ { "id": "01", "title": null, "meta": null, "base": null, "images": null } ] }"#,
        )
        .expect("nulls are tolerated");
        let project = &catalog.projects[0];
        assert_eq!(project.title, None);
        assert_eq!(project.meta, "");
        assert!(project.images.is_empty());
        assert_eq!(project.image_sources().count(), 0);

        let films = FilmCatalog::from_json(
            r#"{ "films": [ { "title": null, "credits": null, "url": "https://youtu.be/abcdefghijk", "noEmbed": null } ] }"#,
        )
        .expect("nulls are tolerated");
        assert_eq!(films.films[0].credits, "");
        assert_eq!(films.films[0].title, "");
        assert!(!films.films[0].no_embed);
    }

    #[test]
    fn null_documents_are_empty_catalogs() {
        assert!(ProjectCatalog::from_json("null").unwrap().is_empty());
        assert!(ProjectCatalog::from_json(r#"{ "projects": null }"#).unwrap().is_empty());
        assert!(FilmCatalog::from_json(r#"{ "films": null }"#).unwrap().films.is_empty());
    }

    #[test]
    fn malformed_catalog_names_document() {
        let err = ProjectCatalog::from_json("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("projects.json"));
    }
}
