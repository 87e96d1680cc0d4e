//! Authoring checks over the catalogs: problems the browser runtime
//! would silently degrade on.

use std::collections::HashSet;

use serde::Serialize;

use crate::film::{youtube, FilmMedia};
use crate::model::{FilmCatalog, ProjectCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// `projects[2]`, `films[0]`, ...
    pub subject: String,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

fn diag(severity: Severity, subject: String, message: impl Into<String>) -> Diagnostic {
    Diagnostic {
        severity,
        subject,
        message: message.into(),
    }
}

pub fn check_projects(catalog: &ProjectCatalog) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    if catalog.is_empty() {
        out.push(diag(
            Severity::Warning,
            "projects".to_string(),
            "catalog is empty; every project page will show not-found",
        ));
    }

    for (i, project) in catalog.projects.iter().enumerate() {
        let subject = format!("projects[{i}] ({})", project.id);
        if !seen.insert(project.id.as_str()) {
            out.push(diag(
                Severity::Error,
                subject.clone(),
                "duplicate id; only the first entry is reachable",
            ));
        }
        if project.id.chars().count() < 2 {
            out.push(diag(
                Severity::Error,
                subject.clone(),
                "id shorter than 2 characters can never match a padded ?id= query",
            ));
        }
        if project.images.is_empty() {
            out.push(diag(
                Severity::Warning,
                subject.clone(),
                "no images; the lightbox will never open",
            ));
        }
        if project.title.as_deref().map_or(true, str::is_empty) {
            out.push(diag(
                Severity::Warning,
                subject,
                format!("no title; pages will show \"Projet {}\"", project.id),
            ));
        }
    }
    out
}

pub fn check_films(catalog: &FilmCatalog) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (i, film) in catalog.films.iter().enumerate() {
        let subject = format!("films[{i}] ({})", film.title);
        let media = FilmMedia::for_film(film);
        if media == FilmMedia::None {
            out.push(diag(
                Severity::Warning,
                subject.clone(),
                "no video id and no poster; the entry is not rendered",
            ));
        }
        // An entry that renders nothing was reported above.
        let Some(url) = film.url.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        let has_poster = film.poster.as_deref().is_some_and(|p| !p.is_empty());
        if media != FilmMedia::None && !has_poster && youtube::video_id(url).is_none() {
            out.push(diag(
                Severity::Warning,
                subject,
                format!("url {url:?} has no recognizable YouTube id"),
            ));
        }
    }
    out
}

/// Whether the diagnostics should fail a check run.
pub fn has_failures(diagnostics: &[Diagnostic], strict: bool) -> bool {
    diagnostics
        .iter()
        .any(|d| d.severity == Severity::Error || strict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_catalog() {
        let catalog = ProjectCatalog::from_json(
            r#"{ "projects": [ { "id": "01", "title": "A", "images": ["a.jpg"] } ] }"#,
        )
        .unwrap();
        assert!(check_projects(&catalog).is_empty());
    }

    #[test]
    fn duplicate_and_short_ids() {
        let catalog = ProjectCatalog::from_json(
            r#"{ "projects": [
                { "id": "01", "title": "A", "images": ["a.jpg"] },
                { "id": "01", "title": "B", "images": ["b.jpg"] },
                { "id": "3", "title": "C", "images": ["c.jpg"] }
            ] }"#,
        )
        .unwrap();
        let diags = check_projects(&catalog);
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.severity == Severity::Error));
        assert!(diags[0].message.contains("duplicate"));
        assert!(diags[1].subject.starts_with("projects[2]"));
    }

    #[test]
    fn empty_gallery_and_missing_title_warn() {
        let catalog = ProjectCatalog::from_json(r#"{ "projects": [ { "id": "04" } ] }"#).unwrap();
        let diags = check_projects(&catalog);
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.severity == Severity::Warning));
        assert!(!has_failures(&diags, false));
        assert!(has_failures(&diags, true));
    }

    #[test]
    fn films_without_media_warn() {
        let catalog = FilmCatalog::from_json(
            r#"{ "films": [
                { "title": "ok", "videoId": "abcdefghijk" },
                { "title": "empty" },
                { "title": "vimeo", "url": "https://vimeo.com/1" }
            ] }"#,
        )
        .unwrap();
        let diags = check_films(&catalog);
        assert_eq!(diags.len(), 2);
        assert!(diags[0].subject.contains("empty"));
        assert!(diags[1].subject.contains("vimeo"));
        assert!(diags[1].message.contains("not rendered"));
    }

    #[test]
    fn display_format() {
        let d = diag(Severity::Error, "projects[0] (01)".to_string(), "boom");
        assert_eq!(d.to_string(), "error: projects[0] (01): boom");
    }
}
